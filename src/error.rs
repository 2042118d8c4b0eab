//! Error types for building weight matrices and loading render configuration.

use thiserror::Error;

/// Errors reported while constructing inputs for the renderer.
///
/// Painting itself never fails: [`WeightMatrix`](crate::WeightMatrix) and
/// [`RenderConfig`](crate::RenderConfig) check their contents whenever they are built.
#[derive(Debug, Error)]
pub enum Error {
    /// A row of the weight matrix does not have one entry per vertex.
    #[error("weight matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A weight is negative, infinite or NaN.
    #[error("invalid weight {weight} at ({row}, {col}): weights must be finite and non-negative")]
    InvalidWeight { row: usize, col: usize, weight: f64 },

    /// A configuration value lies outside its accepted range.
    #[error("{name} {value} is out of range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// The configuration document could not be parsed.
    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
