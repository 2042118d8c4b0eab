//! Render configuration: stroke thickness, vertex size, canvas size and colours.

use crate::canvas::Color;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted edge stroke widths.
pub const THICKNESS_RANGE: RangeInclusive<u32> = 1..=30;
/// Accepted vertex diameters.
pub const VERTEX_SIZE_RANGE: RangeInclusive<u32> = 10..=100;

/// Everything that affects how a graph is drawn.
///
/// Thickness, vertex size and canvas size also affect where the vertices go. A `RenderConfig`
/// always has its thickness and vertex size in range: the setters ignore bad values and
/// deserialization rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRenderConfig")]
pub struct RenderConfig {
    thickness: u32,
    vertex_size: u32,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            thickness: 1,
            vertex_size: 30,
            width: 1,
            height: 1,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// Unlike the setters, out of range values are reported rather than ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRenderConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Check that thickness and vertex size are within their ranges.
    pub fn validate(&self) -> Result<()> {
        check_range("thickness", self.thickness, THICKNESS_RANGE)?;
        check_range("vertex_size", self.vertex_size, VERTEX_SIZE_RANGE)
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn vertex_size(&self) -> u32 {
        self.vertex_size
    }

    /// Canvas `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Set the edge stroke width. Values outside [`THICKNESS_RANGE`] are ignored.
    ///
    /// Returns whether the value was accepted.
    pub fn set_thickness(&mut self, thickness: u32) -> bool {
        if !THICKNESS_RANGE.contains(&thickness) {
            tracing::debug!(thickness, "ignoring out of range thickness");
            return false;
        }
        self.thickness = thickness;
        true
    }

    /// Set the vertex diameter. Values outside [`VERTEX_SIZE_RANGE`] are ignored.
    ///
    /// Returns whether the value was accepted.
    pub fn set_vertex_size(&mut self, vertex_size: u32) -> bool {
        if !VERTEX_SIZE_RANGE.contains(&vertex_size) {
            tracing::debug!(vertex_size, "ignoring out of range vertex size");
            return false;
        }
        self.vertex_size = vertex_size;
        true
    }

    /// Set the canvas size. Any size is accepted.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

/// The unchecked shape of a [`RenderConfig`] on the wire.
#[derive(Deserialize)]
#[serde(default)]
struct RawRenderConfig {
    thickness: u32,
    vertex_size: u32,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Default for RawRenderConfig {
    fn default() -> Self {
        let RenderConfig {
            thickness,
            vertex_size,
            width,
            height,
            palette,
        } = RenderConfig::default();
        Self {
            thickness,
            vertex_size,
            width,
            height,
            palette,
        }
    }
}

impl TryFrom<RawRenderConfig> for RenderConfig {
    type Error = Error;

    fn try_from(raw: RawRenderConfig) -> Result<Self> {
        let config = Self {
            thickness: raw.thickness,
            vertex_size: raw.vertex_size,
            width: raw.width,
            height: raw.height,
            palette: raw.palette,
        };
        config.validate()?;
        Ok(config)
    }
}

fn check_range(name: &'static str, value: u32, range: RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Colours used by each paint pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub edge: Color,
    pub vertex_fill: Color,
    pub vertex_outline: Color,
    /// Vertex numbers and edge weights.
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            edge: Color::BLACK,
            vertex_fill: Color::WHITE,
            vertex_outline: Color::BLUE,
            label: Color::BLUE,
        }
    }
}
