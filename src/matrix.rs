use crate::error::{Error, Result};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Weights at or below this value mean "no edge".
pub const EPSILON: f64 = 1e-20;

/// An immutable square matrix of edge weights for an undirected graph.
///
/// Entry `(i, j)` is the weight of the edge between vertices `i` and `j`. The matrix is assumed
/// to be symmetric; only the upper triangle (`i < j`) is ever read when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    n: usize,
    /// Row-major, `n * n` entries.
    weights: Vec<f64>,
}

impl WeightMatrix {
    /// Build a matrix from its rows.
    ///
    /// Fails if any row length differs from the number of rows, or if any weight is negative or
    /// not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(Error::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            for (col, weight) in entries.into_iter().enumerate() {
                check_weight(row, col, weight)?;
                weights.push(weight);
            }
        }
        Ok(Self { n, weights })
    }

    /// A matrix with `n` vertices and no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            weights: vec![0.; n * n],
        }
    }

    /// Build a symmetric matrix from an undirected petgraph graph.
    ///
    /// Vertices are numbered in node index order. Parallel edges are merged into one edge whose
    /// weight is the sum of theirs, and self loops are dropped.
    pub fn from_graph<N>(graph: &UnGraph<N, f64>) -> Result<Self> {
        let mut matrix = Self::empty(graph.node_count());
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            check_weight(a, b, *edge.weight())?;
            if a == b {
                continue;
            }
            let sum = matrix.weights[a * matrix.n + b] + edge.weight();
            matrix.weights[a * matrix.n + b] = sum;
            matrix.weights[b * matrix.n + a] = sum;
        }
        Ok(matrix)
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The weight stored at `(row, col)`, or `None` if either index is out of bounds.
    pub fn weight(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.n && col < self.n {
            Some(self.weights[row * self.n + col])
        } else {
            None
        }
    }

    /// Iterate over the edges in the upper triangle, row by row.
    ///
    /// Entries with a weight of at most [`EPSILON`] are skipped.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.n).flat_map(move |from| {
            (from + 1..self.n).filter_map(move |to| {
                let weight = self.weights[from * self.n + to];
                if weight > EPSILON {
                    Some(WeightedEdge { from, to, weight })
                } else {
                    None
                }
            })
        })
    }
}

fn check_weight(row: usize, col: usize, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0. {
        Ok(())
    } else {
        Err(Error::InvalidWeight { row, col, weight })
    }
}

/// An edge of the upper triangle, with `from < to`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}
