//! A library for drawing a weighted undirected graph with its vertices spread evenly around a
//! circle.
//!
//! The graph comes in as a square matrix of edge weights. Vertices are drawn as circles, edges as
//! straight lines, and each vertex and edge gets a numeric label: the vertex index and the edge
//! weight. Vertex 0 is drawn at the top and the rest follow clockwise.
//!
//! This library aims to be agnostic of any actual drawing backend: everything is painted through
//! the small [`Canvas`] trait. An in-memory [`RecordingCanvas`] and an [`SvgCanvas`] are
//! included.
//!
//! ```
//! use circle_graph::{CircleGraph, SvgCanvas, WeightMatrix};
//!
//! let graph = WeightMatrix::new(vec![
//!     vec![0., 1., 2.],
//!     vec![1., 0., 3.],
//!     vec![2., 3., 0.],
//! ])?;
//! let mut renderer = CircleGraph::new(&graph);
//! renderer.set_size(200, 200);
//!
//! let mut canvas = SvgCanvas::new(200, 200);
//! renderer.paint(&mut canvas);
//! assert!(canvas.finish().contains("<line"));
//! # Ok::<(), circle_graph::Error>(())
//! ```
pub use crate::canvas::{
    rotation_about, Canvas, Color, DrawCommand, LineCap, LineJoin, RecordingCanvas, StrokeStyle,
};
pub use crate::config::{Palette, RenderConfig, THICKNESS_RANGE, VERTEX_SIZE_RANGE};
pub use crate::error::{Error, Result};
pub use crate::layout::{label_anchor, label_angle, CircleLayout};
pub use crate::matrix::{WeightMatrix, WeightedEdge, EPSILON};
pub use crate::svg::SvgCanvas;
use kurbo::Point;

mod canvas;
mod config;
mod error;
mod layout;
mod matrix;
mod paint;
mod svg;

/// Draws a borrowed [`WeightMatrix`] in a circular layout.
///
/// The matrix is only ever read. Vertex positions are cached and recomputed lazily: changing
/// anything that affects geometry marks the cache stale, and the next call to
/// [`layout`](Self::layout) (which [`paint`](Self::paint) makes for you) rebuilds it.
///
/// The renderer is not meant to be shared between threads while it is being configured; keep
/// configuration changes and paint calls on one thread.
pub struct CircleGraph<'g> {
    graph: &'g WeightMatrix,
    config: RenderConfig,
    layout: CircleLayout,

    /// Has the layout been computed since the last geometry change?
    fresh: bool,
}

impl<'g> CircleGraph<'g> {
    pub fn new(graph: &'g WeightMatrix) -> Self {
        Self {
            graph,
            config: RenderConfig::default(),
            layout: CircleLayout::default(),
            fresh: false,
        }
    }

    /// Start from an existing configuration. Out of range values are rejected.
    pub fn with_config(graph: &'g WeightMatrix, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(graph)
        })
    }

    pub fn graph(&self) -> &'g WeightMatrix {
        self.graph
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn thickness(&self) -> u32 {
        self.config.thickness()
    }

    pub fn vertex_size(&self) -> u32 {
        self.config.vertex_size()
    }

    pub fn size(&self) -> (u32, u32) {
        self.config.size()
    }

    /// Set the edge stroke width (1 to 30). Other values are ignored.
    ///
    /// Returns whether the value was accepted.
    pub fn set_thickness(&mut self, thickness: u32) -> bool {
        let accepted = self.config.set_thickness(thickness);
        if accepted {
            self.invalidate();
        }
        accepted
    }

    /// Set the vertex diameter (10 to 100). Other values are ignored.
    ///
    /// Returns whether the value was accepted.
    pub fn set_vertex_size(&mut self, vertex_size: u32) -> bool {
        let accepted = self.config.set_vertex_size(vertex_size);
        if accepted {
            self.invalidate();
        }
        accepted
    }

    /// Set the size of the canvas being drawn on, usually in response to a resize.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.config.set_size(width, height);
        self.invalidate();
    }

    /// Colours only, so the layout stays valid.
    pub fn set_palette(&mut self, palette: Palette) {
        self.config.set_palette(palette);
    }

    /// Replace the whole configuration. Out of range values are rejected as a whole.
    pub fn set_config(&mut self, config: RenderConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    /// Mark the vertex positions as needing recomputation.
    pub fn invalidate(&mut self) {
        self.fresh = false;
    }

    /// Whether the cached layout matches the current configuration.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Recompute vertex positions if the configuration changed since they were last computed.
    pub fn layout(&mut self) -> &CircleLayout {
        if !self.fresh {
            self.layout = CircleLayout::compute(self.graph.len(), &self.config);
            self.fresh = true;
        }
        &self.layout
    }

    /// Vertex positions before the paint rotation, running the layout if needed.
    ///
    /// There is exactly one position per vertex of the graph.
    pub fn positions(&mut self) -> &[Point] {
        self.layout().positions()
    }
}
