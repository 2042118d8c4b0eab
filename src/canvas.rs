//! The drawing surface the renderer paints onto.
//!
//! The renderer never talks to a windowing or graphics library directly. Hosts implement
//! [`Canvas`] for whatever they draw with; [`RecordingCanvas`] and
//! [`SvgCanvas`](crate::SvgCanvas) are provided for headless use.

use kurbo::{Affine, Circle, Line, Point};
use serde::{Deserialize, Serialize};

/// A minimal 2D drawing surface.
///
/// All coordinates are in user space and are mapped to the device by the current transform.
pub trait Canvas {
    /// The current user-to-device transform.
    fn transform(&self) -> Affine;

    /// Replace the current transform, e.g. to restore one saved with [`Canvas::transform`].
    fn set_transform(&mut self, transform: Affine);

    /// Rotate subsequent drawing by `angle` radians around `pivot` (in current user space).
    fn rotate_about(&mut self, angle: f64, pivot: Point) {
        let transform = self.transform() * rotation_about(angle, pivot);
        self.set_transform(transform);
    }

    /// Colour used for all subsequent strokes, fills and text.
    fn set_color(&mut self, color: Color);

    fn set_stroke(&mut self, stroke: StrokeStyle);

    fn set_antialias(&mut self, antialias: bool);

    fn draw_line(&mut self, line: Line);

    fn fill_circle(&mut self, circle: Circle);

    fn stroke_circle(&mut self, circle: Circle);

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point);
}

/// The transform rotating by `angle` radians around `pivot`.
pub fn rotation_about(angle: f64, pivot: Point) -> Affine {
    let offset = pivot.to_vec2();
    Affine::translate(offset) * Affine::rotate(angle) * Affine::translate(-offset)
}

/// An opaque-by-default RGBA colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// How lines and outlines are stroked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    /// Round caps and round joins.
    pub fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(1.)
    }
}

/// A draw call captured by [`RecordingCanvas`], with the state that was in effect.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        line: Line,
        transform: Affine,
        color: Color,
        stroke: StrokeStyle,
        antialias: bool,
    },
    FillCircle {
        circle: Circle,
        transform: Affine,
        color: Color,
    },
    StrokeCircle {
        circle: Circle,
        transform: Affine,
        color: Color,
        stroke: StrokeStyle,
    },
    Text {
        text: String,
        origin: Point,
        transform: Affine,
        color: Color,
    },
}

impl DrawCommand {
    pub fn transform(&self) -> Affine {
        match self {
            DrawCommand::Line { transform, .. }
            | DrawCommand::FillCircle { transform, .. }
            | DrawCommand::StrokeCircle { transform, .. }
            | DrawCommand::Text { transform, .. } => *transform,
        }
    }
}

/// A canvas that records every draw call instead of rasterizing it.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    transform: Affine,
    color: Color,
    stroke: StrokeStyle,
    antialias: bool,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
            color: Color::default(),
            stroke: StrokeStyle::default(),
            antialias: false,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Text { .. }))
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.stroke = stroke;
    }

    fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
    }

    fn draw_line(&mut self, line: Line) {
        self.commands.push(DrawCommand::Line {
            line,
            transform: self.transform,
            color: self.color,
            stroke: self.stroke,
            antialias: self.antialias,
        });
    }

    fn fill_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::FillCircle {
            circle,
            transform: self.transform,
            color: self.color,
        });
    }

    fn stroke_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::StrokeCircle {
            circle,
            transform: self.transform,
            color: self.color,
            stroke: self.stroke,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            origin,
            transform: self.transform,
            color: self.color,
        });
    }
}
