//! A [`Canvas`] that writes an SVG document.

use crate::canvas::{Canvas, Color, LineCap, LineJoin, StrokeStyle};
use kurbo::{Affine, Circle, Line, Point};

/// Accumulates draw calls as SVG elements.
///
/// Every element carries the transform in effect when it was drawn, so rotations applied through
/// [`Canvas::rotate_about`] end up in the output unchanged.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    transform: Affine,
    color: Color,
    stroke: StrokeStyle,
    antialias: bool,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            color: Color::default(),
            stroke: StrokeStyle::default(),
            antialias: false,
            body: String::new(),
        }
    }

    /// The complete SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn push_element(&mut self, element: &str) {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
    }

    /// Attributes shared by every element: transform and rendering hint.
    fn common_attrs(&self) -> String {
        let [a, b, c, d, e, f] = self.transform.as_coeffs();
        let rendering = if self.antialias {
            "geometricPrecision"
        } else {
            "crispEdges"
        };
        format!(
            "transform=\"matrix({} {} {} {} {} {})\" shape-rendering=\"{}\"",
            a, b, c, d, e, f, rendering
        )
    }

    fn stroke_attrs(&self) -> String {
        let cap = match self.stroke.cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        };
        let join = match self.stroke.join {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        };
        format!(
            "stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"{}\"",
            paint(self.color),
            self.stroke.width,
            cap,
            join
        )
    }
}

impl Canvas for SvgCanvas {
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
        let element = format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} {}/>",
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
            self.stroke_attrs(),
            self.common_attrs()
        );
        self.push_element(&element);
    }

    fn fill_circle(&mut self, circle: Circle) {
        let element = format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" {}/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            paint(self.color),
            self.common_attrs()
        );
        self.push_element(&element);
    }

    fn stroke_circle(&mut self, circle: Circle) {
        let element = format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" {} {}/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            self.stroke_attrs(),
            self.common_attrs()
        );
        self.push_element(&element);
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        let element = format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" {}>{}</text>",
            origin.x,
            origin.y,
            paint(self.color),
            self.common_attrs(),
            escape(text)
        );
        self.push_element(&element);
    }
}

fn paint(color: Color) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{})",
            color.r,
            color.g,
            color.b,
            f64::from(color.a) / 255.
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let svg = SvgCanvas::new(20, 10).finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"20\" height=\"10\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn line_carries_stroke_and_transform() {
        let mut canvas = SvgCanvas::new(100, 100);
        canvas.set_stroke(StrokeStyle::round(3.));
        canvas.set_antialias(true);
        canvas.set_transform(Affine::translate((5., 6.)));
        canvas.draw_line(Line::new((0., 0.), (10., 0.)));
        let svg = canvas.finish();
        assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"0\""));
        assert!(svg.contains("stroke-width=\"3\" stroke-linecap=\"round\" stroke-linejoin=\"round\""));
        assert!(svg.contains("matrix(1 0 0 1 5 6)"));
        assert!(svg.contains("geometricPrecision"));
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.set_color(Color::BLUE);
        canvas.draw_text("a<b", Point::new(1., 2.));
        let svg = canvas.finish();
        assert!(svg.contains("fill=\"rgb(0,0,255)\""));
        assert!(svg.contains(">a&lt;b</text>"));
    }

    #[test]
    fn one_element_per_line() {
        let mut canvas = SvgCanvas::new(10, 10);
        canvas.fill_circle(Circle::new((5., 5.), 2.));
        canvas.stroke_circle(Circle::new((5., 5.), 2.));
        let svg = canvas.finish();
        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("  <circle") && lines[1].contains("fill=\"rgb(0,0,0)\""));
        assert!(lines[2].starts_with("  <circle") && lines[2].contains("fill=\"none\""));
    }
}
