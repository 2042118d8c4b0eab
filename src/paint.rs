//! module with the paint passes.

use crate::canvas::{Canvas, StrokeStyle};
use crate::layout::{label_anchor, label_angle};
use crate::CircleGraph;
use kurbo::{Circle, Line, Point};
use std::f64::consts::FRAC_PI_2;

/// Turns the drawing so that vertex 0 (laid out at angle 0) ends up at the top.
const TOP: f64 = -FRAC_PI_2;

impl<'g> CircleGraph<'g> {
    /// Paint the graph onto `canvas`, running the layout first if it is stale.
    ///
    /// Edges are drawn first, then vertices over them, then vertex numbers and finally edge
    /// weights. The canvas transform is the same on return as it was on entry.
    pub fn paint<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.layout();
        self.paint_edges(canvas);
        self.paint_vertices(canvas);
        self.paint_numbers(canvas);
        self.paint_weights(canvas);
    }

    fn paint_edges<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        tracing::trace!("painting edges");
        let positions = self.layout.positions();
        with_rotation(canvas, TOP, self.layout.center(), |canvas| {
            canvas.set_color(self.config.palette().edge);
            canvas.set_stroke(self.stroke());
            canvas.set_antialias(true);
            for edge in self.graph.edges() {
                canvas.draw_line(Line::new(positions[edge.from], positions[edge.to]));
            }
        });
    }

    fn paint_vertices<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        tracing::trace!("painting vertices");
        let palette = self.config.palette();
        let radius = f64::from(self.config.vertex_size()) / 2.;
        with_rotation(canvas, TOP, self.layout.center(), |canvas| {
            canvas.set_stroke(self.stroke());
            for &position in self.layout.positions() {
                let circle = Circle::new(position, radius);
                canvas.set_color(palette.vertex_fill);
                canvas.fill_circle(circle);
                canvas.set_color(palette.vertex_outline);
                canvas.stroke_circle(circle);
            }
        });
    }

    /// Vertex indices, each turned back a quarter so it reads upright.
    fn paint_numbers<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        tracing::trace!("painting vertex numbers");
        let size = i64::from(self.config.vertex_size());
        let (eighth, quarter, half) = ((size / 8) as f64, (size / 4) as f64, (size / 2) as f64);
        with_rotation(canvas, TOP, self.layout.center(), |canvas| {
            canvas.set_color(self.config.palette().label);
            for (ix, position) in self.layout.positions().iter().enumerate() {
                let pivot = Point::new(position.x - eighth, position.y + quarter);
                with_rotation(canvas, FRAC_PI_2, pivot, |canvas| {
                    canvas.draw_text(
                        &ix.to_string(),
                        Point::new(position.x - half, position.y + quarter),
                    );
                });
            }
        });
    }

    /// Edge weights, truncated to integers, next to the middle of each edge.
    fn paint_weights<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        tracing::trace!("painting edge weights");
        let positions = self.layout.positions();
        with_rotation(canvas, TOP, self.layout.center(), |canvas| {
            canvas.set_color(self.config.palette().label);
            for edge in self.graph.edges() {
                let (from, to) = (positions[edge.from], positions[edge.to]);
                let anchor = label_anchor(from, to);
                with_rotation(canvas, label_angle(from, to), anchor, |canvas| {
                    canvas.draw_text(
                        &(edge.weight as i64).to_string(),
                        Point::new(anchor.x + 2., anchor.y - 4.),
                    );
                });
            }
        });
    }

    fn stroke(&self) -> StrokeStyle {
        StrokeStyle::round(f64::from(self.config.thickness()))
    }
}

/// Run `draw` with the canvas rotated by `angle` around `pivot`, then put the transform back.
fn with_rotation<C, F>(canvas: &mut C, angle: f64, pivot: Point, draw: F)
where
    C: Canvas + ?Sized,
    F: FnOnce(&mut C),
{
    let saved = canvas.transform();
    canvas.rotate_about(angle, pivot);
    draw(canvas);
    canvas.set_transform(saved);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rotation_about, DrawCommand, RecordingCanvas, WeightMatrix};
    use kurbo::Affine;
    use std::f64::consts::PI;

    fn close(a: Affine, b: Affine) -> bool {
        a.as_coeffs()
            .iter()
            .zip(b.as_coeffs().iter())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    /// `(text, origin, transform)` for every text draw call.
    fn texts(canvas: &RecordingCanvas) -> Vec<(String, Point, Affine)> {
        canvas
            .texts()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    text,
                    origin,
                    transform,
                    ..
                } => Some((text.clone(), *origin, *transform)),
                _ => None,
            })
            .collect()
    }

    fn triangle() -> WeightMatrix {
        WeightMatrix::new(vec![
            vec![0., 1., 2.],
            vec![1., 0., 3.],
            vec![2., 3., 0.],
        ])
        .unwrap()
    }

    #[test]
    fn transform_is_restored() {
        let graph = triangle();
        let mut renderer = CircleGraph::new(&graph);
        renderer.set_size(200, 200);
        let mut canvas = RecordingCanvas::new();
        let start = Affine::translate((3., 4.));
        canvas.set_transform(start);
        renderer.paint(&mut canvas);
        assert_eq!(canvas.transform(), start);
    }

    #[test]
    fn passes_run_in_order() {
        let graph = triangle();
        let mut renderer = CircleGraph::new(&graph);
        renderer.set_size(200, 200);
        let mut canvas = RecordingCanvas::new();
        renderer.paint(&mut canvas);
        let kinds: Vec<_> = canvas
            .commands()
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Line { .. } => 'l',
                DrawCommand::FillCircle { .. } | DrawCommand::StrokeCircle { .. } => 'v',
                DrawCommand::Text { .. } => 't',
            })
            .collect();
        assert_eq!(kinds.iter().collect::<String>(), "lllvvvvvvtttttt");
    }

    #[test]
    fn vertex_numbers_read_upright() {
        let graph = triangle();
        let mut renderer = CircleGraph::new(&graph);
        renderer.set_size(200, 200);
        let mut canvas = RecordingCanvas::new();
        renderer.paint(&mut canvas);
        // the local quarter turn cancels the global one, leaving only a translation
        for cmd in canvas.texts().take(3) {
            let [a, b, c, d, _, _] = cmd.transform().as_coeffs();
            assert!((a - 1.).abs() < 1e-9 && b.abs() < 1e-9);
            assert!(c.abs() < 1e-9 && (d - 1.).abs() < 1e-9);
        }
    }

    #[test]
    fn label_placement() {
        let graph = WeightMatrix::new(vec![vec![0., 1.5], vec![1.5, 0.]]).unwrap();
        let mut renderer = CircleGraph::new(&graph);
        renderer.set_size(200, 200);
        let mut canvas = RecordingCanvas::new();
        renderer.paint(&mut canvas);

        // radius 84 around (99, 99): vertices at (183, 99) and (15, 99), size 30
        let center = Point::new(99., 99.);
        assert_eq!(renderer.positions(), &[Point::new(183., 99.), Point::new(15., 99.)]);
        let top = rotation_about(TOP, center);
        let labels = texts(&canvas);
        assert_eq!(labels.len(), 3);

        let (text, origin, transform) = &labels[0];
        assert_eq!(text, "0");
        assert_eq!(*origin, Point::new(168., 106.));
        assert!(close(*transform, top * rotation_about(FRAC_PI_2, Point::new(180., 106.))));

        let (text, origin, transform) = &labels[1];
        assert_eq!(text, "1");
        assert_eq!(*origin, Point::new(0., 106.));
        assert!(close(*transform, top * rotation_about(FRAC_PI_2, Point::new(12., 106.))));

        // horizontal edge: label_angle is pi about the midpoint
        let (text, origin, transform) = &labels[2];
        assert_eq!(text, "1");
        assert_eq!(*origin, Point::new(101., 95.));
        assert!(close(*transform, top * rotation_about(PI, Point::new(99., 99.))));
    }
}
