//! module with the circular layout geometry.

use crate::config::RenderConfig;
use kurbo::Point;
use std::f64::consts::{FRAC_PI_2, PI};

/// Vertex positions spread evenly around a circle.
///
/// All coordinates are whole numbers: positions are truncated the same way pixel coordinates
/// would be. Vertex 0 sits at angle 0 (the `+x` direction); the renderer turns the whole drawing
/// so that it ends up at the top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleLayout {
    center: Point,
    radius: f64,
    positions: Vec<Point>,
}

impl CircleLayout {
    /// Lay out `n` vertices for the given configuration.
    ///
    /// The circle is the largest that fits in the canvas once the vertex size and stroke
    /// thickness are taken off, centred in the canvas. If the canvas is smaller than that the
    /// radius is zero and every vertex sits on the centre.
    pub fn compute(n: usize, config: &RenderConfig) -> Self {
        let (width, height) = config.size();
        let (width, height) = (i64::from(width), i64::from(height));
        let min_size = (width.min(height)
            - i64::from(config.vertex_size())
            - i64::from(config.thickness()))
        .max(0);
        let radius = min_size / 2;
        // top left corner of the bounding square
        let x = (width - min_size) / 2;
        let y = (height - min_size) / 2;
        let center = Point::new((x + radius) as f64, (y + radius) as f64);
        let radius = radius as f64;

        let positions = if n == 0 {
            Vec::new()
        } else {
            let phi = 2. * PI / n as f64;
            (0..n)
                .map(|i| {
                    let angle = i as f64 * phi;
                    Point::new(
                        (center.x + radius * angle.cos()).trunc(),
                        (center.y + radius * angle.sin()).trunc(),
                    )
                })
                .collect()
        };

        tracing::debug!(
            vertices = n,
            radius,
            x = center.x,
            y = center.y,
            "computed circular layout"
        );
        Self {
            center,
            radius,
            positions,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }
}

/// The rotation for a weight label on the edge from `from` to `to`.
///
/// The raw angle is the arctangent of the edge's slope. Positive slopes give `π/2 − angle`,
/// everything else `π + angle`. Coincident endpoints count as a zero slope.
pub fn label_angle(from: Point, to: Point) -> f64 {
    let angle = ((to.y - from.y) / (to.x - from.x)).atan();
    // 0/0
    let angle = if angle.is_nan() { 0. } else { angle };
    if angle > 0. {
        FRAC_PI_2 - angle
    } else {
        PI + angle
    }
}

/// The midpoint of an edge, truncated to whole coordinates.
pub fn label_anchor(from: Point, to: Point) -> Point {
    Point::new(
        ((from.x + to.x) / 2.).trunc(),
        ((from.y + to.y) / 2.).trunc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(width: u32, height: u32, vertex_size: u32, thickness: u32) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.set_size(width, height);
        assert!(config.set_vertex_size(vertex_size));
        assert!(config.set_thickness(thickness));
        config
    }

    #[test]
    fn square_canvas() {
        // min size = 100 - 30 - 1 = 69, radius 34, square starts at (100 - 69) / 2 = 15
        let layout = CircleLayout::compute(4, &config(100, 100, 30, 1));
        assert_eq!(layout.radius(), 34.);
        assert_eq!(layout.center(), Point::new(49., 49.));
        assert_eq!(layout.positions()[0], Point::new(83., 49.));
        assert_eq!(layout.positions()[1], Point::new(49., 83.));
        assert_eq!(layout.positions()[2], Point::new(15., 49.));
        // cos(3pi/2) is a hair below zero in floating point
        assert!((layout.positions()[3].x - 49.).abs() <= 1.);
        assert!((layout.positions()[3].y - 15.).abs() <= 1.);
    }

    #[test]
    fn wide_canvas_centres_square() {
        let layout = CircleLayout::compute(3, &config(300, 100, 30, 10));
        // min size 60, square at (120, 20)
        assert_eq!(layout.radius(), 30.);
        assert_eq!(layout.center(), Point::new(150., 50.));
    }

    #[test]
    fn thickness_changes_radius() {
        let thin = CircleLayout::compute(5, &config(100, 100, 30, 1));
        let thick = CircleLayout::compute(5, &config(100, 100, 30, 15));
        assert_eq!(thick.radius(), 27.);
        assert_ne!(thin.positions(), thick.positions());
    }

    #[test]
    fn resize_follows_formula() {
        let small = CircleLayout::compute(6, &config(100, 100, 30, 1));
        let large = CircleLayout::compute(6, &config(200, 200, 30, 1));
        assert_eq!(small.radius(), ((100 - 30 - 1) / 2) as f64);
        assert_eq!(large.radius(), ((200 - 30 - 1) / 2) as f64);
    }

    #[test]
    fn no_vertices() {
        let layout = CircleLayout::compute(0, &config(100, 100, 30, 1));
        assert!(layout.positions().is_empty());
    }

    #[test]
    fn single_vertex_at_angle_zero() {
        let layout = CircleLayout::compute(1, &config(100, 100, 30, 1));
        assert_eq!(layout.positions(), &[Point::new(83., 49.)]);
    }

    #[test]
    fn tiny_canvas_collapses_to_centre() {
        let layout = CircleLayout::compute(3, &RenderConfig::default());
        assert_eq!(layout.radius(), 0.);
        assert!(layout.positions().iter().all(|p| *p == layout.center()));
    }

    #[test]
    fn label_angle_tie_break() {
        let o = Point::ZERO;
        // slope 1: atan = pi/4 > 0
        assert!((label_angle(o, Point::new(10., 10.)) - FRAC_PI_2 / 2.).abs() < 1e-12);
        // slope -1: pi - pi/4
        assert!((label_angle(o, Point::new(10., -10.)) - 3. * PI / 4.).abs() < 1e-12);
        // horizontal
        assert_eq!(label_angle(o, Point::new(10., 0.)), PI);
        // vertical: atan(inf) = pi/2
        assert!(label_angle(o, Point::new(0., 10.)).abs() < 1e-12);
        // coincident
        assert_eq!(label_angle(o, o), PI);
    }

    #[test]
    fn label_anchor_truncates() {
        let anchor = label_anchor(Point::new(3., 4.), Point::new(6., 9.));
        assert_eq!(anchor, Point::new(4., 6.));
    }

    proptest! {
        #[test]
        fn vertices_lie_on_circle(
            n in 1usize..64,
            width in 120u32..2000,
            height in 120u32..2000,
            vertex_size in 10u32..=100,
            thickness in 1u32..=30,
        ) {
            let layout = CircleLayout::compute(n, &config(width, height, vertex_size, thickness));
            prop_assert_eq!(layout.positions().len(), n);
            // both coordinates are truncated by less than 1 each, so a point can land up to
            // sqrt(2) off the exact circle
            for p in layout.positions() {
                let d = p.distance(layout.center());
                prop_assert!((d - layout.radius()).abs() <= std::f64::consts::SQRT_2);
            }
        }
    }
}
