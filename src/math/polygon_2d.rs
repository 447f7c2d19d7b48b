use std::f64::consts::TAU;

use super::Point2;

/// Total length of an open polyline.
#[must_use]
pub fn path_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-up frame).
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Vertex `i` of a regular polygon with `sides` vertices on a circle of `radius`.
///
/// Vertex 0 sits at `start_angle`; the rest follow at `2π / sides` steps.
#[must_use]
pub fn regular_vertex(center: Point2, radius: f64, sides: usize, start_angle: f64, i: usize) -> Point2 {
    #[allow(clippy::cast_precision_loss)]
    let a = start_angle + TAU * i as f64 / sides.max(1) as f64;
    Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// All vertices of a regular polygon, see [`regular_vertex`].
#[must_use]
pub fn regular_polygon(center: Point2, radius: f64, sides: usize, start_angle: f64) -> Vec<Point2> {
    (0..sides)
        .map(|i| regular_vertex(center, radius, sides, start_angle, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn path_length_open_polyline() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 10.0),
        ];
        assert!((path_length(&pts) - 11.0).abs() < TOLERANCE);
        assert!(path_length(&pts[..1]).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_ccw_and_cw_square() {
        let ccw = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((signed_area(&ccw) - 1.0).abs() < TOLERANCE);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 1.0).abs() < TOLERANCE);
        assert!(signed_area(&ccw[..2]).abs() < TOLERANCE);
    }

    #[test]
    fn regular_polygon_vertices_lie_on_circle() {
        let c = Point2::new(10.0, -5.0);
        let verts = regular_polygon(c, 3.0, 6, 0.0);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!(((v - c).norm() - 3.0).abs() < 1e-9);
        }
        assert!((verts[0] - Point2::new(13.0, -5.0)).norm() < 1e-9);
    }

    #[test]
    fn regular_polygon_start_angle() {
        let verts = regular_polygon(Point2::origin(), 1.0, 5, -FRAC_PI_2);
        assert!((verts[0] - Point2::new(0.0, -1.0)).norm() < 1e-9);
    }
}
