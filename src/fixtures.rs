//! Synthetic strokes for tests.
#![allow(clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use crate::features::FeatureRecord;
use crate::math::polygon_2d::regular_polygon;
use crate::math::{Bounds2, Point2};

/// `n` samples on a full circle, starting at angle 0, without repeating the first point.
pub fn circle(center: Point2, radius: f64, n: usize) -> Vec<Point2> {
    (0..n)
        .map(|k| {
            let a = TAU * k as f64 / n as f64;
            Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// `n` evenly spaced samples from `start` to `end`, both included.
pub fn line(start: Point2, end: Point2, n: usize) -> Vec<Point2> {
    let d = end - start;
    (0..n)
        .map(|i| start + d * (i as f64 / (n - 1) as f64))
        .collect()
}

/// Like [`line`], with the y coordinate alternately pushed down and up by `amplitude`.
pub fn jittered_line(start: Point2, end: Point2, n: usize, amplitude: f64) -> Vec<Point2> {
    line(start, end, n)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let dy = if i % 2 == 1 { amplitude } else { -amplitude };
            Point2::new(p.x, p.y + dy)
        })
        .collect()
}

/// Axis-aligned rectangle outline traced clockwise in screen space from `origin`,
/// `per_side` samples per side, the closing point omitted.
pub fn rectangle(origin: Point2, width: f64, height: f64, per_side: usize) -> Vec<Point2> {
    let corners = [
        origin,
        Point2::new(origin.x + width, origin.y),
        Point2::new(origin.x + width, origin.y + height),
        Point2::new(origin.x, origin.y + height),
    ];
    polygon(&corners, per_side)
}

/// Closed polygon outline with `per_side` samples on every edge, starting at each vertex.
pub fn polygon(vertices: &[Point2], per_side: usize) -> Vec<Point2> {
    let m = vertices.len();
    let mut out = Vec::with_capacity(m * per_side);
    for j in 0..m {
        let a = vertices[j];
        let b = vertices[(j + 1) % m];
        for t in 0..per_side {
            out.push(a + (b - a) * (t as f64 / per_side as f64));
        }
    }
    out
}

/// Isoceles triangle with apex at the top in screen space.
pub fn triangle_vertices() -> Vec<Point2> {
    vec![
        Point2::new(100.0, 0.0),
        Point2::new(200.0, 180.0),
        Point2::new(0.0, 180.0),
    ]
}

/// Regular polygon of radius 100 around the origin.
pub fn regular_vertices(sides: usize, start_angle: f64) -> Vec<Point2> {
    regular_polygon(Point2::origin(), 100.0, sides, start_angle)
}

/// A neutral closed, convex, four-cornered record for tweaking in tests.
pub fn feature_record() -> FeatureRecord {
    FeatureRecord {
        width: 200.0,
        height: 200.0,
        diagonal: 200.0 * std::f64::consts::SQRT_2,
        aspect: 1.0,
        is_closed: true,
        straightness: 50.0,
        squareness: 1.0,
        corners: 4,
        corner_angles: vec![1.2; 4],
        corner_indices: vec![0, 20, 40, 60],
        circularity: 0.86,
        is_convex: true,
        right_angle_score: 1.0,
        start: Point2::new(7.5, 7.5),
        end: Point2::new(5.0, 15.0),
        bounds: Bounds2::new(Point2::origin(), Point2::new(200.0, 200.0)),
    }
}
