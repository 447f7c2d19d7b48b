//! Idealized primitives that replace a recognized freehand stroke.

mod build;
mod outline;

pub use build::BuildCanonicalShape;
pub use outline::OutlineParams;

use std::f64::consts::PI;

use crate::classify::ShapeKind;
use crate::math::polygon_2d::{regular_vertex, signed_area};
use crate::math::{Bounds2, Point2, Vector2};

use outline::circle_segment_count;

/// A clean geometric shape, carrying only what is needed to render it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalShape {
    Line { start: Point2, end: Point2 },
    Circle { center: Point2, radius: f64 },
    /// Axis-aligned, spanning `min..max`.
    Rectangle { min: Point2, max: Point2 },
    /// Axis-aligned, spanning `min..min + (side, side)`.
    Square { min: Point2, side: f64 },
    Triangle { vertices: [Point2; 3] },
    Hexagon { vertices: [Point2; 6] },
    Pentagon { vertices: [Point2; 5] },
}

impl CanonicalShape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            CanonicalShape::Line { .. } => ShapeKind::Line,
            CanonicalShape::Circle { .. } => ShapeKind::Circle,
            CanonicalShape::Rectangle { .. } => ShapeKind::Rectangle,
            CanonicalShape::Square { .. } => ShapeKind::Square,
            CanonicalShape::Triangle { .. } => ShapeKind::Triangle,
            CanonicalShape::Hexagon { .. } => ShapeKind::Hexagon,
            CanonicalShape::Pentagon { .. } => ShapeKind::Pentagon,
        }
    }

    /// Ordered corner points: both endpoints of a line, none for a circle.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        match *self {
            CanonicalShape::Line { start, end } => vec![start, end],
            CanonicalShape::Circle { .. } => Vec::new(),
            CanonicalShape::Rectangle { min, max } => box_corners(min, max).to_vec(),
            CanonicalShape::Square { min, side } => {
                box_corners(min, min + Vector2::new(side, side)).to_vec()
            }
            CanonicalShape::Triangle { vertices } => vertices.to_vec(),
            CanonicalShape::Hexagon { vertices } => vertices.to_vec(),
            CanonicalShape::Pentagon { vertices } => vertices.to_vec(),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds2 {
        match *self {
            CanonicalShape::Line { start, end } => Bounds2::new(start, start).include(end),
            CanonicalShape::Circle { center, radius } => {
                let r = Vector2::new(radius, radius);
                Bounds2::new(center - r, center + r)
            }
            CanonicalShape::Rectangle { min, max } => Bounds2::new(min, max),
            CanonicalShape::Square { min, side } => {
                Bounds2::new(min, min + Vector2::new(side, side))
            }
            CanonicalShape::Triangle { vertices } => enclosing(&vertices),
            CanonicalShape::Hexagon { vertices } => enclosing(&vertices),
            CanonicalShape::Pentagon { vertices } => enclosing(&vertices),
        }
    }

    /// Whether the outline returns to its start. Only a line is open.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !matches!(self, CanonicalShape::Line { .. })
    }

    /// Enclosed area; zero for a line.
    #[must_use]
    pub fn area(&self) -> f64 {
        match *self {
            CanonicalShape::Line { .. } => 0.0,
            CanonicalShape::Circle { radius, .. } => PI * radius * radius,
            CanonicalShape::Rectangle { min, max } => (max.x - min.x) * (max.y - min.y),
            CanonicalShape::Square { side, .. } => side * side,
            CanonicalShape::Triangle { vertices } => signed_area(&vertices).abs(),
            CanonicalShape::Hexagon { vertices } => signed_area(&vertices).abs(),
            CanonicalShape::Pentagon { vertices } => signed_area(&vertices).abs(),
        }
    }

    /// Polyline for the drawing surface.
    ///
    /// Circles are flattened within `params.tolerance`; closed outlines end
    /// with a copy of their first point.
    #[must_use]
    pub fn outline(&self, params: &OutlineParams) -> Vec<Point2> {
        let mut points = match *self {
            CanonicalShape::Line { start, end } => return vec![start, end],
            CanonicalShape::Circle { center, radius } => {
                let n = circle_segment_count(radius, params);
                (0..n)
                    .map(|i| regular_vertex(center, radius, n, 0.0, i))
                    .collect()
            }
            _ => self.vertices(),
        };
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

/// Corners of an axis-aligned box, starting at `min` and walking along x first.
fn box_corners(min: Point2, max: Point2) -> [Point2; 4] {
    [
        min,
        Point2::new(max.x, min.y),
        max,
        Point2::new(min.x, max.y),
    ]
}

fn enclosing<const N: usize>(vertices: &[Point2; N]) -> Bounds2 {
    vertices
        .iter()
        .skip(1)
        .fold(Bounds2::new(vertices[0], vertices[0]), |b, p| b.include(*p))
}
