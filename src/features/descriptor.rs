use crate::math::angle_2d::{cos_between, cross};
use crate::math::{Bounds2, Point2, TOLERANCE};

/// How closely a closed stroke follows a circle inscribed in its bounding box.
///
/// The reference radius is `(width + height) / 4` around the box center. The
/// mean absolute deviation of the points from that radius, divided by the
/// radius, is subtracted from 1. Returns 0 for a degenerate box.
#[must_use]
pub fn circularity(points: &[Point2], bounds: &Bounds2) -> f64 {
    let radius = (bounds.width() + bounds.height()) / 4.0;
    if radius < TOLERANCE || points.is_empty() {
        return 0.0;
    }
    let center = bounds.center();
    let total: f64 = points
        .iter()
        .map(|p| ((p - center).norm() - radius).abs())
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / points.len() as f64;
    1.0 - mean / radius
}

/// Convexity and right-angle statistics of the polygon traced by the corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonDescriptor {
    /// No turn direction flips between consecutive corner edges.
    pub is_convex: bool,
    /// Fraction of corner vertices whose two edges are near-perpendicular.
    pub right_angle_score: f64,
}

impl PolygonDescriptor {
    /// Descriptor used when fewer than three corners exist.
    pub const NONE: Self = Self {
        is_convex: false,
        right_angle_score: 0.0,
    };

    /// Walks the corner vertices in order (wrapping) and inspects each
    /// consecutive triple `(a, b, c)`.
    ///
    /// The cross product of `b - a` and `c - b` gives the turn direction; any
    /// sign that disagrees with the first non-zero sign marks the polygon as
    /// non-convex. Collinear triples (zero cross product) neither confirm nor
    /// break convexity. Edge pairs with `|cos| < right_angle_cosine` count as
    /// right angles.
    #[must_use]
    pub fn from_vertices(vertices: &[Point2], right_angle_cosine: f64) -> Self {
        let m = vertices.len();
        if m < 3 {
            return Self::NONE;
        }

        let mut first_positive: Option<bool> = None;
        let mut is_convex = true;
        let mut right_angles = 0usize;
        for j in 0..m {
            let a = vertices[j];
            let b = vertices[(j + 1) % m];
            let c = vertices[(j + 2) % m];
            let e1 = b - a;
            let e2 = c - b;

            let turn = cross(&e1, &e2);
            if turn.abs() > TOLERANCE {
                let positive = turn > 0.0;
                match first_positive {
                    None => first_positive = Some(positive),
                    Some(first) if first != positive => is_convex = false,
                    Some(_) => {}
                }
            }

            if cos_between(&e1, &e2).is_some_and(|cos| cos.abs() < right_angle_cosine) {
                right_angles += 1;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let right_angle_score = right_angles as f64 / m as f64;
        Self {
            is_convex,
            right_angle_score,
        }
    }
}
