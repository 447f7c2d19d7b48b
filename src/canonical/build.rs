use std::array;
use std::f64::consts::FRAC_PI_2;

use crate::classify::ShapeKind;
use crate::features::FeatureRecord;
use crate::math::polygon_2d::regular_vertex;
use crate::math::{Point2, Vector2};

use super::CanonicalShape;

/// Derives the canonical primitive of a class from a feature record.
///
/// Geometry comes from the bounding box and its center, never from the
/// detected corners, so the result is clean however sloppy the stroke was.
/// Only a line uses the stroke itself, through its smoothed endpoints.
#[derive(Debug)]
pub struct BuildCanonicalShape<'a> {
    kind: ShapeKind,
    features: &'a FeatureRecord,
}

impl<'a> BuildCanonicalShape<'a> {
    /// Creates a new build operation.
    #[must_use]
    pub fn new(kind: ShapeKind, features: &'a FeatureRecord) -> Self {
        Self { kind, features }
    }

    /// Executes the build.
    #[must_use]
    pub fn execute(&self) -> CanonicalShape {
        let f = self.features;
        let center = f.center();
        let radius = f.min_side() / 2.0;

        match self.kind {
            ShapeKind::Line => CanonicalShape::Line {
                start: f.start,
                end: f.end,
            },
            ShapeKind::Circle => CanonicalShape::Circle { center, radius },
            ShapeKind::Rectangle => CanonicalShape::Rectangle {
                min: f.min(),
                max: f.max(),
            },
            ShapeKind::Square => {
                let side = f.min_side();
                CanonicalShape::Square {
                    min: center - Vector2::new(side, side) / 2.0,
                    side,
                }
            }
            ShapeKind::Triangle => {
                let (min, max) = (f.min(), f.max());
                CanonicalShape::Triangle {
                    vertices: [
                        Point2::new(min.x + f.width / 2.0, min.y),
                        Point2::new(max.x, max.y),
                        Point2::new(min.x, max.y),
                    ],
                }
            }
            ShapeKind::Hexagon => CanonicalShape::Hexagon {
                vertices: regular(center, radius, 0.0),
            },
            ShapeKind::Pentagon => CanonicalShape::Pentagon {
                vertices: regular(center, radius, -FRAC_PI_2),
            },
        }
    }
}

fn regular<const N: usize>(center: Point2, radius: f64, start_angle: f64) -> [Point2; N] {
    array::from_fn(|i| regular_vertex(center, radius, N, start_angle, i))
}
