//! Feature extraction: raw stroke → [`FeatureRecord`].
//!
//! ```text
//! raw ─▶ CleanPoints ─▶ SummarizeGeometry ─▶ SmoothPoints ─▶ DetectCorners ─▶ descriptor
//! ```

mod clean;
mod corners;
mod descriptor;
mod smooth;
mod summary;

pub use clean::CleanPoints;
pub use corners::{lookahead, Corner, DetectCorners};
pub use descriptor::{circularity, PolygonDescriptor};
pub use smooth::SmoothPoints;
pub use summary::{GeometrySummary, SummarizeGeometry};

use tracing::{debug, trace};

use crate::config::RecognizerConfig;
use crate::error::{FeatureError, Result};
use crate::math::polygon_2d::path_length;
use crate::math::{Bounds2, Point2, TOLERANCE};

/// Everything the classifiers know about one stroke.
///
/// Built once per recognition attempt and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub width: f64,
    pub height: f64,
    pub diagonal: f64,
    /// Longer over shorter bounding-box side, the shorter floored at 1. Always ≥ 1.
    pub aspect: f64,
    pub is_closed: bool,
    /// Path length over start-end distance; 1.0 for a straight stroke.
    pub straightness: f64,
    /// `1 - |width - height| / max(width, height)`.
    pub squareness: f64,
    pub corners: usize,
    /// Absolute turn angle of each corner, parallel to `corner_indices`.
    pub corner_angles: Vec<f64>,
    /// Index of each corner in the smoothed sequence.
    pub corner_indices: Vec<usize>,
    /// Meaningful for closed strokes only; 0 when open.
    pub circularity: f64,
    pub is_convex: bool,
    /// Fraction of corner vertices with near-perpendicular edges, in `[0, 1]`.
    pub right_angle_score: f64,
    /// First point of the smoothed stroke.
    pub start: Point2,
    /// Last point of the smoothed stroke.
    pub end: Point2,
    /// Bounding box of the cleaned stroke.
    pub bounds: Bounds2,
}

impl FeatureRecord {
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.bounds.min
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        self.bounds.max
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.bounds.center()
    }

    /// The smaller bounding-box side.
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// First scalar feature that overflowed to infinity or NaN, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        [
            ("width", self.width),
            ("height", self.height),
            ("diagonal", self.diagonal),
            ("aspect", self.aspect),
            ("straightness", self.straightness),
            ("squareness", self.squareness),
            ("circularity", self.circularity),
            ("right_angle_score", self.right_angle_score),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

/// Runs the full extraction chain over a raw stroke.
#[derive(Debug)]
pub struct ExtractFeatures<'a> {
    points: &'a [Point2],
    config: &'a RecognizerConfig,
}

impl<'a> ExtractFeatures<'a> {
    /// Creates a new feature extraction operation.
    #[must_use]
    pub fn new(points: &'a [Point2], config: &'a RecognizerConfig) -> Self {
        Self { points, config }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// - `FeatureError::InsufficientPoints` if the raw stroke is too short
    /// - `FeatureError::InsufficientSignal` if noise filtering leaves too few points
    /// - `FeatureError::DegenerateGeometry` if a closed stroke is too small
    /// - `FeatureError::NonFiniteFeature` if coordinates are so large that a
    ///   derived feature overflows
    pub fn execute(&self) -> Result<FeatureRecord> {
        let config = self.config;
        let cleaned = CleanPoints::new(self.points, config).execute()?;
        let summary = SummarizeGeometry::new(&cleaned, config).execute()?;
        let smoothed = SmoothPoints::new(&cleaned, summary.is_closed, config).execute();

        let bounds = summary.bounds;
        let corners =
            DetectCorners::new(&smoothed, summary.is_closed, bounds.min_side(), config).execute();

        let (start, end) = match (smoothed.first(), smoothed.last()) {
            (Some(s), Some(e)) => (*s, *e),
            _ => (bounds.min, bounds.max),
        };
        let chord = (end - start).norm();
        let straightness = if chord < TOLERANCE {
            1.0
        } else {
            path_length(&smoothed) / chord
        };

        let circularity = if summary.is_closed {
            circularity(&smoothed, &bounds)
        } else {
            0.0
        };

        let vertices: Vec<Point2> = corners.iter().map(|c| c.position).collect();
        let polygon = PolygonDescriptor::from_vertices(&vertices, config.right_angle_cosine);

        let record = FeatureRecord {
            width: summary.width(),
            height: summary.height(),
            diagonal: summary.diagonal(),
            aspect: summary.aspect(),
            is_closed: summary.is_closed,
            straightness,
            squareness: summary.squareness(),
            corners: corners.len(),
            corner_angles: corners.iter().map(|c| c.angle).collect(),
            corner_indices: corners.iter().map(|c| c.index).collect(),
            circularity,
            is_convex: polygon.is_convex,
            right_angle_score: polygon.right_angle_score,
            start,
            end,
            bounds,
        };
        if let Some((name, value)) = record.first_non_finite() {
            debug!(name, value, "stroke rejected: feature overflowed");
            return Err(FeatureError::NonFiniteFeature { name }.into());
        }
        trace!(?record, "extracted features");
        Ok(record)
    }
}
