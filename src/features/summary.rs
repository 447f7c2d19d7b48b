use tracing::debug;

use crate::config::RecognizerConfig;
use crate::error::{FeatureError, Result};
use crate::math::{Bounds2, Point2};

/// Bounding box and closure state of a cleaned stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySummary {
    pub bounds: Bounds2,
    /// Whether start and end are joined relative to the stroke's size.
    pub is_closed: bool,
}

impl GeometrySummary {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.bounds.diagonal()
    }

    /// Ratio of the longer to the shorter side, the shorter side floored at 1.
    /// Never below 1, even for a box smaller than one unit.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        let (w, h) = (self.width(), self.height());
        (w.max(h) / w.min(h).max(1.0)).max(1.0)
    }

    /// `1 - |width - height| / max(width, height)`; 1.0 for a square box.
    #[must_use]
    pub fn squareness(&self) -> f64 {
        let (w, h) = (self.width(), self.height());
        1.0 - (w - h).abs() / w.max(h).max(1.0)
    }
}

/// Computes the [`GeometrySummary`] of a cleaned stroke and rejects tiny closed loops.
#[derive(Debug)]
pub struct SummarizeGeometry<'a> {
    points: &'a [Point2],
    closure_tolerance: f64,
    min_closed_extent: f64,
}

impl<'a> SummarizeGeometry<'a> {
    /// Creates a new summarize operation.
    #[must_use]
    pub fn new(points: &'a [Point2], config: &RecognizerConfig) -> Self {
        Self {
            points,
            closure_tolerance: config.closure_tolerance,
            min_closed_extent: config.min_closed_extent,
        }
    }

    /// Executes the summary.
    ///
    /// # Errors
    ///
    /// - `FeatureError::InsufficientSignal` if the point set is empty
    /// - `FeatureError::DegenerateGeometry` if the stroke is closed but its
    ///   bounding box is narrower or shorter than the minimum extent
    pub fn execute(&self) -> Result<GeometrySummary> {
        let (Some(first), Some(last), Some(bounds)) = (
            self.points.first(),
            self.points.last(),
            Bounds2::from_points(self.points),
        ) else {
            return Err(FeatureError::InsufficientSignal {
                found: 0,
                required: 1,
            }
            .into());
        };

        let gap = (last - first).norm();
        let is_closed = gap < bounds.min_side() * self.closure_tolerance;

        if is_closed
            && (bounds.width() < self.min_closed_extent || bounds.height() < self.min_closed_extent)
        {
            debug!(
                width = bounds.width(),
                height = bounds.height(),
                min_extent = self.min_closed_extent,
                "stroke rejected: closed shape below minimum footprint"
            );
            return Err(FeatureError::DegenerateGeometry {
                width: bounds.width(),
                height: bounds.height(),
                min_extent: self.min_closed_extent,
            }
            .into());
        }

        Ok(GeometrySummary { bounds, is_closed })
    }
}
