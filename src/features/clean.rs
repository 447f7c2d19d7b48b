use tracing::debug;

use crate::config::RecognizerConfig;
use crate::error::{FeatureError, Result};
use crate::math::Point2;

/// Drops near-duplicate consecutive samples from a raw stroke.
///
/// The first point is always kept. Every later point is kept only when it lies
/// further than the noise floor from the last *kept* point, so slow jittery
/// drags collapse to a sparse, evenly advancing sequence.
#[derive(Debug)]
pub struct CleanPoints<'a> {
    points: &'a [Point2],
    noise_floor: f64,
    min_points: usize,
    min_clean_points: usize,
}

impl<'a> CleanPoints<'a> {
    /// Creates a new point-cleaning operation.
    #[must_use]
    pub fn new(points: &'a [Point2], config: &RecognizerConfig) -> Self {
        Self {
            points,
            noise_floor: config.noise_floor,
            min_points: config.min_points,
            min_clean_points: config.min_clean_points,
        }
    }

    /// Executes the filter.
    ///
    /// # Errors
    ///
    /// - `FeatureError::InsufficientPoints` if the raw stroke is too short
    /// - `FeatureError::InsufficientSignal` if too few points survive filtering
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let found = self.points.len();
        if found < self.min_points {
            debug!(found, required = self.min_points, "stroke rejected: too few points");
            return Err(FeatureError::InsufficientPoints {
                found,
                required: self.min_points,
            }
            .into());
        }

        let mut kept: Vec<Point2> = Vec::with_capacity(found);
        for p in self.points {
            match kept.last() {
                Some(last) if (p - last).norm() <= self.noise_floor => {}
                _ => kept.push(*p),
            }
        }

        if kept.len() < self.min_clean_points {
            debug!(
                found = kept.len(),
                required = self.min_clean_points,
                "stroke rejected: too little signal after noise filtering"
            );
            return Err(FeatureError::InsufficientSignal {
                found: kept.len(),
                required: self.min_clean_points,
            }
            .into());
        }
        Ok(kept)
    }
}
