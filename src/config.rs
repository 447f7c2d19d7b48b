use crate::error::{ConfigError, Result};

/// Thresholds for the rule-based fallback classifier.
///
/// Each rule is stricter than the soft weights of the linear scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicThresholds {
    /// Minimum aspect ratio of an open stroke accepted as a line.
    pub line_min_aspect: f64,
    /// Maximum path/chord ratio of a line.
    pub line_max_straightness: f64,
    /// Triangles must stay below this circularity.
    pub triangle_max_circularity: f64,
    /// Four-cornered shapes must stay below this circularity.
    pub quad_max_circularity: f64,
    /// Four-cornered shapes need at least this right-angle score.
    pub quad_min_right_angle: f64,
    pub square_max_aspect: f64,
    pub square_min_squareness: f64,
    pub rectangle_min_aspect: f64,
    pub rectangle_max_squareness: f64,
    /// Pentagons and hexagons need at least this circularity.
    pub polygon_min_circularity: f64,
    pub circle_min_circularity: f64,
}

impl Default for HeuristicThresholds {
    fn default() -> Self {
        Self {
            line_min_aspect: 3.0,
            line_max_straightness: 1.15,
            triangle_max_circularity: 0.85,
            quad_max_circularity: 0.93,
            quad_min_right_angle: 0.75,
            square_max_aspect: 1.2,
            square_min_squareness: 0.9,
            rectangle_min_aspect: 1.3,
            rectangle_max_squareness: 0.8,
            polygon_min_circularity: 0.75,
            circle_min_circularity: 0.85,
        }
    }
}

impl HeuristicThresholds {
    /// Checks that every threshold is finite and that fractional ones lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("line_min_aspect", self.line_min_aspect),
            ("line_max_straightness", self.line_max_straightness),
            ("square_max_aspect", self.square_max_aspect),
            ("rectangle_min_aspect", self.rectangle_min_aspect),
        ];
        for (name, value) in ratios {
            if !value.is_finite() {
                return Err(invalid(&format!("heuristic.{name} must be finite")));
            }
        }
        let fractions = [
            ("triangle_max_circularity", self.triangle_max_circularity),
            ("quad_max_circularity", self.quad_max_circularity),
            ("quad_min_right_angle", self.quad_min_right_angle),
            ("square_min_squareness", self.square_min_squareness),
            ("rectangle_max_squareness", self.rectangle_max_squareness),
            ("polygon_min_circularity", self.polygon_min_circularity),
            ("circle_min_circularity", self.circle_min_circularity),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(&format!("heuristic.{name} must be in [0, 1]")));
            }
        }
        Ok(())
    }
}

/// Fixed configuration of a recognition pipeline.
///
/// The defaults are the reference constants; a [`Recognizer`](crate::Recognizer)
/// holds one of these and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizerConfig {
    /// Raw strokes shorter than this are rejected outright.
    pub min_points: usize,
    /// Minimum number of points left after noise filtering.
    pub min_clean_points: usize,
    /// Consecutive kept points must be further apart than this.
    pub noise_floor: f64,
    /// Fraction of the smaller bounding-box side under which start and end count as joined.
    pub closure_tolerance: f64,
    /// Closed strokes narrower or shorter than this are degenerate.
    pub min_closed_extent: f64,
    pub smoothing_passes: usize,
    /// Index distance of the neighbors averaged by the smoother.
    pub smoothing_offset: usize,
    /// Incoming and outgoing corner segments shorter than this are noise.
    pub min_corner_segment: f64,
    /// Corners closer than `min_side / corner_dedup_divisor` are merged.
    pub corner_dedup_divisor: f64,
    /// Edge pairs with `|cos| <` this count as right angles.
    pub right_angle_cosine: f64,
    /// Minimum softmax probability for a classifier decision.
    pub confidence_threshold: f64,
    /// Confidence reported for a heuristic match.
    pub heuristic_confidence: f64,
    pub heuristic: HeuristicThresholds,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            min_points: 15,
            min_clean_points: 10,
            noise_floor: 2.0,
            closure_tolerance: 0.15,
            min_closed_extent: 15.0,
            smoothing_passes: 2,
            smoothing_offset: 2,
            min_corner_segment: 5.0,
            corner_dedup_divisor: 6.0,
            right_angle_cosine: 0.2,
            confidence_threshold: 0.6,
            heuristic_confidence: 0.6,
            heuristic: HeuristicThresholds::default(),
        }
    }
}

impl RecognizerConfig {
    /// Checks that every threshold is in range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.min_points == 0 {
            return Err(invalid("min_points must be positive"));
        }
        if self.min_clean_points < 2 || self.min_clean_points > self.min_points {
            return Err(invalid("min_clean_points must be in [2, min_points]"));
        }
        if !non_negative(self.noise_floor) {
            return Err(invalid("noise_floor must be non-negative"));
        }
        if !positive(self.closure_tolerance) {
            return Err(invalid("closure_tolerance must be positive"));
        }
        if !non_negative(self.min_closed_extent) {
            return Err(invalid("min_closed_extent must be non-negative"));
        }
        if self.smoothing_passes == 0 || self.smoothing_offset == 0 {
            return Err(invalid("smoothing needs at least one pass and a positive offset"));
        }
        if !non_negative(self.min_corner_segment) {
            return Err(invalid("min_corner_segment must be non-negative"));
        }
        if !positive(self.corner_dedup_divisor) {
            return Err(invalid("corner_dedup_divisor must be positive"));
        }
        if !(positive(self.right_angle_cosine) && self.right_angle_cosine < 1.0) {
            return Err(invalid("right_angle_cosine must be in (0, 1)"));
        }
        if !(positive(self.confidence_threshold) && self.confidence_threshold <= 1.0) {
            return Err(invalid("confidence_threshold must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.heuristic_confidence) {
            return Err(invalid("heuristic_confidence must be in [0, 1]"));
        }
        self.heuristic.validate()
    }
}

fn positive(v: f64) -> bool {
    v > 0.0
}

fn non_negative(v: f64) -> bool {
    v >= 0.0
}

fn invalid(msg: &str) -> crate::error::InkshapeError {
    ConfigError::Invalid(msg.to_owned()).into()
}
