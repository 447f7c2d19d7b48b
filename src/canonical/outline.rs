use std::f64::consts::{PI, TAU};

/// Parameters controlling how a canonical shape is flattened for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    /// Maximum distance between a circle and its polygonal outline.
    pub tolerance: f64,
    /// Minimum number of segments for a circle.
    pub min_segments: usize,
    /// Maximum number of segments for a circle.
    pub max_segments: usize,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            min_segments: 16,
            max_segments: 256,
        }
    }
}

/// Number of chords needed to approximate a full circle of `radius` within
/// the outline tolerance, clamped to the segment limits (never below 3).
pub(crate) fn circle_segment_count(radius: f64, params: &OutlineParams) -> usize {
    let min = params.min_segments.max(3);
    let max = params.max_segments.max(min);
    if radius < 1e-12 || params.tolerance <= 0.0 {
        return max;
    }
    // sagitta = r * (1 - cos(θ/2)), solved for θ at the tolerance
    let max_angle = if params.tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - params.tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (TAU / max_angle).ceil() as usize;
    n.clamp(min, max)
}
