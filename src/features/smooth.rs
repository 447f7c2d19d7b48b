use crate::config::RecognizerConfig;
use crate::math::Point2;

/// Neighbor weights of the smoothing kernel: `(previous, current, next)`.
const KERNEL: (f64, f64, f64) = (0.25, 0.5, 0.25);

/// Repeated 3-tap weighted averaging of a point sequence.
///
/// Each pass replaces every point with `0.25 * p[i - k] + 0.5 * p[i] + 0.25 * p[i + k]`
/// where `k` is the neighbor offset. Closed strokes wrap around; open strokes
/// clamp neighbor indices to the ends, so endpoints stay anchored to the stroke.
#[derive(Debug)]
pub struct SmoothPoints<'a> {
    points: &'a [Point2],
    closed: bool,
    passes: usize,
    offset: usize,
}

impl<'a> SmoothPoints<'a> {
    /// Creates a new smoothing operation.
    #[must_use]
    pub fn new(points: &'a [Point2], closed: bool, config: &RecognizerConfig) -> Self {
        Self {
            points,
            closed,
            passes: config.smoothing_passes,
            offset: config.smoothing_offset,
        }
    }

    /// Executes the smoothing passes. The output has the same length as the input.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let mut current = self.points.to_vec();
        if current.len() < 3 {
            return current;
        }
        for _ in 0..self.passes {
            current = self.pass(&current);
        }
        current
    }

    fn pass(&self, pts: &[Point2]) -> Vec<Point2> {
        let n = pts.len();
        let k = self.offset;
        (0..n)
            .map(|i| {
                let (prev, next) = if self.closed {
                    ((i + n - k % n) % n, (i + k) % n)
                } else {
                    (i.saturating_sub(k), (i + k).min(n - 1))
                };
                let (wp, wc, wn) = KERNEL;
                Point2::from(pts[prev].coords * wp + pts[i].coords * wc + pts[next].coords * wn)
            })
            .collect()
    }
}
