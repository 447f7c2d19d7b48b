use std::f64::consts::{FRAC_PI_4, PI};

use crate::config::RecognizerConfig;
use crate::math::angle_2d::turn_angle;
use crate::math::Point2;

/// Smallest turn (exclusive) that counts as a structural corner: 45°.
const MIN_CORNER_ANGLE: f64 = FRAC_PI_4;

/// Largest turn (exclusive) that counts as a structural corner: 135°.
/// Sharper turns are direction reversals, not polygon vertices.
const MAX_CORNER_ANGLE: f64 = 3.0 * PI / 4.0;

/// A detected corner of a smoothed stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Index into the smoothed sequence.
    pub index: usize,
    /// Position of the corner.
    pub position: Point2,
    /// Absolute turning angle in radians, in `(π/4, 3π/4)`.
    pub angle: f64,
}

/// Lookahead window for a sequence of `n` points: `max(2, n / 20)`.
///
/// Scales with sampling density so the same physical turn is measured over a
/// comparable stretch of the stroke.
#[must_use]
pub fn lookahead(n: usize) -> usize {
    (n / 20).max(2)
}

/// Finds sharp turns along a smoothed stroke.
///
/// # Algorithm
///
/// 1. For each candidate index `i`, measure the turn between the incoming chord
///    `p[i - w] → p[i]` and the outgoing chord `p[i] → p[i + w]`, where `w` is the
///    [`lookahead`]. Open strokes skip `w` points at both ends; closed strokes wrap.
/// 2. Skip candidates where either chord is shorter than the minimum segment length.
/// 3. Keep candidates whose absolute turn lies strictly inside `(45°, 135°)`.
/// 4. Discard a candidate lying within `min_side / divisor` (spatial distance) of an
///    already accepted corner.
#[derive(Debug)]
pub struct DetectCorners<'a> {
    points: &'a [Point2],
    closed: bool,
    dedup_radius: f64,
    min_segment: f64,
}

impl<'a> DetectCorners<'a> {
    /// Creates a new corner detection operation.
    ///
    /// `min_side` is the smaller bounding-box side of the stroke.
    #[must_use]
    pub fn new(points: &'a [Point2], closed: bool, min_side: f64, config: &RecognizerConfig) -> Self {
        Self {
            points,
            closed,
            dedup_radius: min_side / config.corner_dedup_divisor,
            min_segment: config.min_corner_segment,
        }
    }

    /// Executes the scan, returning accepted corners in sequence order.
    #[must_use]
    pub fn execute(&self) -> Vec<Corner> {
        let n = self.points.len();
        let w = lookahead(n);
        let candidates = if self.closed {
            0..n
        } else if n > 2 * w {
            w..n - w
        } else {
            0..0
        };

        let mut corners: Vec<Corner> = Vec::new();
        for i in candidates {
            let (prev, next) = if self.closed {
                ((i + n - w % n) % n, (i + w) % n)
            } else {
                (i - w, i + w)
            };
            let p = self.points[i];
            let v_in = p - self.points[prev];
            let v_out = self.points[next] - p;
            if v_in.norm() < self.min_segment || v_out.norm() < self.min_segment {
                continue;
            }

            let angle = turn_angle(&v_in, &v_out).abs();
            if angle <= MIN_CORNER_ANGLE || angle >= MAX_CORNER_ANGLE {
                continue;
            }
            if corners
                .iter()
                .any(|c| (c.position - p).norm() < self.dedup_radius)
            {
                continue;
            }
            corners.push(Corner {
                index: i,
                position: p,
                angle,
            });
        }
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::smooth::SmoothPoints;
    use crate::fixtures;
    use crate::math::Bounds2;

    fn detect(raw: &[Point2], closed: bool) -> Vec<Corner> {
        let config = RecognizerConfig::default();
        let smoothed = SmoothPoints::new(raw, closed, &config).execute();
        let min_side = Bounds2::from_points(raw).map_or(0.0, |b| b.min_side());
        DetectCorners::new(&smoothed, closed, min_side, &config).execute()
    }

    #[test]
    fn lookahead_scales_with_length() {
        assert_eq!(lookahead(10), 2);
        assert_eq!(lookahead(59), 2);
        assert_eq!(lookahead(60), 3);
        assert_eq!(lookahead(160), 8);
    }

    #[test]
    fn circle_has_no_corners() {
        assert!(detect(&fixtures::circle(Point2::origin(), 100.0, 64), true).is_empty());
    }

    #[test]
    fn square_has_four_corners_near_its_vertices() {
        let corners = detect(&fixtures::rectangle(Point2::origin(), 200.0, 200.0, 20), true);
        assert_eq!(corners.len(), 4);
        let vertices = [
            Point2::new(0.0, 0.0),
            Point2::new(200.0, 0.0),
            Point2::new(200.0, 200.0),
            Point2::new(0.0, 200.0),
        ];
        for (c, v) in corners.iter().zip(vertices.iter()) {
            assert!((c.position - v).norm() < 25.0, "{c:?} vs {v:?}");
        }
        assert!(corners.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn corner_angles_lie_strictly_inside_band() {
        let corners = detect(&fixtures::polygon(&fixtures::triangle_vertices(), 10), true);
        assert_eq!(corners.len(), 3);
        for c in &corners {
            assert!(c.angle > MIN_CORNER_ANGLE && c.angle < MAX_CORNER_ANGLE);
        }
    }

    #[test]
    fn straight_line_has_no_corners() {
        let pts = fixtures::line(Point2::origin(), Point2::new(300.0, 0.0), 30);
        assert!(detect(&pts, false).is_empty());
    }

    #[test]
    fn hairpin_reversal_is_not_a_corner() {
        // Out along +x and straight back: a ~180° turn falls outside the band.
        let mut pts = fixtures::line(Point2::origin(), Point2::new(200.0, 0.0), 21);
        let back = fixtures::line(Point2::new(200.0, 3.0), Point2::new(0.0, 3.0), 21);
        pts.extend(back);
        assert!(detect(&pts, false).is_empty());
    }

    #[test]
    fn open_l_shape_has_one_corner() {
        let mut pts = fixtures::line(Point2::origin(), Point2::new(200.0, 0.0), 41);
        pts.extend(fixtures::line(Point2::new(200.0, 5.0), Point2::new(200.0, 200.0), 40));
        let corners = detect(&pts, false);
        assert_eq!(corners.len(), 1);
        assert!((corners[0].position - Point2::new(200.0, 0.0)).norm() < 25.0);
    }

    #[test]
    fn sparse_sampling_smears_corners_below_the_band() {
        // With only ten samples per side the smoothed turn is spread over more
        // than the lookahead window and never exceeds 45°.
        let mut pts = fixtures::line(Point2::origin(), Point2::new(200.0, 0.0), 11);
        pts.extend(fixtures::line(Point2::new(200.0, 20.0), Point2::new(200.0, 200.0), 10));
        assert!(detect(&pts, false).is_empty());
    }

    #[test]
    fn short_chords_are_ignored() {
        // Sub-5-unit chords everywhere: nothing can qualify.
        let pts: Vec<Point2> = (0..30)
            .map(|i| Point2::new(f64::from(i % 2), f64::from(i / 2) * 0.1))
            .collect();
        let config = RecognizerConfig::default();
        assert!(DetectCorners::new(&pts, false, 100.0, &config).execute().is_empty());
    }
}
