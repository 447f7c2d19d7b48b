use crate::config::HeuristicThresholds;
use crate::features::FeatureRecord;

use super::ShapeKind;

/// Ordered rule set used when the classifier declines.
///
/// Rules are tried in a fixed order and the first match wins; a stroke
/// satisfying none of them stays unrecognized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeuristicClassifier {
    thresholds: HeuristicThresholds,
}

impl HeuristicClassifier {
    #[must_use]
    pub fn new(thresholds: HeuristicThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the first matching class, if any.
    #[must_use]
    pub fn classify(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        self.line(f)
            .or_else(|| self.triangle(f))
            .or_else(|| self.quadrilateral(f))
            .or_else(|| self.many_sided(f))
            .or_else(|| self.circle(f))
    }

    fn line(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        let t = &self.thresholds;
        (!f.is_closed
            && f.aspect > t.line_min_aspect
            && f.straightness < t.line_max_straightness
            && f.corners < 2)
            .then_some(ShapeKind::Line)
    }

    fn triangle(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        (f.is_closed
            && f.corners == 3
            && f.circularity < self.thresholds.triangle_max_circularity
            && f.is_convex)
            .then_some(ShapeKind::Triangle)
    }

    /// Square when near-equal sides, rectangle when clearly oblong; the
    /// band in between matches neither.
    fn quadrilateral(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        let t = &self.thresholds;
        if !(f.is_closed
            && f.corners == 4
            && f.circularity < t.quad_max_circularity
            && f.right_angle_score > t.quad_min_right_angle)
        {
            return None;
        }
        if f.aspect <= t.square_max_aspect && f.squareness > t.square_min_squareness {
            Some(ShapeKind::Square)
        } else if f.aspect > t.rectangle_min_aspect || f.squareness < t.rectangle_max_squareness {
            Some(ShapeKind::Rectangle)
        } else {
            None
        }
    }

    fn many_sided(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        if !(f.is_closed && f.circularity > self.thresholds.polygon_min_circularity && f.is_convex) {
            return None;
        }
        match f.corners {
            5 => Some(ShapeKind::Pentagon),
            6 => Some(ShapeKind::Hexagon),
            _ => None,
        }
    }

    fn circle(&self, f: &FeatureRecord) -> Option<ShapeKind> {
        (f.is_closed && f.circularity > self.thresholds.circle_min_circularity && f.corners < 2)
            .then_some(ShapeKind::Circle)
    }
}
