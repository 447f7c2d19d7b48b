use crate::features::FeatureRecord;

use super::ShapeKind;

/// Aspect ratio above which a box counts as oblong.
const OBLONG_ASPECT: f64 = 1.3;

/// Aspect ratio at which the elongation term saturates.
const MAX_ELONGATION: f64 = 10.0;

/// Straightness excess at which the line penalty saturates.
const MAX_STRAIGHTNESS_EXCESS: f64 = 5.0;

/// A scoring function from features to one real-valued score per class.
///
/// The classifier applies softmax and the confidence gate on top, so any
/// implementation honoring this contract can replace [`LinearScorer`].
pub trait ShapeScorer {
    /// Returns one score per class, indexed like [`ShapeKind::ALL`].
    fn scores(&self, features: &FeatureRecord) -> [f64; ShapeKind::COUNT];
}

/// Weights of one class in the linear discriminant.
///
/// Each field multiplies one basis feature derived from the [`FeatureRecord`];
/// see [`LinearScorer::score`] for the basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassWeights {
    pub bias: f64,
    pub closed: f64,
    pub open: f64,
    /// Applied when the corner count equals the class's expected count.
    pub corner_match: f64,
    /// Applied per corner of difference from the expected count.
    pub corner_mismatch: f64,
    pub circularity: f64,
    pub squareness: f64,
    /// Applied to `1 - min(aspect - 1, 1)`.
    pub aspect_closeness: f64,
    /// Applied to `min(aspect, 10) / 10`.
    pub elongation: f64,
    /// Applied when `aspect > 1.3`.
    pub oblong: f64,
    pub convex: f64,
    pub right_angle: f64,
    /// Applied to `min(straightness - 1, 5)`.
    pub straightness_excess: f64,
}

impl ClassWeights {
    pub const ZERO: Self = Self {
        bias: 0.0,
        closed: 0.0,
        open: 0.0,
        corner_match: 0.0,
        corner_mismatch: 0.0,
        circularity: 0.0,
        squareness: 0.0,
        aspect_closeness: 0.0,
        elongation: 0.0,
        oblong: 0.0,
        convex: 0.0,
        right_angle: 0.0,
        straightness_excess: 0.0,
    };
}

const LINE: ClassWeights = ClassWeights {
    open: 3.0,
    corner_mismatch: -2.0,
    circularity: -3.0,
    elongation: 2.0,
    straightness_excess: -4.0,
    ..ClassWeights::ZERO
};

const CIRCLE: ClassWeights = ClassWeights {
    closed: 3.0,
    corner_mismatch: -2.5,
    circularity: 5.0,
    aspect_closeness: 1.0,
    ..ClassWeights::ZERO
};

/// Shared by every closed polygon class: closure, exact corner count, convexity.
const POLYGON: ClassWeights = ClassWeights {
    closed: 1.5,
    corner_match: 4.0,
    corner_mismatch: -2.0,
    convex: 0.5,
    ..ClassWeights::ZERO
};

const RECTANGLE: ClassWeights = ClassWeights {
    bias: 2.0,
    circularity: -2.0,
    squareness: -2.0,
    oblong: 2.0,
    right_angle: 2.0,
    ..POLYGON
};

const SQUARE: ClassWeights = ClassWeights {
    circularity: -2.0,
    squareness: 2.0,
    aspect_closeness: 2.0,
    right_angle: 2.0,
    ..POLYGON
};

const TRIANGLE: ClassWeights = ClassWeights {
    circularity: -1.5,
    ..POLYGON
};

/// Regular polygons with many sides approach a circle.
const MANY_SIDED: ClassWeights = ClassWeights {
    circularity: 1.0,
    ..POLYGON
};

/// Hand-tuned linear discriminant over the feature record.
///
/// Every class score is `w · φ(features, class)`; corner terms compare the
/// detected corner count with the class's expected count, so each class
/// rewards an exact match and loses score with every corner of mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScorer {
    weights: [ClassWeights; ShapeKind::COUNT],
}

impl Default for LinearScorer {
    fn default() -> Self {
        Self {
            weights: [
                LINE, CIRCLE, RECTANGLE, SQUARE, TRIANGLE, MANY_SIDED, MANY_SIDED,
            ],
        }
    }
}

impl LinearScorer {
    /// Creates a scorer with custom weights, indexed like [`ShapeKind::ALL`].
    #[must_use]
    pub fn with_weights(weights: [ClassWeights; ShapeKind::COUNT]) -> Self {
        Self { weights }
    }

    /// Weights of one class.
    #[must_use]
    pub fn weights(&self, kind: ShapeKind) -> &ClassWeights {
        &self.weights[kind.index()]
    }

    /// Scores one class.
    #[must_use]
    pub fn score(&self, kind: ShapeKind, f: &FeatureRecord) -> f64 {
        let w = self.weights(kind);
        let indicator = |b: bool| if b { 1.0 } else { 0.0 };

        let expected = kind.expected_corners();
        #[allow(clippy::cast_precision_loss)]
        let mismatch = f.corners.abs_diff(expected) as f64;
        let aspect_closeness = 1.0 - (f.aspect - 1.0).min(1.0);
        let elongation = f.aspect.min(MAX_ELONGATION) / MAX_ELONGATION;
        let straightness_excess = (f.straightness - 1.0).clamp(0.0, MAX_STRAIGHTNESS_EXCESS);

        w.bias
            + w.closed * indicator(f.is_closed)
            + w.open * indicator(!f.is_closed)
            + w.corner_match * indicator(f.corners == expected)
            + w.corner_mismatch * mismatch
            + w.circularity * f.circularity
            + w.squareness * f.squareness
            + w.aspect_closeness * aspect_closeness
            + w.elongation * elongation
            + w.oblong * indicator(f.aspect > OBLONG_ASPECT)
            + w.convex * indicator(f.is_convex)
            + w.right_angle * f.right_angle_score
            + w.straightness_excess * straightness_excess
    }
}

impl ShapeScorer for LinearScorer {
    fn scores(&self, features: &FeatureRecord) -> [f64; ShapeKind::COUNT] {
        ShapeKind::ALL.map(|kind| self.score(kind, features))
    }
}
