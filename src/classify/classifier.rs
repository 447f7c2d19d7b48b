use tracing::trace;

use crate::features::FeatureRecord;

use super::linear::{LinearScorer, ShapeScorer};
use super::{ClassProbabilities, ShapeKind};

/// Floor for the softmax normalizer.
const SOFTMAX_EPSILON: f64 = 1e-12;

/// Numerically stable softmax: scores are shifted by their maximum before
/// exponentiating and the normalizer is floored at a tiny epsilon.
#[must_use]
pub fn softmax(scores: &[f64; ShapeKind::COUNT]) -> ClassProbabilities {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps = scores.map(|s| (s - max).exp());
    let sum = exps.iter().sum::<f64>().max(SOFTMAX_EPSILON);
    ClassProbabilities::new(exps.map(|e| e / sum))
}

/// Outcome of the gated classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// The best class cleared the confidence gate.
    Confident { kind: ShapeKind, probability: f64 },
    /// The best class fell short of the gate; the caller should fall back.
    LowConfidence { best: ShapeKind, probability: f64 },
}

impl Decision {
    /// The accepted class, if any.
    #[must_use]
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Decision::Confident { kind, .. } => Some(*kind),
            Decision::LowConfidence { .. } => None,
        }
    }
}

/// Scorer + softmax + confidence gate.
///
/// Ambiguous strokes are declined rather than labeled: a wrong confident
/// label is worse than falling through to the fallback rules.
#[derive(Debug, Clone)]
pub struct Classifier<S = LinearScorer> {
    scorer: S,
    threshold: f64,
}

impl Classifier<LinearScorer> {
    /// Creates a classifier with the reference linear weights.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self::with_scorer(LinearScorer::default(), threshold)
    }
}

impl<S: ShapeScorer> Classifier<S> {
    /// Creates a classifier around a custom scorer.
    #[must_use]
    pub fn with_scorer(scorer: S, threshold: f64) -> Self {
        Self { scorer, threshold }
    }

    /// Full probability vector for a feature record.
    #[must_use]
    pub fn probabilities(&self, features: &FeatureRecord) -> ClassProbabilities {
        let scores = self.scorer.scores(features);
        trace!(?scores, "class scores");
        softmax(&scores)
    }

    /// Classifies a feature record, declining below the confidence threshold.
    ///
    /// A NaN probability never clears the gate.
    #[must_use]
    pub fn classify(&self, features: &FeatureRecord) -> Decision {
        let (kind, probability) = self.probabilities(features).best();
        if probability >= self.threshold {
            Decision::Confident { kind, probability }
        } else {
            Decision::LowConfidence {
                best: kind,
                probability,
            }
        }
    }
}
