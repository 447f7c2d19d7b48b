use tracing::debug;

use crate::canonical::{BuildCanonicalShape, CanonicalShape};
use crate::classify::{
    Classifier, Decision, HeuristicClassifier, LinearScorer, ShapeKind, ShapeScorer,
};
use crate::config::RecognizerConfig;
use crate::error::{FeatureError, InkshapeError, InputError, Result};
use crate::features::{ExtractFeatures, FeatureRecord};
use crate::math::Point2;

/// Which strategy produced a recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Classifier,
    Heuristic,
}

/// A stroke replaced by a canonical shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedShape {
    pub kind: ShapeKind,
    pub shape: CanonicalShape,
    /// In `[0, 1]`: the softmax probability, or the fixed heuristic confidence.
    pub confidence: f64,
    pub source: Source,
}

/// Why a stroke stays freehand.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A feature extraction gate failed.
    Features(FeatureError),
    /// The classifier declined and no fallback rule matched.
    NoHeuristicMatch,
}

/// Outcome of one recognition attempt. Both variants are valid final results.
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition {
    Recognized(RecognizedShape),
    Unrecognized(Rejection),
}

impl Recognition {
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        matches!(self, Recognition::Recognized(_))
    }

    #[must_use]
    pub fn kind(&self) -> Option<ShapeKind> {
        self.shape().map(|s| s.kind)
    }

    #[must_use]
    pub fn shape(&self) -> Option<&RecognizedShape> {
        match self {
            Recognition::Recognized(shape) => Some(shape),
            Recognition::Unrecognized(_) => None,
        }
    }
}

/// The full stroke recognition pipeline.
///
/// Holds only fixed configuration, so one value can serve any number of
/// strokes, from any number of threads.
///
/// ```text
/// points ─▶ features ─▶ classifier ──confident──▶ canonical shape
///                            │ low confidence
///                            ▼
///                        heuristic ──match──▶ canonical shape
///                            │ no match
///                            ▼
///                        freehand
/// ```
#[derive(Debug, Clone)]
pub struct Recognizer<S = LinearScorer> {
    config: RecognizerConfig,
    classifier: Option<Classifier<S>>,
    heuristic: HeuristicClassifier,
}

impl Default for Recognizer<LinearScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer<LinearScorer> {
    /// Creates a recognizer with the reference configuration and weights.
    #[must_use]
    pub fn new() -> Self {
        let config = RecognizerConfig::default();
        Self {
            classifier: Some(Classifier::new(config.confidence_threshold)),
            heuristic: HeuristicClassifier::new(config.heuristic),
            config,
        }
    }

    /// Creates a recognizer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration fails validation.
    pub fn with_config(config: RecognizerConfig) -> Result<Self> {
        Self::with_scorer(config, LinearScorer::default())
    }

    /// Creates a recognizer without a classifier: every stroke goes straight
    /// to the fallback rules.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration fails validation.
    pub fn heuristic_only(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: None,
            heuristic: HeuristicClassifier::new(config.heuristic),
            config,
        })
    }
}

impl<S: ShapeScorer> Recognizer<S> {
    /// Creates a recognizer around a custom scoring function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the configuration fails validation.
    pub fn with_scorer(config: RecognizerConfig, scorer: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: Some(Classifier::with_scorer(scorer, config.confidence_threshold)),
            heuristic: HeuristicClassifier::new(config.heuristic),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Runs feature extraction alone.
    ///
    /// # Errors
    ///
    /// - `InputError::NonFinite` if any coordinate is NaN or infinite
    /// - `FeatureError` if a point-count or geometry gate fails
    pub fn extract_features(&self, points: &[Point2]) -> Result<FeatureRecord> {
        check_finite(points)?;
        ExtractFeatures::new(points, &self.config).execute()
    }

    /// Recognizes one completed stroke.
    ///
    /// Gate failures and unmatched strokes are reported as
    /// [`Recognition::Unrecognized`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NonFinite` if any coordinate is NaN or infinite.
    pub fn recognize(&self, points: &[Point2]) -> Result<Recognition> {
        let features = match self.extract_features(points) {
            Ok(features) => features,
            Err(InkshapeError::Feature(e)) => {
                debug!(reason = %e, "stroke kept as freehand");
                return Ok(Recognition::Unrecognized(Rejection::Features(e)));
            }
            Err(e) => return Err(e),
        };

        if let Some(classifier) = &self.classifier {
            match classifier.classify(&features) {
                Decision::Confident { kind, probability } => {
                    return Ok(recognized(kind, &features, probability, Source::Classifier));
                }
                Decision::LowConfidence { best, probability } => {
                    debug!(%best, probability, "classifier declined, trying fallback rules");
                }
            }
        }

        match self.heuristic.classify(&features) {
            Some(kind) => Ok(recognized(
                kind,
                &features,
                self.config.heuristic_confidence,
                Source::Heuristic,
            )),
            None => {
                debug!("no fallback rule matched, stroke kept as freehand");
                Ok(Recognition::Unrecognized(Rejection::NoHeuristicMatch))
            }
        }
    }

    /// Builds the canonical shape of `kind` for a stroke, or `None` if
    /// feature extraction fails.
    #[must_use]
    pub fn canonicalize(&self, kind: ShapeKind, points: &[Point2]) -> Option<CanonicalShape> {
        let features = self.extract_features(points).ok()?;
        Some(BuildCanonicalShape::new(kind, &features).execute())
    }
}

fn recognized(
    kind: ShapeKind,
    features: &FeatureRecord,
    confidence: f64,
    source: Source,
) -> Recognition {
    debug!(%kind, confidence, ?source, "stroke recognized");
    Recognition::Recognized(RecognizedShape {
        kind,
        shape: BuildCanonicalShape::new(kind, features).execute(),
        confidence,
        source,
    })
}

fn check_finite(points: &[Point2]) -> Result<()> {
    match points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some((index, p)) => Err(InputError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        }
        .into()),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::f64::consts::FRAC_PI_2;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn recognize(points: &[Point2]) -> Recognition {
        init_tracing();
        Recognizer::new().recognize(points).unwrap()
    }

    fn heuristic(points: &[Point2]) -> Option<ShapeKind> {
        Recognizer::heuristic_only(RecognizerConfig::default())
            .unwrap()
            .recognize(points)
            .unwrap()
            .kind()
    }

    fn square() -> Vec<Point2> {
        fixtures::rectangle(Point2::origin(), 200.0, 200.0, 20)
    }

    fn stretched() -> Vec<Point2> {
        fixtures::rectangle(Point2::origin(), 200.0, 80.0, 20)
    }

    fn straight() -> Vec<Point2> {
        fixtures::jittered_line(Point2::origin(), Point2::new(300.0, 5.0), 20, 0.8)
    }

    fn hexagon() -> Vec<Point2> {
        fixtures::polygon(&fixtures::regular_vertices(6, 0.0), 20)
    }

    fn pentagon() -> Vec<Point2> {
        fixtures::polygon(&fixtures::regular_vertices(5, -FRAC_PI_2), 20)
    }

    fn triangle() -> Vec<Point2> {
        fixtures::polygon(&fixtures::triangle_vertices(), 20)
    }

    struct Flat;

    impl ShapeScorer for Flat {
        fn scores(&self, _features: &FeatureRecord) -> [f64; ShapeKind::COUNT] {
            [0.0; ShapeKind::COUNT]
        }
    }

    #[test]
    fn short_stroke_is_unrecognized() {
        let pts = fixtures::line(Point2::origin(), Point2::new(200.0, 0.0), 14);
        assert_eq!(
            recognize(&pts),
            Recognition::Unrecognized(Rejection::Features(FeatureError::InsufficientPoints {
                found: 14,
                required: 15,
            }))
        );
    }

    #[test]
    fn circle_is_recognized_with_accurate_radius() {
        let r = recognize(&fixtures::circle(Point2::origin(), 100.0, 64));
        let shape = r.shape().unwrap();
        assert_eq!(shape.kind, ShapeKind::Circle);
        assert_eq!(shape.source, Source::Classifier);
        let CanonicalShape::Circle { center, radius } = shape.shape else {
            panic!("expected a circle, got {:?}", shape.shape);
        };
        assert!((radius - 100.0).abs() < 1.0, "radius={radius}");
        assert!(center.coords.norm() < 1.0);
    }

    #[test]
    fn square_is_not_a_rectangle() {
        let r = recognize(&square());
        let shape = r.shape().unwrap();
        assert_eq!(shape.kind, ShapeKind::Square);
        assert!(shape.confidence >= 0.6);
        let b = shape.shape.bounds();
        assert!((b.width() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn stretched_square_is_a_rectangle() {
        let r = recognize(&stretched());
        assert_eq!(r.kind(), Some(ShapeKind::Rectangle));
        let b = r.shape().unwrap().shape.bounds();
        assert!((b.width() - 200.0).abs() < 1e-9);
        assert!((b.height() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn jittered_segment_is_a_line() {
        let r = recognize(&straight());
        assert_eq!(r.kind(), Some(ShapeKind::Line));
    }

    #[test]
    fn polygons_by_corner_count() {
        assert_eq!(recognize(&triangle()).kind(), Some(ShapeKind::Triangle));
        assert_eq!(recognize(&hexagon()).kind(), Some(ShapeKind::Hexagon));
        assert_eq!(recognize(&pentagon()).kind(), Some(ShapeKind::Pentagon));
    }

    #[test]
    fn identical_input_gives_identical_outcome() {
        let recognizer = Recognizer::new();
        for pts in [square(), stretched(), straight(), triangle()] {
            let first = recognizer.recognize(&pts).unwrap();
            assert_eq!(recognizer.recognize(&pts).unwrap(), first);
            assert_eq!(
                recognizer.extract_features(&pts).unwrap(),
                recognizer.extract_features(&pts).unwrap()
            );
        }
    }

    #[test]
    fn fallback_rules_alone() {
        assert_eq!(heuristic(&square()), Some(ShapeKind::Square));
        assert_eq!(heuristic(&stretched()), Some(ShapeKind::Rectangle));
        assert_eq!(
            heuristic(&fixtures::circle(Point2::origin(), 100.0, 64)),
            Some(ShapeKind::Circle)
        );
        assert_eq!(heuristic(&straight()), Some(ShapeKind::Line));
        assert_eq!(heuristic(&triangle()), Some(ShapeKind::Triangle));
        assert_eq!(heuristic(&hexagon()), Some(ShapeKind::Hexagon));
        assert_eq!(heuristic(&pentagon()), Some(ShapeKind::Pentagon));
    }

    #[test]
    fn strict_gate_falls_back_to_rules() {
        let config = RecognizerConfig {
            confidence_threshold: 0.99,
            ..RecognizerConfig::default()
        };
        let r = Recognizer::with_config(config).unwrap().recognize(&square()).unwrap();
        let shape = r.shape().unwrap();
        assert_eq!(shape.kind, ShapeKind::Square);
        assert_eq!(shape.source, Source::Heuristic);
        assert!((shape.confidence - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn undecided_scorer_defers_to_rules() {
        let recognizer = Recognizer::with_scorer(RecognizerConfig::default(), Flat).unwrap();
        let r = recognizer.recognize(&stretched()).unwrap();
        assert_eq!(r.kind(), Some(ShapeKind::Rectangle));
        assert_eq!(r.shape().unwrap().source, Source::Heuristic);
    }

    #[test]
    fn open_arc_matches_no_rule() {
        let arc: Vec<Point2> = fixtures::circle(Point2::origin(), 100.0, 64)
            .into_iter()
            .take(48)
            .collect();
        let r = Recognizer::heuristic_only(RecognizerConfig::default())
            .unwrap()
            .recognize(&arc)
            .unwrap();
        assert_eq!(r, Recognition::Unrecognized(Rejection::NoHeuristicMatch));
        assert!(!r.is_recognized());
    }

    #[test]
    fn non_finite_point_is_an_error() {
        let mut pts = square();
        pts[7] = Point2::new(f64::NAN, 3.0);
        let err = Recognizer::new().recognize(&pts).unwrap_err();
        assert!(matches!(
            err,
            InkshapeError::Input(InputError::NonFinite { index: 7, .. })
        ));
    }

    #[test]
    fn huge_coordinates_stay_freehand() {
        let recognizer = Recognizer::new();
        let strokes = [
            fixtures::circle(Point2::new(1e200, 1e200), 1e199, 64),
            fixtures::line(Point2::new(-1e200, 0.0), Point2::new(1e200, 1.0), 20),
        ];
        for pts in &strokes {
            let r = recognizer.recognize(pts).unwrap();
            assert!(
                matches!(
                    r,
                    Recognition::Unrecognized(Rejection::Features(
                        FeatureError::NonFiniteFeature { .. }
                    ))
                ),
                "{r:?}"
            );
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RecognizerConfig {
            smoothing_passes: 0,
            ..RecognizerConfig::default()
        };
        assert!(matches!(
            Recognizer::with_config(config),
            Err(InkshapeError::Config(_))
        ));
        assert!(Recognizer::heuristic_only(config).is_err());
    }

    #[test]
    fn canonicalize_any_class() {
        let recognizer = Recognizer::new();
        let shape = recognizer.canonicalize(ShapeKind::Hexagon, &square()).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Hexagon);
        let short = fixtures::line(Point2::origin(), Point2::new(10.0, 0.0), 5);
        assert!(recognizer.canonicalize(ShapeKind::Line, &short).is_none());
    }

    #[test]
    fn recognizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recognizer>();

        let recognizer = Recognizer::new();
        std::thread::scope(|s| {
            let a = s.spawn(|| recognizer.recognize(&square()).unwrap().kind());
            let b = s.spawn(|| recognizer.recognize(&stretched()).unwrap().kind());
            assert_eq!(a.join().unwrap(), Some(ShapeKind::Square));
            assert_eq!(b.join().unwrap(), Some(ShapeKind::Rectangle));
        });
    }
}
