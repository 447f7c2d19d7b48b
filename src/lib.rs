//! Freehand stroke recognition: decides whether a completed pointer stroke is a
//! line, circle, rectangle, square, triangle, hexagon or pentagon, and emits the
//! idealized shape that replaces it.
//!
//! ```
//! use inkshape::math::Point2;
//! use inkshape::{Recognizer, ShapeKind};
//!
//! let stroke: Vec<Point2> = (0..20)
//!     .map(|i| Point2::new(f64::from(i) * 15.0, 0.0))
//!     .collect();
//! let outcome = Recognizer::new().recognize(&stroke)?;
//! assert_eq!(outcome.kind(), Some(ShapeKind::Line));
//! # Ok::<(), inkshape::InkshapeError>(())
//! ```

pub mod canonical;
pub mod classify;
pub mod config;
pub mod error;
pub mod features;
pub mod math;
pub mod recognizer;

#[cfg(test)]
mod fixtures;

pub use canonical::{CanonicalShape, OutlineParams};
pub use classify::{ClassProbabilities, ShapeKind, ShapeScorer};
pub use config::{HeuristicThresholds, RecognizerConfig};
pub use error::{ConfigError, FeatureError, InkshapeError, InputError, Result};
pub use features::FeatureRecord;
pub use recognizer::{Recognition, RecognizedShape, Recognizer, Rejection, Source};
