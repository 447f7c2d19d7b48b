use thiserror::Error;

/// Top-level error type for the inkshape recognizer.
#[derive(Debug, Error)]
pub enum InkshapeError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised for malformed point data, before any recognition work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Gate failures of feature extraction.
///
/// None of these are defects: the recognizer turns each one into an
/// "unrecognized" outcome and the stroke stays freehand.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatureError {
    #[error("stroke has {found} points, at least {required} are required")]
    InsufficientPoints { found: usize, required: usize },

    #[error("only {found} points survive noise filtering, at least {required} are required")]
    InsufficientSignal { found: usize, required: usize },

    #[error("closed stroke of {width} x {height} is below the minimum extent {min_extent}")]
    DegenerateGeometry {
        width: f64,
        height: f64,
        min_extent: f64,
    },

    #[error("feature `{name}` is not finite, stroke coordinates are out of range")]
    NonFiniteFeature { name: &'static str },
}

/// Errors related to recognizer configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`InkshapeError`].
pub type Result<T> = std::result::Result<T, InkshapeError>;
