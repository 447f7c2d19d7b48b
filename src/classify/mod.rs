mod classifier;
mod heuristic;
mod linear;

pub use classifier::{softmax, Classifier, Decision};
pub use heuristic::HeuristicClassifier;
pub use linear::{ClassWeights, LinearScorer, ShapeScorer};

use std::fmt;
use std::str::FromStr;

/// The fixed set of canonical shape classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
    Square,
    Triangle,
    Hexagon,
    Pentagon,
}

impl ShapeKind {
    /// Number of shape classes.
    pub const COUNT: usize = 7;

    /// Every class, in the order used by [`ClassProbabilities`].
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Pentagon,
    ];

    /// Position of this class in [`ShapeKind::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of corners a clean drawing of this shape should produce.
    #[must_use]
    pub fn expected_corners(self) -> usize {
        match self {
            ShapeKind::Line | ShapeKind::Circle => 0,
            ShapeKind::Triangle => 3,
            ShapeKind::Rectangle | ShapeKind::Square => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
        }
    }

    /// Lower-case label used on the wire and in logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Pentagon => "pentagon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown shape label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape label: {0}")]
pub struct UnknownShapeLabel(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShapeLabel;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownShapeLabel(s.to_owned()))
    }
}

/// Softmax output: one probability per class, indexed like [`ShapeKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities([f64; ShapeKind::COUNT]);

impl ClassProbabilities {
    #[must_use]
    pub fn new(values: [f64; ShapeKind::COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn get(&self, kind: ShapeKind) -> f64 {
        self.0[kind.index()]
    }

    /// The most probable class and its probability. Ties go to the earlier class.
    #[must_use]
    pub fn best(&self) -> (ShapeKind, f64) {
        let mut best = (ShapeKind::ALL[0], self.0[0]);
        for (kind, &p) in ShapeKind::ALL.iter().zip(self.0.iter()).skip(1) {
            if p > best.1 {
                best = (*kind, p);
            }
        }
        best
    }

    /// `(kind, probability)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKind, f64)> + '_ {
        ShapeKind::ALL.into_iter().zip(self.0.iter().copied())
    }

    #[must_use]
    pub fn as_array(&self) -> &[f64; ShapeKind::COUNT] {
        &self.0
    }
}
