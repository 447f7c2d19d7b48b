pub mod angle_2d;
pub mod bounds_2d;
pub mod polygon_2d;

pub use bounds_2d::Bounds2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
