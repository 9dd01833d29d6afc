//! Aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The point type.
pub use na::Point3 as Point;

/// The vector type.
pub use na::Vector3 as Vector;
