//! Math utilities and types
//!
//! Screen space is integer pixels with the vertical axis growing downward.
//! Affine transforms are 3x3 homogeneous matrices in double precision.

pub use nalgebra::{Matrix3, Vector2};

/// Integer pixel point on the drawing surface
pub type Point2 = nalgebra::Point2<i32>;

/// 2D vector type for real-valued offsets and velocities
pub type Vec2 = Vector2<f64>;

/// 2D affine transform as a homogeneous 3x3 matrix
pub type Affine2 = Matrix3<f64>;

/// Math utility functions
pub mod utils {
    use super::{Affine2, Vec2};

    /// Convert integer degrees to radians
    pub fn deg_to_rad(degrees: i32) -> f64 {
        f64::from(degrees).to_radians()
    }

    /// Truncate toward zero into pixel space, saturating at the `i32` range
    pub fn truncate(value: f64) -> i32 {
        value as i32
    }

    /// Translation by `(x, y)`
    pub fn translation(x: f64, y: f64) -> Affine2 {
        Affine2::new_translation(&Vec2::new(x, y))
    }

    /// Non-uniform scaling about the origin
    pub fn scaling(sx: f64, sy: f64) -> Affine2 {
        Affine2::new_nonuniform_scaling(&Vec2::new(sx, sy))
    }

    /// Rotation about the origin; positive angles turn clockwise on a y-down surface
    pub fn rotation(radians: f64) -> Affine2 {
        Affine2::new_rotation(radians)
    }
}
