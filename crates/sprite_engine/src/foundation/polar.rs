//! Cartesian <-> polar point conversion
//!
//! Angles are bearings: measured from the +y axis toward the +x axis. With that
//! convention `x = r sin(theta)` and `y = r cos(theta)` invert the conversion
//! exactly, and adding a positive angle turns a shape clockwise once the y axis
//! is flipped for the screen.
//!
//! Radii are relative: the vertex farthest from the origin has `r == 1.0` and
//! every other vertex is a fraction of it. Callers scale back up by the sprite's
//! bounding radius.

use super::math::{utils, Point2};

/// A point in relative polar form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Distance from the origin as a fraction of the largest vertex distance
    pub r: f64,
    /// Bearing in radians
    pub theta: f64,
}

impl PolarPoint {
    /// Create a polar point
    pub fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }

    /// The same point turned by `degrees`; the radius is untouched
    pub fn rotated(self, degrees: i32) -> Self {
        Self {
            r: self.r,
            theta: self.theta + utils::deg_to_rad(degrees),
        }
    }

    /// Back to an integer pixel offset, scaling the relative radius by `scale`
    ///
    /// Both axes are truncated toward zero.
    pub fn to_cartesian(self, scale: f64) -> Point2 {
        let magnitude = self.r * scale;
        Point2::new(
            utils::truncate(magnitude * self.theta.sin()),
            utils::truncate(magnitude * self.theta.cos()),
        )
    }
}

fn hypotenuse(point: &Point2) -> f64 {
    f64::from(point.x).hypot(f64::from(point.y))
}

/// Convert offset vertices to relative polar form, preserving their order
///
/// An empty slice, or one where every vertex sits on the origin, maps to zero
/// radii rather than dividing by zero.
pub fn cartesian_to_polar(points: &[Point2]) -> Vec<PolarPoint> {
    let largest = points.iter().map(hypotenuse).fold(0.0_f64, f64::max);

    points
        .iter()
        .map(|point| {
            let r = if largest > 0.0 { hypotenuse(point) / largest } else { 0.0 };
            PolarPoint::new(r, f64::from(point.x).atan2(f64::from(point.y)))
        })
        .collect()
}

/// Convert relative polar points back to pixel offsets scaled by `scale`
pub fn polar_to_cartesian(polars: &[PolarPoint], scale: f64) -> Vec<Point2> {
    polars.iter().map(|pp| pp.to_cartesian(scale)).collect()
}
