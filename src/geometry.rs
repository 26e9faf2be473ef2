// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Planar vector math for joint angles.

use std::ops::Sub;

use crate::error::{PoseError, Result};
use crate::frame::Keypoint;

/// A point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Keypoint> for Point2 {
    fn from(kp: Keypoint) -> Self {
        Self::new(kp.x, kp.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scale to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::DegenerateInput`] for a zero-length or non-finite vector.
    pub fn normalize(self) -> Result<Self> {
        let len = self.norm();
        if len == 0.0 || !len.is_finite() {
            return Err(PoseError::DegenerateInput(format!(
                "cannot normalize vector ({}, {}) of length {len}",
                self.x, self.y
            )));
        }
        Ok(Self::new(self.x / len, self.y / len))
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Displacement vector from `p1` to `p2`.
#[must_use]
pub fn make_vector(p1: Point2, p2: Point2) -> Vector2 {
    p2 - p1
}

/// Angle between two vectors, in `[0, π]` radians or `[0, 180]` degrees.
///
/// The dot product of the unit vectors is clamped to `[-1, 1]` before `acos`
/// so rounding never produces NaN for (anti)parallel inputs.
///
/// # Errors
///
/// Returns [`PoseError::DegenerateInput`] if either vector has zero length.
pub fn angle_between(v1: Vector2, v2: Vector2, in_degrees: bool) -> Result<f64> {
    let dot = v1.normalize()?.dot(v2.normalize()?).clamp(-1.0, 1.0);
    let angle = dot.acos();
    Ok(if in_degrees { angle.to_degrees() } else { angle })
}

/// Angle at `vertex` between the segments to `a` and `c`.
///
/// # Errors
///
/// Returns [`PoseError::DegenerateInput`] if `a` or `c` coincides with `vertex`.
pub fn joint_angle(a: Point2, vertex: Point2, c: Point2, in_degrees: bool) -> Result<f64> {
    angle_between(make_vector(vertex, a), make_vector(vertex, c), in_degrees)
}
