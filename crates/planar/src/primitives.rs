//! Point and vector value types.
//!
//! Both are thin `Copy` wrappers whose arithmetic is carried by
//! `nalgebra::Vector2<f64>`; conversions are provided in both directions.

use nalgebra::Vector2;

/// A point in the plane. Equality is by field value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.to_na() - self.to_na()).norm()
    }

    #[inline]
    pub fn to_na(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance `sqrt((bx-ax)^2 + (by-ay)^2)`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(&b)
}

/// A displacement `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    #[inline]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Displacement from `from` to `to`.
    #[inline]
    pub fn between(from: Point, to: Point) -> Self {
        (to.to_na() - from.to_na()).into()
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.to_na().norm()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.to_na().dot(&other.to_na())
    }

    /// Unsigned angle in radians, `acos(dot / (|a| |b|))`.
    ///
    /// Returns `0.0` when either vector has zero length. The cosine is clamped
    /// to `[-1, 1]` so nearly parallel inputs never yield NaN.
    pub fn angle(&self, other: &Vector) -> f64 {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn to_na(self) -> Vector2<f64> {
        Vector2::new(self.dx, self.dy)
    }
}

impl From<Vector2<f64>> for Vector {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn distance_three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn vector_between_and_magnitude() {
        let v = Vector::between(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert_eq!(Vector::zero().magnitude(), 0.0);
    }

    #[test]
    fn dot_and_right_angle() {
        let a = Vector::new(1.0, 0.0);
        let b = Vector::new(0.0, 2.0);
        assert_eq!(a.dot(&b), 0.0);
        assert!((a.angle(&b) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        let z = Vector::zero();
        let a = Vector::new(1.0, 2.0);
        assert_eq!(z.angle(&z), 0.0);
        assert_eq!(a.angle(&z), 0.0);
        assert_eq!(z.angle(&a), 0.0);
    }

    #[test]
    fn angle_parallel_is_not_nan() {
        let a = Vector::new(0.1, 0.3);
        let b = Vector::new(0.2, 0.6);
        let th = a.angle(&b);
        assert!(th.is_finite());
        assert!(th.abs() < 1e-6);
    }
}
