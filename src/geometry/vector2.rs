//! 2D vector value type.
//!
//! [`Vector2`] is `Copy`; every operation that "returns a new vector" returns
//! a fresh value and never touches its operands. Methods ending in `_ip`
//! mutate `self` in place.
//!
//! Equality is float tolerant: two vectors compare equal when every component
//! matches to [`DEFAULT_PLACES`] decimal places. Use [`Vector2::almost_eq`]
//! for a different precision.
//!
//! Arithmetic methods take `impl Into<Vector2>`, so both a vector and a raw
//! `(x, y)` tuple or `[x, y]` array are accepted.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::geometry::numeric::{floor_mod, rad_to_deg};

/// Decimal places used by `==` on vectors.
pub const DEFAULT_PLACES: i32 = 7;

/// Tolerance used to detect canonical rotation angles and zero lengths.
pub(crate) const ANGLE_EPSILON: f64 = 1e-12;

/// True when `a` and `b` are equal once rounded to `places` decimal places.
pub(crate) fn almost_equal(a: f64, b: f64, places: i32) -> bool {
    if a == b {
        return true;
    }
    ((a - b) * 10f64.powi(places)).round() == 0.0
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Build a vector from polar coordinates, `degrees` counter-clockwise from +x.
    pub fn from_polar(radius: f64, degrees: f64) -> Self {
        let mut v = Self::new(radius, 0.0);
        v.rotate_ip(degrees);
        v
    }

    /// Compare components to `places` decimal places.
    pub fn almost_eq(&self, other: impl Into<Vector2>, places: i32) -> bool {
        let other = other.into();
        almost_equal(self.x, other.x, places) && almost_equal(self.y, other.y, places)
    }

    // Taken by value so these win over the operator traits' `add`.
    pub fn add(self, other: impl Into<Vector2>) -> Vector2 {
        self + other.into()
    }

    pub fn subtract(self, other: impl Into<Vector2>) -> Vector2 {
        self - other.into()
    }

    pub fn multiply(self, scalar: f64) -> Vector2 {
        self * scalar
    }

    /// Divide by a scalar. A NaN divisor is rejected as a type error; zero
    /// follows IEEE rules and yields infinities.
    pub fn divide(&self, scalar: f64) -> EngineResult<Vector2> {
        if scalar.is_nan() {
            return Err(EngineError::NotANumber { what: "divisor" });
        }
        Ok(*self / scalar)
    }

    pub fn dot(&self, other: impl Into<Vector2>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    pub fn cross(&self, other: impl Into<Vector2>) -> f64 {
        let other = other.into();
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - 1.0).abs() < 1e-6
    }

    pub fn normalize(&self) -> EngineResult<Vector2> {
        let mut v = *self;
        v.normalize_ip()?;
        Ok(v)
    }

    pub fn normalize_ip(&mut self) -> EngineResult<()> {
        let length = self.length();
        if length <= 0.0 {
            return Err(EngineError::ZeroLength { op: "normalize" });
        }
        self.x /= length;
        self.y /= length;
        Ok(())
    }

    /// Keep the direction, change the length.
    pub fn scale_to_length(&mut self, length: f64) -> EngineResult<()> {
        let old = self.length();
        if old <= 0.0 {
            return Err(EngineError::ZeroLength { op: "scale" });
        }
        let factor = length / old;
        self.x *= factor;
        self.y *= factor;
        Ok(())
    }

    /// Reflect off a surface with the given normal. The normal does not
    /// need to be normalized.
    pub fn reflect(&self, normal: impl Into<Vector2>) -> EngineResult<Vector2> {
        let mut v = *self;
        v.reflect_ip(normal)?;
        Ok(v)
    }

    pub fn reflect_ip(&mut self, normal: impl Into<Vector2>) -> EngineResult<()> {
        let normal = normal
            .into()
            .normalize()
            .map_err(|_| EngineError::ZeroLength { op: "reflect off" })?;
        let d = 2.0 * self.dot(normal);
        self.x -= d * normal.x;
        self.y -= d * normal.y;
        Ok(())
    }

    pub fn distance_to(&self, other: impl Into<Vector2>) -> f64 {
        (other.into() - *self).length()
    }

    pub fn distance_squared_to(&self, other: impl Into<Vector2>) -> f64 {
        (other.into() - *self).length_squared()
    }

    /// Linear interpolation, `t` is not clamped.
    pub fn lerp(&self, other: impl Into<Vector2>, t: f64) -> Vector2 {
        let other = other.into();
        Vector2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Rotated copy, counter-clockwise by `degrees`.
    pub fn rotate(&self, degrees: f64) -> Vector2 {
        let mut v = *self;
        v.rotate_ip(degrees);
        v
    }

    pub fn rotate_rad(&self, radians: f64) -> Vector2 {
        let mut v = *self;
        v.rotate_ip_rad(radians);
        v
    }

    pub fn rotate_ip(&mut self, degrees: f64) {
        self.rotate_ip_rad(degrees.to_radians());
    }

    /// Rotate in place by `radians`.
    ///
    /// The angle is first wrapped into `[0, 2π)` with [`floor_mod`]. Quarter
    /// turns use exact closed forms so that e.g. rotating `(1, 0)` by `π/2`
    /// gives exactly `(0, 1)`.
    pub fn rotate_ip_rad(&mut self, radians: f64) {
        let angle = floor_mod(radians, TAU);
        let (x, y) = (self.x, self.y);
        let (nx, ny) = if angle < ANGLE_EPSILON || TAU - angle < ANGLE_EPSILON {
            (x, y)
        } else if (angle - FRAC_PI_2).abs() < ANGLE_EPSILON {
            (-y, x)
        } else if (angle - PI).abs() < ANGLE_EPSILON {
            (-x, -y)
        } else if (angle - 3.0 * FRAC_PI_2).abs() < ANGLE_EPSILON {
            (y, -x)
        } else {
            let (sin, cos) = angle.sin_cos();
            (x * cos - y * sin, x * sin + y * cos)
        };
        self.x = nx;
        self.y = ny;
    }

    /// Signed angle in degrees from `self` to `other`.
    pub fn angle_to(&self, other: impl Into<Vector2>) -> f64 {
        let other = other.into();
        rad_to_deg(other.y.atan2(other.x) - self.y.atan2(self.x))
    }

    /// `(radius, degrees)` polar form.
    pub fn as_polar(&self) -> (f64, f64) {
        (self.length(), rad_to_deg(self.y.atan2(self.x)))
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(*other, DEFAULT_PLACES)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vector2({}, {})>", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_add_subtract_round_trip() {
        let samples = [
            (Vector2::new(1.5, -2.25), Vector2::new(1e6, 3.0)),
            (Vector2::new(0.1, 0.2), Vector2::new(0.3, -0.7)),
            (Vector2::new(-42.0, 17.0), Vector2::new(-0.001, 1e-8)),
        ];
        for (v, w) in samples {
            assert_eq!(v.add(w).subtract(w), v);
        }
    }

    #[test]
    fn test_arithmetic_accepts_tuples() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.add((3.0, 4.0)), Vector2::new(4.0, 6.0));
        assert_eq!(v.subtract([1.0, 1.0]), Vector2::new(0.0, 1.0));
        assert!(approx_eq(v.dot((2.0, 3.0)), 8.0));
        assert!(approx_eq(v.cross((3.0, 4.0)), -2.0));
    }

    #[test]
    fn test_operations_do_not_alias() {
        let v = Vector2::new(1.0, 2.0);
        let w = v.multiply(3.0);
        assert_eq!(v, Vector2::new(1.0, 2.0));
        assert_eq!(w, Vector2::new(3.0, 6.0));
    }

    #[test]
    fn test_divide() {
        let v = Vector2::new(3.0, 6.0);
        assert_eq!(v.divide(3.0).unwrap(), Vector2::new(1.0, 2.0));
        let err = v.divide(f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_equality_tolerance() {
        let v = Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(1.00000001, 0.99999999));
        assert_ne!(v, Vector2::new(1.000001, 1.0));
        assert!(v.almost_eq((1.001, 1.0), 2));
    }

    #[test]
    fn test_normalize() {
        let v = Vector2::new(3.0, 4.0);
        let n = v.normalize().unwrap();
        assert!(approx_eq(n.x, 0.6));
        assert!(approx_eq(n.y, 0.8));
        assert!(n.is_normalized());
        assert_eq!(v, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_normalize_zero_is_range_error() {
        let err = Vector2::zero().normalize().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let mut v = Vector2::zero();
        assert!(v.normalize_ip().is_err());
        assert!(v.scale_to_length(2.0).is_err());
    }

    #[test]
    fn test_scale_to_length() {
        let mut v = Vector2::new(3.0, 4.0);
        v.scale_to_length(10.0).unwrap();
        assert_eq!(v, Vector2::new(6.0, 8.0));
    }

    #[test]
    fn test_reflect() {
        let v = Vector2::new(1.0, -1.0);
        assert_eq!(v.reflect((0.0, 5.0)).unwrap(), Vector2::new(1.0, 1.0));
        let err = v.reflect((0.0, 0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_rotate_full_turn_is_exact_identity() {
        let samples = [
            Vector2::new(1.0, 0.0),
            Vector2::new(0.123456789, -98.7654321),
            Vector2::new(-3.3, 7.7),
        ];
        for v in samples {
            for angle in [0.0, TAU] {
                let mut r = v;
                r.rotate_ip_rad(angle);
                assert_eq!(r.x, v.x);
                assert_eq!(r.y, v.y);
            }
        }
    }

    #[test]
    fn test_rotate_quarter_turn_is_exact() {
        let mut a = Vector2::new(1.0, 0.0);
        a.rotate_ip_rad(FRAC_PI_2);
        assert_eq!((a.x, a.y), (0.0, 1.0));

        let mut b = Vector2::new(0.0, 1.0);
        b.rotate_ip_rad(FRAC_PI_2);
        assert_eq!((b.x, b.y), (-1.0, 0.0));
    }

    #[test]
    fn test_rotate_half_and_three_quarter_turns() {
        let v = Vector2::new(2.0, 3.0);
        let h = v.rotate_rad(PI);
        assert_eq!((h.x, h.y), (-2.0, -3.0));
        let t = v.rotate_rad(3.0 * PI / 2.0);
        assert_eq!((t.x, t.y), (3.0, -2.0));
    }

    #[test]
    fn test_rotate_negative_angle_wraps() {
        let v = Vector2::new(1.0, 0.0).rotate(-90.0);
        assert_eq!((v.x, v.y), (0.0, -1.0));
    }

    #[test]
    fn test_rotate_generic_angle() {
        let v = Vector2::new(1.0, 0.0).rotate(45.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(v, Vector2::new(s, s));
    }

    #[test]
    fn test_angle_to_is_signed() {
        let a = Vector2::new(1.0, 0.0);
        assert!(approx_eq(a.angle_to((0.0, 1.0)), 90.0));
        assert!(approx_eq(a.angle_to((0.0, -1.0)), -90.0));
    }

    #[test]
    fn test_polar_round_trip() {
        let v = Vector2::from_polar(2.0, 30.0);
        let (r, deg) = v.as_polar();
        assert!(approx_eq(r, 2.0));
        assert!(approx_eq(deg, 30.0));
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = Vector2::new(0.0, 0.0);
        assert!(approx_eq(a.distance_to((3.0, 4.0)), 5.0));
        assert!(approx_eq(a.distance_squared_to((3.0, 4.0)), 25.0));
        assert_eq!(a.lerp((10.0, -10.0), 0.25), Vector2::new(2.5, -2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "<Vector2(1.5, -2)>");
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector2::new(-3.5, 8.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":-3.5,"y":8.0}"#);
        let back: Vector2 = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_tuple(), v.to_tuple());
        assert!(serde_json::from_str::<Vector2>(r#"{"x":1.0}"#).is_err());
    }
}
