//! 3D vector value type.
//!
//! Same conventions as [`Vector2`](super::vector2::Vector2): `Copy` value
//! semantics, `_ip` methods mutate in place, and `==` compares to
//! [`DEFAULT_PLACES`] decimal places.
//!
//! Rotations are about an arbitrary axis using Rodrigues' formula. The axis
//! is normalized internally; quarter, half and three-quarter turns use exact
//! closed forms.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::geometry::numeric::{floor_mod, rad_to_deg};
use crate::geometry::vector2::{ANGLE_EPSILON, DEFAULT_PLACES, almost_equal};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Build from `(radius, theta, phi)` in degrees, theta measured from +z.
    pub fn from_spherical(radius: f64, theta: f64, phi: f64) -> Self {
        let (st, ct) = theta.to_radians().sin_cos();
        let (sp, cp) = phi.to_radians().sin_cos();
        Self::new(radius * st * cp, radius * st * sp, radius * ct)
    }

    pub fn almost_eq(&self, other: impl Into<Vector3>, places: i32) -> bool {
        let other = other.into();
        almost_equal(self.x, other.x, places)
            && almost_equal(self.y, other.y, places)
            && almost_equal(self.z, other.z, places)
    }

    pub fn add(self, other: impl Into<Vector3>) -> Vector3 {
        self + other.into()
    }

    pub fn subtract(self, other: impl Into<Vector3>) -> Vector3 {
        self - other.into()
    }

    pub fn multiply(self, scalar: f64) -> Vector3 {
        self * scalar
    }

    pub fn divide(&self, scalar: f64) -> EngineResult<Vector3> {
        if scalar.is_nan() {
            return Err(EngineError::NotANumber { what: "divisor" });
        }
        Ok(*self / scalar)
    }

    pub fn dot(&self, other: impl Into<Vector3>) -> f64 {
        let other = other.into();
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: impl Into<Vector3>) -> Vector3 {
        let o = other.into();
        Vector3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn is_normalized(&self) -> bool {
        (self.length_squared() - 1.0).abs() < 1e-6
    }

    pub fn normalize(&self) -> EngineResult<Vector3> {
        let mut v = *self;
        v.normalize_ip()?;
        Ok(v)
    }

    pub fn normalize_ip(&mut self) -> EngineResult<()> {
        let length = self.length();
        if length <= 0.0 {
            return Err(EngineError::ZeroLength { op: "normalize" });
        }
        *self /= length;
        Ok(())
    }

    pub fn scale_to_length(&mut self, length: f64) -> EngineResult<()> {
        let old = self.length();
        if old <= 0.0 {
            return Err(EngineError::ZeroLength { op: "scale" });
        }
        *self *= length / old;
        Ok(())
    }

    pub fn reflect(&self, normal: impl Into<Vector3>) -> EngineResult<Vector3> {
        let mut v = *self;
        v.reflect_ip(normal)?;
        Ok(v)
    }

    pub fn reflect_ip(&mut self, normal: impl Into<Vector3>) -> EngineResult<()> {
        let normal = normal
            .into()
            .normalize()
            .map_err(|_| EngineError::ZeroLength { op: "reflect off" })?;
        let d = 2.0 * self.dot(normal);
        *self -= normal * d;
        Ok(())
    }

    pub fn distance_to(&self, other: impl Into<Vector3>) -> f64 {
        (other.into() - *self).length()
    }

    pub fn distance_squared_to(&self, other: impl Into<Vector3>) -> f64 {
        (other.into() - *self).length_squared()
    }

    pub fn lerp(&self, other: impl Into<Vector3>, t: f64) -> Vector3 {
        let other = other.into();
        *self + (other - *self) * t
    }

    /// Rotated copy, `degrees` counter-clockwise about `axis`.
    pub fn rotate(&self, degrees: f64, axis: impl Into<Vector3>) -> EngineResult<Vector3> {
        self.rotate_rad(degrees.to_radians(), axis)
    }

    pub fn rotate_rad(&self, radians: f64, axis: impl Into<Vector3>) -> EngineResult<Vector3> {
        let mut v = *self;
        v.rotate_ip_rad(radians, axis)?;
        Ok(v)
    }

    pub fn rotate_ip(&mut self, degrees: f64, axis: impl Into<Vector3>) -> EngineResult<()> {
        self.rotate_ip_rad(degrees.to_radians(), axis)
    }

    /// Rotate in place by `radians` about `axis`.
    ///
    /// Fails with a range error when the axis has zero length.
    pub fn rotate_ip_rad(&mut self, radians: f64, axis: impl Into<Vector3>) -> EngineResult<()> {
        let axis = axis.into();
        let axis_length = axis.length();
        if axis_length < ANGLE_EPSILON {
            return Err(EngineError::ZeroLength { op: "rotate around" });
        }
        let axis = if (axis_length - 1.0).abs() > ANGLE_EPSILON {
            axis / axis_length
        } else {
            axis
        };

        let angle = floor_mod(radians, TAU);
        if angle < ANGLE_EPSILON || TAU - angle < ANGLE_EPSILON {
            return Ok(());
        }

        let v = *self;
        let parallel = axis * axis.dot(v);
        let perpendicular = axis.cross(v);
        *self = if (angle - FRAC_PI_2).abs() < ANGLE_EPSILON {
            parallel + perpendicular
        } else if (angle - PI).abs() < ANGLE_EPSILON {
            parallel * 2.0 - v
        } else if (angle - 3.0 * FRAC_PI_2).abs() < ANGLE_EPSILON {
            parallel - perpendicular
        } else {
            let (sin, cos) = angle.sin_cos();
            v * cos + perpendicular * sin + parallel * (1.0 - cos)
        };
        Ok(())
    }

    pub fn rotate_x(&self, degrees: f64) -> Vector3 {
        self.rotate_about_unit(degrees, Vector3::new(1.0, 0.0, 0.0))
    }

    pub fn rotate_y(&self, degrees: f64) -> Vector3 {
        self.rotate_about_unit(degrees, Vector3::new(0.0, 1.0, 0.0))
    }

    pub fn rotate_z(&self, degrees: f64) -> Vector3 {
        self.rotate_about_unit(degrees, Vector3::new(0.0, 0.0, 1.0))
    }

    fn rotate_about_unit(&self, degrees: f64, axis: Vector3) -> Vector3 {
        let mut v = *self;
        // A unit axis never fails.
        if v.rotate_ip(degrees, axis).is_err() {
            return *self;
        }
        v
    }

    /// Unsigned angle in degrees between the two vectors.
    pub fn angle_to(&self, other: impl Into<Vector3>) -> EngineResult<f64> {
        let other = other.into();
        let lengths = self.length() * other.length();
        if lengths <= 0.0 {
            return Err(EngineError::ZeroLength { op: "measure the angle of" });
        }
        let cos = (self.dot(other) / lengths).clamp(-1.0, 1.0);
        Ok(rad_to_deg(cos.acos()))
    }

    /// `(radius, theta, phi)` in degrees.
    pub fn as_spherical(&self) -> (f64, f64, f64) {
        let r = self.length();
        if r <= 0.0 {
            return (0.0, 0.0, 0.0);
        }
        let theta = rad_to_deg((self.z / r).clamp(-1.0, 1.0).acos());
        let phi = rad_to_deg(self.y.atan2(self.x));
        (r, theta, phi)
    }

    pub fn to_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(*other, DEFAULT_PLACES)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Vector3({}, {}, {})>", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
