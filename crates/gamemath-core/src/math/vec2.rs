// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::canonical_bits;

/// Plain 2D vector used by every shape in the library.
///
/// * Components are `f32` and may represent either points or directions
///   depending on the calling context.
/// * Equality is structural (IEEE comparison per component); hashing uses
///   canonicalized bit patterns so `-0.0` and `+0.0` hash identically.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// The vector `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector pointing right `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing up `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);

    /// Unit vector pointing left `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Unit vector pointing down `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a vector of the given `length` pointing at `angle` radians from +X.
    #[must_use]
    pub fn from_angle(angle: f32, length: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * length, sin * length)
    }

    /// Returns the components as an array `[x, y]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (the z component of the 3D cross product).
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Vector length (magnitude).
    ///
    /// Computed with `hypot`, so components whose squares would overflow or
    /// underflow `f32` still yield a finite, non-zero length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Squared magnitude of the vector.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        (*other - *self).length()
    }

    /// Squared distance to `other`; avoids the square root for comparisons.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*other - *self).length_squared()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// The zero vector normalizes to the zero vector rather than producing
    /// NaN components. Only an exactly-zero length takes that path; tiny
    /// non-zero vectors are still scaled up to unit length, and finite
    /// vectors whose length exceeds `f32::MAX` are rescaled first.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.is_infinite() {
            let scale = self.x.abs().max(self.y.abs());
            if scale.is_finite() {
                return (*self / scale).normalize();
            }
        }
        if len > 0.0 {
            *self / len
        } else {
            Self::ZERO
        }
    }

    /// Perpendicular vector, rotated 90° counter-clockwise.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle in radians from the positive X axis, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }

    /// Reflects the vector across a surface with unit `normal`.
    #[must_use]
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Projects the vector onto `other`; zero when `other` has zero length.
    #[must_use]
    pub fn project(&self, other: &Self) -> Self {
        let len_sq = other.length_squared();
        if len_sq > 0.0 {
            *other * (self.dot(other) / len_sq)
        } else {
            Self::ZERO
        }
    }

    /// Componentwise minimum.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamps each component into `[min, max]` of the matching bound component.
    #[must_use]
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            crate::math::clamp(self.x, min.x, max.x),
            crate::math::clamp(self.y, min.y, max.y),
        )
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_winding() {
        assert_eq!(Vec2::RIGHT.cross(&Vec2::UP), 1.0);
        assert_eq!(Vec2::UP.cross(&Vec2::RIGHT), -1.0);
        assert_eq!(Vec2::RIGHT.cross(&Vec2::LEFT), 0.0);
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn normalize_tiny_vector_is_unit() {
        let n = Vec2::new(1e-10, 0.0).normalize();
        assert!((n.length() - 1.0).abs() <= 1e-6, "got {n}");
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn normalize_survives_square_overflow() {
        assert_eq!(Vec2::new(1e20, 0.0).normalize(), Vec2::RIGHT);
        let n = Vec2::new(f32::MAX, f32::MAX).normalize();
        assert!((n.length() - 1.0).abs() <= 1e-6, "got {n}");
        assert!((n.x - n.y).abs() <= f32::EPSILON);
    }

    #[test]
    fn normalize_survives_square_underflow() {
        assert_eq!(Vec2::new(1e-25, 0.0).normalize(), Vec2::RIGHT);
        assert_eq!(Vec2::new(0.0, -1e-30).normalize(), Vec2::DOWN);
        assert_eq!(Vec2::new(1e-25, 0.0).length(), 1e-25);
    }

    #[test]
    fn project_onto_zero_is_zero() {
        assert_eq!(Vec2::new(3.0, 4.0).project(&Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Vec2::new(1.5, -2.0).to_string(), "Vec2(1.5, -2)");
    }
}
