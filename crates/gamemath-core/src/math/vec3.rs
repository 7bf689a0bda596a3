// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{canonical_bits, Vec2};

/// Plain 3D vector.
///
/// * Same conventions as [`Vec2`]: `f32` components, structural equality,
///   canonicalized hashing.
/// * Right-handed: `RIGHT.cross(UP) == FORWARD`.
/// * [`Vec3::xy`] and [`Vec3::xz`] drop one axis for use with the 2D shapes.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// The vector `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector along +X.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// Unit vector along -X.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// Unit vector along -Y.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// Unit vector along -Z.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lifts a 2D vector into 3D with the given `z`.
    #[must_use]
    pub const fn from_vec2(v: Vec2, z: f32) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Returns the components as an array `[x, y, z]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// `(x, y)` as a [`Vec2`].
    #[must_use]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// `(x, z)` as a [`Vec2`], the ground plane for Y-up scenes.
    #[must_use]
    pub fn xz(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Vector length (magnitude), free of intermediate overflow/underflow.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y).hypot(self.z)
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

    /// Squared distance to `other`.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*other - *self).length_squared()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    ///
    /// Follows [`Vec2::normalize`]: no epsilon threshold, and finite vectors
    /// too long for `f32` are rescaled before dividing.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.is_infinite() {
            let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
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

    /// Clamps each component into the matching `[min, max]` component range.
    #[must_use]
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::new(
            crate::math::clamp(self.x, min.x, max.x),
            crate::math::clamp(self.y, min.y, max.y),
            crate::math::clamp(self.z, min.z, max.z),
        )
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.z).hash(state);
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
