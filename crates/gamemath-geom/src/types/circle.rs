// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::{PI, TAU};
use core::fmt;
use core::hash::{Hash, Hasher};

use gamemath_core::math::canonical_bits;
use gamemath_core::Vec2;

use crate::error::GeomError;
use crate::types::aabb::Aabb;

/// Circle given by center and radius.
///
/// A negative radius is accepted by [`Circle::new`]. The point and box tests
/// square the radius, so there it acts like `|radius|`; the circle/circle
/// tests use the signed sum or difference of radii. Use [`Circle::try_new`]
/// to reject it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    /// Creates a circle as given.
    #[must_use]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Checked constructor: rejects non-finite input and negative radii.
    pub fn try_new(center: Vec2, radius: f32) -> Result<Self, GeomError> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeomError::NonFinite("circle center"));
        }
        if !radius.is_finite() {
            return Err(GeomError::NonFinite("circle radius"));
        }
        if radius < 0.0 {
            return Err(GeomError::NegativeRadius(radius));
        }
        Ok(Self::new(center, radius))
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius as given at construction.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// `2 * radius`.
    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// `π * radius²`.
    #[must_use]
    pub fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    /// `2π * radius`.
    #[must_use]
    pub fn circumference(&self) -> f32 {
        TAU * self.radius
    }

    /// Square AABB of side `2 * radius` centered on the circle.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let half = Vec2::new(self.radius, self.radius);
        Aabb::new(self.center - half, self.center + half)
    }

    /// Returns `true` if `point` lies inside or on the circle.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.center.distance_squared(&point) <= self.radius * self.radius
    }

    /// Returns `true` if the two circles overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(&other.center) <= reach * reach
    }

    /// Returns `true` if `other` lies entirely inside this circle (inclusive).
    ///
    /// A smaller circle never contains a larger one.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        let slack = self.radius - other.radius;
        if slack < 0.0 {
            return false;
        }
        self.center.distance_squared(&other.center) <= slack * slack
    }

    /// Returns `true` if the circle overlaps or touches `aabb`.
    ///
    /// Clamps the center into the box to find the box point nearest the
    /// center; a center inside the box clamps to itself.
    #[must_use]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        let min = aabb.min();
        let max = aabb.max();
        let closest = Vec2::new(
            min.x.max(self.center.x.min(max.x)),
            min.y.max(self.center.y.min(max.y)),
        );
        self.center.distance_squared(&closest) <= self.radius * self.radius
    }

    /// Point on the circumference in the direction of `point`.
    ///
    /// When `point` equals the center the direction is the zero vector, which
    /// normalizes to zero, so the center itself is returned rather than a
    /// circumference point.
    #[must_use]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let direction = (point - self.center).normalize();
        self.center + direction * self.radius
    }
}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.center.hash(state);
        canonical_bits(self.radius).hash(state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center: {}, radius: {})", self.center, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_from_center_is_center() {
        let c = Circle::new(Vec2::new(2.0, 3.0), 4.0);
        assert_eq!(c.closest_point(c.center()), c.center());
    }

    #[test]
    fn closest_point_lands_on_circumference() {
        let c = Circle::new(Vec2::ZERO, 5.0);
        assert_eq!(c.closest_point(Vec2::new(10.0, 0.0)), Vec2::new(5.0, 0.0));
        assert_eq!(c.closest_point(Vec2::new(0.0, -1.0)), Vec2::new(0.0, -5.0));
    }

    #[test]
    fn equal_circles_contain_each_other() {
        let c = Circle::new(Vec2::ONE, 3.0);
        assert!(c.contains(&c));
    }

    #[test]
    fn smaller_never_contains_larger() {
        let small = Circle::new(Vec2::ZERO, 1.0);
        let large = Circle::new(Vec2::ZERO, 2.0);
        assert!(!small.contains(&large));
        assert!(large.contains(&small));
    }

    #[test]
    fn try_new_rejects_negative_radius() {
        assert_eq!(Circle::try_new(Vec2::ZERO, -1.0), Err(GeomError::NegativeRadius(-1.0)));
        assert!(Circle::try_new(Vec2::ZERO, 0.0).is_ok());
    }

    #[test]
    fn bounding_box_is_centered_square() {
        let bb = Circle::new(Vec2::new(1.0, 1.0), 2.0).bounding_box();
        assert_eq!(bb.min(), Vec2::new(-1.0, -1.0));
        assert_eq!(bb.max(), Vec2::new(3.0, 3.0));
    }
}
