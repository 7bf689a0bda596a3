// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use gamemath_core::Vec2;

use crate::error::{Axis, GeomError};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are expected to be less than or equal to `max`
///   components, but [`Aabb::new`] does not enforce it. Inverted boxes are
///   accepted; their `width`/`height`/`area` come out negative and the
///   overlap tests behave as the raw comparisons dictate. Use
///   [`Aabb::try_new`] to reject them.
/// - All comparisons are inclusive, so touching edges count as contained and
///   intersecting.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners as given.
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Checked constructor: rejects non-finite corners and `min > max` on
    /// either axis.
    pub fn try_new(min: Vec2, max: Vec2) -> Result<Self, GeomError> {
        let finite = [min.x, min.y, max.x, max.y].iter().all(|c| c.is_finite());
        if !finite {
            return Err(GeomError::NonFinite("aabb corner"));
        }
        if min.x > max.x {
            return Err(GeomError::InvertedBounds { axis: Axis::X, min: min.x, max: max.x });
        }
        if min.y > max.y {
            return Err(GeomError::InvertedBounds { axis: Axis::Y, min: min.y, max: max.y });
        }
        Ok(Self::new(min, max))
    }

    /// Builds an AABB of the given `size` centered at `center`.
    #[must_use]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(center - half, center + half)
    }

    /// Builds an AABB whose minimum corner is `origin`.
    #[must_use]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    /// Builds the minimal AABB that contains all `points`; `None` when empty.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self::new(*first, *first);
        Some(rest.iter().fold(seed, |acc, p| acc.expanded_to_include(*p)))
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// `max - min`; components are negative for an inverted box.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// `width * height`, unclamped.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns `true` if this AABB overlaps `other` (inclusive on edges).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        // Separating-axis test, negated; touching edges do not separate.
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Returns `true` if `other` lies entirely inside this AABB (inclusive).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }

    /// Overlapping region of the two boxes, or `None` when they do not
    /// [`intersect`](Self::intersects). Touching boxes yield a zero-width
    /// (or zero-height) box.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::new(self.min.max(&other.min), self.max.min(&other.max)))
    }

    /// Smallest AABB containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Grows the box just enough to cover `point`.
    #[must_use]
    pub fn expanded_to_include(&self, point: Vec2) -> Self {
        Self::new(self.min.min(&point), self.max.max(&point))
    }

    /// Moves every edge outward by `amount`; a negative amount shrinks.
    #[must_use]
    pub fn expanded_by(&self, amount: f32) -> Self {
        let delta = Vec2::new(amount, amount);
        Self::new(self.min - delta, self.max + delta)
    }
}

impl Hash for Aabb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.hash(state);
        self.max.hash(state);
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aabb(min: {}, max: {})", self.min, self.max)
    }
}
