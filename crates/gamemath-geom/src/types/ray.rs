// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};

use gamemath_core::{Vec2, EPSILON};
use tracing::trace;

use crate::error::GeomError;
use crate::types::aabb::Aabb;
use crate::types::circle::Circle;

/// Half-line from `origin` along a unit `direction`.
///
/// The direction is normalized at construction. A zero input direction
/// normalizes to the zero vector and yields a degenerate ray: it never hits a
/// circle or another ray, and against a box it hits only when its origin
/// lies inside (at distance `0`). [`Ray::try_new`] rejects it instead.
///
/// Every intersection method returns the distance along the ray to the
/// nearest forward hit (`t >= 0`), or `None`. Because the direction is unit
/// length, `ray.point_at(t)` is the hit point.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Vec2,
    direction: Vec2,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        let unit = direction.normalize();
        if unit == Vec2::ZERO {
            trace!(%origin, %direction, "ray built from zero direction; ray is degenerate");
        }
        Self { origin, direction: unit }
    }

    /// Checked constructor: rejects non-finite input and zero-length directions.
    pub fn try_new(origin: Vec2, direction: Vec2) -> Result<Self, GeomError> {
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(GeomError::NonFinite("ray origin"));
        }
        if !(direction.x.is_finite() && direction.y.is_finite()) {
            return Err(GeomError::NonFinite("ray direction"));
        }
        let ray = Self::new(origin, direction);
        if ray.is_degenerate() {
            return Err(GeomError::ZeroDirection);
        }
        Ok(ray)
    }

    /// Start point.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Unit direction (zero for a degenerate ray).
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Returns `true` if the direction normalized to zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec2::ZERO
    }

    /// Point at `distance` along the ray: `origin + direction * distance`.
    #[must_use]
    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.origin + self.direction * distance
    }

    /// Distance to the nearest forward intersection with `circle`.
    ///
    /// Solves `a·t² + b·t + c = 0` for the ray parameter and reports the
    /// smaller root when it is non-negative, else the larger one. An origin
    /// inside the circle therefore reports the exit distance; a circle
    /// entirely behind the origin is a miss.
    #[must_use]
    pub fn intersect_circle(&self, circle: &Circle) -> Option<f32> {
        let oc = self.origin - circle.center();
        let a = self.direction.dot(&self.direction);
        let b = 2.0 * oc.dot(&self.direction);
        let c = oc.dot(&oc) - circle.radius() * circle.radius();
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let t1 = (-b - sqrt_d) / (2.0 * a);
        let t2 = (-b + sqrt_d) / (2.0 * a);
        // A degenerate ray has a = b = 0: both roots are NaN and fail both checks.
        if t1 >= 0.0 {
            Some(t1)
        } else if t2 >= 0.0 {
            Some(t2)
        } else {
            None
        }
    }

    /// Distance to the nearest forward intersection with `aabb` (slab method).
    ///
    /// The line parameter range starts unbounded and is clipped against the
    /// X slab then the Y slab. A direction component at or below [`EPSILON`]
    /// in magnitude marks the ray parallel to that slab: it misses unless
    /// the origin already lies within the slab, and the slab then places no
    /// constraint on `t`.
    ///
    /// A hit needs `t_max >= t_min` and `t_max >= 0`. The result is the entry
    /// distance `t_min` when the origin is outside the box, and the exit
    /// distance `t_max` when the origin is inside (`t_min < 0`). A degenerate
    /// ray is parallel to both slabs and reports `0` when its origin is in
    /// the box.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        let slabs = [
            (self.origin.x, self.direction.x, aabb.min().x, aabb.max().x),
            (self.origin.y, self.direction.y, aabb.min().y, aabb.max().y),
        ];
        for (origin, dir, lo, hi) in slabs {
            if dir.abs() > EPSILON {
                let t_lo = (lo - origin) / dir;
                let t_hi = (hi - origin) / dir;
                t_min = t_min.max(t_lo.min(t_hi));
                t_max = t_max.min(t_lo.max(t_hi));
            } else if origin < lo || origin > hi {
                trace!(origin, lo, hi, "ray parallel to slab and outside it");
                return None;
            }
        }

        if t_max < t_min || t_max < 0.0 {
            return None;
        }
        if t_min >= 0.0 {
            Some(t_min)
        } else if t_max.is_finite() {
            Some(t_max)
        } else {
            // Unconstrained on both axes: only a degenerate ray gets here.
            Some(0.0)
        }
    }

    /// Distance along this ray to where it crosses `other`.
    ///
    /// Both rays are half-lines: the crossing must lie at or ahead of both
    /// origins. Rays whose direction cross product is within [`EPSILON`] of
    /// zero are treated as parallel and never intersect, collinear
    /// overlapping rays included.
    #[must_use]
    pub fn intersect_ray(&self, other: &Self) -> Option<f32> {
        let denom = self.direction.cross(&other.direction);
        if denom.abs() <= EPSILON {
            trace!(denom, "rays parallel or degenerate");
            return None;
        }
        let diff = other.origin - self.origin;
        let t = diff.cross(&other.direction) / denom;
        let u = diff.cross(&self.direction) / denom;
        if t >= 0.0 && u >= 0.0 {
            Some(t)
        } else {
            None
        }
    }
}

impl Hash for Ray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.direction.hash(state);
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray(origin: {}, direction: {})", self.origin, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_direction_is_degenerate() {
        let ray = Ray::new(Vec2::ONE, Vec2::ZERO);
        assert!(ray.is_degenerate());
        assert_eq!(ray.point_at(100.0), Vec2::ONE);
        assert_eq!(Ray::try_new(Vec2::ONE, Vec2::ZERO), Err(GeomError::ZeroDirection));
    }

    #[test]
    fn extreme_finite_directions_stay_usable() {
        let bb = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        for dir in [Vec2::new(1e20, 0.0), Vec2::new(1e-25, 0.0)] {
            let ray = Ray::try_new(Vec2::new(-10.0, 5.0), dir);
            assert_eq!(ray.map(|r| r.direction()), Ok(Vec2::RIGHT), "direction {dir}");
            let ray = Ray::new(Vec2::new(-10.0, 5.0), dir);
            assert!(!ray.is_degenerate());
            assert_eq!(ray.intersect_aabb(&bb), Some(10.0));
        }
    }

    #[test]
    fn degenerate_ray_never_hits_circle() {
        let ray = Ray::new(Vec2::ZERO, Vec2::ZERO);
        let around = Circle::new(Vec2::ZERO, 5.0);
        let away = Circle::new(Vec2::new(10.0, 0.0), 5.0);
        assert_eq!(ray.intersect_circle(&around), None);
        assert_eq!(ray.intersect_circle(&away), None);
    }

    #[test]
    fn degenerate_ray_hits_box_only_from_inside() {
        let bb = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let inside = Ray::new(Vec2::new(5.0, 5.0), Vec2::ZERO);
        let outside = Ray::new(Vec2::new(-5.0, 5.0), Vec2::ZERO);
        assert_eq!(inside.intersect_aabb(&bb), Some(0.0));
        assert_eq!(outside.intersect_aabb(&bb), None);
    }

    #[test]
    fn axis_parallel_ray_inside_slab_hits() {
        let bb = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let ray = Ray::new(Vec2::new(5.0, -10.0), Vec2::UP);
        assert_eq!(ray.intersect_aabb(&bb), Some(10.0));
    }

    #[test]
    fn antiparallel_rays_miss() {
        let a = Ray::new(Vec2::ZERO, Vec2::RIGHT);
        let b = Ray::new(Vec2::new(10.0, 0.0), Vec2::LEFT);
        assert_eq!(a.intersect_ray(&b), None);
    }
}
