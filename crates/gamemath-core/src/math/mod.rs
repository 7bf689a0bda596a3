// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar utilities, the 2D and 3D vector types, angle helpers, and a
//! seeded pseudo-random generator.
//!
//! Everything here is a pure function of its inputs except
//! [`SeededRandom`], which callers own and pass by `&mut`.

pub mod angle;
mod random;
mod vec2;
mod vec3;

pub use random::SeededRandom;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Tolerance shared by every degeneracy check in the shape tests.
///
/// Ray direction components and ray/ray cross products whose magnitude is at
/// or below this value are treated as zero (parallel). The value is the
/// machine epsilon of `f32`, i.e. the gap between `1.0` and the next float.
pub const EPSILON: f32 = f32::EPSILON;

/// Default tolerance for [`approx_eq`] and [`approx_zero`] callers that do not
/// have a domain-specific bound.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Linear interpolation between `a` and `b`; `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `value` sits between `a` and `b`.
///
/// Returns `0.0` when the range is empty (`a == b`).
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    (value - a) / span
}

/// Hermite interpolation between `a` and `b` with `t` clamped to `[0, 1]`.
pub fn smoothstep(a: f32, b: f32, t: f32) -> f32 {
    let t = clamp(t, 0.0, 1.0);
    a + (b - a) * (t * t * (3.0 - 2.0 * t))
}

/// Quintic variant of [`smoothstep`] with zero first and second derivatives
/// at both ends.
pub fn smootherstep(a: f32, b: f32, t: f32) -> f32 {
    let t = clamp(t, 0.0, 1.0);
    a + (b - a) * (t * t * t * (t * (t * 6.0 - 15.0) + 10.0))
}

/// Evaluates a one-dimensional cubic Bézier with control values `p0..p3`.
pub fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Unlike [`f32::clamp`] this never panics: an inverted range resolves to
/// `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Maps `value` from the `from` range onto the `to` range without clamping.
pub fn remap(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let normalized = (value - from.0) / (from.1 - from.0);
    to.0 + normalized * (to.1 - to.0)
}

/// Like [`remap`], then clamps into the target range (either orientation).
pub fn remap_clamped(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let remapped = remap(value, from, to);
    clamp(remapped, to.0.min(to.1), to.0.max(to.1))
}

/// Fractional part, always in `[0, 1)` for finite input.
pub fn fract(value: f32) -> f32 {
    value - value.floor()
}

/// `1.0` for non-negative input (including `+0.0` and `-0.0`), `-1.0` otherwise.
pub fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Returns `true` when `a` and `b` differ by strictly less than `tolerance`.
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// Returns `true` when `value` is strictly within `tolerance` of zero.
pub fn approx_zero(value: f32, tolerance: f32) -> bool {
    value.abs() < tolerance
}

/// Bit pattern used for hashing floats: `-0.0` folds onto `+0.0` so values
/// that compare equal hash equal.
pub fn canonical_bits(value: f32) -> u32 {
    (value + 0.0).to_bits()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn clamp_with_inverted_range_returns_min() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn inverse_lerp_on_empty_range_is_zero() {
        assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
    }

    #[test]
    fn remap_clamped_handles_descending_target() {
        assert_eq!(remap_clamped(20.0, (0.0, 10.0), (1.0, 0.0)), 0.0);
        assert_eq!(remap_clamped(-5.0, (0.0, 10.0), (1.0, 0.0)), 1.0);
    }

    #[test]
    fn negative_zero_shares_canonical_bits() {
        assert_eq!(canonical_bits(-0.0), canonical_bits(0.0));
        assert_ne!(canonical_bits(1.0), canonical_bits(-1.0));
    }

    #[test]
    fn sign_treats_zero_as_positive() {
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.0), 1.0);
        assert_eq!(sign(-3.0), -1.0);
    }
}
