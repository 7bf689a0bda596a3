// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]
use core::f32::consts::FRAC_PI_2;

use gamemath_core::math::{self, Vec2};
use proptest::prelude::*;

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn named_constants_point_where_expected() {
    assert_eq!(Vec2::default(), Vec2::ZERO);
    assert_eq!(Vec2::RIGHT, Vec2::new(1.0, 0.0));
    assert_eq!(Vec2::UP, Vec2::new(0.0, 1.0));
    assert_eq!(Vec2::LEFT, -Vec2::RIGHT);
    assert_eq!(Vec2::DOWN, -Vec2::UP);
    assert_eq!(Vec2::ONE, Vec2::RIGHT + Vec2::UP);
}

#[test]
fn arithmetic_is_componentwise() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, 2.0);
    assert_eq!(a + b, Vec2::new(4.0, 6.0));
    assert_eq!(a - b, Vec2::new(2.0, 2.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));

    let mut c = a;
    c += b;
    c -= Vec2::ONE;
    c *= 2.0;
    c /= 4.0;
    assert_eq!(c, Vec2::new(1.5, 2.5));
}

#[test]
fn length_dot_and_distance() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.length_squared(), 25.0);
    assert_eq!(v.dot(&Vec2::new(1.0, 2.0)), 11.0);
    assert_eq!(Vec2::ZERO.distance(&v), 5.0);
    assert_eq!(Vec2::ZERO.distance_squared(&v), 25.0);
}

#[test]
fn normalize_yields_unit_length() {
    approx_eq(Vec2::new(3.0, 4.0).normalize().length(), 1.0);
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
}

#[test]
fn perpendicular_is_orthogonal_and_ccw() {
    let v = Vec2::RIGHT;
    let p = v.perpendicular();
    assert_eq!(p, Vec2::UP);
    assert_eq!(v.dot(&p), 0.0);
    assert!(v.cross(&p) > 0.0);
}

#[test]
fn from_angle_and_angle_agree() {
    let v = Vec2::from_angle(FRAC_PI_2, 2.0);
    approx_eq(v.x, 0.0);
    approx_eq(v.y, 2.0);
    approx_eq(v.angle(), FRAC_PI_2);
}

#[test]
fn lerp_clamp_reflect() {
    let mid = Vec2::ZERO.lerp(&Vec2::new(10.0, 10.0), 0.5);
    assert_eq!(mid, Vec2::new(5.0, 5.0));

    let clamped = Vec2::new(5.0, 10.0).clamp(&Vec2::ZERO, &Vec2::new(3.0, 8.0));
    assert_eq!(clamped, Vec2::new(3.0, 8.0));

    let bounced = Vec2::new(1.0, -1.0).reflect(&Vec2::UP);
    assert_eq!(bounced, Vec2::new(1.0, 1.0));
}

#[test]
fn scalar_helpers_match_closed_forms() {
    assert_eq!(math::lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(math::inverse_lerp(0.0, 10.0, 2.5), 0.25);
    assert_eq!(math::smoothstep(0.0, 10.0, 0.5), 5.0);
    assert_eq!(math::smoothstep(0.0, 10.0, 2.0), 10.0);
    assert_eq!(math::smootherstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(math::cubic_bezier(0.0, 0.0, 1.0, 1.0, 0.5), 0.5);
    assert_eq!(math::remap(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
    approx_eq(math::fract(3.25), 0.25);
    approx_eq(math::fract(-0.25), 0.75);
    assert!(math::approx_eq(1.0, 1.000_001, math::DEFAULT_TOLERANCE));
    assert!(!math::approx_zero(0.1, math::DEFAULT_TOLERANCE));
}

#[test]
fn array_conversions_round_trip() {
    let v = Vec2::from([1.0, -2.0]);
    let back: [f32; 2] = v.into();
    assert_eq!(back, [1.0, -2.0]);
}

proptest! {
    #[test]
    fn normalize_is_unit_or_zero(x in -1.0e6f32..1.0e6, y in -1.0e6f32..1.0e6) {
        let v = Vec2::new(x, y);
        let n = v.normalize();
        if v == Vec2::ZERO {
            prop_assert_eq!(n, Vec2::ZERO);
        } else {
            prop_assert!((n.length() - 1.0).abs() <= 1e-5);
        }
    }

    #[test]
    fn cross_is_anti_commutative(ax in -1.0e3f32..1.0e3, ay in -1.0e3f32..1.0e3,
                                 bx in -1.0e3f32..1.0e3, by in -1.0e3f32..1.0e3) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }
}

#[cfg(feature = "serde")]
#[test]
fn vec2_serializes_as_xy_object() {
    let json = serde_json::to_string(&Vec2::new(1.0, -2.5)).unwrap_or_default();
    assert_eq!(json, r#"{"x":1.0,"y":-2.5}"#);
}

#[cfg(feature = "serde")]
#[test]
fn vec3_serializes_as_xyz_object() {
    let json = serde_json::to_string(&gamemath_core::Vec3::new(1.0, 0.0, -2.5)).unwrap_or_default();
    assert_eq!(json, r#"{"x":1.0,"y":0.0,"z":-2.5}"#);
}

#[test]
fn vec3_swizzles_feed_the_2d_api() {
    let v = gamemath_core::Vec3::new(3.0, 7.0, 4.0);
    assert_eq!(v.xz().length(), 5.0);
    assert_eq!(v.xy(), Vec2::new(3.0, 7.0));
}
