// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angle wrapping and unit conversion. All angles are radians unless the
//! function name says otherwise.

use core::f32::consts::{PI, TAU};

/// Wraps `angle` into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Wraps `angle` into `[-π, π)`.
pub fn normalize_angle_signed(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped >= PI {
        wrapped - TAU
    } else if wrapped < -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Shortest signed rotation taking `b` to `a`, in `[-π, π)`.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    normalize_angle_signed(a - b)
}

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}
