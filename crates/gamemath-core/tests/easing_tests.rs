// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gamemath_core::easing::{self, Easing};

const ALL: [Easing; 34] = [
    Easing::Linear,
    Easing::QuadIn,
    Easing::QuadOut,
    Easing::QuadInOut,
    Easing::CubicIn,
    Easing::CubicOut,
    Easing::CubicInOut,
    Easing::QuarticIn,
    Easing::QuarticOut,
    Easing::QuarticInOut,
    Easing::QuinticIn,
    Easing::QuinticOut,
    Easing::QuinticInOut,
    Easing::SineIn,
    Easing::SineOut,
    Easing::SineInOut,
    Easing::ExpoIn,
    Easing::ExpoOut,
    Easing::ExpoInOut,
    Easing::CircularIn,
    Easing::CircularOut,
    Easing::CircularInOut,
    Easing::BackIn,
    Easing::BackOut,
    Easing::BackInOut,
    Easing::ExtremeBackIn,
    Easing::ExtremeBackOut,
    Easing::ExtremeBackInOut,
    Easing::ElasticIn,
    Easing::ElasticOut,
    Easing::ElasticInOut,
    Easing::BounceIn,
    Easing::BounceOut,
    Easing::BounceInOut,
];

#[test]
fn every_curve_pins_its_endpoints() {
    for curve in ALL {
        // Elastic evaluates sin near multiples of 13π/2; allow for the argument rounding.
        let tol = match curve {
            Easing::ElasticIn | Easing::ElasticOut | Easing::ElasticInOut => 1e-4,
            _ => 1e-5,
        };
        let start = curve.apply(0.0);
        let end = curve.apply(1.0);
        assert!(start.abs() <= tol, "{curve:?}(0) = {start}");
        assert!((end - 1.0).abs() <= tol, "{curve:?}(1) = {end}");
    }
}

#[test]
fn in_out_curves_cross_midpoint_at_half() {
    for curve in [
        Easing::QuadInOut,
        Easing::CubicInOut,
        Easing::QuarticInOut,
        Easing::QuinticInOut,
        Easing::SineInOut,
        Easing::ExpoInOut,
        Easing::CircularInOut,
        Easing::BackInOut,
        Easing::BounceInOut,
    ] {
        let mid = curve.apply(0.5);
        assert!((mid - 0.5).abs() <= 1e-5, "{curve:?}(0.5) = {mid}");
    }
}

#[test]
fn bounce_out_first_touchdown_reaches_one() {
    let t = 1.0 / 2.75;
    assert!((easing::bounce_out(t) - 1.0).abs() <= 1e-5);
    assert!(easing::bounce_out(1.5 / 2.75) < 1.0);
}

#[test]
fn quad_matches_closed_form() {
    assert_eq!(easing::quad_in(0.5), 0.25);
    assert_eq!(easing::quad_out(0.5), 0.75);
}
