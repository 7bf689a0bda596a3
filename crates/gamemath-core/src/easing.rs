// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Easing curves mapping normalized time `t` to normalized progress.
//!
//! Every curve maps `0 → 0` and `1 → 1` (up to float rounding); Back,
//! ExtremeBack and Elastic overshoot in between. Inputs outside `[0, 1]` are
//! not clamped.
#![allow(clippy::float_cmp)]

use core::f32::consts::{FRAC_PI_2, PI};

/// Overshoot constant for the Back family.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Named easing curve, for callers that pick a curve from data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Identity: progress equals time.
    Linear,
    /// Starts slow, quadratic ease-in.
    QuadIn,
    /// Ends slow, quadratic ease-out.
    QuadOut,
    /// Slow at both ends, quadratic ease-in-out.
    QuadInOut,
    /// Starts slow, cubic ease-in.
    CubicIn,
    /// Ends slow, cubic ease-out.
    CubicOut,
    /// Slow at both ends, cubic ease-in-out.
    CubicInOut,
    /// Starts slow, quartic ease-in.
    QuarticIn,
    /// Ends slow, quartic ease-out.
    QuarticOut,
    /// Slow at both ends, quartic ease-in-out.
    QuarticInOut,
    /// Starts slow, quintic ease-in.
    QuinticIn,
    /// Ends slow, quintic ease-out.
    QuinticOut,
    /// Slow at both ends, quintic ease-in-out.
    QuinticInOut,
    /// Starts slow, sinusoidal ease-in.
    SineIn,
    /// Ends slow, sinusoidal ease-out.
    SineOut,
    /// Slow at both ends, sinusoidal ease-in-out.
    SineInOut,
    /// Starts slow, exponential ease-in.
    ExpoIn,
    /// Ends slow, exponential ease-out.
    ExpoOut,
    /// Slow at both ends, exponential ease-in-out.
    ExpoInOut,
    /// Starts slow, circular ease-in.
    CircularIn,
    /// Ends slow, circular ease-out.
    CircularOut,
    /// Slow at both ends, circular ease-in-out.
    CircularInOut,
    /// Starts slow, overshooting (`s = 1.70158`) ease-in.
    BackIn,
    /// Ends slow, overshooting (`s = 1.70158`) ease-out.
    BackOut,
    /// Slow at both ends, overshooting (`s = 1.70158`) ease-in-out.
    BackInOut,
    /// Starts slow, strongly overshooting ease-in.
    ExtremeBackIn,
    /// Ends slow, strongly overshooting ease-out.
    ExtremeBackOut,
    /// Slow at both ends, strongly overshooting ease-in-out.
    ExtremeBackInOut,
    /// Starts slow, elastic ease-in.
    ElasticIn,
    /// Ends slow, elastic ease-out.
    ElasticOut,
    /// Slow at both ends, elastic ease-in-out.
    ElasticInOut,
    /// Starts slow, bouncing ease-in.
    BounceIn,
    /// Ends slow, bouncing ease-out.
    BounceOut,
    /// Slow at both ends, bouncing ease-in-out.
    BounceInOut,
}

impl Easing {
    /// Evaluates the curve at `t`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::QuadIn => quad_in(t),
            Self::QuadOut => quad_out(t),
            Self::QuadInOut => quad_in_out(t),
            Self::CubicIn => cubic_in(t),
            Self::CubicOut => cubic_out(t),
            Self::CubicInOut => cubic_in_out(t),
            Self::QuarticIn => quartic_in(t),
            Self::QuarticOut => quartic_out(t),
            Self::QuarticInOut => quartic_in_out(t),
            Self::QuinticIn => quintic_in(t),
            Self::QuinticOut => quintic_out(t),
            Self::QuinticInOut => quintic_in_out(t),
            Self::SineIn => sine_in(t),
            Self::SineOut => sine_out(t),
            Self::SineInOut => sine_in_out(t),
            Self::ExpoIn => expo_in(t),
            Self::ExpoOut => expo_out(t),
            Self::ExpoInOut => expo_in_out(t),
            Self::CircularIn => circular_in(t),
            Self::CircularOut => circular_out(t),
            Self::CircularInOut => circular_in_out(t),
            Self::BackIn => back_in(t),
            Self::BackOut => back_out(t),
            Self::BackInOut => back_in_out(t),
            Self::ExtremeBackIn => extreme_back_in(t),
            Self::ExtremeBackOut => extreme_back_out(t),
            Self::ExtremeBackInOut => extreme_back_in_out(t),
            Self::ElasticIn => elastic_in(t),
            Self::ElasticOut => elastic_out(t),
            Self::ElasticInOut => elastic_in_out(t),
            Self::BounceIn => bounce_in(t),
            Self::BounceOut => bounce_out(t),
            Self::BounceInOut => bounce_in_out(t),
        }
    }
}

/// Quadratic ease-in.
pub fn quad_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out.
pub fn quad_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quadratic ease-in-out.
pub fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-in.
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out.
pub fn cubic_out(t: f32) -> f32 {
    let f = t - 1.0;
    f * f * f + 1.0
}

/// Cubic ease-in-out.
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        1.0 + f * f * f / 2.0
    }
}

/// Quartic ease-in.
pub fn quartic_in(t: f32) -> f32 {
    t * t * t * t
}

/// Quartic ease-out.
pub fn quartic_out(t: f32) -> f32 {
    let f = t - 1.0;
    1.0 - f * f * f * f
}

/// Quartic ease-in-out.
pub fn quartic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let f = t - 1.0;
        1.0 - 8.0 * f * f * f * f
    }
}

/// Quintic ease-in.
pub fn quintic_in(t: f32) -> f32 {
    t * t * t * t * t
}

/// Quintic ease-out.
pub fn quintic_out(t: f32) -> f32 {
    let f = t - 1.0;
    f * f * f * f * f + 1.0
}

/// Quintic ease-in-out.
pub fn quintic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        16.0 * t * t * t * t * t
    } else {
        let f = 2.0 * t - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

/// Sine ease-in.
pub fn sine_in(t: f32) -> f32 {
    ((t - 1.0) * FRAC_PI_2).sin() + 1.0
}

/// Sine ease-out.
pub fn sine_out(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}

/// Sine ease-in-out.
pub fn sine_in_out(t: f32) -> f32 {
    0.5 * (1.0 - (t * PI).cos())
}

/// Exponential ease-in; exactly `0` at `t = 0`.
pub fn expo_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (t - 1.0))
    }
}

/// Exponential ease-out; exactly `1` at `t = 1`.
pub fn expo_out(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

/// Exponential ease-in-out; exact at both ends.
pub fn expo_in_out(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    if t < 0.5 {
        2f32.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
    }
}

/// Circular ease-in.
pub fn circular_in(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

/// Circular ease-out.
pub fn circular_out(t: f32) -> f32 {
    ((2.0 - t) * t).sqrt()
}

/// Circular ease-in-out.
pub fn circular_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * t * t).sqrt())
    } else {
        0.5 * (-4.0 * t * t + 8.0 * t - 3.0).sqrt() + 0.5
    }
}

/// Back ease-in (dips below zero before rising).
pub fn back_in(t: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    ((s + 1.0) * t - s) * t * t
}

/// Back ease-out (overshoots one before settling).
pub fn back_out(t: f32) -> f32 {
    1.0 - back_in(1.0 - t)
}

/// Back ease-in-out.
pub fn back_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * back_in(2.0 * t)
    } else {
        1.0 - 0.5 * back_in(2.0 * (1.0 - t))
    }
}

/// Pronounced-overshoot ease-in.
pub fn extreme_back_in(t: f32) -> f32 {
    (t * t - (t * PI).sin()) * t
}

/// Pronounced-overshoot ease-out.
pub fn extreme_back_out(t: f32) -> f32 {
    1.0 - extreme_back_in(1.0 - t)
}

/// Pronounced-overshoot ease-in-out.
pub fn extreme_back_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * extreme_back_in(2.0 * t)
    } else {
        1.0 - 0.5 * extreme_back_in(2.0 * (1.0 - t))
    }
}

/// Elastic ease-in.
pub fn elastic_in(t: f32) -> f32 {
    (13.0 * FRAC_PI_2 * t).sin() * 2f32.powf(10.0 * (t - 1.0))
}

/// Elastic ease-out.
pub fn elastic_out(t: f32) -> f32 {
    (-13.0 * FRAC_PI_2 * (t + 1.0)).sin() * 2f32.powf(-10.0 * t) + 1.0
}

/// Elastic ease-in-out.
pub fn elastic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * (13.0 * PI * t).sin() * 2f32.powf(20.0 * t - 10.0)
    } else {
        0.5 * (-13.0 * PI * t).sin() * 2f32.powf(-20.0 * t + 10.0) + 1.0
    }
}

/// Bounce ease-in.
pub fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

/// Bounce ease-out: four decaying parabolic hops.
pub fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let f = t - 1.5 / D;
        N * f * f + 0.75
    } else if t < 2.5 / D {
        let f = t - 2.25 / D;
        N * f * f + 0.9375
    } else {
        let f = t - 2.625 / D;
        N * f * f + 0.984_375
    }
}

/// Bounce ease-in-out.
pub fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * bounce_in(t * 2.0)
    } else {
        0.5 * bounce_out(t * 2.0 - 1.0) + 0.5
    }
}
