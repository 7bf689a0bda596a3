// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::TAU;
use core::ops::Range;

use crate::math::{Vec2, Vec3};

/// Substituted for a zero seed; xorshift never leaves the all-zero state.
const ZERO_SEED_REPLACEMENT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stateful `xorshift64*` pseudo-random number generator.
///
/// * Not cryptographically secure; use only for gameplay/state simulation.
/// * Matching seeds yield identical sequences on every platform.
/// * There is no global instance: callers own a generator and pass it by
///   `&mut`, one sequence per owner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Constructs a generator from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Returns the next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Returns the next float in `[0, 1)` built from the top 24 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Returns the next double in `[0, 1)` built from the top 53 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns an integer in the half-open `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn next_int(&mut self, range: Range<i64>) -> i64 {
        assert!(range.start < range.end, "empty range: {range:?}");
        let span = range.end.wrapping_sub(range.start) as u64;
        range.start.wrapping_add((self.next_u64() % span) as i64)
    }

    /// Returns a float in the half-open `range`.
    ///
    /// An empty or inverted range yields `range.start`.
    pub fn next_f32_in(&mut self, range: Range<f32>) -> f32 {
        scale_into(self.next_f32(), &range)
    }

    /// Returns a fair coin flip.
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 0
    }

    /// Shuffles `items` in place (Fisher–Yates, back to front).
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0..(i as i64 + 1)) as usize;
            items.swap(i, j);
        }
    }

    /// Picks one element uniformly, or `None` for an empty slice.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_int(0..items.len() as i64) as usize;
        items.get(idx)
    }
}

/// Maps a unit sample in `[0, 1)` onto `range`, keeping the result below
/// `range.end` even when the affine step rounds up to it.
fn scale_into(unit: f32, range: &Range<f32>) -> f32 {
    if range.start >= range.end {
        return range.start;
    }
    let value = range.start + unit * (range.end - range.start);
    if value < range.end {
        value
    } else {
        range.end.next_down().max(range.start)
    }
}

impl Vec2 {
    /// Random vector with both components in `[0, 1)`.
    pub fn random(rng: &mut SeededRandom) -> Self {
        let x = rng.next_f32();
        let y = rng.next_f32();
        Self::new(x, y)
    }

    /// Random vector with both components drawn from `range`.
    pub fn random_in(rng: &mut SeededRandom, range: Range<f32>) -> Self {
        let x = rng.next_f32_in(range.clone());
        let y = rng.next_f32_in(range);
        Self::new(x, y)
    }

    /// Random unit vector with a uniformly distributed angle.
    pub fn random_direction(rng: &mut SeededRandom) -> Self {
        Self::from_angle(rng.next_f32_in(0.0..TAU), 1.0)
    }
}

impl Vec3 {
    /// Random vector with every component in `[0, 1)`.
    pub fn random(rng: &mut SeededRandom) -> Self {
        let x = rng.next_f32();
        let y = rng.next_f32();
        let z = rng.next_f32();
        Self::new(x, y, z)
    }

    /// Random vector with every component drawn from `range`.
    pub fn random_in(rng: &mut SeededRandom, range: Range<f32>) -> Self {
        let x = rng.next_f32_in(range.clone());
        let y = rng.next_f32_in(range.clone());
        let z = rng.next_f32_in(range);
        Self::new(x, y, z)
    }

    /// Random unit vector, uniform over the sphere.
    ///
    /// Draws points in the cube `[-1, 1)³` until one lands inside the unit
    /// ball (excluding the origin), then scales it to unit length.
    pub fn random_direction(rng: &mut SeededRandom) -> Self {
        loop {
            let candidate = Self::random_in(rng, -1.0..1.0);
            let len_sq = candidate.length_squared();
            if len_sq > 0.0 && len_sq <= 1.0 {
                return candidate / len_sq.sqrt();
            }
        }
    }
}
