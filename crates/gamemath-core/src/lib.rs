// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"Math foundation for GameMath.

This crate provides:
- The 2D vector value type (`Vec2`) every shape is built on, and its 3D
  counterpart (`Vec3`) with `xy`/`xz` projections back to 2D.
- Scalar helpers: interpolation, clamping, remapping, approximate equality.
- Angle wrapping and degree/radian conversion.
- Easing curves (`easing::Easing`).
- An explicit seeded generator (`SeededRandom`).

Design notes:
- Float32 throughout; everything except `SeededRandom` is a pure function.
- `Vec2::normalize` maps the zero vector to the zero vector; shape code relies
  on that contract for its degenerate cases.
- `math::EPSILON` is the single tolerance used for degeneracy checks.
"]

pub mod easing;
pub mod math;

pub use easing::Easing;
pub use math::{SeededRandom, Vec2, Vec3, EPSILON};
