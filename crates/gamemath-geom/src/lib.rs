// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![doc = r"2D shapes and pairwise intersection tests for GameMath.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`): overlap, containment, union, expansion.
- Circles (`Circle`): overlap and containment against points, circles, boxes.
- Rays (`Ray`): nearest forward hit distance against circles, boxes, rays.

Design notes:
- Every shape is an immutable `Copy` value; every test is a pure function.
- Boundaries are inclusive; absence of a hit is `None`.
- Parallel/degenerate detection uses the single `gamemath_core::EPSILON`.
- Degenerate inputs are logged at `trace` level through `tracing`.
"]

mod error;
/// Shape value types.
pub mod types;

pub use error::{Axis, GeomError};
pub use types::aabb::Aabb;
pub use types::circle::Circle;
pub use types::ray::Ray;
