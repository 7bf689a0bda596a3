// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shape value types and their pairwise tests.
//!
//! Semantics shared by every shape:
//! - Boundaries are inclusive: touching shapes intersect, and a shape
//!   touching the inside of another's boundary is contained.
//! - Construction never fails through `new`; out-of-range input yields the
//!   degenerate behavior documented on each type. `try_new` validates.
//! - "No hit" is `None`, never an error.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Circles: point, circle, and box overlap."]
pub mod circle;
#[doc = "Rays: distance queries against circles, boxes, and other rays."]
pub mod ray;
