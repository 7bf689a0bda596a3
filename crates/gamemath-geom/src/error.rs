// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Coordinate axis named by [`GeomError::InvertedBounds`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Rejection reasons reported by the checked `try_new` constructors.
///
/// The plain `new` constructors never fail; they accept these inputs and
/// produce the documented degenerate shapes instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// `min` exceeds `max` on the given axis.
    #[error("inverted bounds on {axis} axis: min {min} > max {max}")]
    InvertedBounds {
        /// Offending axis.
        axis: Axis,
        /// Minimum coordinate on that axis.
        min: f32,
        /// Maximum coordinate on that axis.
        max: f32,
    },
    /// Circle radius is negative.
    #[error("negative radius: {0}")]
    NegativeRadius(f32),
    /// Ray direction has zero length and cannot be normalized.
    #[error("ray direction has zero length")]
    ZeroDirection,
    /// An input component is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}
