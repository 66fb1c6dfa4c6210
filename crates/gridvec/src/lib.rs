#![warn(missing_docs)]

//! 2D integer grid coordinates with rectangular bounds checks and random sampling.
//!
//! This crate provides a single value type, [`GridVec2`], representing a discrete
//! position on an integer grid, together with componentwise addition, containment
//! testing against an origin-anchored rectangular bound, and uniform random point
//! generation within such a bound.
//!
//! Every operation is total over its `i32` inputs and cannot panic, including for
//! degenerate (non-positive) bounds, so the type is safe to use in per-frame hot
//! paths without error handling at the call site.

use core::fmt;
use core::ops::{Add, AddAssign};

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete 2D position on an integer grid.
///
/// Axes follow the ground-plane convention of `x` (column) and `z` (row).
/// Values are unrestricted at construction; a coordinate only becomes
/// "out of range" relative to a caller-supplied bound.
///
/// The same type doubles as a rectangular *bound*: a bound is interpreted as
/// the exclusive upper-right corner of a rectangle whose lower-left corner
/// sits at the origin. The type does not distinguish the two roles.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridVec2 {
    /// The x-coordinate (column index) on the grid.
    pub x: i32,
    /// The z-coordinate (row index) on the grid.
    pub z: i32,
}

impl GridVec2 {
    /// Creates a new `GridVec2`.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Tests whether this coordinate lies inside the rectangle spanned by the
    /// origin (inclusive) and `range` (exclusive).
    ///
    /// Both axes are checked independently; either failing makes the whole
    /// test false. A `range` with a non-positive axis contains no coordinate
    /// at all, since no value satisfies `0 <= v < 0`.
    ///
    /// # Arguments
    /// * `range` - The exclusive upper bound on both axes.
    ///
    /// # Returns
    /// * `bool` - True iff `0 <= self.x < range.x` and `0 <= self.z < range.z`.
    #[must_use]
    pub const fn contains(self, range: GridVec2) -> bool {
        self.x >= 0 && self.x < range.x && self.z >= 0 && self.z < range.z
    }

    /// Draws a uniformly random coordinate inside the rectangle spanned by the
    /// origin and `max` (exclusive).
    ///
    /// The axes are sampled independently from the provided generator, `x`
    /// first. A non-positive axis of `max` yields `0` on that axis without
    /// consulting the generator, matching the `Range(0, 0) == 0` convention of
    /// the original platform primitive, so a degenerate bound cannot panic.
    ///
    /// # Arguments
    /// * `max` - The exclusive upper bound on both axes.
    /// * `rng` - A mutable reference to a random number generator.
    ///
    /// # Returns
    /// * `GridVec2` - A coordinate with `x` in `[0, max.x)` and `z` in `[0, max.z)`.
    #[must_use]
    pub fn random_vector<R: Rng + ?Sized>(max: GridVec2, rng: &mut R) -> GridVec2 {
        let x = if max.x > 0 { rng.random_range(0..max.x) } else { 0 };
        let z = if max.z > 0 { rng.random_range(0..max.z) } else { 0 };
        GridVec2::new(x, z)
    }
}

impl Add for GridVec2 {
    type Output = GridVec2;

    fn add(self, rhs: GridVec2) -> GridVec2 {
        GridVec2::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl AddAssign for GridVec2 {
    fn add_assign(&mut self, rhs: GridVec2) {
        *self = *self + rhs;
    }
}

impl fmt::Display for GridVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, z: {})", self.x, self.z)
    }
}
