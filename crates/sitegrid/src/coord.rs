use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell, addressed by (column, row).
///
/// Ordering is lexicographic on (column, row), which is the canonical
/// variable order used everywhere downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Coordinate {
    pub col: u32,
    pub row: u32,
}

impl Coordinate {
    #[inline] pub const fn new(col: u32, row: u32) -> Self { Self { col, row } }

    /// Manhattan (city-block) distance to `other`.
    #[inline] pub fn distance(self, other: Coordinate) -> u64 { manhattan(self, other) }
}

/// Grid driving distance `|a.col - b.col| + |a.row - b.row|`.
///
/// Widened to `u64`, since opposite corners of a `u32::MAX` grid are
/// `2 * (u32::MAX - 1)` apart.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> u64 {
    u64::from(a.col.abs_diff(b.col)) + u64::from(a.row.abs_diff(b.row))
}

impl From<(u32, u32)> for Coordinate {
    fn from((col, row): (u32, u32)) -> Self { Self { col, row } }
}

impl From<Coordinate> for (u32, u32) {
    fn from(coord: Coordinate) -> Self { (coord.col, coord.row) }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
