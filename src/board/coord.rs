use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell as `(row, col)`.
///
/// Ordering is lexicographic on `(row, col)`, which is what canonical-cell
/// selection relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `self + delta`, or `None` if either component leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, delta: Coord) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add(delta.row)?,
            col: self.col.checked_add(delta.col)?,
        })
    }

    /// Manhattan distance to a real-valued point (used against the board center).
    #[inline]
    pub fn manhattan_to(self, row: f64, col: f64) -> f64 {
        (self.row as f64 - row).abs() + (self.col as f64 - col).abs()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
