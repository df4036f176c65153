use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rook,
    King,
    Queen,
    Knight,
}

/// How far a piece travels along each of its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Exactly one offset per direction.
    Step,
    /// Any number of cells along the direction, until the board edge.
    Slide,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Knight,
    ];

    /// Movement offsets, in generation order.
    #[inline]
    pub fn dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Rook => &ROOK_DIRS,
            King | Queen => &QUEEN_DIRS,
            Knight => &KNIGHT_DELTAS,
        }
    }

    #[inline]
    pub fn reach(self) -> Reach {
        use PieceKind::*;
        match self {
            Rook | Queen => Reach::Slide,
            King | Knight => Reach::Step,
        }
    }

    /// Upper bound on the number of destinations from any cell of a `rows x cols` grid.
    pub fn max_moves(self, rows: i32, cols: i32) -> usize {
        match self.reach() {
            Reach::Step => self.dirs().len(),
            Reach::Slide => {
                let span = (rows.max(0) + cols.max(0)) as usize;
                // Diagonals add at most one more `rows + cols` worth of cells.
                span * self.dirs().len() / 4
            }
        }
    }

    pub fn name(self) -> &'static str {
        use PieceKind::*;
        match self {
            Rook => "rook",
            King => "king",
            Queen => "queen",
            Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece type '{0}' (expected rook, king, queen or knight)")]
pub struct UnknownPiece(pub String);

impl FromStr for PieceKind {
    type Err = UnknownPiece;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownPiece(s.to_string()))
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { row: 2, col: 1 },
    Coord { row: 2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -2, col: -1 },
    Coord { row: 1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: -1, col: -2 },
];
