use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::board::coord::Coord;
use crate::board::visited::VisitedSet;
use crate::chess::movegen::push_destinations;
use crate::chess::piece::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("board size must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("initial position {start} is outside the {rows}x{cols} board")]
    StartOutOfBounds { start: Coord, rows: i32, cols: i32 },
    #[error("board {rows}x{cols} has more than {max_cells} cells")]
    TooLarge {
        rows: i32,
        cols: i32,
        max_cells: usize,
    },
}

/// Largest board area [`GridState::new`] accepts.
pub const MAX_CELLS: usize = 1 << 20;

/// The mutable game board: visited cells, token position and the moving piece.
///
/// A single instance is mutated in place for a whole search. Every
/// [`GridState::apply_move`] must be matched by an [`GridState::undo_move`] in
/// LIFO order; [`GridState::play`] does the pairing automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    rows: i32,
    cols: i32,
    visited: VisitedSet,
    position: Coord,
    piece: PieceKind,
    center: (f64, f64),
}

impl GridState {
    pub fn new(rows: i32, cols: i32, start: Coord, piece: PieceKind) -> Result<Self, GridError> {
        let cells = Self::check_dimensions(rows, cols)?;

        let mut grid = Self {
            rows,
            cols,
            visited: VisitedSet::new(cells),
            position: start,
            piece,
            center: (rows as f64 / 2.0, cols as f64 / 2.0),
        };
        if !grid.contains(start) {
            return Err(GridError::StartOutOfBounds { start, rows, cols });
        }
        grid.mark(start);
        Ok(grid)
    }

    /// Validate a board size and return its cell count.
    pub fn check_dimensions(rows: i32, cols: i32) -> Result<usize, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        match (rows as usize).checked_mul(cols as usize) {
            Some(cells) if cells <= MAX_CELLS => Ok(cells),
            _ => Err(GridError::TooLarge {
                rows,
                cols,
                max_cells: MAX_CELLS,
            }),
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    /// Geometric center `(rows / 2, cols / 2)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited.contains(self.index(c))
    }

    /// Unvisited cells the piece can reach from the current position.
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.piece.max_moves(self.rows, self.cols));
        self.legal_moves_into(&mut out);
        out
    }

    /// Like [`GridState::legal_moves`], appending into a caller-provided buffer.
    pub fn legal_moves_into(&self, out: &mut Vec<Coord>) {
        push_destinations(
            self.piece,
            self.position,
            |c| self.contains(c),
            |c| !self.is_visited(c),
            out,
        );
    }

    /// Move the token to `to`, marking it visited. Returns the previous position.
    pub fn apply_move(&mut self, to: Coord) -> Coord {
        debug_assert!(!self.is_visited(to), "move onto visited cell {to}");
        let prev = self.position;
        self.position = to;
        self.mark(to);
        prev
    }

    /// Reverse the most recent [`GridState::apply_move`].
    pub fn undo_move(&mut self, unmark: Coord, restore: Coord) {
        debug_assert_eq!(self.position, unmark, "undo out of LIFO order");
        let idx = self.index(unmark);
        self.visited.remove(idx);
        self.position = restore;
        debug_assert!(self.is_visited(restore));
    }

    /// Apply `to` for the lifetime of the returned guard.
    pub fn play(&mut self, to: Coord) -> MoveGuard<'_> {
        let prev = self.apply_move(to);
        MoveGuard {
            grid: self,
            to,
            prev,
        }
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        debug_assert!(self.contains(c), "{c} outside {}x{}", self.rows, self.cols);
        c.row as usize * self.cols as usize + c.col as usize
    }

    fn mark(&mut self, c: Coord) {
        let idx = self.index(c);
        self.visited.insert(idx);
    }
}

/// A move that is undone when the guard drops.
pub struct MoveGuard<'a> {
    grid: &'a mut GridState,
    to: Coord,
    prev: Coord,
}

impl MoveGuard<'_> {
    pub fn destination(&self) -> Coord {
        self.to
    }
}

impl Deref for MoveGuard<'_> {
    type Target = GridState;

    fn deref(&self) -> &GridState {
        &*self.grid
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut GridState {
        &mut *self.grid
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.grid.undo_move(self.to, self.prev);
    }
}

/// `P` marks the token, `x` visited cells, `-` open cells.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            write!(f, "{row}")?;
            for col in 0..self.cols {
                let c = Coord::new(row, col);
                let mark = if c == self.position {
                    'P'
                } else if self.is_visited(c) {
                    'x'
                } else {
                    '-'
                };
                write!(f, " {mark}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
