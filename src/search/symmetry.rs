//! Mirror-symmetry reduction of candidate moves.
//!
//! When the token sits on a mirror axis of the board and the visited cells are
//! symmetric across that axis, a move and its mirror image lead to isomorphic
//! subtrees. Only one move per mirror class needs exploring.
//!
//! Only the two axis mirrors (and their composition) are used; diagonal
//! symmetries of square boards are not.

use rustc_hash::FxHashSet;

use crate::board::coord::Coord;
use crate::board::grid::GridState;

/// Symmetry filtering only pays off close to the root.
pub const MAX_SYMMETRY_DEPTH: usize = 3;

/// Which mirrors currently leave the board unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mirrors {
    /// Left-right mirror (`col -> cols - 1 - col`).
    pub horizontal: bool,
    /// Top-bottom mirror (`row -> rows - 1 - row`).
    pub vertical: bool,
}

impl Mirrors {
    pub fn of(grid: &GridState) -> Self {
        Self {
            horizontal: is_horizontally_symmetric(grid),
            vertical: is_vertically_symmetric(grid),
        }
    }

    #[inline]
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }

    /// Smallest `(row, col)` among `c` and its images under the active mirrors.
    pub fn canonical(self, c: Coord, rows: i32, cols: i32) -> Coord {
        let flip_col = Coord::new(c.row, cols - 1 - c.col);
        let flip_row = Coord::new(rows - 1 - c.row, c.col);
        let flip_both = Coord::new(rows - 1 - c.row, cols - 1 - c.col);

        let mut best = c;
        if self.horizontal {
            best = best.min(flip_col);
        }
        if self.vertical {
            best = best.min(flip_row);
        }
        if self.horizontal && self.vertical {
            best = best.min(flip_both);
        }
        best
    }
}

/// Token on the vertical center line and visited cells mirror left-right.
pub fn is_horizontally_symmetric(grid: &GridState) -> bool {
    let (rows, cols) = (grid.rows(), grid.cols());
    if grid.position().col * 2 != cols - 1 {
        return false;
    }
    let half = (cols + 1) / 2;
    (0..rows).all(|r| {
        (0..half).all(|c| {
            grid.is_visited(Coord::new(r, c)) == grid.is_visited(Coord::new(r, cols - 1 - c))
        })
    })
}

/// Token on the horizontal center line and visited cells mirror top-bottom.
pub fn is_vertically_symmetric(grid: &GridState) -> bool {
    let (rows, cols) = (grid.rows(), grid.cols());
    if grid.position().row * 2 != rows - 1 {
        return false;
    }
    let half = (rows + 1) / 2;
    (0..half).all(|r| {
        (0..cols).all(|c| {
            grid.is_visited(Coord::new(r, c)) == grid.is_visited(Coord::new(rows - 1 - r, c))
        })
    })
}

/// Drop moves whose canonical cell was already produced by an earlier move.
///
/// Keeps the first move of each class and the original relative order.
/// Returns the number of removed moves.
pub fn filter_symmetric_moves(grid: &GridState, moves: &mut Vec<Coord>) -> usize {
    let mirrors = Mirrors::of(grid);
    if !mirrors.any() {
        return 0;
    }

    let before = moves.len();
    let mut seen: FxHashSet<Coord> = FxHashSet::default();
    seen.reserve(before);
    moves.retain(|&m| seen.insert(mirrors.canonical(m, grid.rows(), grid.cols())));
    before - moves.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::PieceKind;

    #[test]
    fn center_of_odd_board_is_symmetric_both_ways() {
        let g = GridState::new(3, 3, Coord::new(1, 1), PieceKind::King).unwrap();
        assert_eq!(
            Mirrors::of(&g),
            Mirrors {
                horizontal: true,
                vertical: true
            }
        );
    }

    #[test]
    fn even_dimension_has_no_center_line() {
        let g = GridState::new(2, 3, Coord::new(0, 1), PieceKind::Rook).unwrap();
        let m = Mirrors::of(&g);
        assert!(m.horizontal);
        assert!(!m.vertical);
    }

    #[test]
    fn asymmetric_visits_disable_mirror() {
        let mut g = GridState::new(3, 3, Coord::new(1, 1), PieceKind::Rook).unwrap();
        for to in [
            Coord::new(0, 1),
            Coord::new(0, 0),
            Coord::new(2, 0),
            Coord::new(2, 1),
        ] {
            g.apply_move(to);
        }
        // Token is on the middle column but (0,0) has no visited mirror at (0,2).
        assert_eq!(g.position().col, 1);
        assert!(!is_horizontally_symmetric(&g));

        let mut g = GridState::new(1, 5, Coord::new(0, 2), PieceKind::Rook).unwrap();
        let back = g.apply_move(Coord::new(0, 0));
        assert!(!is_horizontally_symmetric(&g));
        g.undo_move(Coord::new(0, 0), back);
        assert!(is_horizontally_symmetric(&g));
    }

    #[test]
    fn canonical_picks_smallest_image() {
        let both = Mirrors {
            horizontal: true,
            vertical: true,
        };
        assert_eq!(both.canonical(Coord::new(2, 2), 3, 3), Coord::new(0, 0));
        assert_eq!(both.canonical(Coord::new(1, 2), 3, 3), Coord::new(1, 0));
        assert_eq!(both.canonical(Coord::new(2, 1), 3, 3), Coord::new(0, 1));

        let h = Mirrors {
            horizontal: true,
            vertical: false,
        };
        assert_eq!(h.canonical(Coord::new(2, 2), 3, 3), Coord::new(2, 0));
    }

    #[test]
    fn king_in_center_keeps_one_move_per_class() {
        let g = GridState::new(3, 3, Coord::new(1, 1), PieceKind::King).unwrap();
        let mut moves = g.legal_moves();
        assert_eq!(moves.len(), 8);
        let removed = filter_symmetric_moves(&g, &mut moves);
        assert_eq!(removed, 5);
        assert_eq!(
            moves,
            vec![Coord::new(2, 1), Coord::new(1, 2), Coord::new(2, 2)]
        );
    }
}
