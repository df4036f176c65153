//! Move ordering.
//!
//! - [`MoveOrdering::CenterDistance`]: cells far from the board center first.
//! - [`MoveOrdering::Mobility`]: moves that leave the opponent the fewest
//!   replies first, ties broken toward the edges.
//!
//! Ordering only changes how many states get explored, never the verdict.

use std::cmp::Ordering;

use crate::board::coord::Coord;
use crate::board::grid::GridState;
use crate::scenario::MoveOrdering;

/// Sort `moves` in place by the chosen key.
pub fn order_moves(grid: &mut GridState, ordering: MoveOrdering, moves: &mut [Coord]) {
    match ordering {
        MoveOrdering::CenterDistance => order_by_center_distance(grid, moves),
        MoveOrdering::Mobility => order_by_mobility(grid, moves),
    }
}

/// Stable sort by descending Manhattan distance from the board center.
pub fn order_by_center_distance(grid: &GridState, moves: &mut [Coord]) {
    let (cr, cc) = grid.center();
    moves.sort_by(|a, b| cmp_far_first(a.manhattan_to(cr, cc), b.manhattan_to(cr, cc)));
}

/// Stable sort by ascending `(opponent replies, -tenths of center distance)`.
///
/// Each candidate is played on `grid` to count replies and undone again.
pub fn order_by_mobility(grid: &mut GridState, moves: &mut [Coord]) {
    moves.sort_by_cached_key(|&to| mobility_key(grid, to));
}

fn mobility_key(grid: &mut GridState, to: Coord) -> (usize, i64) {
    let (cr, cc) = grid.center();
    let replies = grid.play(to).legal_moves().len();
    let tenths = (to.manhattan_to(cr, cc) * 10.0) as i64;
    (replies, -tenths)
}

#[inline]
fn cmp_far_first(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::PieceKind;

    #[test]
    fn corners_come_before_edges() {
        let g = GridState::new(3, 3, Coord::new(1, 1), PieceKind::King).unwrap();
        let mut moves = g.legal_moves();
        order_by_center_distance(&g, &mut moves);
        // Center is (1.5, 1.5): (0,0) is 3.0 away, (2,2) only 1.0.
        assert_eq!(moves[0], Coord::new(0, 0));
        assert_eq!(*moves.last().unwrap(), Coord::new(2, 2));
    }

    #[test]
    fn ties_keep_generation_order() {
        let g = GridState::new(1, 5, Coord::new(0, 2), PieceKind::Rook).unwrap();
        let mut moves = g.legal_moves();
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 3),
                Coord::new(0, 4),
                Coord::new(0, 1),
                Coord::new(0, 0)
            ]
        );
        order_by_center_distance(&g, &mut moves);
        // Center (0.5, 2.5): distances 1.0, 2.0, 2.0, 3.0.
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 4),
                Coord::new(0, 1),
                Coord::new(0, 3)
            ]
        );
    }

    #[test]
    fn fewest_replies_come_first() {
        let mut g = GridState::new(3, 3, Coord::new(1, 1), PieceKind::King).unwrap();
        let before = g.clone();
        let mut moves = g.legal_moves();
        order_by_mobility(&mut g, &mut moves);
        assert_eq!(g, before);
        // Corners leave two replies, edge midpoints four.
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 0),
                Coord::new(2, 0),
                Coord::new(0, 2),
                Coord::new(2, 2),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(2, 1),
                Coord::new(1, 2)
            ]
        );
    }

    #[test]
    fn mobility_ties_fall_back_to_center_distance() {
        let mut g = GridState::new(1, 5, Coord::new(0, 2), PieceKind::Rook).unwrap();
        let mut moves = g.legal_moves();
        order_moves(&mut g, MoveOrdering::Mobility, &mut moves);
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 4),
                Coord::new(0, 1),
                Coord::new(0, 3)
            ]
        );
    }
}
