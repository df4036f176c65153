use grid_pursuit::board::coord::Coord;
use grid_pursuit::board::grid::GridState;
use grid_pursuit::chess::piece::PieceKind;
use grid_pursuit::scenario::{MoveOrdering, SearchOptions};
use grid_pursuit::search::minimax::{solve, SearchResult};

/// Every node of the game tree, with no short-circuiting.
fn full_tree_size(grid: &mut GridState) -> u64 {
    let mut n = 1;
    for to in grid.legal_moves() {
        let mut next = grid.play(to);
        n += full_tree_size(&mut next);
    }
    n
}

fn option_sets() -> [SearchOptions; 6] {
    let plain = SearchOptions::default();
    let mobility = plain
        .with_heuristic_ordering(true)
        .with_ordering(MoveOrdering::Mobility);
    [
        plain,
        plain.with_heuristic_ordering(true),
        plain.with_symmetry_reduction(true),
        plain
            .with_heuristic_ordering(true)
            .with_symmetry_reduction(true),
        mobility,
        mobility.with_symmetry_reduction(true),
    ]
}

fn boards(max_cells: i32) -> impl Iterator<Item = (i32, i32, Coord)> {
    (1..=4).flat_map(move |rows| {
        (1..=4)
            .filter(move |cols| rows * cols <= max_cells)
            .flat_map(move |cols| {
                (0..rows).flat_map(move |r| (0..cols).map(move |c| (rows, cols, Coord::new(r, c))))
            })
    })
}

#[test]
fn pruning_options_never_change_the_winner() {
    for (rows, cols, start) in boards(12) {
        for piece in PieceKind::ALL {
            let results: Vec<SearchResult> = option_sets()
                .into_iter()
                .map(|options| {
                    let mut g = GridState::new(rows, cols, start, piece).unwrap();
                    solve(&mut g, options)
                })
                .collect();
            assert!(
                results.iter().all(|r| r.winner == results[0].winner),
                "{rows}x{cols} {piece} from {start}: {results:?}"
            );
        }
    }
}

#[test]
fn search_leaves_the_board_untouched() {
    for (rows, cols, start) in boards(9) {
        for piece in PieceKind::ALL {
            for options in option_sets() {
                let mut g = GridState::new(rows, cols, start, piece).unwrap();
                let before = g.clone();
                solve(&mut g, options);
                assert_eq!(g, before);
            }
        }
    }
}

#[test]
fn states_never_exceed_the_full_tree() {
    for (rows, cols, start) in boards(9) {
        for piece in PieceKind::ALL {
            let mut g = GridState::new(rows, cols, start, piece).unwrap();
            let full = full_tree_size(&mut g);
            for options in option_sets() {
                let r = solve(&mut g, options);
                assert!(r.states_visited >= 1);
                assert!(
                    r.states_visited <= full,
                    "{rows}x{cols} {piece} from {start}: {} > {full}",
                    r.states_visited
                );
            }
        }
    }
}

#[test]
fn states_match_full_tree_when_nothing_short_circuits() {
    // No child on these boards is ever won by the side that moved into it
    // before the last candidate, so every node is explored.
    let cases = [
        (1, 3, Coord::new(0, 1), PieceKind::Rook, 5),
        (1, 4, Coord::new(0, 0), PieceKind::King, 4),
        (1, 1, Coord::ORIGIN, PieceKind::Queen, 1),
    ];
    for (rows, cols, start, piece, expected) in cases {
        let mut g = GridState::new(rows, cols, start, piece).unwrap();
        assert_eq!(full_tree_size(&mut g), expected);
        assert_eq!(solve(&mut g, SearchOptions::default()).states_visited, expected);
    }
}

#[test]
fn full_tree_sizes_of_small_boards() {
    let cases = [
        (2, 2, Coord::ORIGIN, PieceKind::Rook, 7),
        (2, 2, Coord::ORIGIN, PieceKind::King, 16),
        (3, 3, Coord::new(1, 1), PieceKind::King, 665),
        (3, 3, Coord::new(0, 0), PieceKind::Rook, 1009),
        (2, 3, Coord::new(0, 1), PieceKind::Rook, 44),
    ];
    for (rows, cols, start, piece, expected) in cases {
        let mut g = GridState::new(rows, cols, start, piece).unwrap();
        assert_eq!(full_tree_size(&mut g), expected, "{rows}x{cols} {piece}");
    }
}

/// Intentionally ignored by default: solves every start cell of every board up
/// to 20 cells with every option set.
///
/// Run with:
/// `cargo test --release -- --ignored pruning_options_agree_on_larger_boards`
#[test]
#[ignore]
fn pruning_options_agree_on_larger_boards() {
    for rows in 1..=5 {
        for cols in 1..=5 {
            if rows * cols > 20 {
                continue;
            }
            for piece in PieceKind::ALL {
                for r in 0..rows {
                    for c in 0..cols {
                        let start = Coord::new(r, c);
                        let winners: Vec<_> = option_sets()
                            .into_iter()
                            .map(|options| {
                                let mut g = GridState::new(rows, cols, start, piece).unwrap();
                                solve(&mut g, options).winner
                            })
                            .collect();
                        assert!(
                            winners.iter().all(|w| *w == winners[0]),
                            "{rows}x{cols} {piece} from {start}"
                        );
                    }
                }
            }
        }
    }
}
