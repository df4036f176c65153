use crate::board::coord::Coord;
use crate::chess::piece::{PieceKind, Reach};

/// Push every destination of `kind` from `from` that passes `open` into `out`.
///
/// `inside` decides whether a cell is on the board. Along a sliding ray a cell
/// rejected by `open` is skipped but the walk continues; only leaving the board
/// ends a ray. A step past the `i32` range counts as leaving the board. Output
/// order is direction order, then distance along the ray.
pub fn push_destinations(
    kind: PieceKind,
    from: Coord,
    inside: impl Fn(Coord) -> bool,
    open: impl Fn(Coord) -> bool,
    out: &mut Vec<Coord>,
) {
    let reach = kind.reach();
    for &dir in kind.dirs() {
        let mut next = from.checked_add(dir);
        while let Some(to) = next.filter(|&c| inside(c)) {
            if open(to) {
                out.push(to);
            }
            if reach == Reach::Step {
                break;
            }
            next = to.checked_add(dir);
        }
    }
}
