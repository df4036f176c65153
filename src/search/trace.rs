//! Verbose search traces.
//!
//! The engine reports what it explores through a [`TraceSink`]; how that is
//! rendered is up to the sink. [`TracingTrace`] writes indented lines through
//! `tracing` under the `grid_pursuit::trace` target.

use crate::board::coord::Coord;
use crate::search::minimax::Player;

pub trait TraceSink {
    /// A non-terminal node was entered with `candidates` moves left to try.
    fn node(&mut self, depth: usize, mover: Player, candidates: &[Coord]);

    /// `mover` is about to try `to` at `depth`.
    fn try_move(&mut self, depth: usize, mover: Player, to: Coord);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn node(&mut self, _depth: usize, _mover: Player, _candidates: &[Coord]) {}

    #[inline]
    fn try_move(&mut self, _depth: usize, _mover: Player, _to: Coord) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl TraceSink for TracingTrace {
    fn node(&mut self, depth: usize, mover: Player, candidates: &[Coord]) {
        let line = node_line(depth, mover, candidates.len());
        tracing::info!(target: "grid_pursuit::trace", "{line}");
    }

    fn try_move(&mut self, depth: usize, mover: Player, to: Coord) {
        let line = move_line(depth, mover, to);
        tracing::info!(target: "grid_pursuit::trace", "{line}");
    }
}

/// Node line, indented two spaces per level.
pub fn node_line(depth: usize, mover: Player, available: usize) -> String {
    let pad = " ".repeat(depth * 2);
    format!("{pad}depth={depth}, player={mover}, available={available}")
}

/// Move line, one level deeper than its node line.
pub fn move_line(depth: usize, mover: Player, to: Coord) -> String {
    let pad = " ".repeat(depth * 2 + 2);
    format!("{pad}{mover} chose {to}")
}

/// Collects trace events in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedTrace {
    pub events: Vec<TraceEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Node {
        depth: usize,
        mover: Player,
        candidates: Vec<Coord>,
    },
    Move {
        depth: usize,
        mover: Player,
        to: Coord,
    },
}

impl TraceSink for RecordedTrace {
    fn node(&mut self, depth: usize, mover: Player, candidates: &[Coord]) {
        self.events.push(TraceEvent::Node {
            depth,
            mover,
            candidates: candidates.to_vec(),
        });
    }

    fn try_move(&mut self, depth: usize, mover: Player, to: Coord) {
        self.events.push(TraceEvent::Move { depth, mover, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_indent_by_depth() {
        assert_eq!(
            node_line(0, Player::First, 2),
            "depth=0, player=first, available=2"
        );
        assert_eq!(
            move_line(0, Player::First, Coord::new(0, 2)),
            "  first chose (0, 2)"
        );
        assert_eq!(
            node_line(3, Player::Second, 1),
            "      depth=3, player=second, available=1"
        );
        assert_eq!(
            move_line(3, Player::Second, Coord::new(1, 0)),
            "        second chose (1, 0)"
        );
    }
}
