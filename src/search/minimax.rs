//! Exhaustive win/loss search for the pursuit game.
//!
//! The tree is explored depth-first on a single [`GridState`] that is mutated
//! in place: each frame plays a candidate through a [`crate::board::grid::MoveGuard`],
//! recurses, and the guard restores the board when it drops (including on the
//! early return taken once a winning move is found).
//!
//! Semantics:
//! - A player with no legal move loses.
//! - A node is won by its mover iff some child is won by the mover; the loop stops at
//!   the first such child.
//! - `states_visited` of a node is 1 plus the counters of all children explored
//!   before returning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::grid::GridState;
use crate::scenario::{ResourceLimits, SearchError, SearchOptions};
use crate::search::ordering::order_moves;
use crate::search::resources::{NodeBudget, ResourceTracker, Unlimited};
use crate::search::symmetry::{filter_symmetric_moves, MAX_SYMMETRY_DEPTH};
use crate::search::trace::{NoTrace, TraceSink, TracingTrace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    #[inline]
    pub fn is_first(self) -> bool {
        self == Player::First
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("first"),
            Player::Second => f.write_str("second"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub winner: Player,
    pub states_visited: u64,
}

impl SearchResult {
    #[inline]
    pub fn first_player_wins(&self) -> bool {
        self.winner.is_first()
    }

    #[inline]
    fn lost_by(mover: Player, states_visited: u64) -> Self {
        Self {
            winner: mover.other(),
            states_visited,
        }
    }
}

/// A configured search: options plus where traces go and what budget applies.
pub struct Searcher<T = NoTrace, B = Unlimited> {
    options: SearchOptions,
    trace: T,
    budget: B,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            trace: NoTrace,
            budget: Unlimited,
        }
    }
}

impl<T: TraceSink, B: NodeBudget> Searcher<T, B> {
    /// Route traces to `trace`. Only consulted when `verbose_trace` is set.
    pub fn with_trace<T2: TraceSink>(self, trace: T2) -> Searcher<T2, B> {
        Searcher {
            options: self.options,
            trace,
            budget: self.budget,
        }
    }

    pub fn with_budget<B2: NodeBudget>(self, budget: B2) -> Searcher<T, B2> {
        Searcher {
            options: self.options,
            trace: self.trace,
            budget,
        }
    }

    pub fn with_limits(self, limits: ResourceLimits) -> Searcher<T, ResourceTracker> {
        self.with_budget(ResourceTracker::new(limits))
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn budget(&self) -> &B {
        &self.budget
    }

    pub fn into_trace(self) -> T {
        self.trace
    }

    /// Search from `grid` with `mover` to play at `depth`.
    ///
    /// `grid` is mutated during the search and restored before returning.
    pub fn run(
        &mut self,
        grid: &mut GridState,
        depth: usize,
        mover: Player,
    ) -> Result<SearchResult, B::Error> {
        self.budget.visit_state("minimax")?;

        let mut moves = grid.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult::lost_by(mover, 1));
        }

        if self.options.symmetry_reduction && depth <= MAX_SYMMETRY_DEPTH {
            filter_symmetric_moves(grid, &mut moves);
        }
        if self.options.heuristic_ordering {
            order_moves(grid, self.options.ordering, &mut moves);
        }

        let verbose = self.options.verbose_trace;
        if verbose {
            self.trace.node(depth, mover, &moves);
        }

        let mut states_visited = 1u64;
        for to in moves {
            if verbose {
                self.trace.try_move(depth, mover, to);
            }

            let child = {
                let mut next = grid.play(to);
                self.run(&mut next, depth + 1, mover.other())?
            };
            states_visited += child.states_visited;

            if child.winner == mover {
                return Ok(SearchResult {
                    winner: mover,
                    states_visited,
                });
            }
        }

        Ok(SearchResult::lost_by(mover, states_visited))
    }
}

/// Unbounded search from an arbitrary node.
///
/// With `verbose_trace` the trace goes to `tracing` (see [`TracingTrace`]).
pub fn search(
    grid: &mut GridState,
    depth: usize,
    mover: Player,
    options: SearchOptions,
) -> SearchResult {
    let outcome = if options.verbose_trace {
        Searcher::new(options)
            .with_trace(TracingTrace)
            .run(grid, depth, mover)
    } else {
        Searcher::new(options).run(grid, depth, mover)
    };
    match outcome {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Solve the game from its start position (first player to move).
pub fn solve(grid: &mut GridState, options: SearchOptions) -> SearchResult {
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        piece = %grid.piece(),
        start = %grid.position(),
        ?options,
        "search started"
    );
    let result = search(grid, 0, Player::First, options);
    tracing::debug!(
        winner = %result.winner,
        states = result.states_visited,
        "search finished"
    );
    result
}

/// Like [`solve`], but stops with [`SearchError::LimitExceeded`] once `limits` are crossed.
pub fn solve_with_limits(
    grid: &mut GridState,
    options: SearchOptions,
    limits: ResourceLimits,
) -> Result<SearchResult, SearchError> {
    if limits.is_unlimited() {
        return Ok(solve(grid, options));
    }

    let mut searcher = Searcher::new(options).with_limits(limits);
    let outcome = if options.verbose_trace {
        searcher.with_trace(TracingTrace).run(grid, 0, Player::First)
    } else {
        searcher.run(grid, 0, Player::First)
    };
    if let Err(e) = &outcome {
        tracing::warn!(%e, "search aborted");
    }
    outcome
}
