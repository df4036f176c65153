//! Whole-board surveys: solve the game for every start cell of a board.

use serde::{Deserialize, Serialize};

use crate::board::coord::Coord;
use crate::board::grid::{GridError, GridState};
use crate::chess::piece::PieceKind;
use crate::scenario::{ResourceLimits, SearchError, SearchOptions};
use crate::search::minimax::{solve_with_limits, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCell {
    pub start: Coord,
    pub result: SearchResult,
}

#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("start {start}: {source}")]
    Search {
        start: Coord,
        #[source]
        source: SearchError,
    },
}

/// Solve every start cell in row-major order.
///
/// `limits` apply to each start cell separately.
pub fn survey_board(
    rows: i32,
    cols: i32,
    piece: PieceKind,
    options: SearchOptions,
    limits: ResourceLimits,
) -> Result<Vec<SurveyCell>, SurveyError> {
    let cells = GridState::check_dimensions(rows, cols)?;

    let mut out = Vec::with_capacity(cells);
    for row in 0..rows {
        for col in 0..cols {
            let start = Coord::new(row, col);
            let mut grid = GridState::new(rows, cols, start, piece)?;
            let result = solve_with_limits(&mut grid, options, limits)
                .map_err(|source| SurveyError::Search { start, source })?;
            tracing::debug!(
                %start,
                winner = %result.winner,
                states = result.states_visited,
                "surveyed"
            );
            out.push(SurveyCell { start, result });
        }
    }
    Ok(out)
}

/// Total states explored over a survey.
pub fn total_states(cells: &[SurveyCell]) -> u64 {
    cells.iter().map(|c| c.result.states_visited).sum()
}
