//! Human and JSON renderings of search results, shared by the binaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::coord::Coord;
use crate::scenario::GameConfig;
use crate::search::minimax::{Player, SearchResult};
use crate::search::survey::SurveyCell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub config: GameConfig,
    pub first_player_wins: bool,
    pub result: SearchResult,
}

impl SearchReport {
    pub fn new(config: GameConfig, result: SearchResult) -> Self {
        Self {
            config,
            first_player_wins: result.first_player_wins(),
            result,
        }
    }
}

pub fn verdict_line(winner: Player) -> &'static str {
    match winner {
        Player::First => "First player wins",
        Player::Second => "Second player wins",
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Verdict line plus visited-state count, one per line.
pub fn render_result(result: &SearchResult) -> String {
    format!(
        "{}\nStates visited: {}\n",
        verdict_line(result.winner),
        group_thousands(result.states_visited)
    )
}

/// A `rows x cols` grid of `F` (first player wins) / `S` (second player wins).
///
/// `cells` are expected in row-major order as [`crate::search::survey::survey_board`]
/// returns them; a missing or misplaced cell renders as `?`.
pub struct SurveyGrid<'a> {
    pub rows: i32,
    pub cols: i32,
    pub cells: &'a [SurveyCell],
}

impl SurveyGrid<'_> {
    fn mark(&self, row: i32, col: i32) -> char {
        let idx = row as usize * self.cols as usize + col as usize;
        match self.cells.get(idx) {
            Some(c) if c.start == Coord::new(row, col) => {
                if c.result.first_player_wins() {
                    'F'
                } else {
                    'S'
                }
            }
            _ => '?',
        }
    }
}

impl fmt::Display for SurveyGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.cols {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for row in 0..self.rows {
            write!(f, "{row}")?;
            for col in 0..self.cols {
                write!(f, " {}", self.mark(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render_survey(rows: i32, cols: i32, cells: &[SurveyCell]) -> String {
    SurveyGrid { rows, cols, cells }.to_string()
}
