//! Scenario layer: everything a caller needs to describe one search.
//!
//! A [`GameConfig`] bundles:
//! - the board (`rows`, `cols`, `start`) and the moving [`PieceKind`]
//! - search toggles via [`SearchOptions`]
//! - an optional node budget via [`ResourceLimits`]
//!
//! Configs are plain serde structs so the CLI can read them from JSON files and
//! tests can build them inline.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::coord::Coord;
use crate::board::grid::{GridError, GridState};
use crate::chess::piece::PieceKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Search toggles. All off by default.
pub struct SearchOptions {
    /// Report every node and tried move to the trace sink.
    pub verbose_trace: bool,
    /// Sort candidates by [`SearchOptions::ordering`] before trying them.
    pub heuristic_ordering: bool,
    /// Drop mirror-equivalent moves near the root.
    pub symmetry_reduction: bool,
    /// Sort key used when `heuristic_ordering` is on.
    pub ordering: MoveOrdering,
}

/// Candidate ordering keys. Both sorts are stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrdering {
    /// Farthest from the board center first.
    #[default]
    CenterDistance,
    /// Fewest opponent replies first, then farthest from the center in
    /// tenths of a cell.
    Mobility,
}

impl MoveOrdering {
    pub const ALL: [MoveOrdering; 2] = [MoveOrdering::CenterDistance, MoveOrdering::Mobility];

    pub fn name(self) -> &'static str {
        match self {
            MoveOrdering::CenterDistance => "center_distance",
            MoveOrdering::Mobility => "mobility",
        }
    }
}

impl fmt::Display for MoveOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown move ordering '{0}' (expected center_distance or mobility)")]
pub struct UnknownOrdering(pub String);

impl FromStr for MoveOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveOrdering::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or_else(|| UnknownOrdering(s.to_string()))
    }
}

impl SearchOptions {
    pub fn with_verbose_trace(mut self, enabled: bool) -> Self {
        self.verbose_trace = enabled;
        self
    }

    pub fn with_heuristic_ordering(mut self, enabled: bool) -> Self {
        self.heuristic_ordering = enabled;
        self
    }

    pub fn with_symmetry_reduction(mut self, enabled: bool) -> Self {
        self.symmetry_reduction = enabled;
        self
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Search budgets.
///
/// `max_states` bounds the number of visited game states; the search stops with
/// [`SearchError::LimitExceeded`] once it is crossed.
pub struct ResourceLimits {
    pub max_states: u64,
}

impl ResourceLimits {
    pub const UNLIMITED: ResourceLimits = ResourceLimits {
        max_states: u64::MAX,
    };

    pub fn is_unlimited(&self) -> bool {
        self.max_states == u64::MAX
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Running counters tracked during a budgeted search.
pub struct ResourceCounts {
    pub states: u64,
}

#[derive(Debug, thiserror::Error)]
/// Structured errors returned by budgeted search routines.
pub enum SearchError {
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A fully specified game to solve.
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Coord,
    pub piece: PieceKind,
    #[serde(default)]
    pub options: SearchOptions,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl GameConfig {
    pub fn new(rows: i32, cols: i32, start: Coord, piece: PieceKind) -> Self {
        Self {
            rows,
            cols,
            start,
            piece,
            options: SearchOptions::default(),
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check board size and start cell.
    pub fn validate(&self) -> Result<(), GridError> {
        self.grid().map(|_| ())
    }

    /// Build the starting board.
    pub fn grid(&self) -> Result<GridState, GridError> {
        GridState::new(self.rows, self.cols, self.start, self.piece)
    }
}
