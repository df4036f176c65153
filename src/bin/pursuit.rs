use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grid_pursuit::board::coord::Coord;
use grid_pursuit::chess::piece::PieceKind;
use grid_pursuit::report::{render_result, SearchReport};
use grid_pursuit::scenario::{GameConfig, MoveOrdering, ResourceLimits, SearchOptions};
use grid_pursuit::search::minimax::solve_with_limits;
use tracing_subscriber::EnvFilter;

/// Decide who wins the token pursuit game on a rectangular board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Board height.
    #[arg(required_unless_present = "config")]
    height: Option<i32>,
    /// Board width.
    #[arg(required_unless_present = "config")]
    width: Option<i32>,
    /// Initial row of the token.
    #[arg(required_unless_present = "config")]
    initial_row: Option<i32>,
    /// Initial column of the token.
    #[arg(required_unless_present = "config")]
    initial_col: Option<i32>,
    /// Piece type: rook, king, queen or knight.
    #[arg(required_unless_present = "config", value_parser = parse_piece)]
    piece_type: Option<PieceKind>,

    /// Read the game from a JSON file instead of positional arguments.
    #[arg(long, conflicts_with_all = ["height", "width", "initial_row", "initial_col", "piece_type"])]
    config: Option<PathBuf>,

    /// Print every explored node and move.
    #[arg(long)]
    verbose: bool,
    /// Try moves far from the board center first.
    #[arg(long)]
    heuristic: bool,
    /// Skip mirror-equivalent moves near the root.
    #[arg(long)]
    symmetry: bool,
    /// Ordering key: center_distance or mobility. Implies --heuristic.
    #[arg(long, value_parser = parse_ordering)]
    ordering: Option<MoveOrdering>,
    /// Abort once this many states have been visited.
    #[arg(long)]
    max_states: Option<u64>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_piece(s: &str) -> Result<PieceKind, grid_pursuit::chess::piece::UnknownPiece> {
    s.parse()
}

fn parse_ordering(s: &str) -> Result<MoveOrdering, grid_pursuit::scenario::UnknownOrdering> {
    s.parse()
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut cfg = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => {
                let (Some(rows), Some(cols), Some(row), Some(col), Some(piece)) = (
                    self.height,
                    self.width,
                    self.initial_row,
                    self.initial_col,
                    self.piece_type,
                ) else {
                    anyhow::bail!("board size, initial position and piece type are required");
                };
                GameConfig::new(rows, cols, Coord::new(row, col), piece)
            }
        };

        cfg.options = SearchOptions {
            verbose_trace: cfg.options.verbose_trace || self.verbose,
            heuristic_ordering: cfg.options.heuristic_ordering
                || self.heuristic
                || self.ordering.is_some(),
            symmetry_reduction: cfg.options.symmetry_reduction || self.symmetry,
            ordering: self.ordering.unwrap_or(cfg.options.ordering),
        };
        if let Some(max_states) = self.max_states {
            cfg.limits = ResourceLimits { max_states };
        }
        Ok(cfg)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match args.game_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(2);
        }
    };
    init_logging(cfg.options.verbose_trace);

    let mut grid = match cfg.grid() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if !args.json {
        print!("{grid}");
    }

    let result = match solve_with_limits(&mut grid, cfg.options, cfg.limits) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {e}");
            return ExitCode::from(1);
        }
    };

    if args.json {
        let report = SearchReport::new(cfg, result);
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode result: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        print!("{}", render_result(&result));
    }

    ExitCode::SUCCESS
}
