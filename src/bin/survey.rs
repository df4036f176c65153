use std::process::ExitCode;

use clap::Parser;
use grid_pursuit::chess::piece::PieceKind;
use grid_pursuit::report::{group_thousands, render_survey, verdict_line};
use grid_pursuit::scenario::{MoveOrdering, ResourceLimits, SearchOptions};
use grid_pursuit::search::survey::{survey_board, total_states, SurveyError};
use tracing_subscriber::EnvFilter;

/// Solve the pursuit game for every start cell of a board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board height.
    height: i32,
    /// Board width.
    width: i32,
    /// Piece type: rook, king, queen or knight.
    #[arg(value_parser = parse_piece)]
    piece_type: PieceKind,

    /// Try moves far from the board center first.
    #[arg(long)]
    heuristic: bool,
    /// Skip mirror-equivalent moves near the root.
    #[arg(long)]
    symmetry: bool,
    /// Ordering key: center_distance or mobility. Implies --heuristic.
    #[arg(long, value_parser = parse_ordering)]
    ordering: Option<MoveOrdering>,
    /// Per-start-cell state budget.
    #[arg(long)]
    max_states: Option<u64>,
    /// List every start cell with its verdict and state count.
    #[arg(long)]
    detail: bool,
}

fn parse_piece(s: &str) -> Result<PieceKind, grid_pursuit::chess::piece::UnknownPiece> {
    s.parse()
}

fn parse_ordering(s: &str) -> Result<MoveOrdering, grid_pursuit::scenario::UnknownOrdering> {
    s.parse()
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let options = SearchOptions::default()
        .with_heuristic_ordering(args.heuristic || args.ordering.is_some())
        .with_ordering(args.ordering.unwrap_or_default())
        .with_symmetry_reduction(args.symmetry);
    let limits = args
        .max_states
        .map(|max_states| ResourceLimits { max_states })
        .unwrap_or_default();

    let cells = match survey_board(args.height, args.width, args.piece_type, options, limits) {
        Ok(cells) => cells,
        Err(e @ SurveyError::Grid(_)) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("Survey failed: {e}");
            return ExitCode::from(1);
        }
    };

    println!(
        "Board {}x{}, {} (F = first player wins, S = second player wins)",
        args.height, args.width, args.piece_type
    );
    print!("{}", render_survey(args.height, args.width, &cells));

    if args.detail {
        for c in &cells {
            println!(
                "  {}: {} ({} states)",
                c.start,
                verdict_line(c.result.winner),
                group_thousands(c.result.states_visited)
            );
        }
    }

    let first_wins = cells.iter().filter(|c| c.result.first_player_wins()).count();
    println!("First player wins from {first_wins} of {} start cells", cells.len());
    println!("States visited: {}", group_thousands(total_states(&cells)));

    ExitCode::SUCCESS
}
