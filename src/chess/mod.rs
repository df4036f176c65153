//! Piece movement rules.

pub mod movegen;
pub mod piece;
