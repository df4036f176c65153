//! Solver for the single-token pursuit game on a rectangular grid.
//!
//! A token moves like a rook, king, queen or knight and may never land on a
//! cell it has visited before. Players alternate; whoever cannot move loses.

pub mod board;
pub mod chess;
pub mod report;
pub mod scenario;
pub mod search;
