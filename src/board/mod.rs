//! Board primitives.
//!
//! - [`coord`]: `(row, col)` cells with lexicographic ordering.
//! - [`visited`]: a packed bitmap of visited cells.
//! - [`grid`]: the mutable game board with apply / undo and scoped moves.

pub mod coord;
pub mod grid;
pub mod visited;
