//! Game-tree search (minimax with symmetry reduction and move ordering).

pub mod minimax;
pub mod ordering;
pub mod resources;
pub mod survey;
pub mod symmetry;
pub mod trace;
