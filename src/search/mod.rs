//! Solution search: find Prosets on a board.
//!
//! - `Combinations`: lexicographic k-subsets of board indices
//! - `find_solution`: smallest, first-in-order Proset
//! - `solutions` / `count_solutions`: every Proset on the board

pub mod combinations;
pub mod solver;

pub use combinations::Combinations;
pub use solver::{count_solutions, find_solution, solutions, Solutions};
