//! Parity engine: per-dot parity and the Proset validity rule.

pub mod engine;
pub mod vector;

pub use engine::{board_dots, check_indices, is_valid_subset, parity, parity_of};
pub use vector::ParityVector;
