//! Board and selection.
//!
//! The board owns the cards in play; a selection is the player's current set
//! of picked board positions.

pub mod board;

pub use board::Board;

/// The player's picked board positions. Order is irrelevant.
pub type Selection = crate::core::IndexSet;
