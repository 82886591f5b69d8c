//! # proset
//!
//! Engine for Proset, a single-player card puzzle.
//!
//! A board holds randomly generated cards, each a vector of binary dots. The
//! player picks a subset; it is a *Proset* when it is non-empty and every dot
//! appears an even number of times across it.
//!
//! ## Design Principles
//!
//! 1. **Content Identity**: Cards are values. The board never holds two equal
//!    cards, at dealing time or after replacements.
//!
//! 2. **Deterministic**: Seeded ChaCha RNG and a fixed search order, so a seed
//!    reproduces boards, replacements and revealed solutions.
//!
//! 3. **UI-Agnostic**: The engine takes index-addressed gestures and returns
//!    plain results and snapshots; it never renders.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, errors, index sets
//! - `cards`: Cards and the duplicate-free card generator
//! - `parity`: Parity vectors and the validity rule
//! - `search`: Exhaustive, smallest-first solution search
//! - `board`: The board and the player's selection
//! - `game`: Orchestration, feedback timing, results and snapshots
//!
//! ## Example
//!
//! ```
//! use proset::{ProsetConfig, ProsetGame};
//!
//! let mut game = ProsetGame::new(ProsetConfig::default().with_seed(7)).unwrap();
//!
//! let solution = game.reveal_solution();
//! if solution.found {
//!     let result = game.submit().unwrap();
//!     assert!(result.valid);
//!     assert_eq!(game.score(), solution.indices.len() as u64);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod parity;
pub mod search;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameRngState, IndexSet, Indices, ProsetConfig, ProsetError, Result,
};

pub use crate::cards::{Card, CardGenerator};

pub use crate::parity::{is_valid_subset, parity, ParityVector};

pub use crate::search::{count_solutions, find_solution, solutions, Combinations};

pub use crate::board::{Board, Selection};

pub use crate::game::{
    Clock, Feedback, GameEvent, GamePhase, GameSnapshot, GameStats, HintResult, ManualClock,
    ProsetGame, SelectionChanged, SolutionResult, SubmitResult, SystemClock, TimerTicket,
};
