//! Core engine types: configuration, RNG, errors, index sets.
//!
//! Everything else in the crate is built on these.

pub mod config;
pub mod error;
pub mod index_set;
pub mod rng;

pub use config::{
    ProsetConfig, DEFAULT_FEEDBACK_DELAY, DEFAULT_NUM_CARDS, DEFAULT_NUM_DOTS, MAX_CARDS, MAX_DOTS,
};
pub use error::{ConfigError, ProsetError, Result};
pub use index_set::{IndexSet, IndexSetIter, Indices, INDEX_CAPACITY};
pub use rng::{GameRng, GameRngState};
