//! Error types.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ProsetError>;

/// Errors surfaced by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProsetError {
    /// No admissible card vector is left to draw.
    #[error("no admissible card left with {num_dots} dots ({excluded} vectors excluded)")]
    ExhaustedDomain { num_dots: u8, excluded: usize },

    /// Board index outside `0..len`.
    #[error("invalid card index {index} (board has {len} cards)")]
    InvalidIndex { index: usize, len: usize },

    /// Two board positions hold the same card.
    #[error("cards at {first} and {second} are duplicates")]
    DuplicateCard { first: usize, second: usize },

    /// A packed card with dots beyond its width.
    #[error("card mask {mask:#b} does not fit in {dots} dots")]
    InvalidCard { mask: u32, dots: u8 },

    /// A board card has a different dot width than the board.
    #[error("card at {index} has {found} dots, expected {expected}")]
    DotsMismatch { index: usize, expected: u8, found: u8 },

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("num_dots must be in 1..={max}, got {num_dots}")]
    DotsOutOfRange { num_dots: u8, max: u8 },

    #[error("num_cards must be in 1..={max}, got {num_cards}")]
    CardsOutOfRange { num_cards: usize, max: usize },
}
