//! Game configuration.
//!
//! A Proset game is shaped by a handful of constants: how many cards are on
//! the board, how many dots (attributes) each card carries, whether the blank
//! card may appear, and how long submit feedback stays visible.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported number of dots per card.
pub const MAX_DOTS: u8 = 16;

/// Largest supported board size.
///
/// Solution search visits up to `2^num_cards - 1` subsets.
pub const MAX_CARDS: usize = 16;

/// Default number of cards on the board.
pub const DEFAULT_NUM_CARDS: usize = 7;

/// Default number of dots per card.
pub const DEFAULT_NUM_DOTS: u8 = 6;

/// Default time a `Correct`/`Retry` message stays up.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Proset game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsetConfig {
    /// Number of cards on the board.
    pub num_cards: usize,

    /// Number of binary attributes per card.
    pub num_dots: u8,

    /// Reject the all-zero (blank) card during generation.
    pub forbid_zero: bool,

    /// How long submit feedback stays before expiring back to idle.
    pub feedback_delay: Duration,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ProsetConfig {
    fn default() -> Self {
        Self {
            num_cards: DEFAULT_NUM_CARDS,
            num_dots: DEFAULT_NUM_DOTS,
            forbid_zero: true,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            seed: None,
        }
    }
}

impl ProsetConfig {
    /// Create a config with the given board shape and default everything else.
    pub fn new(num_cards: usize, num_dots: u8) -> Self {
        Self {
            num_cards,
            num_dots,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Allow or forbid the blank card.
    #[must_use]
    pub fn with_forbid_zero(mut self, forbid: bool) -> Self {
        self.forbid_zero = forbid;
        self
    }

    /// Set the feedback expiry delay.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Check the board shape is within supported bounds.
    ///
    /// Whether the dot domain can actually hold `num_cards` distinct cards is
    /// left to the generator, which reports `ExhaustedDomain`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_dots == 0 || self.num_dots > MAX_DOTS {
            return Err(ConfigError::DotsOutOfRange {
                num_dots: self.num_dots,
                max: MAX_DOTS,
            });
        }
        if self.num_cards == 0 || self.num_cards > MAX_CARDS {
            return Err(ConfigError::CardsOutOfRange {
                num_cards: self.num_cards,
                max: MAX_CARDS,
            });
        }
        Ok(())
    }
}
