//! Results handed back to the UI layer, and the move history.

use serde::{Deserialize, Serialize};

use super::feedback::{Feedback, TimerTicket};
use crate::core::Indices;
use crate::parity::ParityVector;

/// Result of toggling a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub index: usize,
    /// Whether the card is selected after the toggle.
    pub now_selected: bool,
}

/// Result of submitting the current selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub valid: bool,
    /// Positions that received new cards, ascending. Empty when invalid.
    pub replaced: Indices,
    /// Points gained; the selection size when valid, else 0.
    pub score_delta: u64,
    pub feedback: Feedback,
    /// Expiry ticket for hosts that run their own delayed callbacks.
    pub ticket: TimerTicket,
}

/// Result of revealing a solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionResult {
    /// The new selection. Empty when no solution exists.
    pub indices: Indices,
    /// False means "no solution", never "empty solution".
    pub found: bool,
    /// Guide parity of the new selection.
    pub parity: ParityVector,
}

/// Result of asking for a single-card hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintResult {
    /// Selecting this card moves toward the smallest Proset containing the selection.
    Select(usize),
    /// No Proset contains the selection; deselecting this card helps.
    Deselect(usize),
    /// The current selection is already a Proset.
    AlreadySolved,
    /// The board has no Proset at all.
    NoSolution,
}

/// One recorded player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Toggled {
        index: usize,
        selected: bool,
    },
    Submitted {
        indices: Indices,
        valid: bool,
        score_delta: u64,
    },
    SelectionCleared,
    Revealed {
        indices: Indices,
        found: bool,
    },
    Hinted(HintResult),
}

/// Running counters for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub submits: u64,
    pub valid_submits: u64,
    pub cards_replaced: u64,
    pub reveals: u64,
    pub hints: u64,
}

impl GameStats {
    /// Fraction of submits that were valid (0.0 before the first submit).
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.submits == 0 {
            0.0
        } else {
            self.valid_submits as f64 / self.submits as f64
        }
    }
}
