//! Player-facing game: orchestration of board, selection, score and feedback.
//!
//! ## Key Types
//!
//! - `ProsetGame`: Owns all mutable state; entry point for UI gestures
//! - `FeedbackTimer`/`Clock`: Reschedulable expiry of submit feedback
//! - `SubmitResult`, `SolutionResult`, `HintResult`: Gesture results
//! - `GameSnapshot`: Serializable view for renderers

pub mod events;
pub mod feedback;
pub mod state;

pub use events::{GameEvent, GameStats, HintResult, SelectionChanged, SolutionResult, SubmitResult};
pub use feedback::{Clock, Feedback, FeedbackTimer, ManualClock, SystemClock, TimerTicket};
pub use state::{GamePhase, GameSnapshot, ProsetGame};
