//! Game orchestration: board, selection, score and feedback.
//!
//! `ProsetGame` is the single owner of all mutable game state. The UI layer
//! drives it with index-addressed gestures (toggle, submit, reveal, hint) and
//! reads snapshots back; every call runs to completion synchronously.
//!
//! ## Phases
//!
//! - `Idle`: no feedback showing
//! - `Evaluated`: a submit's `Correct`/`Retry` is showing until its delay expires
//!
//! A multi-threaded host must serialize access (e.g. behind a mutex); toggle
//! and submit are read-modify-write sequences.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::events::{
    GameEvent, GameStats, HintResult, SelectionChanged, SolutionResult, SubmitResult,
};
use super::feedback::{Clock, Feedback, FeedbackTimer, SystemClock, TimerTicket};
use crate::board::{Board, Selection};
use crate::cards::{Card, CardGenerator};
use crate::core::{GameRng, GameRngState, IndexSet, Indices, ProsetConfig, Result};
use crate::parity::ParityVector;
use crate::search;

/// Player-facing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Evaluated,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards as 0/1 dot vectors, in board order.
    pub cards: Vec<Vec<u8>>,
    pub selection: Indices,
    /// Parity of the current selection.
    pub guide: Vec<u8>,
    pub score: u64,
    pub feedback: Option<Feedback>,
    pub phase: GamePhase,
}

/// A single-player Proset game.
pub struct ProsetGame<C: Clock = SystemClock> {
    config: ProsetConfig,
    generator: CardGenerator,
    board: Board,
    selection: Selection,
    score: u64,
    rng: GameRng,
    timer: FeedbackTimer,
    clock: C,
    stats: GameStats,
    history: Vector<GameEvent>,
}

impl ProsetGame<SystemClock> {
    /// Start a game on the wall clock.
    pub fn new(config: ProsetConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }

    /// Start a default-configured game with the given board shape.
    pub fn initialize_board(num_cards: usize, num_dots: u8) -> Result<Self> {
        Self::new(ProsetConfig::new(num_cards, num_dots))
    }
}

impl<C: Clock> ProsetGame<C> {
    /// Start a game driven by `clock`.
    pub fn with_clock(config: ProsetConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let generator = CardGenerator::new(config.num_dots, config.forbid_zero);
        let board = Board::generate(config.num_cards, &generator, &mut rng)?;

        info!(
            num_cards = config.num_cards,
            num_dots = config.num_dots,
            seed = rng.seed(),
            "Initialized board"
        );

        Ok(Self {
            timer: FeedbackTimer::new(config.feedback_delay),
            config,
            generator,
            board,
            selection: Selection::new(),
            score: 0,
            rng,
            clock,
            stats: GameStats::default(),
            history: Vector::new(),
        })
    }

    /// Start a game on a known board (puzzles, tests, replays).
    ///
    /// `config.num_cards`/`num_dots` are taken from the board.
    pub fn from_board(mut config: ProsetConfig, board: Board, clock: C) -> Result<Self> {
        config.num_cards = board.len();
        config.num_dots = board.num_dots();
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            timer: FeedbackTimer::new(config.feedback_delay),
            generator: CardGenerator::new(config.num_dots, config.forbid_zero),
            config,
            board,
            selection: Selection::new(),
            score: 0,
            rng,
            clock,
            stats: GameStats::default(),
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &ProsetConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Every player action since the game started or the last
    /// [`take_history`](Self::take_history), oldest first. Cheap to clone.
    ///
    /// Grows by one entry per toggle, clear, submit, reveal and hint.
    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Drain the recorded history, leaving it empty. Stats are kept.
    pub fn take_history(&mut self) -> Vector<GameEvent> {
        std::mem::take(&mut self.history)
    }

    /// RNG state, enough to reproduce every future card draw.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // === Selection ===

    /// Flip whether the card at `index` is selected.
    pub fn toggle(&mut self, index: usize) -> Result<SelectionChanged> {
        self.board.check_index(index)?;
        let now_selected = self.selection.toggle(index);

        debug!(index, now_selected, "Toggled card");
        self.history.push_back(GameEvent::Toggled {
            index,
            selected: now_selected,
        });
        Ok(SelectionChanged { index, now_selected })
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.history.push_back(GameEvent::SelectionCleared);
        }
    }

    // === Submit ===

    /// Check the current selection.
    ///
    /// A Proset scores its size, gets its cards replaced in place and clears
    /// the selection. Anything else (an empty selection included) leaves the
    /// board and selection as they were. Either way fresh feedback is
    /// scheduled, replacing any still-pending expiry.
    pub fn submit(&mut self) -> Result<SubmitResult> {
        let indices = self.selection;
        let valid = self.board.is_valid(indices)?;

        let (replaced, score_delta) = if valid {
            let replaced = self.board.replace(indices, &self.generator, &mut self.rng)?;
            let delta = indices.len() as u64;
            self.score += delta;
            self.selection.clear();
            (replaced, delta)
        } else {
            (Indices::new(), 0)
        };

        let feedback = if valid { Feedback::Correct } else { Feedback::Retry };
        let ticket = self.timer.schedule(feedback, self.clock.now());

        self.stats.submits += 1;
        if valid {
            self.stats.valid_submits += 1;
            self.stats.cards_replaced += score_delta;
        }
        self.history.push_back(GameEvent::Submitted {
            indices: indices.to_indices(),
            valid,
            score_delta,
        });

        debug!(selection = ?indices, valid, score = self.score, "Submitted selection");
        Ok(SubmitResult {
            valid,
            replaced,
            score_delta,
            feedback,
            ticket,
        })
    }

    // === Feedback ===

    /// Feedback currently showing, expiring it if its delay has passed.
    pub fn feedback(&mut self) -> Option<Feedback> {
        self.timer.poll(self.clock.now())
    }

    pub fn phase(&mut self) -> GamePhase {
        match self.feedback() {
            Some(_) => GamePhase::Evaluated,
            None => GamePhase::Idle,
        }
    }

    /// Deliver a host-scheduled expiry. Stale tickets do nothing.
    pub fn expire_feedback(&mut self, ticket: TimerTicket) -> bool {
        self.timer.fire(ticket)
    }

    /// Ticket of the feedback still waiting to expire.
    #[must_use]
    pub fn pending_feedback(&self) -> Option<TimerTicket> {
        self.timer.pending_ticket()
    }

    // === Solutions and guides ===

    /// Replace the selection with the board's first Proset.
    pub fn reveal_solution(&mut self) -> SolutionResult {
        let solution = self.board.find_solution();
        self.selection = solution.unwrap_or_default();

        let indices = self.selection.to_indices();
        let found = solution.is_some();
        self.stats.reveals += 1;
        self.history.push_back(GameEvent::Revealed {
            indices: indices.clone(),
            found,
        });

        debug!(solution = ?self.selection, found, "Revealed solution");
        SolutionResult {
            indices,
            found,
            parity: self.guide(),
        }
    }

    /// Suggest one card to select or deselect. Leaves the selection alone.
    ///
    /// The target is the first Proset, smallest first, that contains the
    /// whole selection. When none does, the hint is to drop a selected card
    /// outside the board's first Proset.
    pub fn hint(&mut self) -> HintResult {
        let hint = self.compute_hint();
        self.stats.hints += 1;
        self.history.push_back(GameEvent::Hinted(hint));
        debug!(?hint, "Gave hint");
        hint
    }

    fn compute_hint(&self) -> HintResult {
        let cards = self.board.cards();
        let selection = self.selection;

        if !selection.is_empty() && self.board.is_valid(selection).unwrap_or(false) {
            return HintResult::AlreadySolved;
        }

        let sel = selection.mask();
        if let Some(target) = search::solutions(cards).find(|s| s.mask() & sel == sel) {
            let missing = IndexSet::from_mask(target.mask() & !sel);
            if let Some(index) = missing.iter().next() {
                return HintResult::Select(index);
            }
        }

        match self.board.find_solution() {
            Some(target) => {
                let extra = IndexSet::from_mask(sel & !target.mask());
                extra
                    .iter()
                    .next()
                    .map_or(HintResult::NoSolution, HintResult::Deselect)
            }
            None => HintResult::NoSolution,
        }
    }

    /// Parity of an arbitrary set of board positions. Repeated indices count once.
    pub fn parity_vector(&self, indices: &[usize]) -> Result<ParityVector> {
        for &index in indices {
            self.board.check_index(index)?;
        }
        self.board.parity(IndexSet::try_from_indices(indices)?)
    }

    /// Parity of the current selection.
    #[must_use]
    pub fn guide(&self) -> ParityVector {
        // The selection only ever holds in-range indices
        self.board
            .parity(self.selection)
            .unwrap_or_else(|_| ParityVector::even(self.board.num_dots()))
    }

    /// Render-ready view of the game.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let feedback = self.feedback();
        GameSnapshot {
            cards: self.board.iter().map(|c| c.to_vec()).collect(),
            selection: self.selection.to_indices(),
            guide: self.guide().to_vec(),
            score: self.score,
            feedback,
            phase: if feedback.is_some() {
                GamePhase::Evaluated
            } else {
                GamePhase::Idle
            },
        }
    }
}
