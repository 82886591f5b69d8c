//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use proset::{Board, Card, ManualClock, ProsetConfig, ProsetGame};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Seeded default game on a hand-driven clock.
pub fn seeded_game(seed: u64) -> ProsetGame<ManualClock> {
    init_logging();
    ProsetGame::with_clock(ProsetConfig::default().with_seed(seed), ManualClock::new()).unwrap()
}

/// Game on a fixed board.
pub fn game_on(board: Board) -> ProsetGame<ManualClock> {
    init_logging();
    ProsetGame::from_board(ProsetConfig::default().with_seed(1), board, ManualClock::new()).unwrap()
}

/// Board from 0/1 rows.
pub fn board(rows: &[&[u8]]) -> Board {
    Board::from_cards(rows.iter().map(|r| Card::from_bits(r)).collect()).unwrap()
}
