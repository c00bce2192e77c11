//! Shared helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use hitstay::{Card, Deck, Rank, Suit};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test-writer subscriber filtered by `TEST_LOG`, then `RUST_LOG`, then `warn`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deck dealing `draws` in order: dealer hole, dealer up, player, player, then hits and dealer draws.
pub fn deck_from_draws(draws: &[Card]) -> Deck {
    Deck::stacked(draws.iter().copied()).unwrap()
}
