//! Error types for deck and round operations.

use thiserror::Error;

use crate::card::Card;
use crate::game::state::{Operation, Phase};

/// Drawing from a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while building a stacked deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not permitted in the current phase.
    #[error("cannot {operation} while the round is in the {phase} phase")]
    InvalidStateTransition {
        /// The rejected operation.
        operation: Operation,
        /// The phase the engine was in.
        phase: Phase,
    },
    /// The player's hand is bust and hitting a bust hand is disallowed.
    #[error("cannot hit a bust hand")]
    PlayerBust,
    /// The deck ran out of cards mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}
