//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod snapshot;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, DealerPlay, DealerStep};
pub use snapshot::{DealerSnapshot, HandSnapshot, TableSnapshot};
pub use state::{Operation, Phase};

/// A single-player blackjack round engine.
///
/// The engine owns the deck and both hands. A presentation layer calls
/// [`start_round`](Self::start_round), [`hit`](Self::hit) and
/// [`stay`](Self::stay) in response to input and reads snapshots to render.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    /// Cards left to deal this round.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Current phase.
    phase: Phase,
    /// Outcome of the last resolved round.
    outcome: Option<Outcome>,
    /// Engine options.
    options: RoundOptions,
    /// Random number generator used to shuffle each new deck.
    rng: ChaCha8Rng,
}

impl RoundEngine {
    /// Creates an idle engine whose shuffles derive from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstay::{Phase, RoundEngine, RoundOptions};
    ///
    /// let mut engine = RoundEngine::new(RoundOptions::default(), 42);
    /// let table = engine.start_round().unwrap();
    /// assert_eq!(table.phase, Phase::PlayerTurn);
    /// assert_eq!(table.player.cards.len(), 2);
    /// assert!(table.dealer.hole_hidden);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an idle engine that shuffles with the given generator.
    #[must_use]
    pub const fn with_rng(options: RoundOptions, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Deck::empty(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::Idle,
            outcome: None,
            options,
            rng,
        }
    }

    fn ensure_phase(&self, operation: Operation, expected: Phase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    const fn invalid(&self, operation: Operation) -> RoundError {
        RoundError::InvalidStateTransition {
            operation,
            phase: self.phase,
        }
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    ///
    /// Use [`DealerSnapshot`] for what the player may see.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the outcome of the current round once it is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns a view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            phase: self.phase,
            player: HandSnapshot::from(&self.player),
            dealer: DealerSnapshot::from(&self.dealer),
            cards_remaining: self.deck.len(),
        }
    }

    /// Returns the outcome of the resolved round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved.
    pub fn resolve(&self) -> Result<Outcome, RoundError> {
        match (self.phase, self.outcome) {
            (Phase::Resolved, Some(outcome)) => Ok(outcome),
            _ => Err(self.invalid(Operation::Resolve)),
        }
    }

    /// Discards the current round, whatever its phase, and returns to `Idle`.
    ///
    /// The generator is kept, so the next round continues the seeded sequence.
    pub fn reset(&mut self) {
        self.deck = Deck::empty();
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.phase = Phase::Idle;
        tracing::debug!("round reset");
    }
}
