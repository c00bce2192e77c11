use core::iter::FusedIterator;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Outcome, determine_outcome};

use super::snapshot::DealerSnapshot;
use super::state::Phase;
use super::RoundEngine;

/// The dealer draws while below this total and stands at or above it.
pub const DEALER_STANDS_ON: u16 = 17;

/// One observable step of the dealer's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealerStep {
    /// The hole card has been turned over.
    Reveal(DealerSnapshot),
    /// The dealer drew a card.
    Draw {
        /// The card drawn.
        card: Card,
        /// The dealer's hand after the draw.
        dealer: DealerSnapshot,
    },
    /// The dealer stood or busted and the round is resolved.
    Resolved(Outcome),
}

impl RoundEngine {
    /// Advances the dealer by one draw, or resolves the round once the dealer stands.
    fn dealer_step(&mut self) -> Result<DealerStep, RoundError> {
        if self.dealer.total() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);

            let dealer = DealerSnapshot::from(&self.dealer);
            tracing::debug!(%card, total = dealer.total, "dealer draws");
            return Ok(DealerStep::Draw { card, dealer });
        }

        Ok(DealerStep::Resolved(self.finish_round()))
    }

    fn finish_round(&mut self) -> Outcome {
        let player_total = self.player.total();
        let dealer_total = self.dealer.total();
        let outcome = determine_outcome(player_total, dealer_total);

        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
        tracing::debug!(player_total, dealer_total, ?outcome, "round resolved");

        outcome
    }
}

/// The dealer's turn, played one step per call to [`Iterator::next`].
///
/// Yields [`DealerStep::Reveal`] first, then one [`DealerStep::Draw`] per
/// card, then [`DealerStep::Resolved`]. An error ends the sequence.
///
/// The engine stays mutably borrowed until this value is dropped. Dropping it
/// early plays the rest of the dealer's turn without reporting the steps.
#[derive(Debug)]
#[must_use = "the dealer's turn only advances while the steps are consumed or dropped"]
pub struct DealerPlay<'a> {
    engine: &'a mut RoundEngine,
    revealed: bool,
    done: bool,
}

impl<'a> DealerPlay<'a> {
    pub(super) const fn new(engine: &'a mut RoundEngine) -> Self {
        Self {
            engine,
            revealed: false,
            done: false,
        }
    }

    /// Plays the remaining steps and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw.
    pub fn finish(mut self) -> Result<Outcome, RoundError> {
        for step in self.by_ref() {
            if let DealerStep::Resolved(outcome) = step? {
                return Ok(outcome);
            }
        }
        self.engine.resolve()
    }
}

impl Iterator for DealerPlay<'_> {
    type Item = Result<DealerStep, RoundError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.revealed {
            self.revealed = true;
            return Some(Ok(DealerStep::Reveal(DealerSnapshot::from(
                self.engine.dealer_hand(),
            ))));
        }

        let step = self.engine.dealer_step();
        self.done = matches!(step, Ok(DealerStep::Resolved(_)) | Err(_));
        Some(step)
    }
}

impl FusedIterator for DealerPlay<'_> {}

impl Drop for DealerPlay<'_> {
    fn drop(&mut self) {
        for step in self.by_ref() {
            if let Err(err) = step {
                tracing::warn!(%err, "dealer turn abandoned");
            }
        }
    }
}
