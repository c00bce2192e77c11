use crate::deck::Deck;
use crate::error::RoundError;

use super::dealer::DealerPlay;
use super::snapshot::{HandSnapshot, TableSnapshot};
use super::state::{Operation, Phase};
use super::RoundEngine;

impl RoundEngine {
    fn ensure_can_start(&self) -> Result<(), RoundError> {
        if self.phase.can_start_round() {
            Ok(())
        } else {
            Err(self.invalid(Operation::StartRound))
        }
    }

    /// Builds and shuffles a fresh deck, then deals the opening hands.
    ///
    /// The dealer receives a hidden hole card and a visible up card, then
    /// the player receives two visible cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<TableSnapshot, RoundError> {
        self.ensure_can_start()?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.deal(deck)
    }

    /// Deals the opening hands from `deck` as given, without shuffling.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, or if the deck
    /// holds fewer than four cards. In the latter case the round is dead
    /// and must be discarded with [`reset`](Self::reset).
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<TableSnapshot, RoundError> {
        self.ensure_can_start()?;
        self.deal(deck)
    }

    fn deal(&mut self, deck: Deck) -> Result<TableSnapshot, RoundError> {
        self.phase = Phase::Dealing;
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;

        // Hole card first, then the up card.
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.player.add_card(card);
        }

        self.phase = Phase::PlayerTurn;
        tracing::debug!(
            player = self.player.total(),
            dealer_up = self.dealer.visible_value().total,
            remaining = self.deck.len(),
            "round dealt"
        );

        Ok(self.snapshot())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 does not end the turn; the bust is reported when the
    /// round resolves after [`stay`](Self::stay).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    /// Returns [`RoundError::PlayerBust`] if the hand is bust and
    /// [`RoundOptions::allow_hit_after_bust`](crate::RoundOptions::allow_hit_after_bust)
    /// is off.
    pub fn hit(&mut self) -> Result<HandSnapshot, RoundError> {
        self.ensure_phase(Operation::Hit, Phase::PlayerTurn)?;

        if !self.options.allow_hit_after_bust && self.player.is_bust() {
            return Err(RoundError::PlayerBust);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        let snapshot = HandSnapshot::from(&self.player);
        tracing::debug!(%card, total = snapshot.total, soft = snapshot.soft, "player hit");
        Ok(snapshot)
    }

    /// Player action: Stay (end the turn).
    ///
    /// Reveals the hole card and hands back the dealer's play as a lazy
    /// sequence of steps ending in the outcome. The dealer plays out its
    /// hand even if the player is bust.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<DealerPlay<'_>, RoundError> {
        self.ensure_phase(Operation::Stay, Phase::PlayerTurn)?;

        self.phase = Phase::DealerTurn;
        self.dealer.reveal_hole();
        tracing::debug!(
            player = self.player.total(),
            dealer = self.dealer.total(),
            "player stays"
        );

        Ok(DealerPlay::new(self))
    }
}
