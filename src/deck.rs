//! The 52-card deck a round is dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, EmptyDeckError};

/// Position of a card in the unshuffled build order.
const fn build_index(card: Card) -> usize {
    card.suit as usize * Rank::ALL.len() + card.rank as usize
}

/// An ordered deck of unique cards.
///
/// The last element of the sequence is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the standard 52-card deck, unshuffled.
    ///
    /// Cards are laid out suit by suit (clubs, diamonds, hearts, spades),
    /// ace through king within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck that deals `draw_order` front to back.
    ///
    /// The deck need not be complete. Useful for replaying a known sequence
    /// of cards through a round.
    ///
    /// # Errors
    ///
    /// Returns an error if any card appears more than once.
    pub fn stacked<I>(draw_order: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut seen = [false; DECK_SIZE];
        let mut cards = Vec::new();

        for card in draw_order {
            let slot = &mut seen[build_index(card)];
            if *slot {
                return Err(DeckError::DuplicateCard(card));
            }
            *slot = true;
            cards.push(card);
        }

        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffles the deck into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::trace!(cards = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck has no cards left.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
