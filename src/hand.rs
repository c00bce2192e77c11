//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Value of a set of cards after ace reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandValue {
    /// Total with as many aces reduced to 1 as needed to stay at or under 21.
    pub total: u16,
    /// Aces still counted as 11.
    pub soft_aces: u8,
}

impl HandValue {
    /// Returns whether at least one ace is still counted as 11.
    #[must_use]
    pub const fn is_soft(self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.total > BLACKJACK
    }
}

/// Evaluates `cards`, counting every ace as 11 and then reducing one ace
/// at a time by 10 while the total exceeds 21.
#[must_use]
pub fn evaluate_cards(cards: &[Card]) -> HandValue {
    let mut total: u16 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        total += u16::from(card.point_value());
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandValue { total, soft_aces }
}

/// Sum of point values with every ace counted as 11.
fn hard_total(cards: &[Card]) -> u16 {
    cards
        .iter()
        .map(|card| u16::from(card.point_value()))
        .sum()
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the reduced value of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate_cards(&self.cards)
    }

    /// Returns the reduced total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.value().total
    }

    /// Returns the total with every ace counted as 11.
    #[must_use]
    pub fn hard_total(&self) -> u16 {
        hard_total(&self.cards)
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub fn soft_ace_count(&self) -> u8 {
        self.value().soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value().is_soft()
    }

    /// Returns whether the hand is bust (over 21 after all reductions).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card, concealed until [`reveal_hole`](Self::reveal_hole).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand, hole card first.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, hole card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hole card.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the cards the player can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            self.cards.get(1..).unwrap_or_default()
        }
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the value of the visible cards only.
    #[must_use]
    pub fn visible_value(&self) -> HandValue {
        evaluate_cards(self.visible_cards())
    }

    /// Calculates the full value of the hand, hole card included.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate_cards(&self.cards)
    }

    /// Returns the full reduced total.
    #[must_use]
    pub fn total(&self) -> u16 {
        self.value().total
    }

    /// Returns the full total with every ace counted as 11.
    #[must_use]
    pub fn hard_total(&self) -> u16 {
        hard_total(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value().is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
