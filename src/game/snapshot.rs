//! Read-only views of the table handed to a presentation layer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{DealerHand, Hand};

use super::state::Phase;

/// The player's hand at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSnapshot {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Reduced total.
    pub total: u16,
    /// Whether an ace is still counted as 11.
    pub soft: bool,
}

impl From<&Hand> for HandSnapshot {
    fn from(hand: &Hand) -> Self {
        let value = hand.value();
        Self {
            cards: hand.cards().to_vec(),
            total: value.total,
            soft: value.is_soft(),
        }
    }
}

/// The dealer's hand as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerSnapshot {
    /// Visible cards; excludes the hole card while it is hidden.
    pub cards: Vec<Card>,
    /// Total of the visible cards.
    pub total: u16,
    /// Whether the hole card is still face down.
    pub hole_hidden: bool,
}

impl From<&DealerHand> for DealerSnapshot {
    fn from(hand: &DealerHand) -> Self {
        Self {
            cards: hand.visible_cards().to_vec(),
            total: hand.visible_value().total,
            hole_hidden: !hand.is_hole_revealed() && !hand.is_empty(),
        }
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Player's hand.
    pub player: HandSnapshot,
    /// Dealer's hand.
    pub dealer: DealerSnapshot,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}
