//! Round outcome.

use core::fmt;

use crate::hand::BLACKJACK;

/// Result of a resolved round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer wins regardless of the dealer's hand.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }

    /// Returns whether the round is a tie.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Self::Tie)
    }
}

/// Formats the end-of-round banner.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = if self.player_won() {
            "YOU WIN!"
        } else if self.dealer_won() {
            "YOU LOSE!"
        } else {
            "TIE!"
        };
        f.write_str(banner)
    }
}

/// Decides the outcome from two reduced totals.
///
/// A player bust is checked first, so it loses even when the dealer also busts.
#[must_use]
pub const fn determine_outcome(player_total: u16, dealer_total: u16) -> Outcome {
    if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total == dealer_total {
        Outcome::Tie
    } else if player_total > dealer_total {
        Outcome::PlayerWins
    } else {
        Outcome::DealerWins
    }
}
