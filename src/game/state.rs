//! Round phase and operation types.

use core::fmt;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been dealt.
    Idle,
    /// Building the deck and dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Dealer reveals the hole card and draws to 17.
    DealerTurn,
    /// Round has ended and the outcome is known.
    Resolved,
}

impl Phase {
    /// Returns whether a new round may be started from this phase.
    #[must_use]
    pub const fn can_start_round(self) -> bool {
        matches!(self, Self::Idle | Self::Resolved)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Resolved => "resolved",
        })
    }
}

/// An engine operation that can be rejected by the phase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Deal a new round.
    StartRound,
    /// Player draws a card.
    Hit,
    /// Player ends their turn.
    Stay,
    /// Read the final outcome.
    Resolve,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartRound => "start a round",
            Self::Hit => "hit",
            Self::Stay => "stay",
            Self::Resolve => "resolve",
        })
    }
}
