//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that deals one round from a freshly
//! shuffled 52-card deck, lets the player hit or stay, plays the dealer out
//! to 17 and decides the [`Outcome`]. Rendering, sound and pacing are left to
//! the caller, which reads [`TableSnapshot`]s and steps through the dealer's
//! turn one [`DealerStep`] at a time.
//!
//! # Example
//!
//! ```
//! use hitstay::{DealerStep, RoundEngine, RoundOptions};
//!
//! let mut engine = RoundEngine::new(RoundOptions::default(), 42);
//! engine.start_round().unwrap();
//! engine.hit().unwrap();
//!
//! for step in engine.stay().unwrap() {
//!     if let DealerStep::Resolved(outcome) = step.unwrap() {
//!         println!("{outcome}");
//!     }
//! }
//! assert!(engine.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, EmptyDeckError, RoundError};
pub use game::{
    DEALER_STANDS_ON, DealerPlay, DealerSnapshot, DealerStep, HandSnapshot, Operation, Phase,
    RoundEngine, TableSnapshot,
};
pub use hand::{BLACKJACK, DealerHand, Hand, HandValue, evaluate_cards};
pub use options::RoundOptions;
pub use result::{Outcome, determine_outcome};
