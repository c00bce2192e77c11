//! Property-based tests for deck, hand and round invariants.

mod common;

use std::collections::HashSet;

use hitstay::{
    BLACKJACK, Card, DEALER_STANDS_ON, DECK_SIZE, DealerStep, Deck, Outcome, Phase, Rank,
    RoundEngine, RoundOptions, Suit, determine_outcome, evaluate_cards,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by_key(|card| (card.suit, card.rank));
    cards
}

/// Plays a seeded round, hitting `hits` times, and returns the outcome.
fn play_round(seed: u64, hits: usize) -> Outcome {
    let mut engine = RoundEngine::new(RoundOptions::default(), seed);
    engine.start_round().unwrap();
    for _ in 0..hits {
        engine.hit().unwrap();
    }
    engine.stay().unwrap().finish().unwrap()
}

#[test]
fn fresh_deck_is_unique() {
    let deck = Deck::new();
    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
}

proptest! {
    /// Property: Shuffling only reorders the cards.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let original = Deck::new();
        let mut shuffled = original.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(sorted(shuffled.cards()), sorted(original.cards()));
    }

    /// Property: Drawing n cards leaves 52 - n and never repeats a card.
    #[test]
    fn prop_draws_shrink_deck(seed in any::<u64>(), n in 0..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut drawn = HashSet::new();
        for _ in 0..n {
            prop_assert!(drawn.insert(deck.draw().unwrap()));
        }
        prop_assert_eq!(deck.len(), DECK_SIZE - n);
    }

    /// Property: Ace reduction only reduces while over 21, one ace at a time.
    #[test]
    fn prop_ace_reduction(cards in prop::collection::vec(any_card(), 0..=DECK_SIZE)) {
        let value = evaluate_cards(&cards);
        let hard: u32 = cards.iter().map(|card| u32::from(card.point_value())).sum();
        let aces = cards.iter().filter(|card| card.is_ace()).count() as u32;
        let reduced = aces - u32::from(value.soft_aces);

        prop_assert_eq!(u32::from(value.total), hard - 10 * reduced);
        if value.is_soft() {
            prop_assert!(value.total <= BLACKJACK);
        }
        if value.total > BLACKJACK {
            prop_assert_eq!(value.soft_aces, 0);
        }
        if reduced > 0 {
            prop_assert!(u32::from(value.total) + 10 > u32::from(BLACKJACK));
        }
    }

    /// Property: The dealer never draws at 17 or more and always ends at 17 or more.
    #[test]
    fn prop_dealer_stands_on_seventeen(seed in any::<u64>(), hits in 0..3usize) {
        let mut engine = RoundEngine::new(RoundOptions::default(), seed);
        engine.start_round().unwrap();
        for _ in 0..hits {
            engine.hit().unwrap();
        }

        let mut total = engine.dealer_hand().total();
        let mut outcome = None;
        for step in engine.stay().unwrap() {
            match step.unwrap() {
                DealerStep::Reveal(dealer) => {
                    prop_assert_eq!(dealer.total, total);
                }
                DealerStep::Draw { dealer, .. } => {
                    prop_assert!(total < DEALER_STANDS_ON);
                    total = dealer.total;
                }
                DealerStep::Resolved(result) => outcome = Some(result),
            }
        }

        prop_assert!(total >= DEALER_STANDS_ON);
        prop_assert_eq!(engine.phase(), Phase::Resolved);
        prop_assert_eq!(outcome, engine.outcome());
        prop_assert_eq!(
            engine.resolve().unwrap(),
            determine_outcome(engine.player_hand().total(), engine.dealer_hand().total())
        );
    }

    /// Property: The same dealt sequence always resolves the same way.
    #[test]
    fn prop_outcome_is_deterministic(seed in any::<u64>(), hits in 0..3usize) {
        prop_assert_eq!(play_round(seed, hits), play_round(seed, hits));
    }

    /// Property: A busted player loses whatever the dealer holds.
    #[test]
    fn prop_player_bust_always_loses(player in 22u16..400, dealer in 0u16..400) {
        prop_assert_eq!(determine_outcome(player, dealer), Outcome::PlayerBust);
    }
}
