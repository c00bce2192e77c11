//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hitstay::{
    Card, DealerSnapshot, DealerStep, HandSnapshot, Phase, RoundEngine, RoundOptions, Suit,
    TableSnapshot,
};
use tracing_subscriber::EnvFilter;

const DEALER_PACE: Duration = Duration::from_millis(700);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut engine = RoundEngine::new(RoundOptions::default(), seed);

    loop {
        match engine.start_round() {
            Ok(table) => print_table(&table),
            Err(err) => {
                println!("Deal error: {err}");
                engine.reset();
                continue;
            }
        }

        while engine.phase() == Phase::PlayerTurn {
            println!(
                "Actions: {} {} {}",
                colorize("[h]it", "32"),
                colorize("[s]tay", "32"),
                colorize("[q]uit", "90")
            );

            match prompt_line("Action: ").as_str() {
                "h" | "hit" => match engine.hit() {
                    Ok(hand) => println!("You: {}", format_hand(&hand)),
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stay" => play_dealer(&mut engine),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        if engine.phase() != Phase::Resolved {
            engine.reset();
        }

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

fn play_dealer(engine: &mut RoundEngine) {
    let play = match engine.stay() {
        Ok(play) => play,
        Err(err) => {
            println!("Action error: {err}");
            return;
        }
    };

    for step in play {
        match step {
            Ok(DealerStep::Reveal(dealer)) => {
                println!("Dealer reveals: {}", format_dealer(&dealer));
            }
            Ok(DealerStep::Draw { card, dealer }) => {
                thread::sleep(DEALER_PACE);
                println!("Dealer draws {}: {}", format_card(&card), format_dealer(&dealer));
            }
            Ok(DealerStep::Resolved(outcome)) => {
                let code = if outcome.player_won() {
                    "32"
                } else if outcome.dealer_won() {
                    "31"
                } else {
                    "33"
                };
                println!("\n{}\n", colorize(&outcome.to_string(), code));
            }
            Err(err) => println!("Dealer error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &TableSnapshot) {
    println!("\nDeck: {} cards remaining", table.cards_remaining);
    println!("Dealer: {}", format_dealer(&table.dealer));
    println!("You: {}\n", format_hand(&table.player));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerSnapshot) -> String {
    let mut parts: Vec<String> = Vec::new();
    if dealer.hole_hidden {
        parts.push("??".to_string());
    }
    parts.extend(dealer.cards.iter().map(format_card));
    format!("{} (value {})", parts.join(" "), dealer.total)
}

fn format_hand(hand: &HandSnapshot) -> String {
    let cards = hand
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    let soft = if hand.soft { " soft" } else { "" };
    format!("{cards} (value {}{soft})", hand.total)
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(
        &format!("{}{}", card.rank.label(), card.suit.symbol()),
        color_code,
    )
}
