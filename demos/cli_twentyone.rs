//! CLI twenty-one example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Action, Card, ExternalPolicy, InputSource, Participant, ParticipantView, Role, Round, Suit,
    TableObserver,
};

/// Reads hit/stay choices from stdin, retrying until the input is valid.
struct StdinInput;

impl InputSource for StdinInput {
    fn request_choice(&mut self) -> Action {
        loop {
            match prompt_line("Action ([h]it / [s]tay): ").as_str() {
                "h" | "hit" => return Action::Hit,
                "s" | "stay" | "stand" => return Action::Stay,
                _ => println!("Please enter 'h' or 's'."),
            }
        }
    }
}

/// Prints each participant snapshot the engine reports.
struct TerminalTable;

impl TableObserver for TerminalTable {
    fn show(&mut self, view: &ParticipantView<'_>) {
        let cards = view
            .cards
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        let bust = if view.busted { " BUST" } else { "" };
        println!("{}: {} | total {}{}", view.name, cards, view.total, bust);
    }
}

fn main() {
    env_logger::init();
    println!("Twenty-one CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let participants = vec![
        Participant::new(
            "You",
            Role::Player,
            0,
            Box::new(ExternalPolicy::new(StdinInput)),
        ),
        Participant::dealer("Dealer", 1),
    ];
    let mut round = Round::new(participants, seed);

    loop {
        println!();
        match round.play(&mut TerminalTable) {
            Ok(Some(winner)) => {
                println!("{} wins with {}.", winner.name(), winner.total());
            }
            Ok(None) => println!("No winner this round."),
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => round.reset(),
            _ => {
                println!("Goodbye.");
                break;
            }
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

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
