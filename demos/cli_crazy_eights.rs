//! CLI Crazy Eights example.

#![allow(clippy::missing_docs_in_private_items)]

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use eights::{Card, CardId, Game, GameOptions, GameState, Side, Snapshot, Suit};

fn main() {
    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    game.start_new_game();

    loop {
        let snapshot = game.snapshot();
        print_table(&snapshot);

        if snapshot.is_over() {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.start_new_game();
                    continue;
                }
                _ => break,
            }
        }

        if snapshot.awaiting_suit_choice {
            let Some(suit) = prompt_suit() else {
                break;
            };
            if let Err(err) = game.choose_suit(suit) {
                println!("Suit error: {err}");
            }
            wait_for_opponent(&mut game);
            continue;
        }

        let input = prompt_line("Cards to play (e.g. 1 3), 'd' to draw: ");
        match input.as_str() {
            "q" | "quit" => break,
            "n" | "new" => game.start_new_game(),
            "d" | "draw" => match game.draw_card() {
                Ok(count) => println!("You drew {count} card(s)."),
                Err(err) => println!("Draw error: {err}"),
            },
            _ => match parse_selection(&input, &snapshot.player_hand) {
                Some(selection) => {
                    if let Err(err) = game.play_cards(&selection) {
                        println!("Play error: {err}");
                    }
                }
                None => println!("Please enter card numbers from your hand."),
            },
        }

        wait_for_opponent(&mut game);
    }

    println!("Goodbye.");
}

/// Sleeps through deferred effects until the player can act again.
fn wait_for_opponent(game: &mut Game) {
    while let Some(due) = game.next_due() {
        let delay = due.saturating_sub(game.now());
        thread::sleep(Duration::from_millis(delay));
        game.advance(delay);

        if let Some(message) = game.message() {
            println!("{message}");
        }
        if game.state() == GameState::GameOver {
            break;
        }
    }
}

fn parse_selection(input: &str, hand: &[Card]) -> Option<Vec<CardId>> {
    let selection = input
        .split_whitespace()
        .map(|token| {
            let index = token.parse::<usize>().ok()?;
            hand.get(index.checked_sub(1)?).map(|card| card.id)
        })
        .collect::<Option<Vec<_>>>()?;

    (!selection.is_empty()).then_some(selection)
}

fn prompt_suit() -> Option<Suit> {
    loop {
        match prompt_line("Choose a suit (h/d/c/s): ").as_str() {
            "h" | "hearts" => return Some(Suit::Hearts),
            "d" | "diamonds" => return Some(Suit::Diamonds),
            "c" | "clubs" => return Some(Suit::Clubs),
            "s" | "spades" => return Some(Suit::Spades),
            "q" | "quit" => return None,
            _ => println!("Please enter h, d, c or s."),
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

fn print_table(snapshot: &Snapshot) {
    println!();
    if let Some(active) = &snapshot.active_card {
        let wild = snapshot
            .wild_suit
            .map(|suit| format!(" (suit is now {suit})"))
            .unwrap_or_default();
        println!("Active card: {}{wild}", format_card(active));
    }
    println!(
        "Opponent holds {} card(s), deck has {}",
        snapshot.opponent_hand_count, snapshot.deck_remaining
    );
    if snapshot.pending_pickup > 0 {
        println!("Pending pickup: {}", snapshot.pending_pickup);
    }
    if let Some(message) = &snapshot.message {
        println!("{message}");
    }

    let hand = snapshot
        .player_hand
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}:{}", i + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join("  ");
    println!("Your hand: {hand}");

    if let Some(label) = snapshot.winner_label() {
        println!("{label}!");
    } else if snapshot.turn == Side::Opponent {
        println!("Opponent is thinking...");
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{suit}", card.rank), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}
