//! A two-player Crazy Eights rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals, validates and applies
//! plays, resolves special cards (twos and the queen of spades force a
//! pickup, fours and aces skip a turn, eights are wild), runs a simple
//! computer opponent, and detects the winner. Deferred effects run on a
//! logical clock driven by [`Game::advance`], so a presentation layer
//! decides how long to wait between moves.
//!
//! # Example
//!
//! ```
//! use eights::{Game, GameOptions, Side};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_new_game();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.player_hand.len(), 8);
//! assert_eq!(snapshot.opponent_hand_count, 8);
//! assert_eq!(snapshot.turn, Side::Player);
//!
//! // Draw instead of playing, then let the opponent answer.
//! game.draw_card().unwrap();
//! game.run_pending();
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
pub mod opponent;
pub mod options;
pub mod rules;
pub mod snapshot;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DrawError, PlayError, SuitError};
pub use game::{Game, GameState, Layout, Side, Task, TaskKind};
pub use hand::Hand;
pub use opponent::OpponentMove;
pub use options::GameOptions;
pub use rules::{Effect, PlayContext, can_play};
pub use snapshot::Snapshot;
