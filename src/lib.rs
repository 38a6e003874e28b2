//! A Crazy Eights rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one game between a player and
//! a computer opponent: dealing, legal-move checks, wild-card suit choice,
//! turn passing, win detection and the opponent's decisions.
//!
//! # Example
//!
//! ```
//! use crazy_eights::{Game, GameOptions, GameStatus};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_new_game();
//!
//! let state = game.state();
//! assert_eq!(state.status, GameStatus::Playing);
//! assert_eq!(state.player_hand.len(), 8);
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
pub mod policy;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Suit};
pub use error::{DealError, DrawError, OpponentError, PlayError, SuitError};
pub use game::{Game, GameState, GameStatus, HAND_SIZE, Party, PendingTurn};
pub use hand::Hand;
pub use options::GameOptions;
pub use policy::{OpponentMove, preferred_suit};
pub use rules::{WILD_RANK, is_legal_play};
