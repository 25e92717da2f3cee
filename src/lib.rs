//! A themed blackjack engine with charge-gated power-ups and optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single-player session:
//! betting, player actions, stepwise dealer play, settlement, and the theme
//! power-up, including settlement corrections made by passive power-ups.
//!
//! # Example
//!
//! ```
//! use syndicate21::{Game, GameOptions, RoundStatus, Theme};
//!
//! let theme = *Theme::by_id("void").expect("catalog theme");
//! let mut game = Game::new(theme, GameOptions::default(), 42);
//! game.place_bet(100).expect("affordable bet");
//!
//! if game.status() == RoundStatus::Playing {
//!     game.stand().expect("player turn");
//! }
//! game.play_dealer().expect("dealer turn");
//! assert_eq!(game.status(), RoundStatus::GameOver);
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
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod services;
pub mod theme;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealerError, EmptyDeck, GameError, PowerUpError};
pub use event::{GameEvent, Seat};
pub use game::{Command, DealerStep, EngineState, Game, PowerUpEffect, RoundStatus};
pub use hand::Hand;
pub use ledger::Ledger;
pub use options::{CHIP_VALUES, GameOptions};
pub use result::{Correction, Outcome, Settlement};
pub use services::{AdviceError, AdviceRequest, AdviceService, EmblemRequest, EmblemService};
pub use theme::{PowerUp, THEMES, Theme, ThemeDisplay, Voice};
