//! Error types for game operations.

use thiserror::Error;

/// The deck ran out mid-round.
///
/// A fresh 52-card deck per round makes this unreachable in normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeck;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Not enough cards to deal.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during player actions and round control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur when activating a power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerUpError {
    /// Invalid game state for activation.
    #[error("invalid game state for a power-up")]
    InvalidState,
    /// The power-up was already used this round.
    #[error("power-up already used this round")]
    AlreadyUsed,
    /// Not enough charges to pay the cost.
    #[error("need {needed} charges")]
    InsufficientCharges {
        /// Charge cost of the power-up.
        needed: u8,
        /// Charges currently held.
        available: u8,
    },
    /// Nothing to rewind.
    #[error("cannot rewind further")]
    RewindUnavailable,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeck),
}

/// Any error a [`Command`](crate::game::Command) can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Power-up activation failed.
    #[error(transparent)]
    PowerUp(#[from] PowerUpError),
}
