//! Transition events for observers such as audio and rendering.

use crate::card::Card;
use crate::result::{Correction, Outcome};
use crate::theme::PowerUp;

/// Which side of the table a card went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Something that happened to the round.
///
/// The engine queues one event per transition; drain them with
/// [`Game::drain_events`](crate::Game::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round is waiting for a bet.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// A bet was accepted.
    BetPlaced {
        /// Amount wagered.
        amount: usize,
    },
    /// A card was dealt (face down if it is the hole card).
    CardDealt {
        /// Receiving seat.
        seat: Seat,
        /// The card.
        card: Card,
    },
    /// A card left the player's hand.
    CardDiscarded {
        /// The card.
        card: Card,
    },
    /// The dealer's hole card was turned face up.
    HoleCardRevealed {
        /// The card.
        card: Card,
    },
    /// The dealer started drawing.
    DealerTurnStarted,
    /// The round was settled.
    RoundSettled {
        /// Outcome after corrections.
        outcome: Outcome,
        /// Total credits returned to the balance.
        credit: usize,
    },
    /// Charges were added to the meter.
    ChargesEarned {
        /// Charges added.
        amount: u8,
        /// Meter after the grant.
        total: u8,
    },
    /// A power-up was paid for and fired.
    PowerUpActivated {
        /// The power-up.
        power_up: PowerUp,
        /// Charges spent.
        cost: u8,
    },
    /// A passive power-up adjusted the settlement.
    CorrectionApplied {
        /// The adjustment.
        correction: Correction,
    },
    /// A bust was taken back and the round reopened.
    RoundReopened,
}
