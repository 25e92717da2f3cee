//! Round status and the engine snapshot.

use alloc::string::String;
use core::fmt;

use crate::hand::Hand;
use crate::ledger::Ledger;
use crate::result::{Outcome, Settlement};

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Awaiting a wager.
    Betting,
    /// Waiting for player actions.
    Playing,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled.
    GameOver,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Betting => "betting",
            Self::Playing => "playing",
            Self::DealerTurn => "dealerTurn",
            Self::GameOver => "gameOver",
        })
    }
}

/// Everything the presentation layer needs to render a session.
///
/// Session-scoped data (balance, charges) lives in the ledger and survives
/// [`Game::start_round`](crate::Game::start_round); everything else is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Current status.
    pub status: RoundStatus,
    /// 1-based round counter.
    pub round: u32,
    /// Player's hand.
    pub player: Hand,
    /// Dealer's hand.
    pub dealer: Hand,
    /// Balance, bet and charges.
    pub ledger: Ledger,
    /// Line to show the player.
    pub message: String,
    /// Whether the theme power-up has fired this round.
    pub power_up_used: bool,
    /// Settlement record once the round is over.
    pub settlement: Option<Settlement>,
    /// Whether passive corrections have run for this settlement.
    pub corrections_applied: bool,
    /// Latest oracle advice.
    pub advice: Option<String>,
}

impl EngineState {
    pub(super) fn new(ledger: Ledger) -> Self {
        Self {
            status: RoundStatus::Betting,
            round: 1,
            player: Hand::new(),
            dealer: Hand::new(),
            ledger,
            message: String::from(super::MSG_PLACE_BET),
            power_up_used: false,
            settlement: None,
            corrections_applied: false,
            advice: None,
        }
    }

    /// Final outcome, once settled.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.settlement.map(|settlement| settlement.outcome)
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the active bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.ledger.bet()
    }

    /// Returns the current charges.
    #[must_use]
    pub const fn charges(&self) -> u8 {
        self.ledger.charges()
    }
}
