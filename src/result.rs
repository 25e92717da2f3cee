//! Round outcome and settlement records.

use core::fmt;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Player,
    /// Dealer wins (player busts or dealer has higher value).
    Dealer,
    /// Equal scores.
    Push,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
            Self::Push => "push",
        })
    }
}

/// Post-settlement adjustment made by a passive power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Half the bet refunded on a loss.
    Shield {
        /// Credits returned.
        refund: usize,
    },
    /// One extra bet paid on a win.
    Greed {
        /// Credits added on top of the payout.
        bonus: usize,
    },
    /// A raw 22 loss converted into a push.
    Shadow {
        /// Credits returned (the full bet).
        refund: usize,
    },
}

impl Correction {
    /// Credits the correction added to the balance.
    #[must_use]
    pub const fn credit(&self) -> usize {
        match *self {
            Self::Shield { refund } | Self::Shadow { refund } => refund,
            Self::Greed { bonus } => bonus,
        }
    }
}

/// The record of a settled round.
///
/// `provisional` is what the table rules decided; `outcome` is the final
/// result after any passive correction. Their difference is only ever a
/// shadow conversion from dealer to push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Outcome decided by the table rules.
    pub provisional: Outcome,
    /// Outcome after passive corrections.
    pub outcome: Outcome,
    /// The bet the round was played for.
    pub bet: usize,
    /// Standard payout credited to the balance (stake included).
    pub payout: usize,
    /// Charges granted for the win, after the cap.
    pub charges_granted: u8,
    /// Whether the player won with a natural.
    pub blackjack: bool,
    /// Whether the round ended on a player bust.
    pub player_bust: bool,
    /// Player's final score.
    pub player_value: u8,
    /// Dealer's final score.
    pub dealer_value: u8,
    /// Passive correction applied, if any.
    pub correction: Option<Correction>,
}

impl Settlement {
    /// Total credits returned to the balance for this round.
    #[must_use]
    pub fn total_credit(&self) -> usize {
        self.payout + self.correction.map_or(0, |c| c.credit())
    }

    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "credit values fit in isize")]
    pub fn net(&self) -> isize {
        self.total_credit() as isize - self.bet as isize
    }
}
