//! Balance, wager and charge bookkeeping.

use crate::error::{BetError, PowerUpError};
use crate::result::Outcome;

/// Charges granted for a natural blackjack win.
pub const BLACKJACK_CHARGES: u8 = 2;
/// Charges granted for any other win.
pub const WIN_CHARGES: u8 = 1;

/// Standard payout for a settled bet, stake included.
///
/// A natural pays `floor(bet * 2.5)`, other wins pay even money, a push
/// returns the stake and a loss pays nothing.
#[must_use]
pub const fn payout(outcome: Outcome, blackjack: bool, bet: usize) -> usize {
    match outcome {
        Outcome::Dealer => 0,
        Outcome::Push => bet,
        Outcome::Player if blackjack => bet * 5 / 2,
        Outcome::Player => bet * 2,
    }
}

/// What [`Ledger::settle`] paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    /// Credits added to the balance.
    pub amount: usize,
    /// Charges added after the cap.
    pub charges: u8,
}

/// Tracks the session balance, the active bet and the charge meter.
///
/// Balance and charges persist across rounds; the bet is round-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: usize,
    bet: usize,
    charges: u8,
    max_charges: u8,
}

impl Ledger {
    /// Creates a ledger. `charges` is clamped to `max_charges`.
    #[must_use]
    pub fn new(balance: usize, charges: u8, max_charges: u8) -> Self {
        Self {
            balance,
            bet: 0,
            charges: charges.min(max_charges),
            max_charges,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the active bet (0 between rounds).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the current charges.
    #[must_use]
    pub const fn charges(&self) -> u8 {
        self.charges
    }

    /// Returns the charge cap.
    #[must_use]
    pub const fn max_charges(&self) -> u8 {
        self.max_charges
    }

    /// Moves `amount` from the balance into the active bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance. The
    /// ledger is unchanged on error.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Forgets the active bet at the start of a new round.
    pub const fn clear_bet(&mut self) {
        self.bet = 0;
    }

    /// Pays out the active bet for `outcome` and grants win charges.
    ///
    /// Must be called once per round.
    pub fn settle(&mut self, outcome: Outcome, blackjack: bool) -> Payout {
        let amount = payout(outcome, blackjack, self.bet);
        self.balance += amount;

        let charges = match outcome {
            Outcome::Player if blackjack => self.grant_charges(BLACKJACK_CHARGES),
            Outcome::Player => self.grant_charges(WIN_CHARGES),
            Outcome::Dealer | Outcome::Push => 0,
        };

        Payout { amount, charges }
    }

    /// Undoes a [`Ledger::settle`] call.
    pub fn revert(&mut self, payout: Payout) {
        self.balance = self.balance.saturating_sub(payout.amount);
        self.charges = self.charges.saturating_sub(payout.charges);
    }

    /// Adds credits outside the standard payout.
    pub const fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Adds up to `amount` charges without exceeding the cap. Returns how
    /// many were actually added.
    pub fn grant_charges(&mut self, amount: u8) -> u8 {
        let before = self.charges;
        self.charges = self.charges.saturating_add(amount).min(self.max_charges);
        self.charges - before
    }

    /// Returns whether `cost` charges are available.
    #[must_use]
    pub const fn can_spend(&self, cost: u8) -> bool {
        self.charges >= cost
    }

    /// Deducts `cost` charges.
    ///
    /// # Errors
    ///
    /// Returns [`PowerUpError::InsufficientCharges`] without touching the
    /// meter if fewer than `cost` charges are held.
    pub const fn spend_charges(&mut self, cost: u8) -> Result<(), PowerUpError> {
        if !self.can_spend(cost) {
            return Err(PowerUpError::InsufficientCharges {
                needed: cost,
                available: self.charges,
            });
        }

        self.charges -= cost;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_table() {
        assert_eq!(payout(Outcome::Dealer, false, 100), 0);
        assert_eq!(payout(Outcome::Push, false, 100), 100);
        assert_eq!(payout(Outcome::Player, false, 100), 200);
        assert_eq!(payout(Outcome::Player, true, 100), 250);
        assert_eq!(payout(Outcome::Player, true, 15), 37);
    }

    #[test]
    fn bet_requires_positive_affordable_amount() {
        let mut ledger = Ledger::new(50, 0, 10);
        assert_eq!(ledger.place_bet(0), Err(BetError::ZeroBet));
        assert_eq!(ledger.place_bet(51), Err(BetError::InsufficientFunds));
        assert_eq!(ledger.balance(), 50);
        assert_eq!(ledger.bet(), 0);

        ledger.place_bet(50).unwrap();
        assert_eq!(ledger.balance(), 0);
        assert_eq!(ledger.bet(), 50);
    }

    #[test]
    fn settle_credits_payout_and_caps_charges() {
        let mut ledger = Ledger::new(1000, 9, 10);
        ledger.place_bet(100).unwrap();

        let paid = ledger.settle(Outcome::Player, true);
        assert_eq!(paid, Payout { amount: 250, charges: 1 });
        assert_eq!(ledger.balance(), 1150);
        assert_eq!(ledger.charges(), 10);

        ledger.revert(paid);
        assert_eq!(ledger.balance(), 900);
        assert_eq!(ledger.charges(), 9);
    }

    #[test]
    fn spend_never_goes_negative() {
        let mut ledger = Ledger::new(0, 2, 10);
        assert_eq!(
            ledger.spend_charges(3),
            Err(PowerUpError::InsufficientCharges {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(ledger.charges(), 2);

        ledger.spend_charges(2).unwrap();
        assert_eq!(ledger.charges(), 0);
    }

    #[test]
    fn starting_charges_clamped() {
        let ledger = Ledger::new(0, 40, 10);
        assert_eq!(ledger.charges(), 10);
    }
}
