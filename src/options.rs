//! Session configuration options.

use core::time::Duration;

/// Chip denominations offered by the betting screen, before "all in".
pub const CHIP_VALUES: [usize; 5] = [10, 50, 100, 250, 500];

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use syndicate21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_starting_charges(0);
/// assert_eq!(options.starting_balance, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Credits at session start.
    pub starting_balance: usize,
    /// Charges at session start.
    pub starting_charges: u8,
    /// Charge meter cap.
    pub max_charges: u8,
    /// Dealer draws while below this score.
    pub dealer_stands_at: u8,
    /// Pause the presentation layer should take after the hole card flips.
    pub reveal_pause: Duration,
    /// Pause the presentation layer should take after each dealer draw.
    pub draw_pause: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            starting_charges: 3,
            max_charges: 10,
            dealer_stands_at: 17,
            reveal_pause: Duration::from_millis(600),
            draw_pause: Duration::from_millis(800),
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use syndicate21::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the starting charges.
    #[must_use]
    pub const fn with_starting_charges(mut self, charges: u8) -> Self {
        self.starting_charges = charges;
        self
    }

    /// Sets the charge cap.
    #[must_use]
    pub const fn with_max_charges(mut self, max: u8) -> Self {
        self.max_charges = max;
        self
    }

    /// Sets the score the dealer stands at.
    ///
    /// # Example
    ///
    /// ```
    /// use syndicate21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets the pause after the hole card is revealed.
    #[must_use]
    pub const fn with_reveal_pause(mut self, pause: Duration) -> Self {
        self.reveal_pause = pause;
        self
    }

    /// Sets the pause after each dealer draw.
    #[must_use]
    pub const fn with_draw_pause(mut self, pause: Duration) -> Self {
        self.draw_pause = pause;
        self
    }
}
