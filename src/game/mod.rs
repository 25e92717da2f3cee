//! Game engine and round flow.

use alloc::string::String;
use alloc::vec::{Drain, Vec};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{ActionError, EmptyDeck, GameError};
use crate::event::{GameEvent, Seat};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::theme::Theme;

mod actions;
mod bet;
mod dealer;
mod power_up;
pub mod state;

pub use dealer::{DealerStep, determine_outcome};
pub use power_up::PowerUpEffect;
pub use state::{EngineState, RoundStatus};

const MSG_PLACE_BET: &str = "Place your bet to start";
const MSG_YOUR_MOVE: &str = "Your move";
const MSG_DEALER_TURN: &str = "Dealer's turn";

/// A discrete command from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset for a new round.
    StartRound,
    /// Wager and deal.
    PlaceBet(usize),
    /// Draw a card.
    Hit,
    /// End the player's turn.
    Stand,
    /// Advance the dealer by one step.
    DealerStep,
    /// Fire the theme's power-up.
    ActivatePowerUp,
}

/// A single-player blackjack session with a theme power-up.
///
/// The game owns the round deck, the snapshot shown to the presentation
/// layer, and the queue of transition events.
pub struct Game {
    theme: Theme,
    options: GameOptions,
    state: EngineState,
    deck: Deck,
    rng: ChaCha8Rng,
    next_card_id: u32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a session for `theme`, seeding the shuffler with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use syndicate21::{Game, GameOptions, RoundStatus, THEMES};
    ///
    /// let game = Game::new(THEMES[0], GameOptions::default(), 42);
    /// assert_eq!(game.state().status, RoundStatus::Betting);
    /// assert_eq!(game.state().balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(theme: Theme, options: GameOptions, seed: u64) -> Self {
        let ledger = Ledger::new(
            options.starting_balance,
            options.starting_charges,
            options.max_charges,
        );

        debug!(theme = theme.id, seed, "session created");

        Self {
            theme,
            options,
            state: EngineState::new(ledger),
            deck: Deck::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_card_id: 0,
            events: Vec::new(),
        }
    }

    /// Returns the session theme.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns the session options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current snapshot.
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns the current status.
    pub const fn status(&self) -> RoundStatus {
        self.state.status
    }

    /// Returns the number of cards left in the round deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the theme power-up can be paid for right now.
    pub const fn is_power_charged(&self) -> bool {
        self.state.ledger.can_spend(self.theme.charge_cost)
    }

    /// Takes the events emitted since the last call.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Resets the round-scoped state and waits for a bet.
    ///
    /// Balance and charges carry over.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is being played.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        match self.state.status {
            RoundStatus::Betting => {}
            RoundStatus::GameOver => self.state.round += 1,
            RoundStatus::Playing | RoundStatus::DealerTurn => {
                return Err(ActionError::InvalidState);
            }
        }

        let state = &mut self.state;
        state.status = RoundStatus::Betting;
        state.player.clear();
        state.dealer.clear();
        state.ledger.clear_bet();
        state.settlement = None;
        state.corrections_applied = false;
        state.power_up_used = false;
        state.advice = None;
        state.message = String::from(MSG_PLACE_BET);
        self.deck = Deck::default();

        debug!(round = self.state.round, "round started");
        self.events.push(GameEvent::RoundStarted {
            round: self.state.round,
        });

        Ok(())
    }

    /// Applies a synchronous command and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying operation reports; the state is
    /// unchanged in that case.
    pub fn apply(&mut self, command: Command) -> Result<&EngineState, GameError> {
        match command {
            Command::StartRound => self.start_round()?,
            Command::PlaceBet(amount) => self.place_bet(amount)?,
            Command::Hit => {
                self.hit()?;
            }
            Command::Stand => self.stand()?,
            Command::DealerStep => {
                self.dealer_step()?;
            }
            Command::ActivatePowerUp => {
                self.activate_power_up()?;
            }
        }

        Ok(&self.state)
    }

    /// Builds a freshly shuffled deck with unused card ids.
    fn fresh_deck(&mut self) -> Deck {
        let deck = Deck::shuffled(&mut self.rng, self.next_card_id);
        self.next_card_id = self.next_card_id.wrapping_add(DECK_SIZE as u32);
        deck
    }

    /// Draws from the round deck into a seat.
    fn deal_to(&mut self, seat: Seat, hidden: bool) -> Result<Card, EmptyDeck> {
        let mut card = self.deck.draw()?;
        card.hidden = hidden;

        match seat {
            Seat::Player => self.state.player.add_card(card),
            Seat::Dealer => self.state.dealer.add_card(card),
        }

        debug!(?seat, card = %card, hidden, "card dealt");
        self.events.push(GameEvent::CardDealt { seat, card });
        Ok(card)
    }

    fn set_message(&mut self, message: &str) {
        self.state.message.clear();
        self.state.message.push_str(message);
    }
}
