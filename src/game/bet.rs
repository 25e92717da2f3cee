use tracing::info;

use crate::deck::Deck;
use crate::error::{BetError, EmptyDeck};
use crate::event::{GameEvent, Seat};

use super::{Game, MSG_YOUR_MOVE, RoundStatus};

/// Cards needed for the opening deal.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Places a bet and deals from a freshly shuffled deck.
    ///
    /// A natural blackjack skips the player's turn and hands control to the
    /// dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the bet is zero,
    /// or the player lacks funds. Nothing changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        self.ensure_betting()?;
        self.state.ledger.place_bet(amount)?;

        let deck = self.fresh_deck();
        self.deal(amount, deck)
    }

    /// Places a bet and deals from `deck` instead of a shuffled one.
    ///
    /// Cards come off the tail of `deck`: player, player, dealer up card,
    /// dealer hole card. Build one with [`Deck::stacked`] to replay a known
    /// sequence.
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_bet`], plus [`BetError::EmptyDeck`] if `deck`
    /// cannot cover the opening deal.
    pub fn deal_from(&mut self, amount: usize, deck: Deck) -> Result<(), BetError> {
        self.ensure_betting()?;
        if deck.len() < INITIAL_DEAL {
            return Err(EmptyDeck.into());
        }
        self.state.ledger.place_bet(amount)?;

        self.deal(amount, deck)
    }

    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.state.status == RoundStatus::Betting {
            Ok(())
        } else {
            Err(BetError::InvalidState)
        }
    }

    fn deal(&mut self, amount: usize, deck: Deck) -> Result<(), BetError> {
        info!(
            amount,
            balance = self.state.ledger.balance(),
            round = self.state.round,
            "bet placed"
        );
        self.events.push(GameEvent::BetPlaced { amount });

        self.deck = deck;
        self.state.player.clear();
        self.state.dealer.clear();

        self.deal_to(Seat::Player, false)?;
        self.deal_to(Seat::Player, false)?;
        self.deal_to(Seat::Dealer, false)?;
        self.deal_to(Seat::Dealer, true)?;

        self.state.status = RoundStatus::Playing;
        self.set_message(MSG_YOUR_MOVE);

        if self.state.player.score() == 21 {
            info!("natural blackjack");
            self.begin_dealer_turn();
        }

        Ok(())
    }
}
