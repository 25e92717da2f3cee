use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, PowerUpError};
use crate::event::{GameEvent, Seat};
use crate::ledger::Payout;
use crate::result::Settlement;

use super::{Game, MSG_DEALER_TURN, RoundStatus};

const MSG_REWOUND: &str = "Time rewound.";
const MSG_REWOUND_REOPENED: &str = "Time rewound. Your move.";

impl Game {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.state.status == RoundStatus::Playing {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 reveals the hole card and settles the round as a loss
    /// without any dealer draws.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let card = self.deal_to(Seat::Player, false)?;

        if self.state.player.is_bust() {
            self.settle_bust();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the hole card and hands control to the dealer; drive the rest
    /// with [`Game::dealer_step`] or [`Game::play_dealer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in playing state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_playing()?;
        self.begin_dealer_turn();
        Ok(())
    }

    pub(super) fn reveal_hole(&mut self) {
        for card in self.state.dealer.reveal() {
            debug!(card = %card, "hole card revealed");
            self.events.push(GameEvent::HoleCardRevealed { card });
        }
    }

    pub(super) fn begin_dealer_turn(&mut self) {
        self.reveal_hole();
        self.state.status = RoundStatus::DealerTurn;
        self.set_message(MSG_DEALER_TURN);
        self.events.push(GameEvent::DealerTurnStarted);
    }

    /// Settles a round the player lost by going over 21.
    pub(super) fn settle_bust(&mut self) -> Settlement {
        self.reveal_hole();
        self.settle(true)
    }

    /// Checks that the last hit can be taken back.
    pub(super) fn can_rewind(&self) -> Result<(), PowerUpError> {
        match self.state.status {
            RoundStatus::Playing => {}
            RoundStatus::GameOver if self.state.settlement.is_some_and(|s| s.player_bust) => {}
            _ => return Err(PowerUpError::InvalidState),
        }

        if self.state.player.len() <= 2 {
            return Err(PowerUpError::RewindUnavailable);
        }

        Ok(())
    }

    /// Removes the player's most recent card.
    ///
    /// If that card had busted the hand, the settlement is reverted and the
    /// round reopens for play. Settlement is not re-run.
    pub(super) fn rewind(&mut self) -> Result<Card, PowerUpError> {
        self.can_rewind()?;

        let card = self
            .state
            .player
            .pop()
            .ok_or(PowerUpError::RewindUnavailable)?;
        self.events.push(GameEvent::CardDiscarded { card });

        if self.state.status == RoundStatus::GameOver {
            if let Some(settlement) = self.state.settlement.take() {
                self.state.ledger.revert(Payout {
                    amount: settlement.total_credit(),
                    charges: settlement.charges_granted,
                });
            }
            self.state.corrections_applied = false;
            self.state.dealer.hide_hole();
            self.state.status = RoundStatus::Playing;
            self.set_message(MSG_REWOUND_REOPENED);

            info!(card = %card, "bust rewound, round reopened");
            self.events.push(GameEvent::RoundReopened);
        } else {
            self.set_message(MSG_REWOUND);
            debug!(card = %card, "hit rewound");
        }

        Ok(card)
    }
}
