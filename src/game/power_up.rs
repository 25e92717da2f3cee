use alloc::format;
use alloc::string::String;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{EmptyDeck, PowerUpError};
use crate::event::{GameEvent, Seat};
use crate::services::{AdviceError, AdviceRequest, AdviceService, advice_text};
use crate::theme::PowerUp;

use super::{Game, RoundStatus};

/// What an activated power-up did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpEffect {
    /// The last player card was replaced.
    Swapped {
        /// The card taken out of the hand.
        discarded: Card,
        /// The card put in its place.
        drawn: Card,
    },
    /// The dealer's hole card was turned face up.
    Revealed(Card),
    /// The last hit was taken back.
    Rewound(Card),
    /// The player's hand was replaced with two fresh cards.
    Redealt([Card; 2]),
    /// The oracle should be asked about this position. Hand the answer to
    /// [`Game::receive_advice`].
    Oracle(AdviceRequest),
    /// A passive power-up is armed for settlement.
    Armed(PowerUp),
}

impl Game {
    /// Pays for and fires the theme's power-up.
    ///
    /// Checks run in order: round status, used flag, the power-up's own
    /// precondition, then the charge cost. A failed check changes nothing.
    /// Power-ups are usable while playing; after a bust only the rewind is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is in the wrong state, the power-up was
    /// already used, its precondition fails, or charges are short.
    pub fn activate_power_up(&mut self) -> Result<PowerUpEffect, PowerUpError> {
        let power_up = self.theme.power_up;
        let cost = self.theme.charge_cost;

        match (self.state.status, power_up) {
            (RoundStatus::Playing, _) | (RoundStatus::GameOver, PowerUp::Undo) => {}
            _ => return Err(PowerUpError::InvalidState),
        }
        if self.state.power_up_used {
            return Err(PowerUpError::AlreadyUsed);
        }
        self.check_precondition(power_up)?;
        self.state.ledger.spend_charges(cost)?;

        self.state.power_up_used = true;
        info!(
            power_up = %power_up,
            cost,
            charges = self.state.ledger.charges(),
            "power-up activated"
        );
        self.events.push(GameEvent::PowerUpActivated { power_up, cost });

        let effect = match power_up {
            PowerUp::Swap => self.swap_last_card()?,
            PowerUp::Vision => self.reveal_for_vision()?,
            PowerUp::Undo => PowerUpEffect::Rewound(self.rewind()?),
            PowerUp::Mulligan => self.mulligan()?,
            PowerUp::Oracle => {
                PowerUpEffect::Oracle(AdviceRequest::new(&self.state.player, &self.state.dealer))
            }
            PowerUp::Shield | PowerUp::Greed | PowerUp::Shadow => {
                self.announce_activation();
                PowerUpEffect::Armed(power_up)
            }
        };

        Ok(effect)
    }

    /// Stores the oracle's answer, substituting fallback text on failure.
    pub fn receive_advice(&mut self, answer: Result<String, AdviceError>) {
        let advice = advice_text(answer);
        debug!(advice = %advice, "oracle advice received");
        self.state.advice = Some(advice);
    }

    /// Activates the oracle and waits for `service` to answer.
    ///
    /// The power-up counts as used whether or not the service answers.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme's power-up is not the oracle or
    /// activation fails.
    pub async fn consult_oracle<S: AdviceService>(
        &mut self,
        service: &S,
    ) -> Result<&str, PowerUpError> {
        if self.theme.power_up != PowerUp::Oracle {
            return Err(PowerUpError::InvalidState);
        }

        let PowerUpEffect::Oracle(request) = self.activate_power_up()? else {
            return Err(PowerUpError::InvalidState);
        };
        let answer = service.advise(&request).await;
        self.receive_advice(answer);

        Ok(self.state.advice.as_deref().unwrap_or_default())
    }

    fn check_precondition(&self, power_up: PowerUp) -> Result<(), PowerUpError> {
        match power_up {
            PowerUp::Undo => self.can_rewind(),
            PowerUp::Vision if !self.state.dealer.has_hidden() => Err(PowerUpError::InvalidState),
            PowerUp::Swap if self.state.player.is_empty() => Err(PowerUpError::InvalidState),
            PowerUp::Swap if self.deck.is_empty() => Err(EmptyDeck.into()),
            PowerUp::Mulligan if self.deck.len() < 2 => Err(EmptyDeck.into()),
            _ => Ok(()),
        }
    }

    fn announce_activation(&mut self) {
        let message = format!("{} Activated!", self.theme.power_up_name);
        self.state.message = message;
    }

    fn swap_last_card(&mut self) -> Result<PowerUpEffect, PowerUpError> {
        let discarded = self
            .state
            .player
            .pop()
            .ok_or(PowerUpError::InvalidState)?;
        self.events.push(GameEvent::CardDiscarded { card: discarded });

        let drawn = self.deal_to(Seat::Player, false)?;
        if self.state.player.is_bust() {
            self.settle_bust();
        }

        Ok(PowerUpEffect::Swapped { discarded, drawn })
    }

    fn reveal_for_vision(&mut self) -> Result<PowerUpEffect, PowerUpError> {
        self.reveal_hole();
        self.state
            .dealer
            .cards()
            .get(1)
            .copied()
            .map(PowerUpEffect::Revealed)
            .ok_or(PowerUpError::InvalidState)
    }

    fn mulligan(&mut self) -> Result<PowerUpEffect, PowerUpError> {
        for card in self.state.player.cards().to_vec() {
            self.events.push(GameEvent::CardDiscarded { card });
        }
        self.state.player.clear();

        let first = self.deal_to(Seat::Player, false)?;
        let second = self.deal_to(Seat::Player, false)?;
        self.announce_activation();

        Ok(PowerUpEffect::Redealt([first, second]))
    }
}
