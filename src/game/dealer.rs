use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::DealerError;
use crate::event::{GameEvent, Seat};
use crate::hand::Hand;
use crate::result::{Correction, Outcome, Settlement};
use crate::theme::PowerUp;

use super::{Game, RoundStatus};

const MSG_SHADOW_PUSH: &str = "Shadow Step: 22 Bust -> Push!";
const SUFFIX_SHIELD: &str = " (Ice Shield: 50% Saved!)";
const SUFFIX_GREED: &str = " (Greed: 2x Payout!)";

/// Raw total a shadow-step hand must have busted on.
const SHADOW_TOTAL: u16 = 22;

/// Result of one step of dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stood or busted and the round was settled.
    Settled(Settlement),
}

/// Decides the round under the table rules.
///
/// A player bust loses outright, then a dealer bust wins, then the higher
/// score wins and equal scores push.
#[must_use]
pub fn determine_outcome(player: &Hand, dealer: &Hand, player_bust: bool) -> Outcome {
    if player_bust {
        return Outcome::Dealer;
    }
    if dealer.is_bust() {
        return Outcome::Player;
    }

    let player_value = player.score();
    let dealer_value = dealer.score();
    if player_value > dealer_value {
        Outcome::Player
    } else if player_value < dealer_value {
        Outcome::Dealer
    } else {
        Outcome::Push
    }
}

fn settlement_message(
    outcome: Outcome,
    blackjack: bool,
    player_bust: bool,
    dealer_bust: bool,
) -> &'static str {
    match outcome {
        Outcome::Dealer if player_bust => "Bust! You lost.",
        Outcome::Dealer => "Dealer wins.",
        Outcome::Player if blackjack => "Blackjack! You win!",
        Outcome::Player if dealer_bust => "Dealer Bust! You win!",
        Outcome::Player => "You win!",
        Outcome::Push => "Push.",
    }
}

impl Game {
    /// Runs one step of dealer play.
    ///
    /// Below the stand threshold the dealer draws one card; otherwise the
    /// round is settled. The caller may pause between steps for pacing but
    /// cannot issue other commands until the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.state.status != RoundStatus::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if self.state.dealer.score() < self.options.dealer_stands_at {
            let card = self.deal_to(Seat::Dealer, false)?;
            debug!(dealer_value = self.state.dealer.score(), "dealer drew");
            return Ok(DealerStep::Drew(card));
        }

        Ok(DealerStep::Settled(self.settle(false)))
    }

    /// Dealer plays their hand to completion without pausing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// runs out.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Drew(card) => drawn_cards.push(card),
                DealerStep::Settled(_) => return Ok(drawn_cards),
            }
        }
    }

    /// Decides the outcome, pays the ledger once, and ends the round.
    pub(super) fn settle(&mut self, player_bust: bool) -> Settlement {
        let state = &mut self.state;
        let provisional = determine_outcome(&state.player, &state.dealer, player_bust);
        let blackjack = provisional == Outcome::Player && state.player.is_blackjack();
        let bet = state.ledger.bet();
        let paid = state.ledger.settle(provisional, blackjack);

        let settlement = Settlement {
            provisional,
            outcome: provisional,
            bet,
            payout: paid.amount,
            charges_granted: paid.charges,
            blackjack,
            player_bust,
            player_value: state.player.score(),
            dealer_value: state.dealer.score(),
            correction: None,
        };
        state.settlement = Some(settlement);
        state.corrections_applied = false;
        state.status = RoundStatus::GameOver;
        let dealer_bust = state.dealer.is_bust();
        self.set_message(settlement_message(
            provisional,
            blackjack,
            player_bust,
            dealer_bust,
        ));

        if paid.charges > 0 {
            self.events.push(GameEvent::ChargesEarned {
                amount: paid.charges,
                total: self.state.ledger.charges(),
            });
        }

        self.apply_corrections();

        let settlement = self.state.settlement.unwrap_or(settlement);
        info!(
            outcome = %settlement.outcome,
            payout = settlement.payout,
            credit = settlement.total_credit(),
            balance = self.state.ledger.balance(),
            charges = self.state.ledger.charges(),
            "round settled"
        );
        self.events.push(GameEvent::RoundSettled {
            outcome: settlement.outcome,
            credit: settlement.total_credit(),
        });

        settlement
    }

    /// Applies the armed passive power-up to the settled round.
    ///
    /// Settlement runs this itself; later calls return the recorded
    /// correction without paying again.
    pub fn apply_corrections(&mut self) -> Option<Correction> {
        let power_up = self.theme.power_up;
        let state = &mut self.state;
        let settlement = state.settlement.as_mut()?;

        if state.corrections_applied {
            return settlement.correction;
        }
        state.corrections_applied = true;

        if !state.power_up_used || !power_up.is_passive() {
            return None;
        }

        let bet = settlement.bet;
        let correction = match (power_up, settlement.outcome) {
            (PowerUp::Shield, Outcome::Dealer) => Correction::Shield { refund: bet / 2 },
            (PowerUp::Greed, Outcome::Player) => Correction::Greed { bonus: bet },
            (PowerUp::Shadow, Outcome::Dealer) if state.player.raw_total() == SHADOW_TOTAL => {
                Correction::Shadow { refund: bet }
            }
            _ => return None,
        };

        state.ledger.credit(correction.credit());
        settlement.correction = Some(correction);

        match correction {
            Correction::Shadow { .. } => {
                settlement.outcome = Outcome::Push;
                state.message.clear();
                state.message.push_str(MSG_SHADOW_PUSH);
            }
            Correction::Shield { .. } => state.message.push_str(SUFFIX_SHIELD),
            Correction::Greed { .. } => state.message.push_str(SUFFIX_GREED),
        }

        info!(power_up = %power_up, credit = correction.credit(), "passive correction applied");
        self.events.push(GameEvent::CorrectionApplied { correction });

        Some(correction)
    }
}
