use syndicate21::{
    AdviceError, Card, Correction, DealerStep, Game, GameEvent, GameOptions, Hand, Outcome,
    PowerUpEffect, RoundStatus, Seat, Settlement, Suit, THEMES, Theme,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(theme_id: &str, seed: u32) -> Result<WasmGame, JsValue> {
        let theme = lookup_theme(theme_id)?;
        Ok(Self {
            game: Game::new(theme, GameOptions::default(), seed as u64),
        })
    }

    /// Starts a fresh session with another theme.
    pub fn reset(&mut self, theme_id: &str, seed: u32) -> Result<(), JsValue> {
        let theme = lookup_theme(theme_id)?;
        self.game = Game::new(theme, GameOptions::default(), seed as u64);
        Ok(())
    }

    pub fn themes() -> Result<JsValue, JsValue> {
        let themes: Vec<JsTheme> = THEMES.iter().map(JsTheme::from).collect();
        to_js_value(&themes)
    }

    pub fn start_round(&mut self) -> Result<(), JsValue> {
        self.game.start_round().map_err(js_err)
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet(amount as usize).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    /// Advances the dealer by one card. Returns `true` once the round is settled.
    ///
    /// The page calls this on a timer to pace the dealer's draws.
    pub fn dealer_step(&mut self) -> Result<bool, JsValue> {
        self.game
            .dealer_step()
            .map(|step| matches!(step, DealerStep::Settled(_)))
            .map_err(js_err)
    }

    /// Fires the theme power-up. For the oracle, the returned value carries
    /// the request the page should forward to its advice endpoint.
    pub fn activate_power_up(&mut self) -> Result<JsValue, JsValue> {
        let effect = self.game.activate_power_up().map_err(js_err)?;
        to_js_value(&JsEffect::from(effect))
    }

    /// Hands back the advice endpoint's answer. `None` means the call failed.
    pub fn receive_advice(&mut self, text: Option<String>) {
        let answer = text.ok_or_else(|| AdviceError::Upstream("no response".to_string()));
        self.game.receive_advice(answer);
    }

    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.game.drain_events().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let theme = self.game.theme();

        let snapshot = Snapshot {
            theme: theme.id,
            status: status_to_str(state.status),
            round: state.round,
            balance: state.balance() as u32,
            bet: state.bet() as u32,
            charges: state.charges(),
            max_charges: state.ledger.max_charges(),
            power_charged: self.game.is_power_charged(),
            power_up_used: state.power_up_used,
            player: JsHand::from(&state.player),
            dealer: JsHand::from(&state.dealer),
            message: state.message.clone(),
            settlement: state.settlement.map(JsSettlement::from),
            advice: state.advice.clone(),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

fn lookup_theme(theme_id: &str) -> Result<Theme, JsValue> {
    Theme::by_id(theme_id)
        .copied()
        .ok_or_else(|| JsValue::from_str("unknown theme"))
}

#[derive(Serialize)]
struct Snapshot {
    theme: &'static str,
    status: &'static str,
    round: u32,
    balance: u32,
    bet: u32,
    charges: u8,
    max_charges: u8,
    power_charged: bool,
    power_up_used: bool,
    player: JsHand,
    dealer: JsHand,
    message: String,
    settlement: Option<JsSettlement>,
    advice: Option<String>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsTheme {
    id: &'static str,
    name: &'static str,
    power_up: &'static str,
    power_up_name: &'static str,
    power_up_description: &'static str,
    charge_cost: u8,
    primary_color: &'static str,
    secondary_color: &'static str,
    icon: &'static str,
}

impl From<&Theme> for JsTheme {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id,
            name: theme.name,
            power_up: theme.power_up.id(),
            power_up_name: theme.power_up_name,
            power_up_description: theme.power_up_description,
            charge_cost: theme.charge_cost,
            primary_color: theme.display.primary_color,
            secondary_color: theme.display.secondary_color,
            icon: theme.display.icon,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u32,
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<Option<JsCard>>,
    score: u8,
    is_soft: bool,
    is_blackjack: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().map(|card| visible_card(*card)).collect(),
            score: hand.score(),
            is_soft: hand.is_soft(),
            is_blackjack: hand.is_blackjack(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsSettlement {
    provisional: &'static str,
    outcome: &'static str,
    bet: u32,
    payout: u32,
    credit: u32,
    net: i32,
    charges_granted: u8,
    blackjack: bool,
    player_value: u8,
    dealer_value: u8,
    correction: Option<JsCorrection>,
}

impl From<Settlement> for JsSettlement {
    fn from(settlement: Settlement) -> Self {
        Self {
            provisional: outcome_to_str(settlement.provisional),
            outcome: outcome_to_str(settlement.outcome),
            bet: settlement.bet as u32,
            payout: settlement.payout as u32,
            credit: settlement.total_credit() as u32,
            net: settlement.net() as i32,
            charges_granted: settlement.charges_granted,
            blackjack: settlement.blackjack,
            player_value: settlement.player_value,
            dealer_value: settlement.dealer_value,
            correction: settlement.correction.map(JsCorrection::from),
        }
    }
}

#[derive(Serialize)]
struct JsCorrection {
    kind: &'static str,
    credit: u32,
}

impl From<Correction> for JsCorrection {
    fn from(correction: Correction) -> Self {
        let kind = match correction {
            Correction::Shield { .. } => "shield",
            Correction::Greed { .. } => "greed",
            Correction::Shadow { .. } => "shadow",
        };
        Self {
            kind,
            credit: correction.credit() as u32,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsEffect {
    Swapped { discarded: JsCard, drawn: JsCard },
    Revealed { card: JsCard },
    Rewound { card: JsCard },
    Redealt { cards: Vec<JsCard> },
    Oracle {
        player_cards: Vec<String>,
        dealer_up_card: String,
        score: u8,
    },
    Armed { power_up: &'static str },
}

impl From<PowerUpEffect> for JsEffect {
    fn from(effect: PowerUpEffect) -> Self {
        match effect {
            PowerUpEffect::Swapped { discarded, drawn } => Self::Swapped {
                discarded: card_to_js(discarded),
                drawn: card_to_js(drawn),
            },
            PowerUpEffect::Revealed(card) => Self::Revealed {
                card: card_to_js(card),
            },
            PowerUpEffect::Rewound(card) => Self::Rewound {
                card: card_to_js(card),
            },
            PowerUpEffect::Redealt(cards) => Self::Redealt {
                cards: cards.into_iter().map(card_to_js).collect(),
            },
            PowerUpEffect::Oracle(request) => Self::Oracle {
                player_cards: request.player_cards,
                dealer_up_card: request.dealer_up_card,
                score: request.score,
            },
            PowerUpEffect::Armed(power_up) => Self::Armed {
                power_up: power_up.id(),
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsEvent {
    RoundStarted { round: u32 },
    BetPlaced { amount: u32 },
    CardDealt { seat: &'static str, card: Option<JsCard> },
    CardDiscarded { card: JsCard },
    HoleCardRevealed { card: JsCard },
    DealerTurnStarted,
    RoundSettled { outcome: &'static str, credit: u32 },
    ChargesEarned { amount: u8, total: u8 },
    PowerUpActivated { power_up: &'static str, cost: u8 },
    CorrectionApplied { correction: JsCorrection },
    RoundReopened,
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::RoundStarted { round } => Self::RoundStarted { round },
            GameEvent::BetPlaced { amount } => Self::BetPlaced {
                amount: amount as u32,
            },
            GameEvent::CardDealt { seat, card } => Self::CardDealt {
                seat: seat_to_str(seat),
                card: visible_card(card),
            },
            GameEvent::CardDiscarded { card } => Self::CardDiscarded {
                card: card_to_js(card),
            },
            GameEvent::HoleCardRevealed { card } => Self::HoleCardRevealed {
                card: card_to_js(card),
            },
            GameEvent::DealerTurnStarted => Self::DealerTurnStarted,
            GameEvent::RoundSettled { outcome, credit } => Self::RoundSettled {
                outcome: outcome_to_str(outcome),
                credit: credit as u32,
            },
            GameEvent::ChargesEarned { amount, total } => Self::ChargesEarned { amount, total },
            GameEvent::PowerUpActivated { power_up, cost } => Self::PowerUpActivated {
                power_up: power_up.id(),
                cost,
            },
            GameEvent::CorrectionApplied { correction } => Self::CorrectionApplied {
                correction: JsCorrection::from(correction),
            },
            GameEvent::RoundReopened => Self::RoundReopened,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        id: card.id,
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
    }
}

/// Face-down cards are sent as `null` so the page cannot peek.
fn visible_card(card: Card) -> Option<JsCard> {
    (!card.hidden).then(|| card_to_js(card))
}

fn suit_to_str(suit: Suit) -> &'static str {
    suit.name()
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "player",
        Seat::Dealer => "dealer",
    }
}

fn status_to_str(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Betting => "betting",
        RoundStatus::Playing => "playing",
        RoundStatus::DealerTurn => "dealerTurn",
        RoundStatus::GameOver => "gameOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "player",
        Outcome::Dealer => "dealer",
        Outcome::Push => "push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
