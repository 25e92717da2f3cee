//! Interfaces to the external advice and emblem services.
//!
//! Both services are fallible and asynchronous. The engine only depends on
//! the request shapes and degrades to fixed content on failure.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::future::Future;

use thiserror::Error;

use crate::card::Card;
use crate::hand::Hand;
use crate::theme::Theme;

/// Advice shown when the service fails.
pub const ADVICE_FALLBACK: &str = "The Oracle is clouded... (API Error)";
/// Advice shown when no service is configured.
pub const ADVICE_DISCONNECTED: &str = "Oracle disconnected. (Check API Key)";
/// Advice shown when the service answers with nothing.
pub const ADVICE_SILENT: &str = "The cards remain silent.";

/// Why the advice service did not answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// No credentials or endpoint configured.
    #[error("advice service is not configured")]
    Disconnected,
    /// The upstream call failed.
    #[error("advice service failed: {0}")]
    Upstream(String),
}

impl AdviceError {
    /// Text to show the player in place of advice.
    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        match self {
            Self::Disconnected => ADVICE_DISCONNECTED,
            Self::Upstream(_) => ADVICE_FALLBACK,
        }
    }
}

/// What the oracle is asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    /// Player cards as `<rank><suit>` tokens.
    pub player_cards: Vec<String>,
    /// Dealer up card token.
    pub dealer_up_card: String,
    /// Player's current score.
    pub score: u8,
}

impl AdviceRequest {
    /// Builds a request from the two hands.
    #[must_use]
    pub fn new(player: &Hand, dealer: &Hand) -> Self {
        Self {
            player_cards: player.cards().iter().map(Card::to_string).collect(),
            dealer_up_card: dealer.up_card().map(Card::to_string).unwrap_or_default(),
            score: player.score(),
        }
    }
}

/// Free-text move advice.
pub trait AdviceService {
    /// Asks for advice on the given position.
    fn advise(&self, request: &AdviceRequest) -> impl Future<Output = Result<String, AdviceError>>;
}

/// Turns a service answer into the text shown to the player.
#[must_use]
pub fn advice_text(answer: Result<String, AdviceError>) -> String {
    match answer {
        Ok(text) if text.trim().is_empty() => ADVICE_SILENT.to_string(),
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            tracing::warn!(%err, "advice service unavailable");
            err.fallback().to_string()
        }
    }
}

/// What the emblem generator is asked to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmblemRequest {
    /// Faction name.
    pub theme_name: &'static str,
    /// Primary colour.
    pub color: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
}

impl EmblemRequest {
    /// Builds the request for a theme.
    #[must_use]
    pub const fn for_theme(theme: &Theme) -> Self {
        Self {
            theme_name: theme.name,
            color: theme.display.primary_color,
            icon: theme.display.icon,
        }
    }
}

/// Cosmetic faction artwork. `None` means no image; the icon glyph is used.
pub trait EmblemService {
    /// Generates an image payload for the request.
    fn generate(&self, request: &EmblemRequest) -> impl Future<Output = Option<Vec<u8>>>;
}
