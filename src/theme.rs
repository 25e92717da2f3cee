//! Theme catalog and power-up identifiers.

use core::fmt;

/// The ability a theme grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUp {
    /// Replace the last player card with the next one from the deck.
    Swap,
    /// Refund half the bet on a loss.
    Shield,
    /// Pay one extra bet on a win.
    Greed,
    /// Reveal the dealer's hole card.
    Vision,
    /// Ask the advice service for a move.
    Oracle,
    /// Turn a raw 22 loss into a push.
    Shadow,
    /// Take back the last hit.
    Undo,
    /// Redraw the player's two cards.
    Mulligan,
}

impl PowerUp {
    /// Stable identifier used by the catalog.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Shield => "shield",
            Self::Greed => "greed",
            Self::Vision => "vision",
            Self::Oracle => "oracle",
            Self::Shadow => "shadow",
            Self::Undo => "undo",
            Self::Mulligan => "mulligan",
        }
    }

    /// Looks up a power-up by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Some(match id {
            "swap" => Self::Swap,
            "shield" => Self::Shield,
            "greed" => Self::Greed,
            "vision" => Self::Vision,
            "oracle" => Self::Oracle,
            "shadow" => Self::Shadow,
            "undo" => Self::Undo,
            "mulligan" => Self::Mulligan,
            _ => return None,
        })
    }

    /// Returns whether the effect is deferred to settlement.
    #[must_use]
    pub const fn is_passive(self) -> bool {
        matches!(self, Self::Shield | Self::Greed | Self::Shadow)
    }
}

impl fmt::Display for PowerUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Announcer voice used by the audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    /// Male voice.
    Male,
    /// Female voice.
    Female,
}

/// Presentation-only theme data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDisplay {
    /// Primary colour, `#rrggbb`.
    pub primary_color: &'static str,
    /// Secondary colour, `#rrggbb`.
    pub secondary_color: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
    /// Announcer voice.
    pub voice: Voice,
}

/// A faction the player picks once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Catalog identifier.
    pub id: &'static str,
    /// Faction name.
    pub name: &'static str,
    /// Bound power-up.
    pub power_up: PowerUp,
    /// Power-up display name.
    pub power_up_name: &'static str,
    /// Power-up description.
    pub power_up_description: &'static str,
    /// Charges spent per activation.
    pub charge_cost: u8,
    /// Presentation metadata.
    pub display: ThemeDisplay,
}

impl Theme {
    /// Looks up a catalog theme by id.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Self> {
        THEMES.iter().find(|theme| theme.id == id)
    }
}

/// The theme catalog, in selection-screen order.
pub static THEMES: [Theme; 8] = [
    Theme {
        id: "crimson",
        name: "Crimson Vipers",
        power_up: PowerUp::Swap,
        power_up_name: "Blood Swap",
        power_up_description: "Swap your last card with the next one in the deck.",
        charge_cost: 3,
        display: ThemeDisplay {
            primary_color: "#ef4444",
            secondary_color: "#450a0a",
            icon: "🐍",
            voice: Voice::Male,
        },
    },
    Theme {
        id: "sapphire",
        name: "Sapphire Sentinels",
        power_up: PowerUp::Shield,
        power_up_name: "Ice Shield",
        power_up_description: "If you lose, recover 50% of your bet.",
        charge_cost: 2,
        display: ThemeDisplay {
            primary_color: "#3b82f6",
            secondary_color: "#172554",
            icon: "🛡️",
            voice: Voice::Female,
        },
    },
    Theme {
        id: "emerald",
        name: "Emerald Enforcers",
        power_up: PowerUp::Greed,
        power_up_name: "Greed Multiplier",
        power_up_description: "Win an extra bet on top of this hand's payout.",
        charge_cost: 5,
        display: ThemeDisplay {
            primary_color: "#22c55e",
            secondary_color: "#052e16",
            icon: "💎",
            voice: Voice::Male,
        },
    },
    Theme {
        id: "neon",
        name: "Neon Drifters",
        power_up: PowerUp::Mulligan,
        power_up_name: "Quantum Reset",
        power_up_description: "Mulligan: Discard your hand and draw 2 fresh cards.",
        charge_cost: 4,
        display: ThemeDisplay {
            primary_color: "#06b6d4",
            secondary_color: "#083344",
            icon: "💠",
            voice: Voice::Female,
        },
    },
    Theme {
        id: "void",
        name: "Void Walkers",
        power_up: PowerUp::Vision,
        power_up_name: "True Sight",
        power_up_description: "Reveal the Dealer's hole card immediately.",
        charge_cost: 1,
        display: ThemeDisplay {
            primary_color: "#a855f7",
            secondary_color: "#3b0764",
            icon: "👁️",
            voice: Voice::Male,
        },
    },
    Theme {
        id: "amber",
        name: "Amber Ascendants",
        power_up: PowerUp::Undo,
        power_up_name: "Time Warp",
        power_up_description: "Rewind time: Undo your last HIT if you bust or regret it.",
        charge_cost: 5,
        display: ThemeDisplay {
            primary_color: "#f97316",
            secondary_color: "#431407",
            icon: "⏳",
            voice: Voice::Male,
        },
    },
    Theme {
        id: "solar",
        name: "Solar Flares",
        power_up: PowerUp::Oracle,
        power_up_name: "AI Oracle",
        power_up_description: "Ask the Oracle for the statistically best move.",
        charge_cost: 1,
        display: ThemeDisplay {
            primary_color: "#eab308",
            secondary_color: "#422006",
            icon: "☀️",
            voice: Voice::Female,
        },
    },
    Theme {
        id: "shadow",
        name: "Amoled Syndicate",
        power_up: PowerUp::Shadow,
        power_up_name: "Shadow Step",
        power_up_description: "Busting on 22 counts as a Push instead of a Loss.",
        charge_cost: 2,
        display: ThemeDisplay {
            primary_color: "#ffffff",
            secondary_color: "#000000",
            icon: "🌑",
            voice: Voice::Male,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_power_up_bound_once() {
        for theme in &THEMES {
            let bound = THEMES
                .iter()
                .filter(|other| other.power_up == theme.power_up)
                .count();
            assert_eq!(bound, 1, "{}", theme.id);
            assert_eq!(PowerUp::from_id(theme.power_up.id()), Some(theme.power_up));
        }
    }

    #[test]
    fn lookup_by_id() {
        let theme = Theme::by_id("amber").unwrap();
        assert_eq!(theme.power_up, PowerUp::Undo);
        assert_eq!(theme.charge_cost, 5);
        assert!(Theme::by_id("plaid").is_none());
    }

    #[test]
    fn passive_set() {
        let passive: usize = THEMES.iter().filter(|t| t.power_up.is_passive()).count();
        assert_eq!(passive, 3);
    }
}
