//! CLI session example.
//!
//! Set `RUST_LOG=syndicate21=debug` to watch the engine's trace output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use futures::executor::block_on;
use syndicate21::{
    AdviceError, AdviceRequest, AdviceService, CHIP_VALUES, Card, DealerStep, Game, GameOptions,
    Hand, PowerUp, PowerUpEffect, RoundStatus, Suit, THEMES, Theme,
};
use tracing_subscriber::EnvFilter;

/// Answers from a basic-strategy table instead of a remote model.
struct TableOracle;

impl AdviceService for TableOracle {
    async fn advise(&self, request: &AdviceRequest) -> Result<String, AdviceError> {
        let dealer = request
            .dealer_up_card
            .trim_end_matches(char::is_alphabetic)
            .parse::<u8>()
            .unwrap_or(11);

        let advice = match request.score {
            0..=11 => "Hit. Nothing can break you.",
            12..=16 if (2..=6).contains(&dealer) => "Stand. Let the dealer break.",
            12..=16 => "Hit. The dealer shows strength.",
            _ => "Stand. Your hand is made.",
        };
        Ok(advice.to_string())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Syndicate 21 CLI example (type 'q' to quit)");

    let Some(theme) = prompt_theme() else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(theme, GameOptions::default(), seed);

    println!(
        "\n{} {}: {} ({} charges)",
        theme.display.icon, theme.power_up_name, theme.power_up_description, theme.charge_cost
    );

    loop {
        let balance = game.state().balance();
        if balance == 0 {
            println!("You are out of credits. Game over.");
            break;
        }

        let chips = CHIP_VALUES
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        let Some(bet) = prompt_usize(&format!(
            "Bet ({chips} or any amount up to {balance}, 0 to quit): "
        )) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while game.status() == RoundStatus::Playing {
            print_table(&game);

            println!("{}", format_actions(&game));
            let action = prompt_line("Action: ");

            match action.as_str() {
                "h" | "hit" => {
                    if let Err(err) = game.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => {
                    if let Err(err) = game.stand() {
                        println!("Action error: {err}");
                    }
                }
                "p" | "power" => activate(&mut game),
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }

            // A rewound bust reopens the round and the loop carries on.
            if game.status() == RoundStatus::GameOver {
                offer_rewind(&mut game);
            }
        }

        if game.status() == RoundStatus::DealerTurn {
            play_dealer_paced(&mut game);
        }

        print_table(&game);
        if let Some(settlement) = game.state().settlement {
            println!(
                "Round {} complete: {} (net {})",
                game.state().round,
                settlement.outcome,
                settlement.net()
            );
        }

        if let Err(err) = game.start_round() {
            println!("Round error: {err}");
            break;
        }
    }
}

fn activate(game: &mut Game) {
    if game.theme().power_up == PowerUp::Oracle {
        match block_on(game.consult_oracle(&TableOracle)) {
            Ok(advice) => println!("Oracle: {advice}"),
            Err(err) => println!("Power-up error: {err}"),
        }
        return;
    }

    match game.activate_power_up() {
        Ok(PowerUpEffect::Swapped { discarded, drawn }) => {
            println!("Swapped {} for {}", format_card(&discarded), format_card(&drawn));
        }
        Ok(PowerUpEffect::Revealed(card)) => println!("Hole card: {}", format_card(&card)),
        Ok(PowerUpEffect::Rewound(card)) => println!("Took back {}", format_card(&card)),
        Ok(PowerUpEffect::Redealt(cards)) => {
            println!("New hand: {}", format_cards(&cards));
        }
        Ok(PowerUpEffect::Oracle(_)) => {}
        Ok(PowerUpEffect::Armed(power_up)) => println!("{power_up} armed for settlement."),
        Err(err) => println!("Power-up error: {err}"),
    }
}

/// Offers the undo power-up after a bust.
fn offer_rewind(game: &mut Game) {
    let state = game.state();
    let busted = state.settlement.is_some_and(|s| s.player_bust);
    if !busted
        || game.theme().power_up != PowerUp::Undo
        || state.power_up_used
        || !game.is_power_charged()
    {
        return;
    }

    print_table(game);
    if matches!(prompt_line("Bust! Rewind time? (y/n): ").as_str(), "y" | "yes") {
        if let Err(err) = game.activate_power_up() {
            println!("Power-up error: {err}");
        }
    }
}

fn play_dealer_paced(game: &mut Game) {
    let reveal_pause = game.options().reveal_pause;
    let draw_pause = game.options().draw_pause;

    print_table(game);
    thread::sleep(reveal_pause);

    loop {
        match game.dealer_step() {
            Ok(DealerStep::Drew(card)) => {
                println!("Dealer draws {}", format_card(&card));
                thread::sleep(draw_pause);
            }
            Ok(DealerStep::Settled(_)) => break,
            Err(err) => {
                println!("Dealer error: {err}");
                break;
            }
        }
    }
}

fn prompt_theme() -> Option<Theme> {
    println!("\nChoose your syndicate:");
    for (index, theme) in THEMES.iter().enumerate() {
        println!(
            "  {}) {} {} [{}]",
            index + 1,
            theme.display.icon,
            theme.name,
            theme.power_up_name
        );
    }

    loop {
        let input = prompt_line("Theme: ");
        if input == "q" || input == "quit" {
            return None;
        }

        let by_index = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| THEMES.get(index));
        match by_index.or_else(|| Theme::by_id(&input)) {
            Some(theme) => return Some(*theme),
            None => println!("Unknown theme."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let state = game.state();
    println!(
        "\nBalance {} | Bet {} | Charges {}/{}",
        state.balance(),
        state.bet(),
        state.charges(),
        state.ledger.max_charges()
    );
    println!(
        "Dealer: {} (value {})",
        format_hand(&state.dealer),
        state.dealer.score()
    );
    println!(
        "You:    {} (value {})",
        format_hand(&state.player),
        state.player.score()
    );
    println!("{}\n", state.message);
}

fn format_actions(game: &Game) -> String {
    let theme = game.theme();
    let power_ready = game.is_power_charged() && !game.state().power_up_used;
    let power = format!("power: {}", theme.power_up_name);
    format!(
        "Actions: {} {} {}",
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action(&power, "p", power_ready)
    )
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(no cards)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if card.hidden {
        return "??".to_string();
    }

    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let colored_suit = colorize(suit, color_code);
    format!("{}{colored_suit}", card.rank.label())
}
