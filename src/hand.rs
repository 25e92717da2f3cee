//! Hand representation and scoring.

use alloc::vec::Vec;

use crate::card::Card;

/// Scores the face-up cards.
///
/// Aces count 11; while the total exceeds 21 and an ace is still soft, one
/// ace at a time drops to 1. Returns the total and whether any ace is still
/// counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|card| !card.hidden) {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Blackjack score of the face-up cards in `cards`.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` is exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}

/// Returns whether the score of `cards` is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > 21
}

/// A hand of cards in deal order.
///
/// The same type serves both seats; for the dealer the second card starts
/// face down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the most recently dealt card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card (the dealer's up card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| card.hidden)
    }

    /// Turns every card face up. Returns the cards that were flipped.
    pub fn reveal(&mut self) -> Vec<Card> {
        let mut flipped = Vec::new();
        for card in self.cards.iter_mut().filter(|card| card.hidden) {
            card.hidden = false;
            flipped.push(*card);
        }
        flipped
    }

    /// Turns the second card face down again.
    pub fn hide_hole(&mut self) {
        if let Some(card) = self.cards.get_mut(1) {
            card.hidden = true;
        }
    }

    /// Calculates the value of the face-up cards.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Sum of the canonical values of all cards, with every ace at 11.
    #[must_use]
    pub fn raw_total(&self) -> u16 {
        self.cards.iter().map(|card| u16::from(card.value())).sum()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks
            .iter()
            .enumerate()
            .map(|(id, &rank)| Card::new(id as u32, Suit::Spades, rank))
            .collect()
    }

    #[test]
    fn aces_degrade_one_at_a_time() {
        assert_eq!(score(&cards(&[Rank::Ace, Rank::King])), 21);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])), 14);
        assert_eq!(score(&cards(&[Rank::Ace, Rank::Six, Rank::King])), 17);
        assert_eq!(score(&cards(&[Rank::King, Rank::Queen, Rank::Two])), 22);
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn never_leaves_reducible_soft_total_over_21() {
        for first in Rank::ALL {
            for second in Rank::ALL {
                for third in Rank::ALL {
                    let hand = cards(&[first, second, third]);
                    let (value, soft) = evaluate_cards(&hand);
                    assert!(!(value > 21 && soft));
                    if value > 21 {
                        let aces = hand.iter().filter(|c| c.is_ace()).count() as u16;
                        let raw: u16 = hand.iter().map(|c| u16::from(c.value())).sum();
                        assert_eq!(u16::from(value), raw - 10 * aces);
                    }
                }
            }
        }
    }

    #[test]
    fn hidden_cards_do_not_count() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(0, Suit::Hearts, Rank::Six));
        let mut hole = Card::new(1, Suit::Clubs, Rank::King);
        hole.hidden = true;
        hand.add_card(hole);

        assert_eq!(hand.score(), 6);
        assert!(hand.has_hidden());

        let flipped = hand.reveal();
        assert_eq!(flipped.len(), 1);
        assert_eq!(hand.score(), 16);

        hand.hide_hole();
        assert_eq!(hand.score(), 6);
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::Jack])));
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
        assert!(is_bust(&cards(&[Rank::Ten, Rank::Ten, Rank::Two])));
    }

    #[test]
    fn raw_total_ignores_ace_reduction() {
        let mut hand = Hand::new();
        for card in cards(&[Rank::Ace, Rank::Ace]) {
            hand.add_card(card);
        }
        assert_eq!(hand.score(), 12);
        assert_eq!(hand.raw_total(), 22);
    }
}
