//! Round-scoped decks.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeck;

/// An ordered card sequence. Cards are drawn from the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52-card set in suit-then-rank order, assigning ids
    /// `first_id..first_id + 52`.
    #[must_use]
    pub fn ordered(first_id: u32) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut id = first_id;

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(id, suit, rank));
                id = id.wrapping_add(1);
            }
        }

        Self { cards }
    }

    /// Builds a fresh 52-card deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, first_id: u32) -> Self {
        let mut deck = Self::ordered(first_id);
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck that yields `draws` in order, first element first.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Uniform Fisher–Yates shuffle of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn sorted_keys(deck: &Deck) -> Vec<(u32, Suit, Rank)> {
        let mut keys: Vec<_> = deck.cards().iter().map(|c| (c.id, c.suit, c.rank)).collect();
        keys.sort_by_key(|&(id, _, _)| id);
        keys
    }

    #[test]
    fn ordered_deck_has_every_pair_once() {
        let deck = Deck::ordered(100);
        assert_eq!(deck.len(), DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|c| c.suit == suit && c.rank == rank)
                    .count();
                assert_eq!(count, 1, "{rank}{suit}");
            }
        }

        let mut ids: Vec<u32> = deck.cards().iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| !c.hidden));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ordered = Deck::ordered(0);
        let shuffled = Deck::shuffled(&mut rng, 0);

        assert_ne!(ordered, shuffled);
        assert_eq!(sorted_keys(&ordered), sorted_keys(&shuffled));
    }

    #[test]
    fn draw_takes_from_tail_until_empty() {
        let first = Card::new(1, Suit::Clubs, Rank::Two);
        let second = Card::new(2, Suit::Clubs, Rank::Three);
        let mut deck = Deck::stacked(&[first, second]);

        assert_eq!(deck.draw(), Ok(first));
        assert_eq!(deck.draw(), Ok(second));
        assert_eq!(deck.draw(), Err(EmptyDeck));
        assert!(deck.is_empty());
    }
}
