//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::rules::is_legal_play;

/// A hand of cards.
///
/// Insertion order is kept for stable display; it has no game meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` from the hand, returning it if it was held.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(index))
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards that may legally be played on `active_card` while
    /// `active_suit` is in effect, in hand order.
    #[must_use]
    pub fn legal_plays(&self, active_card: &Card, active_suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| is_legal_play(c, active_card, active_suit))
            .copied()
            .collect()
    }

    /// Counts cards per suit, indexed in [`Suit::ALL`] order.
    #[must_use]
    pub fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for card in &self.cards {
            if let Some(slot) = Suit::ALL.iter().position(|&s| s == card.suit) {
                counts[slot] += 1;
            }
        }
        counts
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
}
