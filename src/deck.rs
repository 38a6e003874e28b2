//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};

/// Builds the 52 canonical cards, suits outer and ranks inner.
///
/// # Example
///
/// ```
/// use crazy_eights::deck::build_deck;
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), 52);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in ACE..=KING {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `cards`.
///
/// The input is left untouched. Uses an unbiased Fisher-Yates shuffle driven
/// by the supplied random source.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns whether `cards` is exactly one standard deck, in any order.
#[must_use]
pub fn is_complete_deck(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }

    let mut seen: u64 = 0;
    for card in cards {
        if !(ACE..=KING).contains(&card.rank) {
            return false;
        }
        let bit = 1u64 << card.id().get();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }

    true
}
