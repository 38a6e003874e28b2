//! Opponent decision rules.
//!
//! The opponent plays a uniformly random legal card, or draws when it has
//! none. After playing an eight it names the suit it holds the most of.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::{Card, Suit};
use crate::hand::Hand;

/// A move chosen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    /// Play the card.
    Play(Card),
    /// Draw from the deck.
    Draw,
}

/// Picks the opponent's move for the given hand.
///
/// Every legal card is equally likely to be chosen.
pub fn choose_move<R: Rng + ?Sized>(
    hand: &Hand,
    active_card: &Card,
    active_suit: Suit,
    rng: &mut R,
) -> OpponentMove {
    hand.legal_plays(active_card, active_suit)
        .choose(rng)
        .copied()
        .map_or(OpponentMove::Draw, OpponentMove::Play)
}

/// Returns the suit `hand` holds the most of.
///
/// Ties go to the suit that comes first in [`Suit::ALL`], so an empty hand
/// yields hearts.
///
/// # Example
///
/// ```
/// use crazy_eights::{Card, Hand, Suit, preferred_suit};
///
/// let hand = Hand::from_cards(vec![
///     Card::new(Suit::Spades, 2),
///     Card::new(Suit::Spades, 9),
///     Card::new(Suit::Clubs, 4),
/// ]);
/// assert_eq!(preferred_suit(&hand), Suit::Spades);
/// assert_eq!(preferred_suit(&Hand::new()), Suit::Hearts);
/// ```
#[must_use]
pub fn preferred_suit(hand: &Hand) -> Suit {
    let counts = hand.suit_counts();
    let mut best = 0;
    for (slot, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = slot;
        }
    }
    Suit::ALL[best]
}
