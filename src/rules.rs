//! Play legality.

use crate::card::{Card, Suit};

/// Rank of the wild card.
pub const WILD_RANK: u8 = 8;

/// Returns whether `card` may be played on `active_card` while `active_suit`
/// is in effect.
///
/// Eights are always legal. Any other card must match the active suit or the
/// rank of the active card.
///
/// # Example
///
/// ```
/// use crazy_eights::{Card, Suit, is_legal_play};
///
/// let top = Card::new(Suit::Clubs, 13);
/// assert!(is_legal_play(&Card::new(Suit::Hearts, 8), &top, Suit::Clubs));
/// assert!(is_legal_play(&Card::new(Suit::Hearts, 13), &top, Suit::Clubs));
/// assert!(!is_legal_play(&Card::new(Suit::Hearts, 5), &top, Suit::Clubs));
/// ```
#[must_use]
pub fn is_legal_play(card: &Card, active_card: &Card, active_suit: Suit) -> bool {
    is_wild(card) || card.suit == active_suit || card.rank == active_card.rank
}

/// Returns whether the card is wild.
#[must_use]
pub const fn is_wild(card: &Card) -> bool {
    card.rank == WILD_RANK
}
