use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::{build_deck, is_complete_deck, shuffle};
use crate::error::DealError;
use crate::hand::Hand;
use crate::rules::is_wild;

use super::{Game, GameState, GameStatus, Party};

/// Cards dealt to each hand at the start of a game.
pub const HAND_SIZE: usize = 8;

impl GameState {
    /// Deals a fresh game from `cards`, taken in order.
    ///
    /// The first [`HAND_SIZE`] cards go to the player and the next
    /// [`HAND_SIZE`] to the opponent. The first remaining card that is not an
    /// eight starts the discard pile; if every remaining card is an eight the
    /// first one is used. The rest becomes the draw pile.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `2 * HAND_SIZE + 1` cards are supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{GameState, GameStatus, deck::build_deck};
    ///
    /// let state = GameState::deal(build_deck()).unwrap();
    /// assert_eq!(state.status, GameStatus::Playing);
    /// assert_eq!(state.deck.len(), 35);
    /// ```
    pub fn deal(mut cards: Vec<Card>) -> Result<Self, DealError> {
        if cards.len() <= HAND_SIZE * 2 {
            return Err(DealError::NotEnoughCards);
        }

        let mut deck = cards.split_off(HAND_SIZE * 2);
        let opponent_cards = cards.split_off(HAND_SIZE);
        let player_cards = cards;

        let start = deck.iter().position(|c| !is_wild(c)).unwrap_or(0);
        let first = deck.remove(start);

        debug!(active = %first, deck = deck.len(), "dealt new game");

        Ok(Self {
            deck,
            player_hand: Hand::from_cards(player_cards),
            opponent_hand: Hand::from_cards(opponent_cards),
            discard_pile: alloc::vec![first],
            active_suit: Some(first.suit),
            turn: Party::Player,
            status: GameStatus::Playing,
            winner: None,
            last_action: String::from("Game started! Your turn."),
        })
    }
}

impl Game {
    /// Shuffles a fresh deck and deals a new game.
    ///
    /// Replaces whatever game was in progress and cancels any scheduled
    /// opponent turn.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always has enough cards to deal"
    )]
    pub fn start_new_game(&self) {
        self.transition(|_, rng| {
            let cards = shuffle(&build_deck(), rng);
            GameState::deal(cards).map(|state| (state, ()))
        })
        .expect("a full deck always has enough cards to deal");
    }

    /// Deals a new game from a caller-ordered deck.
    ///
    /// Useful for replaying a known deal. Dealing follows [`GameState::deal`].
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is not exactly one standard 52-card deck.
    pub fn start_new_game_with_deck(&self, cards: Vec<Card>) -> Result<(), DealError> {
        if !is_complete_deck(&cards) {
            trace!(len = cards.len(), "rejected incomplete deck");
            return Err(DealError::IncompleteDeck);
        }

        self.transition(|_, _| GameState::deal(cards).map(|state| (state, ())))
    }
}
