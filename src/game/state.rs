//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::{build_deck, is_complete_deck};
use crate::hand::Hand;

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Party {
    /// Returns the other party.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// No game has been dealt yet.
    #[default]
    Idle,
    /// Waiting for the party whose turn it is to play or draw.
    Playing,
    /// The player played an eight and must name a suit.
    ChoosingSuit,
    /// A hand was emptied.
    GameOver,
}

/// A snapshot of the whole game.
///
/// Snapshots are never edited in place by the engine: every transition
/// builds a new one from the previous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Draw pile; the top card is the last element.
    pub deck: Vec<Card>,
    /// The player's hand.
    pub player_hand: Hand,
    /// The opponent's hand.
    pub opponent_hand: Hand,
    /// Played cards; the last element is the active card.
    pub discard_pile: Vec<Card>,
    /// Suit that must be matched. `None` only before the first deal.
    pub active_suit: Option<Suit>,
    /// Party allowed to act.
    pub turn: Party,
    /// Current status.
    pub status: GameStatus,
    /// Winning party once the game is over.
    pub winner: Option<Party>,
    /// Description of the most recent transition, for display only.
    pub last_action: String,
}

impl GameState {
    /// Creates the idle state: an ordered, undealt deck and empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: build_deck(),
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            discard_pile: Vec::new(),
            active_suit: None,
            turn: Party::Player,
            status: GameStatus::Idle,
            winner: None,
            last_action: String::from("Welcome to Crazy Eights!"),
        }
    }

    /// Returns the active card (top of the discard pile).
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    /// Returns the hand held by `party`.
    #[must_use]
    pub const fn hand(&self, party: Party) -> &Hand {
        match party {
            Party::Player => &self.player_hand,
            Party::Opponent => &self.opponent_hand,
        }
    }

    pub(crate) const fn hand_mut(&mut self, party: Party) -> &mut Hand {
        match party {
            Party::Player => &mut self.player_hand,
            Party::Opponent => &mut self.opponent_hand,
        }
    }

    /// Returns the number of cards across the deck, both hands and the
    /// discard pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.player_hand.len() + self.opponent_hand.len() + self.discard_pile.len()
    }

    /// Returns whether the opponent is due to act.
    #[must_use]
    pub fn is_opponent_due(&self) -> bool {
        self.status == GameStatus::Playing && self.turn == Party::Opponent && self.winner.is_none()
    }

    /// Checks the table invariants.
    ///
    /// Every card of the deck is held by exactly one container, the discard
    /// pile is non-empty once dealt, and a winner exists exactly when the game
    /// is over.
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        if self.card_count() != DECK_SIZE {
            return false;
        }

        let mut all = Vec::with_capacity(DECK_SIZE);
        all.extend_from_slice(&self.deck);
        all.extend_from_slice(self.player_hand.cards());
        all.extend_from_slice(self.opponent_hand.cards());
        all.extend_from_slice(&self.discard_pile);
        if !is_complete_deck(&all) {
            return false;
        }

        if self.status != GameStatus::Idle && self.discard_pile.is_empty() {
            return false;
        }

        let emptied = self.status != GameStatus::Idle
            && (self.player_hand.is_empty() || self.opponent_hand.is_empty());
        let over = self.status == GameStatus::GameOver;
        self.winner.is_some() == over && over == emptied
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
