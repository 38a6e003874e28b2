//! Error types for game operations.
//!
//! A rejected operation never changes the game state.

use thiserror::Error;

/// Errors that can occur while dealing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards to deal both hands and a starting discard.
    #[error("not enough cards to deal")]
    NotEnoughCards,
    /// The supplied deck is not exactly one standard 52-card deck.
    #[error("deck is not a complete 52-card deck")]
    IncompleteDeck,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this party's turn.
    #[error("not this party's turn")]
    NotYourTurn,
    /// The card is not in the actor's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The card does not match the active suit or rank.
    #[error("card cannot be played on the active card")]
    IllegalCard,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Invalid game state for drawing.
    #[error("invalid game state for drawing")]
    InvalidState,
    /// Not this party's turn.
    #[error("not this party's turn")]
    NotYourTurn,
}

/// Errors that can occur when choosing a suit after a wild card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// No suit choice is pending.
    #[error("no suit choice is pending")]
    InvalidState,
}

/// Errors that can occur when running the opponent's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpponentError {
    /// The opponent is not due to act.
    #[error("the opponent is not due to act")]
    NotOpponentTurn,
    /// The state changed after the turn was scheduled.
    #[error("scheduled opponent turn is stale")]
    Stale,
    /// The chosen card was rejected.
    #[error("opponent play rejected: {0}")]
    Play(#[from] PlayError),
    /// The draw was rejected.
    #[error("opponent draw rejected: {0}")]
    Draw(#[from] DrawError),
}
