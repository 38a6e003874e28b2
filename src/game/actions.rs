use alloc::format;

use tracing::{debug, info, trace};

use crate::card::{Card, Suit};
use crate::error::{DrawError, PlayError, SuitError};
use crate::options::GameOptions;
use crate::policy::preferred_suit;
use crate::rules::{is_legal_play, is_wild};

use super::{Game, GameState, GameStatus, Party};

const fn actor_name(party: Party, options: &GameOptions) -> &'static str {
    match party {
        Party::Player => "You",
        Party::Opponent => options.opponent_name,
    }
}

fn possessive(party: Party, options: &GameOptions) -> alloc::string::String {
    match party {
        Party::Player => "Your".into(),
        Party::Opponent => format!("{}'s", options.opponent_name),
    }
}

impl GameState {
    /// Returns the successor state after `actor` plays `card`.
    ///
    /// A non-wild card sets the active suit to its own suit and passes the
    /// turn. An eight played by the player moves to
    /// [`GameStatus::ChoosingSuit`] without passing the turn; an eight played
    /// by the opponent names the opponent's preferred suit at once and hands
    /// the turn back. Emptying a hand ends the game in the actor's favour
    /// regardless of the above.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state, it is not
    /// `actor`'s turn, `actor` does not hold the card, or the card does not
    /// match the active suit or rank.
    pub fn play_card(
        &self,
        card: Card,
        actor: Party,
        options: &GameOptions,
    ) -> Result<Self, PlayError> {
        if self.status != GameStatus::Playing {
            return Err(PlayError::InvalidState);
        }
        if self.turn != actor {
            return Err(PlayError::NotYourTurn);
        }
        if !self.hand(actor).contains(&card) {
            return Err(PlayError::CardNotInHand);
        }
        let (Some(active), Some(suit)) = (self.active_card(), self.active_suit) else {
            return Err(PlayError::InvalidState);
        };
        if !is_legal_play(&card, active, suit) {
            return Err(PlayError::IllegalCard);
        }

        let mut next = self.clone();
        let played = next
            .hand_mut(actor)
            .remove_card(&card)
            .ok_or(PlayError::CardNotInHand)?;
        next.discard_pile.push(played);
        let name = actor_name(actor, options);

        if next.hand(actor).is_empty() {
            if !is_wild(&played) {
                next.active_suit = Some(played.suit);
            }
            next.status = GameStatus::GameOver;
            next.winner = Some(actor);
            next.last_action = match actor {
                Party::Player => format!("You played {played}. You win!"),
                Party::Opponent => format!("{name} played {played}. {name} wins!"),
            };
            info!(winner = ?actor, card = %played, "game over");
            return Ok(next);
        }

        if is_wild(&played) {
            match actor {
                Party::Player => {
                    next.status = GameStatus::ChoosingSuit;
                    next.last_action = format!("You played {played}. Choose a suit.");
                }
                Party::Opponent => {
                    let chosen = preferred_suit(next.hand(actor));
                    next.active_suit = Some(chosen);
                    next.turn = Party::Player;
                    next.last_action =
                        format!("{name} played {played} and chose {chosen}. Your turn.");
                }
            }
        } else {
            next.active_suit = Some(played.suit);
            next.turn = actor.other();
            next.last_action = format!("{name} played {played}.");
        }

        debug!(actor = ?actor, card = %played, suit = ?next.active_suit, "card played");
        Ok(next)
    }

    /// Returns the successor state after `actor` draws.
    ///
    /// The top card of the deck moves to `actor`'s hand. When the deck is
    /// empty nothing is drawn. Either way the turn passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state or it is not
    /// `actor`'s turn.
    pub fn draw_card(&self, actor: Party, options: &GameOptions) -> Result<Self, DrawError> {
        if self.status != GameStatus::Playing {
            return Err(DrawError::InvalidState);
        }
        if self.turn != actor {
            return Err(DrawError::NotYourTurn);
        }

        let mut next = self.clone();
        next.turn = actor.other();

        if let Some(card) = next.deck.pop() {
            next.hand_mut(actor).add_card(card);
            next.last_action = format!("{} drew a card.", actor_name(actor, options));
            debug!(actor = ?actor, deck = next.deck.len(), "card drawn");
        } else {
            next.last_action = format!(
                "The deck is empty! {} turn is skipped.",
                possessive(actor, options)
            );
            debug!(actor = ?actor, "deck empty, turn skipped");
        }

        Ok(next)
    }

    /// Returns the successor state after the player names `suit` for the
    /// eight just played. The turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if no suit choice is pending.
    pub fn choose_suit(&self, suit: Suit, options: &GameOptions) -> Result<Self, SuitError> {
        if self.status != GameStatus::ChoosingSuit {
            return Err(SuitError::InvalidState);
        }

        let mut next = self.clone();
        next.active_suit = Some(suit);
        next.status = GameStatus::Playing;
        next.turn = Party::Opponent;
        next.last_action = format!(
            "You chose {suit}. {} turn.",
            possessive(Party::Opponent, options)
        );

        debug!(suit = %suit, "suit chosen");
        Ok(next)
    }
}

impl Game {
    /// Plays `card` from the player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state, it is not
    /// the player's turn, the card is not in the player's hand, or the card
    /// cannot be played on the active card.
    pub fn play_card(&self, card: Card) -> Result<(), PlayError> {
        self.play_card_as(card, Party::Player)
    }

    /// Draws a card for the player.
    ///
    /// Returns the drawn card, or `None` when the deck was empty and the turn
    /// was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing state or it is not
    /// the player's turn.
    pub fn draw_card(&self) -> Result<Option<Card>, DrawError> {
        self.draw_card_as(Party::Player)
    }

    /// Names the active suit after the player played an eight.
    ///
    /// # Errors
    ///
    /// Returns an error if no suit choice is pending.
    pub fn choose_suit(&self, suit: Suit) -> Result<(), SuitError> {
        self.transition(|state, _| {
            state
                .choose_suit(suit, &self.options)
                .map(|next| (next, ()))
        })
        .inspect_err(|err| trace!(%err, "rejected suit choice"))
    }

    pub(super) fn play_card_as(&self, card: Card, actor: Party) -> Result<(), PlayError> {
        self.transition(|state, _| {
            state
                .play_card(card, actor, &self.options)
                .map(|next| (next, ()))
        })
        .inspect_err(|err| trace!(%err, actor = ?actor, card = %card, "rejected play"))
    }

    pub(super) fn draw_card_as(&self, actor: Party) -> Result<Option<Card>, DrawError> {
        self.transition(|state, _| {
            let next = state.draw_card(actor, &self.options)?;
            let drawn = if next.deck.len() < state.deck.len() {
                next.hand(actor).cards().last().copied()
            } else {
                None
            };
            Ok((next, drawn))
        })
        .inspect_err(|err| trace!(%err, actor = ?actor, "rejected draw"))
    }
}
