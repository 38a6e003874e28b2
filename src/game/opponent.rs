use core::time::Duration;

use tracing::{debug, trace};

use crate::error::OpponentError;
use crate::policy::{OpponentMove, choose_move};

use super::{Game, Party};

/// An opponent turn handed out by [`Game::schedule_opponent_turn`].
///
/// The ticket is bound to the snapshot it was issued for. Once any command
/// replaces that snapshot (including a new game) the ticket is stale and
/// running it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTurn {
    /// Snapshot generation the turn belongs to.
    pub generation: u64,
    /// How long to wait before acting.
    pub delay: Duration,
}

impl Game {
    /// Schedules the opponent's turn if it is due.
    ///
    /// Returns `None` when the opponent is not due to act, or when a turn was
    /// already handed out for the current snapshot. The caller is expected
    /// to wait for [`PendingTurn::delay`] and then call
    /// [`Game::run_opponent_turn`].
    pub fn schedule_opponent_turn(&self) -> Option<PendingTurn> {
        let mut session = self.session.lock();
        if !session.state.is_opponent_due() || session.opponent_scheduled {
            return None;
        }
        session.opponent_scheduled = true;

        let pending = PendingTurn {
            generation: session.generation,
            delay: self.options.opponent_delay,
        };
        drop(session);

        trace!(generation = pending.generation, "opponent turn scheduled");
        Some(pending)
    }

    /// Runs a scheduled opponent turn.
    ///
    /// Plays a random legal card, or draws if none is playable.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::Stale`] if the game changed since `pending`
    /// was issued, or [`OpponentError::NotOpponentTurn`] if the opponent is
    /// not due to act.
    pub fn run_opponent_turn(&self, pending: PendingTurn) -> Result<OpponentMove, OpponentError> {
        self.opponent_turn(Some(pending.generation))
    }

    /// Waits for the scheduled delay, then runs the opponent turn.
    ///
    /// # Errors
    ///
    /// See [`Game::run_opponent_turn`].
    #[cfg(feature = "std")]
    pub fn wait_and_run_opponent_turn(
        &self,
        pending: PendingTurn,
    ) -> Result<OpponentMove, OpponentError> {
        std::thread::sleep(pending.delay);
        self.run_opponent_turn(pending)
    }

    /// Runs the opponent turn immediately, without scheduling.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::NotOpponentTurn`] if the opponent is not due
    /// to act.
    pub fn take_opponent_turn(&self) -> Result<OpponentMove, OpponentError> {
        self.opponent_turn(None)
    }

    fn opponent_turn(&self, expected: Option<u64>) -> Result<OpponentMove, OpponentError> {
        self.session
            .try_update(|session| {
                if expected.is_some_and(|generation| generation != session.generation) {
                    return Err(OpponentError::Stale);
                }

                let state = &session.state;
                if !state.is_opponent_due() {
                    return Err(OpponentError::NotOpponentTurn);
                }
                let (Some(active), Some(suit)) = (state.active_card(), state.active_suit) else {
                    return Err(OpponentError::NotOpponentTurn);
                };

                let chosen = choose_move(&state.opponent_hand, active, suit, &mut *self.rng.lock());
                let next = match chosen {
                    OpponentMove::Play(card) => {
                        state.play_card(card, Party::Opponent, &self.options)?
                    }
                    OpponentMove::Draw => state.draw_card(Party::Opponent, &self.options)?,
                };

                debug!(chosen = ?chosen, "opponent moved");
                Ok((session.succeed(next), chosen))
            })
            .inspect_err(|err| trace!(%err, "opponent turn not run"))
    }
}
