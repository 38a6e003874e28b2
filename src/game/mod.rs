//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::options::GameOptions;
use crate::rules::is_legal_play;

mod actions;
mod deal;
mod opponent;
pub mod state;

pub use deal::HAND_SIZE;
pub use opponent::PendingTurn;
pub use state::{GameState, GameStatus, Party};

/// The installed snapshot together with its identity.
#[derive(Debug, Clone)]
struct Session {
    state: GameState,
    /// Bumped on every installed transition.
    generation: u64,
    /// Whether an opponent turn has been handed out for this generation.
    opponent_scheduled: bool,
}

impl Session {
    fn succeed(&self, state: GameState) -> Self {
        Self {
            state,
            generation: self.generation.wrapping_add(1),
            opponent_scheduled: false,
        }
    }
}

/// A Crazy Eights engine for one player against a computer opponent.
///
/// The game owns the single authoritative [`GameState`]. Commands validate
/// against the current snapshot, build a successor and install it whole; a
/// rejected command leaves the snapshot untouched.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current snapshot.
    session: Mutex<Session>,
    /// Random number generator for shuffles and opponent choices.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates an idle game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::{Game, GameOptions, GameStatus};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state().status, GameStatus::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            session: Mutex::new(Session {
                state: GameState::new(),
                generation: 0,
                opponent_scheduled: false,
            }),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Builds the successor of the current snapshot and installs it if `f`
    /// succeeds.
    fn transition<R, E>(
        &self,
        f: impl FnOnce(&GameState, &mut ChaCha8Rng) -> Result<(GameState, R), E>,
    ) -> Result<R, E> {
        self.session.try_update(|session| {
            let mut rng = self.rng.lock();
            let (state, out) = f(&session.state, &mut *rng)?;
            drop(rng);
            Ok((session.succeed(state), out))
        })
    }

    /// Returns a copy of the current snapshot.
    pub fn state(&self) -> GameState {
        self.session.lock().state.clone()
    }

    /// Returns the identity of the current snapshot.
    ///
    /// The value changes every time a command is applied.
    pub fn generation(&self) -> u64 {
        self.session.lock().generation
    }

    /// Returns whether `card` could be played on the current active card.
    ///
    /// Returns `false` before the first deal.
    pub fn is_legal_play(&self, card: &Card) -> bool {
        let session = self.session.lock();
        let state = &session.state;
        match (state.active_card(), state.active_suit) {
            (Some(active), Some(suit)) => is_legal_play(card, active, suit),
            _ => false,
        }
    }

    /// Returns the cards `party` could legally play right now.
    pub fn legal_plays(&self, party: Party) -> Vec<Card> {
        let session = self.session.lock();
        let state = &session.state;
        match (state.active_card(), state.active_suit) {
            (Some(active), Some(suit)) => state.hand(party).legal_plays(active, suit),
            _ => Vec::new(),
        }
    }
}
