//! Game configuration options.

use core::time::Duration;

/// Configuration options for a Crazy Eights game.
///
/// The rules themselves are fixed; these options only shape how the opponent
/// is presented. Use the builder methods to customize them:
///
/// ```
/// use core::time::Duration;
/// use crazy_eights::GameOptions;
///
/// let options = GameOptions::default()
///     .with_opponent_delay(Duration::ZERO)
///     .with_opponent_name("Rusty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause attached to each scheduled opponent turn.
    pub opponent_delay: Duration,
    /// Opponent name used in action messages.
    pub opponent_name: &'static str,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(1500),
            opponent_name: "Julia",
        }
    }
}

impl GameOptions {
    /// Sets the opponent's thinking delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponent_delay(Duration::from_millis(250));
    /// assert_eq!(options.opponent_delay, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Sets the opponent's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponent_name("Rusty");
    /// assert_eq!(options.opponent_name, "Rusty");
    /// ```
    #[must_use]
    pub const fn with_opponent_name(mut self, name: &'static str) -> Self {
        self.opponent_name = name;
        self
    }
}
