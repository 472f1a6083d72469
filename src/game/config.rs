//! Game configuration

use super::GameError;

/// Default number of guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Configuration for a single game
///
/// Fields are private so `max_attempts` is always at least 1; build one with
/// [`GameConfig::new`] or take the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    strict: bool,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns `GameError::InvalidMaxAttempts` if `max_attempts` is zero.
    pub const fn new(max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidMaxAttempts);
        }

        Ok(Self {
            max_attempts,
            strict: false,
        })
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Number of guesses allowed per game, never zero
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Only accept guesses that appear in the word list
    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strict: false,
        }
    }
}
