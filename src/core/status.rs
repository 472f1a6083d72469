//! Game status derived from verdict history

use super::verdict::EvaluatedGuess;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a game stands
///
/// Sent as `"IN_PROGRESS" | "WON" | "LOST"`; `"PLAYING"` is also accepted for
/// an unfinished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[serde(alias = "PLAYING")]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Derive the status of a game from its guesses
    ///
    /// Won as soon as any guess is all Correct (including on the final
    /// attempt); Lost once `max_attempts` guesses have been made without a win.
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{GameStatus, evaluate_str};
    ///
    /// let history = vec![evaluate_str("crane", "slate").unwrap()];
    /// assert_eq!(GameStatus::from_history(&history, 6), GameStatus::InProgress);
    /// assert_eq!(GameStatus::from_history(&history, 1), GameStatus::Lost);
    /// ```
    #[must_use]
    pub fn from_history(history: &[EvaluatedGuess], max_attempts: usize) -> Self {
        if history.iter().any(EvaluatedGuess::is_win) {
            Self::Won
        } else if history.len() >= max_attempts {
            Self::Lost
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}
