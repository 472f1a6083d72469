//! Game session state
//!
//! Owns everything the evaluator deliberately does not: the secret, attempt
//! counting, status transitions and per-run statistics. Front-ends hold a
//! `Game` and call into the evaluator only through it.

mod config;
mod session;
mod stats;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use session::{Game, GuessRecord};
pub use stats::GameStats;

use crate::core::{GameStatus, WordError};
use thiserror::Error;

/// Reasons a guess (or game setup) is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over ({0})")]
    GameOver(GameStatus),

    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),

    #[error("{0} is not in the word list")]
    UnknownWord(String),

    #[error("max attempts must be at least 1")]
    InvalidMaxAttempts,
}
