//! Replay command
//!
//! Rebuilds a finished or in-progress game from its recorded wire form and
//! derives everything a front-end shows from the verdicts alone.

use crate::core::{EvaluatedGuess, GameStatus, KeyboardHints};
use crate::game::GuessRecord;
use crate::wire::{WireError, records_from_json};
use std::path::Path;
use thiserror::Error;

/// Result of replaying a recorded game
pub struct ReplayResult {
    pub records: Vec<GuessRecord>,
    pub status: GameStatus,
    pub hints: KeyboardHints,
    pub max_attempts: usize,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("{count} guesses recorded but the game allows only {max_attempts}")]
    TooManyGuesses { count: usize, max_attempts: usize },

    #[error("guess {0} was recorded after the game had already been won")]
    GuessAfterWin(usize),
}

/// Replay a recorded game from its JSON form
///
/// # Errors
///
/// Returns an error if the JSON does not decode, there are more guesses than
/// `max_attempts`, or any guess follows a winning one.
pub fn replay_game(json: &str, max_attempts: usize) -> Result<ReplayResult, ReplayError> {
    let records = records_from_json(json)?;

    if records.len() > max_attempts {
        return Err(ReplayError::TooManyGuesses {
            count: records.len(),
            max_attempts,
        });
    }

    if let Some(win) = records.iter().position(|r| r.evaluation().is_win())
        && win + 1 < records.len()
    {
        return Err(ReplayError::GuessAfterWin(records[win + 1].guess_number()));
    }

    let history: Vec<EvaluatedGuess> = records.iter().map(|r| r.evaluation().clone()).collect();

    Ok(ReplayResult {
        status: GameStatus::from_history(&history, max_attempts),
        hints: KeyboardHints::from_history(&history),
        records,
        max_attempts,
    })
}

/// Read a recorded game from a file and replay it
///
/// # Errors
///
/// Returns `ReplayError::Io` if the file cannot be read, otherwise as
/// [`replay_game`].
pub fn replay_file<P: AsRef<Path>>(path: P, max_attempts: usize) -> Result<ReplayResult, ReplayError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.display().to_string(),
        source,
    })?;

    replay_game(&json, max_attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Word};
    use crate::game::{Game, GameConfig};
    use crate::wire::records_to_json;

    fn recorded(secret: &str, guesses: &[&str]) -> String {
        let mut game = Game::new(Word::new(secret).unwrap(), GameConfig::new(10).unwrap());
        for guess in guesses {
            game.submit_guess(guess, &[]).unwrap();
        }
        let records: Vec<GuessRecord> = game.records().collect();
        records_to_json(&records).unwrap()
    }

    #[test]
    fn replay_won_game() {
        let json = recorded("apple", &["paper", "ample", "apple"]);
        let result = replay_game(&json, 6).unwrap();

        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.hints.get('M'), Some(LetterStatus::Absent));
        assert_eq!(result.hints.get('A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn replay_lost_and_in_progress() {
        let json = recorded("apple", &["crane", "slate"]);

        assert_eq!(replay_game(&json, 2).unwrap().status, GameStatus::Lost);
        assert_eq!(replay_game(&json, 6).unwrap().status, GameStatus::InProgress);
    }

    #[test]
    fn too_many_guesses_rejected() {
        let json = recorded("apple", &["crane", "slate", "pilot"]);
        assert!(matches!(
            replay_game(&json, 2),
            Err(ReplayError::TooManyGuesses {
                count: 3,
                max_attempts: 2
            })
        ));
    }

    #[test]
    fn guess_after_win_rejected() {
        let won = recorded("apple", &["apple"]);
        let more = recorded("apple", &["crane"]);

        // Splice: a winning guess 1 followed by another guess 2
        let mut records = records_from_json(&won).unwrap();
        let extra = records_from_json(&more).unwrap().remove(0);
        records.push(GuessRecord::new(2, extra.evaluation().clone()));
        let json = records_to_json(&records).unwrap();

        assert!(matches!(
            replay_game(&json, 6),
            Err(ReplayError::GuessAfterWin(2))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            replay_game("not json", 6),
            Err(ReplayError::Wire(WireError::Json(_)))
        ));
    }

    #[test]
    fn missing_file_rejected() {
        assert!(matches!(
            replay_file("/no/such/game.json", 6),
            Err(ReplayError::Io { .. })
        ));
    }
}
