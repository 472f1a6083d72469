//! A single game: secret word, guesses so far, and status

use super::{GameConfig, GameError};
use crate::core::{
    EvaluatedGuess, GameStatus, KeyboardHints, LetterStatus, Word, aggregate_keyboard_hint,
    evaluate,
};
use tracing::{debug, info};

/// One submitted guess as the session store records it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess_number: usize,
    evaluation: EvaluatedGuess,
}

impl GuessRecord {
    /// `guess_number` counts from 1
    #[must_use]
    pub const fn new(guess_number: usize, evaluation: EvaluatedGuess) -> Self {
        Self {
            guess_number,
            evaluation,
        }
    }

    #[must_use]
    pub const fn guess_number(&self) -> usize {
        self.guess_number
    }

    #[must_use]
    pub const fn evaluation(&self) -> &EvaluatedGuess {
        &self.evaluation
    }
}

/// Game state container
///
/// The status is recomputed from the history after every accepted guess, so
/// it is always exactly what [`GameStatus::from_history`] says.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    config: GameConfig,
    history: Vec<EvaluatedGuess>,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word, config: GameConfig) -> Self {
        info!(max_attempts = config.max_attempts(), "new game started");

        Self {
            secret,
            config,
            history: Vec::with_capacity(config.max_attempts()),
            status: GameStatus::InProgress,
        }
    }

    /// Evaluate a guess and record it
    ///
    /// `dictionary` is only consulted when the game is in strict mode. Rejected
    /// guesses do not use up an attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game is already won or lost
    /// - The guess is not five ASCII letters
    /// - Strict mode is on and the guess is not in `dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::{GameStatus, Word};
    /// use wordgame::game::{Game, GameConfig};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap(), GameConfig::default());
    /// let record = game.submit_guess("slate", &[]).unwrap();
    /// assert_eq!(record.guess_number(), 1);
    /// assert_eq!(game.attempts_left(), 5);
    ///
    /// game.submit_guess("crane", &[]).unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(
        &mut self,
        input: &str,
        dictionary: &[Word],
    ) -> Result<GuessRecord, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let guess = Word::new(input)?;

        if self.config.strict() && !dictionary.contains(&guess) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let evaluation = evaluate(&self.secret, &guess);
        let guess_number = self.history.len() + 1;

        debug!(
            guess_number,
            guess = %guess,
            verdict = %evaluation.to_emoji(),
            "guess evaluated"
        );

        self.history.push(evaluation.clone());
        self.status = GameStatus::from_history(&self.history, self.config.max_attempts());

        if self.status.is_over() {
            info!(status = %self.status, attempts = guess_number, "game finished");
        }

        Ok(GuessRecord::new(guess_number, evaluation))
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret word
    ///
    /// Front-ends should only show this once the game is over.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }

    /// Evaluated guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        &self.history
    }

    /// Guess records numbered from 1
    pub fn records(&self) -> impl Iterator<Item = GuessRecord> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, evaluation)| GuessRecord::new(i + 1, evaluation.clone()))
    }

    #[must_use]
    pub fn keyboard_hint(&self, letter: char) -> Option<LetterStatus> {
        aggregate_keyboard_hint(&self.history, letter)
    }

    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_history(&self.history)
    }

    /// Player-facing status line
    #[must_use]
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::InProgress => {
                let left = self.attempts_left();
                let noun = if left == 1 { "attempt" } else { "attempts" };
                format!("Keep guessing! {left} {noun} left.")
            }
            GameStatus::Won => {
                let n = self.attempts();
                let noun = if n == 1 { "guess" } else { "guesses" };
                format!("Congratulations! You guessed the word in {n} {noun}!")
            }
            GameStatus::Lost => {
                format!("Better luck next time! The word was: {}", self.secret)
            }
        }
    }
}
