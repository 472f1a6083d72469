//! Per-run statistics across finished games

use super::Game;
use crate::core::GameStatus;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl GameStats {
    /// Add a finished game; in-progress games are ignored
    pub fn record(&mut self, game: &Game) {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                let guesses = game.attempts();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
