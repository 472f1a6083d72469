//! Core domain types for the word game
//!
//! Words, verdicts, the guess evaluator and everything derived directly from
//! its output. Nothing in here performs I/O or holds shared state.

mod evaluator;
mod hints;
mod status;
mod verdict;
mod word;

pub use evaluator::{evaluate, evaluate_str, is_winning_guess};
pub use hints::{KEYBOARD_ROWS, KeyboardHints, aggregate_keyboard_hint};
pub use status::GameStatus;
pub use verdict::{EvaluatedGuess, LetterStatus, LetterVerdict};
pub use word::{WORD_LENGTH, Word, WordError};
