//! Game word representation
//!
//! A `Word` is the only way secrets and guesses enter the evaluator, so building
//! one is where malformed input gets rejected.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Carries the number of characters actually supplied
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word may only contain the letters A-Z, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive and stored uppercase. Surrounding whitespace is
    /// not trimmed; a padded word is rejected like any other malformed input.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordgame::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text = text.to_ascii_uppercase();
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position] as char
    }

    /// Check if the word contains a specific letter (case-insensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.letters.iter().any(|&b| b as char == letter)
    }

    /// Count of each letter in the word
    ///
    /// This is the starting occurrence budget for evaluation.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
