//! Per-letter verdicts and evaluated guesses

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Classification of one guessed letter
///
/// Variants are ordered by keyboard-hint priority, so `max()` over a letter's
/// statuses yields the best one seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not available to match
    Absent,
    /// Letter in the secret, wrong position, within the occurrence budget
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterStatus {
    /// Emoji square used in shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// A guessed letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterVerdict {
    pub letter: char,
    pub status: LetterStatus,
}

/// The verdicts for one submitted guess, in guess order
///
/// Produced by [`evaluate`](super::evaluate) or decoded from the wire. There is
/// no way to change a verdict once the value exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatedGuess {
    guess: Word,
    verdicts: [LetterVerdict; WORD_LENGTH],
}

impl EvaluatedGuess {
    pub(crate) const fn new(guess: Word, verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        Self { guess, verdicts }
    }

    /// Rebuild an evaluation from verdicts recorded elsewhere
    ///
    /// The guess text is taken from the verdict letters.
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` if a verdict letter is not A-Z.
    pub fn from_verdicts(verdicts: [LetterVerdict; WORD_LENGTH]) -> Result<Self, WordError> {
        let text: String = verdicts.iter().map(|v| v.letter).collect();
        let guess = Word::new(text)?;

        // Normalize letters to the word's uppercase form
        let mut verdicts = verdicts;
        for (verdict, &letter) in verdicts.iter_mut().zip(guess.letters()) {
            verdict.letter = letter as char;
        }

        Ok(Self { guess, verdicts })
    }

    /// The guess that was evaluated
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Verdicts in guess order
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// Iterate over just the statuses
    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.verdicts.iter().map(|v| v.status)
    }

    /// True if every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses().all(|s| s == LetterStatus::Correct)
    }

    /// Number of verdicts with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Emoji row such as "🟨⬜🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn verdicts(letters: &str, statuses: [LetterStatus; 5]) -> [LetterVerdict; 5] {
        let mut out = [LetterVerdict {
            letter: ' ',
            status: Absent,
        }; 5];
        for ((slot, letter), status) in out.iter_mut().zip(letters.chars()).zip(statuses) {
            *slot = LetterVerdict { letter, status };
        }
        out
    }

    #[test]
    fn status_priority_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Absent, Correct, Present].into_iter().max(), Some(Correct));
    }

    #[test]
    fn from_verdicts_normalizes_letters() {
        let evaluated =
            EvaluatedGuess::from_verdicts(verdicts("crane", [Absent, Present, Correct, Absent, Correct]))
                .unwrap();

        assert_eq!(evaluated.guess().text(), "CRANE");
        assert_eq!(evaluated.verdicts()[0].letter, 'C');
        assert_eq!(evaluated.count(Correct), 2);
        assert_eq!(evaluated.count(Present), 1);
        assert!(!evaluated.is_win());
    }

    #[test]
    fn from_verdicts_rejects_non_letters() {
        let result = EvaluatedGuess::from_verdicts(verdicts("cr4ne", [Absent; 5]));
        assert_eq!(result, Err(WordError::InvalidCharacter('4')));
    }

    #[test]
    fn emoji_rendering() {
        let evaluated =
            EvaluatedGuess::from_verdicts(verdicts("speed", [Present, Absent, Present, Present, Absent]))
                .unwrap();
        assert_eq!(evaluated.to_emoji(), "🟨⬜🟨🟨⬜");
        assert_eq!(evaluated.to_string(), "SPEED 🟨⬜🟨🟨⬜");
    }

    #[test]
    fn all_correct_is_win() {
        let evaluated = EvaluatedGuess::from_verdicts(verdicts("slate", [Correct; 5])).unwrap();
        assert!(evaluated.is_win());
    }
}
