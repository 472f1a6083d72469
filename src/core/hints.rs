//! Keyboard hints aggregated from a game's guess history

use super::verdict::{EvaluatedGuess, LetterStatus};

/// QWERTY rows as drawn by the front-ends
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best status ever seen for `letter` across `history`
///
/// Priority is Correct > Present > Absent; `None` means the letter has never
/// been guessed. The whole history is scanned on every call.
///
/// # Examples
/// ```
/// use wordgame::core::{LetterStatus, aggregate_keyboard_hint, evaluate_str};
///
/// let history = [
///     evaluate_str("apple", "paper").unwrap(),
///     evaluate_str("apple", "ample").unwrap(),
/// ];
/// assert_eq!(aggregate_keyboard_hint(&history, 'a'), Some(LetterStatus::Correct));
/// assert_eq!(aggregate_keyboard_hint(&history, 'r'), Some(LetterStatus::Absent));
/// assert_eq!(aggregate_keyboard_hint(&history, 'z'), None);
/// ```
#[must_use]
pub fn aggregate_keyboard_hint(history: &[EvaluatedGuess], letter: char) -> Option<LetterStatus> {
    let letter = letter.to_ascii_uppercase();

    history
        .iter()
        .flat_map(EvaluatedGuess::verdicts)
        .filter(|v| v.letter == letter)
        .map(|v| v.status)
        .max()
}

/// Hints for every letter A-Z, built in a single pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: [Option<LetterStatus>; 26],
}

impl KeyboardHints {
    #[must_use]
    pub fn from_history(history: &[EvaluatedGuess]) -> Self {
        let mut hints = [None; 26];

        for verdict in history.iter().flat_map(EvaluatedGuess::verdicts) {
            if let Some(slot) = letter_index(verdict.letter).map(|i| &mut hints[i]) {
                *slot = (*slot).max(Some(verdict.status));
            }
        }

        Self { hints }
    }

    /// Hint for one letter; non-letters have none
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        letter_index(letter).and_then(|i| self.hints[i])
    }

    /// Letters (A-Z order) whose best status is `status`
    #[must_use]
    pub fn letters_with(&self, status: LetterStatus) -> Vec<char> {
        ('A'..='Z').filter(|&c| self.get(c) == Some(status)).collect()
    }
}

fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper as u8 - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;
    use LetterStatus::{Absent, Correct, Present};

    fn history(secret: &str, guesses: &[&str]) -> Vec<EvaluatedGuess> {
        guesses
            .iter()
            .map(|g| evaluate_str(secret, g).unwrap())
            .collect()
    }

    #[test]
    fn unseen_letter_has_no_hint() {
        assert_eq!(aggregate_keyboard_hint(&[], 'A'), None);

        let h = history("crane", &["slate"]);
        assert_eq!(aggregate_keyboard_hint(&h, 'Q'), None);
    }

    #[test]
    fn best_status_wins_regardless_of_order() {
        // A is Present in the first guess, Correct in the second
        let h = history("crane", &["arise", "beach"]);
        assert_eq!(aggregate_keyboard_hint(&h, 'A'), Some(Correct));

        // Reverse order gives the same answer
        let reversed: Vec<_> = h.iter().rev().cloned().collect();
        assert_eq!(aggregate_keyboard_hint(&reversed, 'A'), Some(Correct));
    }

    #[test]
    fn present_beats_absent_within_one_guess() {
        // SPEED vs CRANE: first E Present, second E Absent
        let h = history("crane", &["speed"]);
        assert_eq!(aggregate_keyboard_hint(&h, 'E'), Some(Present));
        assert_eq!(aggregate_keyboard_hint(&h, 'S'), Some(Absent));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let h = history("crane", &["crane"]);
        assert_eq!(aggregate_keyboard_hint(&h, 'c'), Some(Correct));
    }

    #[test]
    fn separate_games_do_not_share_hints() {
        let first_game = history("crane", &["crane"]);
        let second_game = history("pilot", &["music"]);

        assert_eq!(aggregate_keyboard_hint(&first_game, 'C'), Some(Correct));
        assert_eq!(aggregate_keyboard_hint(&second_game, 'C'), Some(Absent));
        assert_eq!(aggregate_keyboard_hint(&second_game, 'R'), None);
    }

    #[test]
    fn keyboard_hints_match_single_letter_lookup() {
        let h = history("apple", &["paper", "speed", "ample"]);
        let hints = KeyboardHints::from_history(&h);

        for letter in 'A'..='Z' {
            assert_eq!(
                hints.get(letter),
                aggregate_keyboard_hint(&h, letter),
                "letter {letter}"
            );
        }
    }

    #[test]
    fn keyboard_hints_grouping() {
        let h = history("apple", &["ample"]);
        let hints = KeyboardHints::from_history(&h);

        assert_eq!(hints.letters_with(Correct), vec!['A', 'E', 'L', 'P']);
        assert_eq!(hints.letters_with(Absent), vec!['M']);
        assert!(hints.letters_with(Present).is_empty());
        assert_eq!(hints.get('1'), None);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }
}
