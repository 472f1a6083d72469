//! Guess evaluation
//!
//! Classifies every letter of a guess against the secret using Wordle's
//! duplicate-letter rules: a repeated letter only earns as many
//! Correct/Present verdicts as the secret has copies of it.

use super::verdict::{EvaluatedGuess, LetterStatus, LetterVerdict};
use super::word::{WORD_LENGTH, Word, WordError};

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove them from the
///    secret's letter budget
/// 2. Second pass: left to right over the remaining positions, mark Present
///    while the letter still has budget, Absent otherwise
///
/// Pure and deterministic; the budget table is local to each call.
///
/// # Examples
/// ```
/// use wordgame::core::{LetterStatus::*, Word, evaluate};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// let evaluated = evaluate(&secret, &guess);
///
/// let statuses: Vec<_> = evaluated.statuses().collect();
/// assert_eq!(statuses, [Present, Present, Correct, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> EvaluatedGuess {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut remaining = secret.letter_counts();

    let guess_letters = guess.letters();
    let secret_letters = secret.letters();

    // First pass: greens
    for (i, status) in result.iter_mut().enumerate() {
        if guess_letters[i] == secret_letters[i] {
            *status = LetterStatus::Correct;

            if let Some(count) = remaining.get_mut(&guess_letters[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows, earliest position claims the budget first
    for (i, status) in result.iter_mut().enumerate() {
        if *status == LetterStatus::Correct {
            continue;
        }

        if let Some(count) = remaining.get_mut(&guess_letters[i])
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    let mut verdicts = [LetterVerdict {
        letter: ' ',
        status: LetterStatus::Absent,
    }; WORD_LENGTH];
    for ((verdict, &letter), status) in verdicts.iter_mut().zip(guess_letters).zip(result) {
        *verdict = LetterVerdict {
            letter: letter as char,
            status,
        };
    }

    EvaluatedGuess::new(guess.clone(), verdicts)
}

/// Validate both strings, then evaluate
///
/// # Errors
/// Returns `WordError` if either input is not exactly five ASCII letters. The
/// secret is checked first.
///
/// # Examples
/// ```
/// use wordgame::core::{WordError, evaluate_str};
///
/// assert!(evaluate_str("erase", "speed").is_ok());
/// assert_eq!(evaluate_str("erase", "spe"), Err(WordError::InvalidLength(3)));
/// ```
pub fn evaluate_str(secret: &str, guess: &str) -> Result<EvaluatedGuess, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&secret, &guess))
}

/// True if every verdict is `Correct`
#[must_use]
pub fn is_winning_guess(evaluated: &EvaluatedGuess) -> bool {
    evaluated.is_win()
}
