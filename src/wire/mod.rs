//! JSON wire encoding of evaluations
//!
//! An evaluation crosses process boundaries as an array of exactly five
//! `{"letter": "A", "color": "GREEN" | "ORANGE" | "GREY"}` objects in guess
//! order. Guess records add the guess number and word in camelCase, and a game
//! state wraps them with `gameStatus`, matching the game API's response bodies.

use crate::core::{EvaluatedGuess, GameStatus, LetterStatus, LetterVerdict, WORD_LENGTH, WordError};
use crate::game::{Game, GuessRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tile color names used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WireColor {
    Green,
    Orange,
    Grey,
}

impl From<LetterStatus> for WireColor {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Green,
            LetterStatus::Present => Self::Orange,
            LetterStatus::Absent => Self::Grey,
        }
    }
}

impl From<WireColor> for LetterStatus {
    fn from(color: WireColor) -> Self {
        match color {
            WireColor::Green => Self::Correct,
            WireColor::Orange => Self::Present,
            WireColor::Grey => Self::Absent,
        }
    }
}

/// One evaluated letter on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLetter {
    pub letter: String,
    pub color: WireColor,
}

/// A recorded guess on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGuessRecord {
    pub guess_number: usize,
    pub guess_word: String,
    pub evaluation: Vec<WireLetter>,
}

/// A game as reported after each guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGameState {
    pub game_status: GameStatus,
    pub is_game_over: bool,
    pub attempts_left: usize,
    pub guesses: Vec<WireGuessRecord>,
}

impl WireGameState {
    #[must_use]
    pub fn new<'a>(
        records: impl IntoIterator<Item = &'a GuessRecord>,
        status: GameStatus,
        max_attempts: usize,
    ) -> Self {
        let guesses: Vec<WireGuessRecord> = records.into_iter().map(WireGuessRecord::from).collect();

        Self {
            game_status: status,
            is_game_over: status.is_over(),
            attempts_left: max_attempts.saturating_sub(guesses.len()),
            guesses,
        }
    }
}

impl From<&Game> for WireGameState {
    fn from(game: &Game) -> Self {
        let records: Vec<GuessRecord> = game.records().collect();
        Self::new(&records, game.status(), game.config().max_attempts())
    }
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("evaluation must have exactly 5 letters, got {0}")]
    WrongLength(usize),

    #[error("invalid letter {0:?} in evaluation")]
    InvalidLetter(String),

    #[error("guess word {guess_word:?} does not match evaluated letters {letters:?}")]
    GuessMismatch { guess_word: String, letters: String },

    #[error("guess numbers must be unique and start at 1, found {0}")]
    GuessNumber(usize),

    #[error(transparent)]
    Word(#[from] WordError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode an evaluation as wire letters, in guess order
#[must_use]
pub fn encode_evaluation(evaluated: &EvaluatedGuess) -> Vec<WireLetter> {
    evaluated
        .verdicts()
        .iter()
        .map(|v| WireLetter {
            letter: v.letter.to_string(),
            color: v.status.into(),
        })
        .collect()
}

/// Decode wire letters back into an evaluation
///
/// Order is preserved. Anything other than five single-letter entries is
/// rejected.
///
/// # Errors
///
/// Returns `WireError::WrongLength` or `WireError::InvalidLetter`.
pub fn decode_evaluation(letters: &[WireLetter]) -> Result<EvaluatedGuess, WireError> {
    if letters.len() != WORD_LENGTH {
        return Err(WireError::WrongLength(letters.len()));
    }

    let mut verdicts = [LetterVerdict {
        letter: ' ',
        status: LetterStatus::Absent,
    }; WORD_LENGTH];

    for (slot, wire) in verdicts.iter_mut().zip(letters) {
        let mut chars = wire.letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(WireError::InvalidLetter(wire.letter.clone())),
        };

        *slot = LetterVerdict {
            letter,
            status: wire.color.into(),
        };
    }

    Ok(EvaluatedGuess::from_verdicts(verdicts)?)
}

/// Serialize an evaluation to its JSON array form
///
/// # Errors
///
/// Returns `WireError::Json` if serialization fails.
///
/// # Examples
/// ```
/// use wordgame::core::evaluate_str;
/// use wordgame::wire::to_json;
///
/// let evaluated = evaluate_str("apple", "ample").unwrap();
/// let json = to_json(&evaluated).unwrap();
/// assert!(json.starts_with(r#"[{"letter":"A","color":"GREEN"},{"letter":"M","color":"GREY"}"#));
/// ```
pub fn to_json(evaluated: &EvaluatedGuess) -> Result<String, WireError> {
    Ok(serde_json::to_string(&encode_evaluation(evaluated))?)
}

/// Parse an evaluation from its JSON array form
///
/// # Errors
///
/// Returns `WireError` if the JSON is malformed, a color is unknown, or the
/// array fails [`decode_evaluation`].
pub fn from_json(json: &str) -> Result<EvaluatedGuess, WireError> {
    let letters: Vec<WireLetter> = serde_json::from_str(json)?;
    decode_evaluation(&letters)
}

impl From<&GuessRecord> for WireGuessRecord {
    fn from(record: &GuessRecord) -> Self {
        Self {
            guess_number: record.guess_number(),
            guess_word: record.evaluation().guess().text().to_string(),
            evaluation: encode_evaluation(record.evaluation()),
        }
    }
}

impl TryFrom<WireGuessRecord> for GuessRecord {
    type Error = WireError;

    fn try_from(wire: WireGuessRecord) -> Result<Self, Self::Error> {
        let evaluation = decode_evaluation(&wire.evaluation)?;
        let letters = evaluation.guess().text();

        if !wire.guess_word.eq_ignore_ascii_case(letters) {
            return Err(WireError::GuessMismatch {
                guess_word: wire.guess_word,
                letters: letters.to_string(),
            });
        }

        Ok(Self::new(wire.guess_number, evaluation))
    }
}

/// Serialize a sequence of guess records as a JSON array
///
/// # Errors
///
/// Returns `WireError::Json` if serialization fails.
pub fn records_to_json<'a>(
    records: impl IntoIterator<Item = &'a GuessRecord>,
) -> Result<String, WireError> {
    let wire: Vec<WireGuessRecord> = records.into_iter().map(WireGuessRecord::from).collect();
    Ok(serde_json::to_string_pretty(&wire)?)
}

/// Serialize a game state as pretty JSON
///
/// # Errors
///
/// Returns `WireError::Json` if serialization fails.
pub fn game_state_to_json(state: &WireGameState) -> Result<String, WireError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parse a recorded game: a JSON array of guess records
///
/// Records are returned sorted by guess number, which must run 1..=n with no
/// gaps or repeats.
///
/// # Errors
///
/// Returns `WireError` if the JSON is malformed, any record fails to decode,
/// or the guess numbers are not a 1-based sequence.
pub fn records_from_json(json: &str) -> Result<Vec<GuessRecord>, WireError> {
    let wire: Vec<WireGuessRecord> = serde_json::from_str(json)?;

    let mut records = wire
        .into_iter()
        .map(GuessRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by_key(GuessRecord::guess_number);

    for (i, record) in records.iter().enumerate() {
        if record.guess_number() != i + 1 {
            return Err(WireError::GuessNumber(record.guess_number()));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate_str};
    use crate::game::{Game, GameConfig};

    #[test]
    fn status_color_mapping() {
        assert_eq!(WireColor::from(LetterStatus::Correct), WireColor::Green);
        assert_eq!(WireColor::from(LetterStatus::Present), WireColor::Orange);
        assert_eq!(WireColor::from(LetterStatus::Absent), WireColor::Grey);
        assert_eq!(LetterStatus::from(WireColor::Orange), LetterStatus::Present);
    }

    #[test]
    fn encodes_in_position_order() {
        let evaluated = evaluate_str("apple", "paper").unwrap();
        let json = to_json(&evaluated).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"[{"letter":"P","color":"ORANGE"},"#,
                r#"{"letter":"A","color":"ORANGE"},"#,
                r#"{"letter":"P","color":"GREEN"},"#,
                r#"{"letter":"E","color":"ORANGE"},"#,
                r#"{"letter":"R","color":"GREY"}]"#
            )
        );
    }

    #[test]
    fn decoding_preserves_order() {
        let original = evaluate_str("erase", "speed").unwrap();
        let decoded = from_json(&to_json(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decoding_accepts_lowercase_letters() {
        let json = r#"[
            {"letter":"c","color":"GREEN"},
            {"letter":"r","color":"GREEN"},
            {"letter":"a","color":"GREEN"},
            {"letter":"n","color":"GREEN"},
            {"letter":"e","color":"GREEN"}
        ]"#;
        let decoded = from_json(json).unwrap();
        assert_eq!(decoded.guess().text(), "CRANE");
        assert!(decoded.is_win());
    }

    #[test]
    fn rejects_wrong_length() {
        let short = r#"[{"letter":"A","color":"GREEN"}]"#;
        assert!(matches!(from_json(short), Err(WireError::WrongLength(1))));

        assert!(matches!(from_json("[]"), Err(WireError::WrongLength(0))));

        let evaluated = evaluate_str("apple", "paper").unwrap();
        let mut letters = encode_evaluation(&evaluated);
        letters.push(letters[0].clone());
        assert!(matches!(
            decode_evaluation(&letters),
            Err(WireError::WrongLength(6))
        ));
    }

    #[test]
    fn rejects_bad_letters() {
        let evaluated = evaluate_str("apple", "paper").unwrap();

        for bad in ["", "AB", "1", "é"] {
            let mut letters = encode_evaluation(&evaluated);
            letters[2].letter = bad.to_string();
            assert!(
                matches!(decode_evaluation(&letters), Err(WireError::InvalidLetter(ref l)) if l == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_color() {
        let json = r#"[
            {"letter":"C","color":"YELLOW"},
            {"letter":"R","color":"GREEN"},
            {"letter":"A","color":"GREEN"},
            {"letter":"N","color":"GREEN"},
            {"letter":"E","color":"GREEN"}
        ]"#;
        assert!(matches!(from_json(json), Err(WireError::Json(_))));
    }

    #[test]
    fn guess_record_camel_case() {
        let mut game = Game::new(Word::new("crane").unwrap(), GameConfig::default());
        let record = game.submit_guess("crane", &[]).unwrap();

        let value = serde_json::to_value(WireGuessRecord::from(&record)).unwrap();
        assert_eq!(value["guessNumber"], 1);
        assert_eq!(value["guessWord"], "CRANE");
        assert_eq!(value["evaluation"].as_array().unwrap().len(), 5);
        assert_eq!(value["evaluation"][0]["color"], "GREEN");
    }

    #[test]
    fn records_survive_the_wire() {
        let mut game = Game::new(Word::new("apple").unwrap(), GameConfig::default());
        game.submit_guess("paper", &[]).unwrap();
        game.submit_guess("apple", &[]).unwrap();

        let records: Vec<GuessRecord> = game.records().collect();
        let json = records_to_json(&records).unwrap();
        assert_eq!(records_from_json(&json).unwrap(), records);
    }

    #[test]
    fn records_sorted_by_guess_number() {
        let json = r#"[
            {"guessNumber":2,"guessWord":"APPLE","evaluation":[
                {"letter":"A","color":"GREEN"},{"letter":"P","color":"GREEN"},
                {"letter":"P","color":"GREEN"},{"letter":"L","color":"GREEN"},
                {"letter":"E","color":"GREEN"}]},
            {"guessNumber":1,"guessWord":"PAPER","evaluation":[
                {"letter":"P","color":"ORANGE"},{"letter":"A","color":"ORANGE"},
                {"letter":"P","color":"GREEN"},{"letter":"E","color":"ORANGE"},
                {"letter":"R","color":"GREY"}]}
        ]"#;

        let records = records_from_json(json).unwrap();
        assert_eq!(records[0].evaluation().guess().text(), "PAPER");
        assert_eq!(records[1].guess_number(), 2);
    }

    #[test]
    fn rejects_gaps_in_guess_numbers() {
        let json = r#"[
            {"guessNumber":2,"guessWord":"APPLE","evaluation":[
                {"letter":"A","color":"GREEN"},{"letter":"P","color":"GREEN"},
                {"letter":"P","color":"GREEN"},{"letter":"L","color":"GREEN"},
                {"letter":"E","color":"GREEN"}]}
        ]"#;
        assert!(matches!(
            records_from_json(json),
            Err(WireError::GuessNumber(2))
        ));
    }

    #[test]
    fn game_state_carries_status() {
        let mut game = Game::new(Word::new("apple").unwrap(), GameConfig::default());
        game.submit_guess("paper", &[]).unwrap();

        let value = serde_json::to_value(WireGameState::from(&game)).unwrap();
        assert_eq!(value["gameStatus"], "IN_PROGRESS");
        assert_eq!(value["isGameOver"], false);
        assert_eq!(value["attemptsLeft"], 5);
        assert_eq!(value["guesses"][0]["guessWord"], "PAPER");

        game.submit_guess("apple", &[]).unwrap();
        let json = game_state_to_json(&WireGameState::from(&game)).unwrap();
        let state: WireGameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.game_status, GameStatus::Won);
        assert!(state.is_game_over);
        assert_eq!(state.guesses.len(), 2);
    }

    #[test]
    fn game_state_accepts_playing_status() {
        let state: WireGameState = serde_json::from_str(
            r#"{"gameStatus":"PLAYING","isGameOver":false,"attemptsLeft":6,"guesses":[]}"#,
        )
        .unwrap();
        assert_eq!(state.game_status, GameStatus::InProgress);
    }

    #[test]
    fn rejects_mismatched_guess_word() {
        let wire = WireGuessRecord {
            guess_number: 1,
            guess_word: "CRANE".to_string(),
            evaluation: encode_evaluation(&evaluate_str("apple", "paper").unwrap()),
        };
        assert!(matches!(
            GuessRecord::try_from(wire),
            Err(WireError::GuessMismatch { .. })
        ));
    }
}
