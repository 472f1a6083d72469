//! Formatting utilities for terminal output

use crate::core::{EvaluatedGuess, KEYBOARD_ROWS, KeyboardHints, LetterStatus, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Color a single letter tile the way the board shows it
#[must_use]
pub fn colored_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// A row of colored tiles for one evaluated guess
#[must_use]
pub fn colored_tiles(evaluated: &EvaluatedGuess) -> String {
    evaluated
        .verdicts()
        .iter()
        .map(|v| colored_tile(v.letter, Some(v.status)).to_string())
        .collect()
}

/// Placeholder for an unused board row, as wide as a row of tiles
#[must_use]
pub fn empty_row() -> String {
    " · ".repeat(WORD_LENGTH)
}

/// The on-screen keyboard, one line per QWERTY row, colored by hint
#[must_use]
pub fn keyboard_lines(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|c| colored_tile(c, hints.get(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate_str;

    #[test]
    fn tiles_contain_letters_in_order() {
        let evaluated = evaluate_str("erase", "speed").unwrap();
        let row = colored_tiles(&evaluated);

        let positions: Vec<usize> = [" S ", " P ", " E ", " D "]
            .iter()
            .map(|tile| row.find(tile).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_row_matches_tile_width() {
        let tile_width = colored_tile('A', None).to_string().chars().count();
        assert_eq!(tile_width, 3);
        assert_eq!(empty_row().chars().count(), tile_width * WORD_LENGTH);
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = keyboard_lines(&KeyboardHints::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(" Q "));
        assert!(lines[2].starts_with("    "));
        assert!(lines[2].contains(" M "));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
