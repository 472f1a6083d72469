//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI. Reads guesses line by line, so it
//! also works with piped input.

use crate::core::{GameStatus, Word};
use crate::game::{Game, GameConfig, GameStats};
use crate::output::formatters::{colored_tiles, keyboard_lines};
use crate::wordlists::random_secret;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive game loop
///
/// `words` is the secret pool and, in strict mode, the dictionary of accepted
/// guesses. Returns the statistics of the games finished before the player
/// quit or input ran out.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if `words` is
/// empty.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R, W, G>(
    words: &[Word],
    config: GameConfig,
    rng: &mut G,
    mut input: R,
    mut out: W,
) -> io::Result<GameStats>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Word Game - Simple Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the five-letter word in {} tries.",
        config.max_attempts()
    )?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 right letter, wrong spot")?;
    writeln!(out, "  ⬜ not in the word (or no copies left)\n")?;
    writeln!(out, "Commands: 'keys' to show the keyboard, 'new' for a new game, 'quit' to exit\n")?;

    let mut stats = GameStats::default();

    'games: loop {
        let secret = random_secret(words, rng)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "word list is empty"))?;
        let mut game = Game::new(secret.clone(), config);

        loop {
            let prompt = format!("Guess {}/{}", game.attempts() + 1, config.max_attempts());
            let Some(line) = read_line(&mut input, &mut out, &prompt)? else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(out, "\n👋 Thanks for playing! The word was {}.\n", game.secret())?;
                    return Ok(stats);
                }
                "new" => {
                    writeln!(out, "\n🔄 New game started! (The word was {}.)\n", game.secret())?;
                    continue 'games;
                }
                "keys" | "keyboard" => {
                    for row in keyboard_lines(&game.keyboard_hints()) {
                        writeln!(out, "  {row}")?;
                    }
                    writeln!(out)?;
                    continue;
                }
                _ => {}
            }

            match game.submit_guess(&line, words) {
                Ok(record) => {
                    writeln!(
                        out,
                        "  {}  {}",
                        colored_tiles(record.evaluation()),
                        record.evaluation().to_emoji()
                    )?;
                }
                Err(e) => {
                    writeln!(out, "❌ {e}\n")?;
                    continue;
                }
            }

            if !game.status().is_over() {
                writeln!(out, "  {}\n", game.message())?;
                continue;
            }

            stats.record(&game);

            writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
            if game.status() == GameStatus::Won {
                writeln!(out, "  {}", game.message().bright_green().bold())?;
            } else {
                writeln!(out, "  {}", game.message().bright_red().bold())?;
            }

            writeln!(out, "\n  Guess history:")?;
            for record in game.records() {
                writeln!(
                    out,
                    "    {}. {} {}",
                    record.guess_number().to_string().bright_black(),
                    record.evaluation().guess().text().bright_white().bold(),
                    record.evaluation().to_emoji()
                )?;
            }
            writeln!(
                out,
                "\n  Played: {} | Won: {} | Win rate: {:.0}% | Streak: {}",
                stats.total_games,
                stats.games_won,
                stats.win_rate(),
                stats.current_streak
            )?;
            writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;

            match read_line(&mut input, &mut out, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(stats);
                }
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(words: &[&str], config: GameConfig, script: &str) -> (GameStats, String) {
        let words = words_from_slice(words);
        let mut rng = StdRng::seed_from_u64(0);
        let mut out = Vec::new();
        let stats = run_simple(&words, config, &mut rng, script.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_quit() {
        let (stats, out) = play(&["crane"], GameConfig::default(), "slate\ncrane\nno\n");

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(out.contains("⬜⬜🟩⬜🟩"));
        assert!(out.contains("Keep guessing! 5 attempts left."));
        assert!(out.contains("Congratulations! You guessed the word in 2 guesses!"));
    }

    #[test]
    fn loss_reveals_secret() {
        let config = GameConfig::new(2).unwrap();
        let (stats, out) = play(&["crane"], config, "slate\npilot\nno\n");

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(out.contains("The word was: CRANE"));
    }

    #[test]
    fn invalid_guess_is_reported_and_not_counted() {
        let (stats, out) = play(&["crane"], GameConfig::default(), "cr4ne\ncrane\nno\n");

        assert!(out.contains("invalid guess"));
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let config = GameConfig::default().with_strict(true);
        let (stats, out) = play(&["crane", "slate"], config, "zzzzz\nquit\n");

        assert!(out.contains("ZZZZZ is not in the word list"));
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn play_again_starts_fresh_game() {
        let (stats, _) = play(&["crane"], GameConfig::default(), "crane\nyes\ncrane\nno\n");
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (stats, out) = play(&["crane"], GameConfig::default(), "slate\n");
        assert_eq!(stats.total_games, 0);
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn keys_command_shows_keyboard() {
        let (_, out) = play(&["crane"], GameConfig::default(), "slate\nkeys\nquit\n");
        assert!(out.contains(" Q "));
        assert!(out.contains("The word was CRANE"));
    }

    #[test]
    fn empty_word_list_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_simple(
            &[],
            GameConfig::default(),
            &mut rng,
            "crane\n".as_bytes(),
            Vec::new(),
        );
        assert!(result.is_err());
    }
}
