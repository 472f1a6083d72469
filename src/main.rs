//! Word Game - CLI
//!
//! Five-letter word guessing game with TUI and plain-text modes, plus tools
//! to evaluate single guesses, replay recorded games, and audit the evaluator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use wordgame::{
    commands::{replay_file, run_audit, run_simple},
    core::{Word, evaluate_str},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    logging,
    output::{print_audit_result, print_evaluation, print_replay_result},
    wire::{WireGameState, game_state_to_json, to_json},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordgame",
    about = "Five-letter word guessing game with duplicate-aware hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Wordlist: 'all' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for secret selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (reads guesses line by line)
    Simple,

    /// Evaluate one guess against a secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,

        /// Print the verdicts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a recorded game from a JSON file
    Replay {
        /// Path to the recorded guesses
        file: PathBuf,

        /// Print the replayed game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one guess against every word in the list
    Audit {
        /// The guess to audit
        guess: String,

        /// Limit number of secrets to check
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use wordgame::wordlists::loader::load_from_file;

    let words = match wordlist {
        "all" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}"))?,
    };

    if words.is_empty() {
        bail!("word list {wordlist} contains no valid words");
    }
    debug!(count = words.len(), "word list loaded");

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(matches!(command, Commands::Play));

    let config = GameConfig::new(cli.max_attempts)?.with_strict(cli.strict);
    let seed = cli.seed.unwrap_or_else(rand::random);

    match command {
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            run_play_command(&words, config, seed)
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist)?;
            run_simple_command(&words, config, seed)
        }
        Commands::Evaluate {
            secret,
            guess,
            json,
        } => run_evaluate_command(&secret, &guess, json),
        Commands::Replay { file, json } => {
            let result = replay_file(&file, config.max_attempts())
                .with_context(|| format!("failed to replay {}", file.display()))?;
            if json {
                let state = WireGameState::new(&result.records, result.status, result.max_attempts);
                println!("{}", game_state_to_json(&state)?);
            } else {
                print_replay_result(&result);
            }
            Ok(())
        }
        Commands::Audit { guess, limit } => {
            let words = load_words(&cli.wordlist)?;
            let guess = Word::new(&guess).with_context(|| format!("invalid guess {guess:?}"))?;
            let result = run_audit(&guess, &words, limit, true);
            print_audit_result(&result);
            Ok(())
        }
    }
}

fn run_evaluate_command(secret: &str, guess: &str, json: bool) -> Result<()> {
    let evaluated = evaluate_str(secret, guess)
        .with_context(|| format!("cannot evaluate {guess:?} against {secret:?}"))?;

    if json {
        println!("{}", to_json(&evaluated)?);
    } else {
        print_evaluation(&evaluated);
    }
    Ok(())
}

fn run_simple_command(words: &[Word], config: GameConfig, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let stdin = io::stdin();
    let stats = run_simple(words, config, &mut rng, stdin.lock(), io::stdout())?;
    debug!(
        games = stats.total_games,
        won = stats.games_won,
        "simple session finished"
    );
    Ok(())
}

fn run_play_command(words: &[Word], config: GameConfig, seed: u64) -> Result<()> {
    use wordgame::interactive::{App, run_tui};

    let app = App::new(words, config, seed)?;
    run_tui(app)
}
