//! Word Game
//!
//! A five-letter word guessing game: duplicate-aware guess evaluation,
//! keyboard hints, game sessions, and a JSON wire format for verdicts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordgame::core::{LetterStatus, evaluate_str, is_winning_guess};
//!
//! // ERASE has no P and two E's, so only S and both E's score
//! let evaluated = evaluate_str("erase", "speed").unwrap();
//! assert_eq!(evaluated.to_emoji(), "🟨⬜🟨🟨⬜");
//! assert_eq!(evaluated.verdicts()[0].status, LetterStatus::Present);
//! assert!(!is_winning_guess(&evaluated));
//! ```

// Core domain types and evaluation
pub mod core;

// Game sessions and statistics
pub mod game;

// JSON encoding of verdicts
pub mod wire;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
