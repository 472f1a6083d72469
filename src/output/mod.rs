//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_audit_result, print_evaluation, print_keyboard, print_replay_result};
