//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "wordgame=warn";

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` always wins. Without it, `quiet` turns logging off entirely,
/// which the full-screen TUI needs so log lines never land on its canvas.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; call once from `main`.
pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
