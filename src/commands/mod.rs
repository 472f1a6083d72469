//! Command implementations

pub mod audit;
pub mod replay;
pub mod simple;

pub use audit::{AuditResult, run_audit, within_budget};
pub use replay::{ReplayError, ReplayResult, replay_file, replay_game};
pub use simple::run_simple;
