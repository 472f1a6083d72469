//! Audit command
//!
//! Evaluates one guess against every secret in a pool, in parallel, and
//! summarizes the verdicts. Every evaluation is also checked against the
//! occurrence-budget rule: no letter may be credited (Correct or Present) more
//! often than it appears in the secret.

use crate::core::{EvaluatedGuess, LetterStatus, Word, evaluate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How many of the most frequent verdict rows to keep
const TOP_PATTERNS: usize = 10;

/// Summary of one guess evaluated against a pool of secrets
#[derive(Debug)]
pub struct AuditResult {
    pub guess: String,
    pub total_secrets: usize,
    pub wins: usize,
    pub average_correct: f64,
    pub average_present: f64,
    /// Most frequent emoji rows with their counts, most frequent first
    pub top_patterns: Vec<(String, usize)>,
    pub distinct_patterns: usize,
    /// Secrets whose evaluation over-credited a letter; always empty unless the
    /// evaluator is broken
    pub budget_violations: Vec<String>,
    pub duration: Duration,
}

/// True if no letter is credited more often than `secret` contains it
#[must_use]
pub fn within_budget(secret: &Word, evaluated: &EvaluatedGuess) -> bool {
    let mut credited: FxHashMap<char, usize> = FxHashMap::default();
    for verdict in evaluated.verdicts() {
        if verdict.status != LetterStatus::Absent {
            *credited.entry(verdict.letter).or_insert(0) += 1;
        }
    }

    credited.into_iter().all(|(letter, count)| {
        let available = secret
            .letters()
            .iter()
            .filter(|&&b| b as char == letter)
            .count();
        count <= available
    })
}

/// Run the audit over `secrets` (or the first `limit` of them)
#[must_use]
pub fn run_audit(
    guess: &Word,
    secrets: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> AuditResult {
    let secrets = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];
    info!(guess = %guess, secrets = secrets.len(), "audit started");

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let evaluations: Vec<(EvaluatedGuess, bool)> = secrets
        .par_iter()
        .map(|secret| {
            let evaluated = evaluate(secret, guess);
            let ok = within_budget(secret, &evaluated);
            pb.inc(1);
            (evaluated, ok)
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut pattern_counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut wins = 0;
    let mut total_correct = 0;
    let mut total_present = 0;
    let mut budget_violations = Vec::new();

    for (secret, (evaluated, ok)) in secrets.iter().zip(&evaluations) {
        *pattern_counts.entry(evaluated.to_emoji()).or_insert(0) += 1;
        total_correct += evaluated.count(LetterStatus::Correct);
        total_present += evaluated.count(LetterStatus::Present);
        if evaluated.is_win() {
            wins += 1;
        }
        if !ok {
            warn!(secret = %secret, guess = %guess, "letter credited beyond its budget");
            budget_violations.push(secret.text().to_string());
        }
    }

    let distinct_patterns = pattern_counts.len();
    let mut top_patterns: Vec<(String, usize)> = pattern_counts.into_iter().collect();
    // Ties broken by pattern text so output is stable
    top_patterns.sort_by(|(p1, c1), (p2, c2)| c2.cmp(c1).then_with(|| p1.cmp(p2)));
    top_patterns.truncate(TOP_PATTERNS);

    let total_secrets = secrets.len();
    let average = |total: usize| {
        if total_secrets == 0 {
            0.0
        } else {
            total as f64 / total_secrets as f64
        }
    };

    info!(
        secrets = total_secrets,
        wins,
        elapsed_ms = duration.as_millis() as u64,
        "audit finished"
    );

    AuditResult {
        guess: guess.text().to_string(),
        total_secrets,
        wins,
        average_correct: average(total_correct),
        average_present: average(total_present),
        top_patterns,
        distinct_patterns,
        budget_violations,
        duration,
    }
}
