//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, empty_row, keyboard_lines};
use crate::commands::{AuditResult, ReplayResult};
use crate::core::{EvaluatedGuess, GameStatus, KeyboardHints};
use colored::Colorize;

/// Print a single evaluated guess as colored tiles plus its emoji row
pub fn print_evaluation(evaluated: &EvaluatedGuess) {
    println!(
        "\n  {}  {}",
        colored_tiles(evaluated),
        evaluated.to_emoji()
    );
    if evaluated.is_win() {
        println!("\n{}", "✅ Winning guess!".green().bold());
    }
    println!();
}

/// Print the on-screen keyboard
pub fn print_keyboard(hints: &KeyboardHints) {
    for line in keyboard_lines(hints) {
        println!("  {line}");
    }
}

/// Print a replayed game: the board, the keyboard, and how it ended
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME REPLAY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for record in &result.records {
        println!(
            "  {}. {}  {}",
            record.guess_number().to_string().bright_black(),
            colored_tiles(record.evaluation()),
            record.evaluation().to_emoji()
        );
    }
    for _ in result.records.len()..result.max_attempts {
        println!("     {}", empty_row().bright_black());
    }

    println!();
    print_keyboard(&result.hints);
    println!();

    let summary = format!(
        "{} after {}/{} guesses",
        result.status,
        result.records.len(),
        result.max_attempts
    );
    match result.status {
        GameStatus::Won => println!("{}", format!("🎉 Game {summary}").green().bold()),
        GameStatus::Lost => println!("{}", format!("❌ Game {summary}").red().bold()),
        GameStatus::InProgress => println!("{}", format!("⏳ Game {summary}").yellow().bold()),
    }
}

/// Print the result of an audit run
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "AUDIT:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Verdicts:".bright_cyan().bold());
    println!("   Secrets checked:   {}", result.total_secrets);
    println!("   Exact matches:     {}", result.wins);
    println!("   Avg correct:       {:.2}", result.average_correct);
    println!("   Avg present:       {:.2}", result.average_present);
    println!("   Distinct rows:     {}", result.distinct_patterns);
    println!("   Time taken:        {:.3}s", result.duration.as_secs_f64());

    if !result.top_patterns.is_empty() {
        println!("\n📈 {}", "Most common rows:".bright_cyan().bold());
        let max = result.top_patterns[0].1 as f64;
        for (pattern, count) in &result.top_patterns {
            let pct = if result.total_secrets > 0 {
                *count as f64 / result.total_secrets as f64 * 100.0
            } else {
                0.0
            };
            let bar = create_progress_bar(*count as f64, max, 30);
            println!("   {pattern} {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    println!();
    if result.budget_violations.is_empty() {
        println!(
            "{}",
            "✅ No letter was ever credited beyond its count in the secret"
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ {} evaluations over-credited a letter",
                result.budget_violations.len()
            )
            .red()
            .bold()
        );
        for secret in result.budget_violations.iter().take(10) {
            println!("   {secret}");
        }
    }
}
