//! Display functions for command results

use crate::commands::SolveReport;
use crate::solver::SolveError;
use colored::Colorize;

/// Print a solve report: header, then one block per ranked answer
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Clue:    {}", report.clue.bright_yellow().bold());
    if report.pattern.is_empty() {
        println!("Pattern: {}", "(estimated from clue)".bright_black());
    } else {
        println!("Pattern: {}", report.pattern.bright_yellow());
    }
    println!("{}", "─".repeat(60).cyan());

    if report.results.is_empty() {
        println!("\n{}\n", "No solutions found.".red());
        return;
    }

    for result in &report.results {
        println!(
            "\n  • {} {}",
            result.word.text().bright_white().bold(),
            format!("(score: {:.2})", result.score).bright_black()
        );
        if !result.definition.is_empty() {
            println!("    {}", result.definition.bright_black());
        }
    }
    println!();
}

/// Print a confirmation acknowledgement
pub fn print_feedback_recorded(word: &str) {
    println!(
        "\n{} {}\n",
        "✓ Recorded:".green().bold(),
        word.bright_white().bold()
    );
}

/// Print a solve error as a user-facing message
pub fn print_solve_error(error: &SolveError) {
    println!("\n{} {}\n", "✗".red().bold(), error.to_string().red());
}
