//! Interactive CLI session
//!
//! Text-based solve-and-confirm loop: enter a clue and pattern, review the
//! ranked answers, then either accept the top answer or submit a
//! correction. Confirmed answers are stored and returned instantly on the
//! next identical query.

use crate::commands::solve::solve_clue;
use crate::output::{print_feedback_recorded, print_solve_error, print_solve_report};
use crate::solver::{LengthEstimator, Solver};
use std::io::{self, Write};

/// Run the interactive session
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive<E: LengthEstimator>(solver: &mut Solver<E>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Clue Solver - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter a clue and a letter pattern; I'll rank candidate answers.");
    println!("Patterns use '?' for unknown letters, e.g. \"C?T\".");
    println!("Leave the pattern blank to estimate the length from the clue.\n");
    println!("Confirming an answer makes it the instant result next time.");
    println!("Commands: 'quit' to exit\n");

    loop {
        let clue = get_user_input("Clue (or 'quit')")?;
        match clue.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
            _ => {}
        }

        let pattern = get_user_input("Pattern")?;

        let report = match solve_clue(solver, &clue, &pattern) {
            Ok(report) => report,
            Err(e) => {
                print_solve_error(&e);
                continue;
            }
        };

        print_solve_report(&report);

        if report.results.is_empty() {
            continue;
        }

        let top_word = report.results[0].word.text().to_string();
        let answer = get_user_input("Was the top answer correct? (yes/no/skip)")?.to_lowercase();

        match answer.as_str() {
            "yes" | "y" => {
                if let Err(e) = solver.confirm(&clue, &pattern, &top_word) {
                    print_solve_error(&e);
                } else {
                    print_feedback_recorded(&top_word);
                }
            }
            "no" | "n" => {
                let correction = get_user_input("Correct word (blank to skip)")?;
                if correction.is_empty() {
                    continue;
                }

                if let Err(e) = solver.confirm(&clue, &pattern, &correction) {
                    print_solve_error(&e);
                    continue;
                }
                print_feedback_recorded(&correction.to_uppercase());

                // Solve again so the stored override is visible immediately
                match solve_clue(solver, &clue, &pattern) {
                    Ok(report) => print_solve_report(&report),
                    Err(e) => print_solve_error(&e),
                }
            }
            _ => {}
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
