//! Clue Solver - CLI
//!
//! Solves crossword clues by combining letter-pattern matching with
//! semantic ranking, and records confirmed answers for instant recall.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clue_solver::{
    commands::{confirm_answer, run_interactive, solve_clue},
    dictionary::Dictionary,
    feedback::{FeedbackError, FeedbackStore},
    lexicon::MemoryLexicon,
    output::{print_feedback_recorded, print_solve_report},
    solver::{Solver, TokenCountEstimator},
};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clue_solver",
    about = "Crossword clue solver with semantic ranking and confirmed-answer recall",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the embedded starter list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Lexicon JSON file; defaults to the embedded starter lexicon
    #[arg(short = 'l', long, global = true)]
    lexicon: Option<PathBuf>,

    /// Feedback store file for confirmed answers
    #[arg(short = 'f', long, global = true, default_value = "feedback.json")]
    feedback: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solve-and-confirm session (default)
    Interactive,

    /// Solve a single clue
    Solve {
        /// The clue text
        clue: String,

        /// Letter pattern, '?' for unknown letters (blank = estimate length)
        #[arg(default_value = "")]
        pattern: String,
    },

    /// Record a confirmed answer for a clue and pattern
    Confirm {
        /// The clue text
        clue: String,

        /// Letter pattern the answer satisfies
        pattern: String,

        /// The confirmed answer word
        word: String,
    },
}

/// Load the dictionary from a file, or fall back to the embedded list
fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let dictionary = Dictionary::load_from_file(path)?;
            anyhow::ensure!(
                !dictionary.is_empty(),
                "word list {} contains no usable words",
                path.display()
            );
            Ok(dictionary)
        }
        None => Ok(Dictionary::embedded()),
    }
}

/// Load the lexicon from a file, or fall back to the embedded dataset
fn load_lexicon(path: Option<&PathBuf>) -> Result<MemoryLexicon> {
    match path {
        Some(path) => Ok(MemoryLexicon::load_from_file(path)?),
        None => Ok(MemoryLexicon::embedded()),
    }
}

/// Load the feedback store, surviving a corrupt file with a warning
fn load_feedback(path: &PathBuf) -> FeedbackStore {
    match FeedbackStore::load(path) {
        Ok(store) => store,
        Err(e @ FeedbackError::Corrupt { .. }) => {
            eprintln!("{} {e}", "warning:".yellow().bold());
            eprintln!("{}", "continuing with an empty feedback store".yellow());
            FeedbackStore::with_path(path)
        }
        Err(e) => {
            eprintln!("{} {e}", "warning:".yellow().bold());
            FeedbackStore::with_path(path)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.words.as_ref())?;
    let lexicon = load_lexicon(cli.lexicon.as_ref())?;
    let feedback = load_feedback(&cli.feedback);

    let mut solver = Solver::new(&dictionary, &lexicon, feedback, TokenCountEstimator);

    // Default to the interactive session if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => {
            run_interactive(&mut solver).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { clue, pattern } => {
            let report = solve_clue(&solver, &clue, &pattern)?;
            print_solve_report(&report);
            Ok(())
        }
        Commands::Confirm {
            clue,
            pattern,
            word,
        } => {
            confirm_answer(&mut solver, &clue, &pattern, &word)?;
            print_feedback_recorded(&word.to_uppercase());
            Ok(())
        }
    }
}
