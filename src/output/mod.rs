//! Terminal output formatting

mod display;

pub use display::{print_feedback_recorded, print_solve_error, print_solve_report};
