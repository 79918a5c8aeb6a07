//! Terminal output formatting
//!
//! Display utilities for the line-oriented mode and the `check` command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_loss, print_win};
