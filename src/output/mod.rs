//! Terminal output formatting
//!
//! Display utilities for the plain CLI front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_game_over};
