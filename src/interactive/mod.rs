//! Interactive terminal interface
//!
//! Renders the grid with ratatui and forwards key presses to the game.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
