//! Wordle Grid
//!
//! A Wordle-style guessing game: a fixed dictionary, a 6×5 guess grid,
//! keystroke-driven input and per-letter color feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grid::game::{GameConfig, GameController, KeyOutcome};
//!
//! let mut game = GameController::new(GameConfig::reference()).unwrap();
//! for key in ["r", "o", "u", "n", "d"] {
//!     game.handle_key(key);
//! }
//! let row = game.grid().row(0).unwrap();
//! assert_eq!(row[3].letter(), Some('N'));
//! ```

// Core domain types
pub mod core;

// Grid state and input controller
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
