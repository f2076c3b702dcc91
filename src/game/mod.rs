//! Game state and input handling
//!
//! The grid store holds state, the controller mutates it in response to keys.

pub mod config;
mod controller;
pub mod grid;

pub use config::{
    ConfigError, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TARGET, GameConfig, MAX_CELLS,
};
pub use controller::{GameController, KeyOutcome, Phase, Rejection};
pub use grid::{Cell, Cursor, Grid, GridObserver, GridStore};
