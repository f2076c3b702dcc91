//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use simple::{LineAction, apply_line, run_simple};
