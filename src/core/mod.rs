//! Core domain types for the guessing game
//!
//! Pure types with no I/O: words, feedback classes and the guess evaluator.

mod feedback;
mod word;

pub use feedback::{Evaluation, Feedback, ScoringMode, evaluate};
pub use word::{Word, WordError};
