//! Per-letter feedback calculation
//!
//! A guess is scored letter by letter against the target word:
//! - Green: letter in the correct position
//! - Yellow: letter present in the target, wrong position
//! - Grey: letter absent
//!
//! Two scoring modes are supported. `Lenient` credits a letter as yellow
//! whenever it appears anywhere in the target, so repeated guess letters can
//! be over-credited. `Strict` consumes target letter counts, as real Wordle does.

use super::Word;
use std::fmt;

/// Feedback class of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Empty cell, nothing typed yet
    #[default]
    None,
    /// Letter absent from the target (also the provisional class of a typed cell)
    Grey,
    /// Letter present in the target at another position
    Yellow,
    /// Letter in the correct position
    Green,
}

impl Feedback {
    /// Emoji square for this class
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬛',
            Self::None => '⬜',
        }
    }
}

/// How repeated letters are credited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// Any occurrence of a letter in the target earns yellow (reference behaviour)
    #[default]
    Lenient,
    /// Greens first, then yellows only while unmatched target letters remain
    Strict,
}

impl ScoringMode {
    /// Mode from a `--strict` style flag
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    classes: Vec<Feedback>,
    is_exact_match: bool,
}

impl Evaluation {
    /// Feedback class per guess position
    #[must_use]
    pub fn classes(&self) -> &[Feedback] {
        &self.classes
    }

    /// True when every position is green
    #[must_use]
    pub const fn is_exact_match(&self) -> bool {
        self.is_exact_match
    }

    /// Number of green positions
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(Feedback::Green)
    }

    /// Number of yellow positions
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(Feedback::Yellow)
    }

    fn count(&self, class: Feedback) -> usize {
        self.classes.iter().filter(|&&c| c == class).count()
    }

    /// Emoji string like "🟨⬛⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classes.iter().map(|c| c.to_emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `target`
///
/// Pure and deterministic; neither input is modified. Positions of the guess
/// beyond the target's length can never be green.
///
/// # Examples
/// ```
/// use wordle_grid::core::{evaluate, Feedback, ScoringMode, Word};
///
/// let guess = Word::new("ROUND").unwrap();
/// let target = Word::new("GRIND").unwrap();
/// let e = evaluate(&guess, &target, ScoringMode::Lenient);
///
/// use Feedback::*;
/// assert_eq!(e.classes(), &[Yellow, Grey, Grey, Green, Green]);
/// assert!(!e.is_exact_match());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word, mode: ScoringMode) -> Evaluation {
    let classes = match mode {
        ScoringMode::Lenient => score_lenient(guess, target),
        ScoringMode::Strict => score_strict(guess, target),
    };

    let match_count = classes.iter().filter(|&&c| c == Feedback::Green).count();
    let is_exact_match = guess.len() == target.len() && match_count == target.len();

    Evaluation {
        classes,
        is_exact_match,
    }
}

fn score_lenient(guess: &Word, target: &Word) -> Vec<Feedback> {
    guess
        .letters()
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            if target.letters().get(i) == Some(&letter) {
                Feedback::Green
            } else if target.has_letter(letter) {
                Feedback::Yellow
            } else {
                Feedback::Grey
            }
        })
        .collect()
}

fn score_strict(guess: &Word, target: &Word) -> Vec<Feedback> {
    let mut result = vec![Feedback::Grey; guess.len()];
    let mut available = target.letter_counts();

    // First pass: greens consume their letter
    for (i, &letter) in guess.letters().iter().enumerate() {
        if target.letters().get(i) == Some(&letter) {
            result[i] = Feedback::Green;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what is left
    for (i, &letter) in guess.letters().iter().enumerate() {
        if result[i] == Feedback::Green {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            result[i] = Feedback::Yellow;
            *count -= 1;
        }
    }

    result
}
