//! Game configuration
//!
//! Grid dimensions, target word, dictionary and scoring mode, with a startup
//! validation pass.

use crate::core::{ScoringMode, Word};
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Number of guesses in the reference game
pub const DEFAULT_ROWS: usize = 6;

/// Word length in the reference game
pub const DEFAULT_COLS: usize = 5;

/// Largest grid accepted by `validate`
pub const MAX_CELLS: usize = 4096;

/// Target word of the reference game
pub const DEFAULT_TARGET: &str = "GRIND";

/// Configuration problems detected before a game starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row")]
    ZeroRows,
    #[error("grid must have at least one column")]
    ZeroCols,
    #[error("target word {target} has {len} letters, expected {expected}")]
    TargetLength {
        target: String,
        len: usize,
        expected: usize,
    },
    #[error("dictionary word {word} has {len} letters, expected {expected}")]
    WordLength {
        word: String,
        len: usize,
        expected: usize,
    },
    #[error("grid of {rows} rows by {cols} columns exceeds {max} cells")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("dictionary is empty")]
    EmptyDictionary,
    #[error("target word {0} is not in the dictionary, the game would be unwinnable")]
    TargetNotInDictionary(String),
}

/// Everything needed to start a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub target: Word,
    pub dictionary: Dictionary,
    pub scoring: ScoringMode,
}

impl GameConfig {
    /// Config with the default row count; columns follow the target length
    #[must_use]
    pub fn new(target: Word, dictionary: Dictionary) -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: target.len(),
            target,
            dictionary,
            scoring: ScoringMode::default(),
        }
    }

    /// The reference game: target GRIND, built-in dictionary, 6×5 grid, lenient scoring
    ///
    /// # Panics
    /// Never; `DEFAULT_TARGET` is a valid word.
    #[must_use]
    pub fn reference() -> Self {
        let target = Word::new(DEFAULT_TARGET).expect("default target is a valid word");
        Self::new(target, Dictionary::builtin())
    }

    /// Config whose target is drawn uniformly from the dictionary
    ///
    /// Returns `None` if the dictionary is empty.
    pub fn with_random_target<R: Rng + ?Sized>(dictionary: Dictionary, rng: &mut R) -> Option<Self> {
        let target = dictionary.words().choose(rng)?.clone();
        Some(Self::new(target, dictionary))
    }

    /// Set the number of guesses
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set how repeated letters are credited
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check the invariants the game relies on
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self
            .rows
            .checked_mul(self.cols)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_CELLS,
            });
        }
        if self.target.len() != self.cols {
            return Err(ConfigError::TargetLength {
                target: self.target.text().to_string(),
                len: self.target.len(),
                expected: self.cols,
            });
        }
        if self.dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        if let Some(word) = self.dictionary.words().iter().find(|w| w.len() != self.cols) {
            return Err(ConfigError::WordLength {
                word: word.text().to_string(),
                len: word.len(),
                expected: self.cols,
            });
        }
        if !self.dictionary.contains_word(&self.target) {
            return Err(ConfigError::TargetNotInDictionary(
                self.target.text().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dict(words: &[&str]) -> Dictionary {
        words.iter().filter_map(|w| Word::new(w).ok()).collect()
    }

    #[test]
    fn reference_config_is_valid() {
        let config = GameConfig::reference();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 5);
        assert_eq!(config.target.text(), "GRIND");
        assert_eq!(config.dictionary.len(), 13);
        assert_eq!(config.scoring, ScoringMode::Lenient);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            GameConfig::reference().with_rows(0).validate(),
            Err(ConfigError::ZeroRows)
        );
        let mut config = GameConfig::reference();
        config.cols = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCols));
    }

    #[test]
    fn oversized_grid_rejected() {
        let config = GameConfig::reference().with_rows(1_000_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooLarge {
                rows: 1_000_000,
                cols: 5,
                max: MAX_CELLS
            })
        );

        let config = GameConfig::reference().with_rows(usize::MAX);
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge { .. })));

        // The bound itself is accepted
        let config = GameConfig::reference().with_rows(MAX_CELLS / 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn target_must_be_in_dictionary() {
        let config = GameConfig::new(Word::new("CRANE").unwrap(), Dictionary::builtin());
        assert_eq!(
            config.validate(),
            Err(ConfigError::TargetNotInDictionary("CRANE".to_string()))
        );
    }

    #[test]
    fn target_length_must_match_cols() {
        let mut config = GameConfig::reference();
        config.cols = 4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TargetLength { len: 5, expected: 4, .. })
        ));
    }

    #[test]
    fn dictionary_word_lengths_checked() {
        let config = GameConfig::new(Word::new("CAT").unwrap(), dict(&["cat", "horse"]));
        assert_eq!(config.cols, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WordLength { len: 5, expected: 3, .. })
        ));
    }

    #[test]
    fn empty_dictionary_rejected() {
        let config = GameConfig::new(Word::new("GRIND").unwrap(), Dictionary::default());
        assert_eq!(config.validate(), Err(ConfigError::EmptyDictionary));
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let config = GameConfig::with_random_target(Dictionary::builtin(), &mut rng).unwrap();
            assert!(config.dictionary.contains_word(&config.target));
            assert_eq!(config.validate(), Ok(()));
        }
        assert!(GameConfig::with_random_target(Dictionary::default(), &mut rng).is_none());
    }

    #[test]
    fn smaller_custom_game_is_valid() {
        let config = GameConfig::new(Word::new("cat").unwrap(), dict(&["cat", "dog", "cot"]))
            .with_rows(3)
            .with_scoring(ScoringMode::Strict);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.scoring, ScoringMode::Strict);
    }
}
