//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or embedded constants.

use super::Dictionary;
use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary {0} contains no valid words")]
    Empty(PathBuf),
}

/// Load a dictionary from a file with one word per line
///
/// Blank lines are skipped, and so are lines that are not valid words
/// (a warning is logged for each).
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_grid::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = parse_lines(&content);
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

fn parse_lines(content: &str) -> Dictionary {
    content
        .lines()
        .enumerate()
        .filter_map(|(lineno, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping dictionary line {}: {trimmed:?} ({e})", lineno + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_grid::wordlists::loader::words_from_slice;
/// use wordle_grid::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
