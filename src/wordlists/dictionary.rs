//! Set of words accepted as valid guesses

use super::DICTIONARY;
use super::loader::words_from_slice;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Fixed set of valid guess words
///
/// Keeps insertion order for display and a hash index for membership checks.
/// Duplicate entries are collapsed.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already validated words
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// The 13-word dictionary shipped with the game
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::builtin();
    /// assert!(dict.contains("GRIND"));
    /// assert!(dict.contains("round"));
    /// assert!(!dict.contains("ZZZZZ"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(words_from_slice(DICTIONARY))
    }

    fn insert(&mut self, word: Word) {
        if self.index.insert(word.text().to_string()) {
            self.words.push(word);
        }
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        if text.bytes().any(|b| b.is_ascii_lowercase()) {
            self.index.contains(&text.to_ascii_uppercase())
        } else {
            self.index.contains(text)
        }
    }

    /// Membership check for an already normalised word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// Words in insertion order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
