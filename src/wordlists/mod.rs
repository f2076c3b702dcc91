//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary and loaders for custom ones.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::DictionaryError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn dictionary_contains_default_target() {
        assert!(DICTIONARY.contains(&"GRIND"));
    }

    #[test]
    fn expected_count() {
        assert_eq!(DICTIONARY_COUNT, 13, "Expected 13 dictionary words");
    }
}
