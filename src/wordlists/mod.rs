//! Word lists and the dictionary provider
//!
//! Provides the embedded word list compiled into the binary and the
//! `Dictionary` used to validate guesses and choose secrets.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.answers().len(), WORDS_COUNT);
        assert!(dictionary.contains_str("crane"));
    }
}
