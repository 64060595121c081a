//! Word lists for playing and solving
//!
//! Provides embedded default word lists compiled into the binary, plus
//! loading and sorting utilities for custom list files.

mod embedded;
pub mod loader;

pub use embedded::{VALIDATION_WORDS, VALIDATION_WORDS_COUNT, WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn validation_count_matches_const() {
        assert_eq!(VALIDATION_WORDS.len(), VALIDATION_WORDS_COUNT);
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
    fn validation_words_are_valid() {
        for &word in VALIDATION_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_subset_of_validation() {
        let validation_set: std::collections::HashSet<_> = VALIDATION_WORDS.iter().collect();

        for &word in WORDS {
            assert!(
                validation_set.contains(&word),
                "Word '{word}' not in validation list"
            );
        }
    }

    #[test]
    fn lists_are_sorted_and_free_of_duplicates() {
        for list in [WORDS, VALIDATION_WORDS] {
            for pair in list.windows(2) {
                assert!(pair[0] < pair[1], "'{}' out of order", pair[1]);
            }
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(WORDS_COUNT, 763, "Expected 763 guessable words");
        assert_eq!(VALIDATION_WORDS_COUNT, 962, "Expected 962 validation words");
    }
}
