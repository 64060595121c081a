//! Word list loading utilities
//!
//! Functions to load word lists from files, convert embedded constants,
//! pick random words, and sort list files.

use crate::core::Word;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_coach::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlists/short.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::loader::words_from_slice;
/// use wordle_coach::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pick a word uniformly at random
///
/// Returns `None` for an empty list.
#[must_use]
pub fn pick_random(words: &[Word]) -> Option<&Word> {
    words.choose(&mut rand::rng())
}

/// Sort a word list file, writing the result to a new file
///
/// Lines are sorted lexicographically; the contents are otherwise copied
/// verbatim.
///
/// # Errors
///
/// Returns an I/O error if the input file cannot be read or the output file
/// cannot be written.
pub fn sort_wordlist<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> io::Result<()> {
    let content = fs::read_to_string(input)?;

    let mut lines: Vec<&str> = content.lines().collect();
    lines.sort_unstable();

    let mut sorted = lines.join("\n");
    sorted.push('\n');

    fs::write(output, sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["solar", "sonar", "sowar"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "solar");
        assert_eq!(words[1].text(), "sonar");
        assert_eq!(words[2].text(), "sowar");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["solar", "toolong", "abc", "sonar"];
        let words = words_from_slice(input);

        // Only "solar" and "sonar" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "solar");
        assert_eq!(words[1].text(), "sonar");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn pick_random_comes_from_the_list() {
        let words = words_from_slice(&["solar", "sonar", "sowar"]);

        for _ in 0..10 {
            let picked = pick_random(&words).unwrap();
            assert!(words.contains(picked));
        }
    }

    #[test]
    fn pick_random_empty_is_none() {
        assert!(pick_random(&[]).is_none());
    }

    #[test]
    fn sort_wordlist_sorts_lines() {
        let dir = std::env::temp_dir();
        let input = dir.join("wordle_coach_sort_input.txt");
        let output = dir.join("wordle_coach_sort_output.txt");

        fs::write(&input, "sowar\nsolar\nsonar\n").unwrap();
        sort_wordlist(&input, &output).unwrap();

        let sorted = fs::read_to_string(&output).unwrap();
        assert_eq!(sorted, "solar\nsonar\nsowar\n");

        let _ = fs::remove_file(input);
        let _ = fs::remove_file(output);
    }
}
