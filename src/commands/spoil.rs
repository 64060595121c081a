//! Spoil command
//!
//! Tells you the word of the day.

use crate::core::Word;
use crate::daily::{day_offset, word_of_the_day};
use colored::Colorize;
use std::time::SystemTime;

/// Print the word of the day for the given moment
///
/// # Errors
///
/// Returns an error if the word pool is empty.
pub fn run_spoil(words: &[Word], at: SystemTime) -> Result<(), String> {
    let word = word_of_the_day(words, at).ok_or_else(|| "The wordlist is empty".to_string())?;

    println!("\n### Spoiling you...\n");
    println!(
        "The word of day {} is: {}",
        day_offset(at),
        word.text().bright_yellow().bold()
    );

    Ok(())
}
