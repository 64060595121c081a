//! Interactive game command
//!
//! A human guesses against the game engine; feedback is printed as a digit
//! string (0 = absent, 1 = misplaced, 2 = correct).

use super::prompt;
use crate::core::Word;
use crate::daily::word_of_the_day;
use crate::game::{GameSession, GameStatus};
use colored::Colorize;
use std::time::SystemTime;

/// Configuration for interactive play
pub struct PlayConfig {
    /// Number of games to play (ignored in endless mode)
    pub count: usize,
    /// Play until interrupted
    pub endless: bool,
    /// Walk the word list in order instead of picking secrets at random
    pub ordered: bool,
    /// Play today's word of the day
    pub word_of_the_day: bool,
    /// Force the secret word
    pub forced_word: Option<Word>,
    /// Print extra detail (remaining tries in the prompt)
    pub debug: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            count: 1,
            endless: false,
            ordered: false,
            word_of_the_day: false,
            forced_word: None,
            debug: false,
        }
    }
}

/// Run interactive games until the count is exhausted
///
/// # Errors
///
/// Returns an error on an empty word pool, a forced word outside the pool,
/// or an I/O failure on stdin.
pub fn run_play(
    words: &[Word],
    validation_words: &[Word],
    config: &PlayConfig,
) -> Result<(), String> {
    if words.is_empty() {
        return Err("The wordlist is empty".to_string());
    }
    if let Some(forced) = &config.forced_word {
        if !words.contains(forced) {
            return Err("The forced word is not in the wordlist!".to_string());
        }
    }

    println!("\n### Running Wordle Game...");
    println!("Result explanation:");
    println!("    0 = Letter not included in word");
    println!("    1 = Letter included in word, but in different position");
    println!("    2 = Letter is in correct position");
    println!();

    let mut games_played = 0;
    while config.endless || games_played < config.count {
        let secret = if config.word_of_the_day {
            word_of_the_day(words, SystemTime::now()).cloned()
        } else if config.ordered {
            Some(words[games_played % words.len()].clone())
        } else {
            config.forced_word.clone()
        };

        let mut game = match secret {
            Some(word) => GameSession::with_secret(words, validation_words, word),
            None => GameSession::random(words, validation_words)
                .ok_or_else(|| "The wordlist is empty".to_string())?,
        };

        if config.debug {
            println!("Starting a new game...");
        }

        while game.status() == GameStatus::Running {
            let question = if config.debug {
                format!("Enter your guess (remaining tries: {})", game.remaining_tries())
            } else {
                "Enter your guess".to_string()
            };

            let input = prompt(&question)?;
            match game.guess(&input) {
                Ok(feedback) => println!("{:>width$} {feedback}", ":", width = question.len() + 1),
                Err(illegal) => println!("{illegal}"),
            }
        }

        if game.status() == GameStatus::Won {
            println!("{}", "Congratulations, you WON!".green().bold());
        } else {
            println!(
                "{} The word was: {}",
                "I'm sorry, you LOST!".red().bold(),
                game.secret().text().bright_yellow()
            );
        }
        println!();

        games_played += 1;
    }

    Ok(())
}
