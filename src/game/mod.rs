//! Game session: puzzle rules and feedback
//!
//! A [`GameSession`] owns one game of Wordle: the secret word, the guesses
//! made so far, and the legality checks. Feedback itself comes from the
//! evaluator in [`crate::core`].

use crate::core::{Feedback, Word, WordError};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Terminal status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses remain and the secret has not been found
    Running,
    /// A guess matched the secret
    Won,
    /// The guess limit was reached without a match
    Lost,
}

/// A guess rejected by the game rules
///
/// Recoverable: the caller may prompt for another guess. A rejected guess
/// never changes game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalGuess {
    /// The game was already won
    AlreadyWon,
    /// The guess limit was already reached
    OutOfTries,
    /// The guess is not a valid word (wrong length or characters)
    InvalidWord(WordError),
    /// The same word was already guessed this game
    AlreadyGuessed(String),
    /// The word is in neither the guessable nor the validation pool
    NotInWordlist(String),
}

impl fmt::Display for IllegalGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyWon => write!(f, "You already won, no point in guessing further!"),
            Self::OutOfTries => write!(f, "You exceeded the maximum amount of guesses!"),
            Self::InvalidWord(err) => write!(f, "{err}"),
            Self::AlreadyGuessed(word) => write!(f, "You already guessed \"{word}\"!"),
            Self::NotInWordlist(word) => write!(f, "\"{word}\" is not in the wordlist!"),
        }
    }
}

impl std::error::Error for IllegalGuess {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

/// One game of Wordle
///
/// Borrows the word pools; owns the secret and the guess history. Multiple
/// sessions can run side by side, they share no mutable state.
pub struct GameSession<'a> {
    secret: Word,
    guesses: Vec<Word>,
    words: &'a [Word],
    validation_words: &'a [Word],
}

impl<'a> GameSession<'a> {
    /// Start a game with a caller-supplied secret word
    ///
    /// `words` is the guessable pool, `validation_words` an additional pool
    /// accepted as guesses. The secret is not checked against either pool;
    /// forcing an arbitrary word is the caller's prerogative.
    #[must_use]
    pub const fn with_secret(words: &'a [Word], validation_words: &'a [Word], secret: Word) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            words,
            validation_words,
        }
    }

    /// Start a game with a secret picked uniformly at random from `words`
    ///
    /// Returns `None` if the pool is empty.
    #[must_use]
    pub fn random(words: &'a [Word], validation_words: &'a [Word]) -> Option<Self> {
        let secret = words.choose(&mut rand::rng())?.clone();
        Some(Self::with_secret(words, validation_words, secret))
    }

    /// Make a guess and receive feedback
    ///
    /// The guess is lowercased before validation. All rule checks run before
    /// any state changes, so a rejected guess leaves the session untouched.
    ///
    /// # Errors
    /// Returns [`IllegalGuess`] when the game is already won, the guess limit
    /// is reached, the guess is malformed, was already made this game, or is
    /// not in the combined vocabulary.
    pub fn guess(&mut self, text: &str) -> Result<Feedback, IllegalGuess> {
        if self.status() == GameStatus::Won {
            return Err(IllegalGuess::AlreadyWon);
        }
        if self.guesses.len() >= MAX_GUESSES {
            return Err(IllegalGuess::OutOfTries);
        }

        let guess = Word::new(text).map_err(IllegalGuess::InvalidWord)?;

        if self.guesses.contains(&guess) {
            return Err(IllegalGuess::AlreadyGuessed(guess.text().to_string()));
        }
        if !self.validation_words.contains(&guess) && !self.words.contains(&guess) {
            return Err(IllegalGuess::NotInWordlist(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&self.secret, &guess);
        self.guesses.push(guess);

        Ok(feedback)
    }

    /// Current status of the game; pure, no side effects
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.guesses.contains(&self.secret) {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Running
        }
    }

    /// The secret word of this game
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The guesses made so far, in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// How many guesses are left
    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }
}
