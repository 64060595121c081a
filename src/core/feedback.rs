//! Wordle feedback evaluation and representation
//!
//! Feedback is an ordered sequence of per-position codes:
//! - `Absent` (0): the letter is not in the word
//! - `Misplaced` (1): the letter is in the word, but at another position
//! - `Correct` (2): the letter is at this exact position
//!
//! The evaluator is multiplicity-correct: exact matches consume their letter
//! first, then misplaced marks consume remaining occurrences left to right.

use super::word::{Word, WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback code for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Letter does not occur in the unmatched part of the secret
    Absent,
    /// Letter occurs in the secret, but not at this position
    Misplaced,
    /// Letter is at exactly this position
    Correct,
}

impl LetterScore {
    /// The digit used for this code in CLI input and output
    #[inline]
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Misplaced => '1',
            Self::Correct => '2',
        }
    }
}

/// Feedback for a full guess, one code per position
///
/// Produced fresh by [`Feedback::evaluate`] for each guess and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

/// Error type for unparsable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidDigit(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(ch) => write!(f, "Invalid feedback digit '{ch}', expected 0, 1 or 2"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All positions correct (winning feedback)
    pub const PERFECT: Self = Self([LetterScore::Correct; WORD_LENGTH]);

    /// Evaluate the feedback for `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as `Correct` and remove each matched
    ///    letter from the pool of remaining secret letters.
    /// 2. Second pass, left to right: a not-yet-correct position is
    ///    `Misplaced` if its letter still has a remaining occurrence in the
    ///    pool (consuming one), otherwise `Absent`.
    ///
    /// The consume-on-match rule is what makes repeated letters come out
    /// right: for secret "solar", guessing "sores" scores the second 's' as
    /// `Absent` because the only 's' in the secret was already claimed by the
    /// exact match at position 0.
    ///
    /// Pure function; identical inputs always yield identical output.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{Feedback, LetterScore, Word};
    ///
    /// let secret = Word::new("solar").unwrap();
    /// let guess = Word::new("sores").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// assert_eq!(
    ///     feedback.scores(),
    ///     &[
    ///         LetterScore::Correct,
    ///         LetterScore::Correct,
    ///         LetterScore::Misplaced,
    ///         LetterScore::Absent,
    ///         LetterScore::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];

        // Letters of the secret not claimed by an exact match
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact matches
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                scores[i] = LetterScore::Correct;
            } else {
                *remaining.entry(secret.char_at(i)).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced letters, leftmost guess position claims a
        // remaining occurrence first
        for i in 0..WORD_LENGTH {
            if scores[i] == LetterScore::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                if *count > 0 {
                    scores[i] = LetterScore::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self(scores)
    }

    /// Get the per-position codes
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Get the code at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score_at(&self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Check if every position is correct (the guess equals the secret)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&score| score == LetterScore::Correct)
    }

    /// Parse a feedback digit string like "22100"
    ///
    /// Accepts exactly five digits: 0 = absent, 1 = misplaced, 2 = correct.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the input is not five characters or
    /// contains a character other than 0, 1 or 2.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Feedback;
    ///
    /// let feedback = Feedback::from_digits("22222").unwrap();
    /// assert!(feedback.is_win());
    ///
    /// assert!(Feedback::from_digits("2210").is_err());
    /// assert!(Feedback::from_digits("2210x").is_err());
    /// ```
    pub fn from_digits(input: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = input.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        for (i, ch) in chars.into_iter().enumerate() {
            scores[i] = match ch {
                '0' => LetterScore::Absent,
                '1' => LetterScore::Misplaced,
                '2' => LetterScore::Correct,
                other => return Err(FeedbackError::InvalidDigit(other)),
            };
        }

        Ok(Self(scores))
    }
}

impl fmt::Display for Feedback {
    /// Formats as the digit string, e.g. "22100"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.0 {
            write!(f, "{}", score.digit())?;
        }
        Ok(())
    }
}
