//! Frequency-greedy guess selection
//!
//! Scores every candidate by positional letter frequency over the pool and
//! picks the highest scorer. Deliberately simple: no entropy, no minimax.
//! The tie-break (first candidate in pool order) is part of the contract,
//! callers rely on reproducible picks.

use crate::core::{Word, WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for guess selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// Every candidate was pruned: the feedback history is inconsistent or
    /// the vocabulary does not contain the secret. Fatal to the session.
    EmptyCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "Unable to generate a guess: no candidates remain"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Letter frequencies per word position over a candidate pool
///
/// `count(i, letter)` is the number of pool words carrying `letter` at
/// position `i`.
#[derive(Debug, Clone)]
pub struct PositionFrequencies {
    counts: [FxHashMap<u8, usize>; WORD_LENGTH],
}

impl PositionFrequencies {
    /// Build the frequency table over a pool of words
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut counts: [FxHashMap<u8, usize>; WORD_LENGTH] = Default::default();

        for word in words {
            for (i, table) in counts.iter_mut().enumerate() {
                *table.entry(word.char_at(i)).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Number of pool words with `letter` at `position`
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        self.counts[position]
            .get(&letter)
            .copied()
            .unwrap_or_default()
    }

    /// Score a word as the sum of its per-position frequencies
    ///
    /// Repeated letters at different positions each contribute their own
    /// positional count; there is no de-duplication within a word.
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        (0..WORD_LENGTH)
            .map(|i| self.count(i, word.char_at(i)))
            .sum()
    }
}

/// Select the best next guess from the candidate pool
///
/// The maximum-scoring candidate wins; among equal scores the first one in
/// pool order is chosen, reproducibly across runs.
///
/// # Errors
/// Returns [`SolverError::EmptyCandidates`] if the pool is empty.
pub fn select_guess(candidates: &[Word]) -> Result<&Word, SolverError> {
    let frequencies = PositionFrequencies::build(candidates);

    let mut best: Option<(&Word, usize)> = None;
    for candidate in candidates {
        let score = frequencies.score(candidate);
        match best {
            // Strict comparison keeps the earliest of equal scorers
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(word, _)| word).ok_or(SolverError::EmptyCandidates)
}
