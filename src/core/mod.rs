//! Core domain types
//!
//! The fundamental game vocabulary: validated words, per-position feedback
//! codes, and the feedback evaluator. Everything here is pure and
//! deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterScore};
pub use word::{Word, WordError, WORD_LENGTH};
