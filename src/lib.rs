//! Wordle Coach
//!
//! A Wordle game engine and candidate-elimination solver. The solver scores
//! candidates by positional letter frequency and prunes the pool with the
//! constraints learned from each round's feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_coach::core::{Feedback, Word};
//!
//! let secret = Word::new("solar").unwrap();
//! let guess = Word::new("sores").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! println!("Feedback: {feedback}"); // 22100
//! ```

// Core domain types
pub mod core;

// Game rules and session
pub mod game;

// Candidate-elimination solver
pub mod solver;

// Word-of-the-day selection
pub mod daily;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
