//! Candidate-elimination solver
//!
//! Three layers: the constraint model ([`ConstraintState`]), the
//! frequency-greedy selector ([`select_guess`]), and the round-to-round
//! orchestration ([`SolverSession`]).

mod frequency;
mod session;
mod state;

pub use frequency::{select_guess, PositionFrequencies, SolverError};
pub use session::SolverSession;
pub use state::ConstraintState;
