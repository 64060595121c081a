//! Solver session: constraint state threaded across rounds
//!
//! A [`SolverSession`] owns exactly one [`ConstraintState`] and drives the
//! observe-update-propose cycle. There is no rollback; an inconsistent
//! feedback history surfaces as [`SolverError::EmptyCandidates`].

use super::frequency::{select_guess, SolverError};
use super::state::ConstraintState;
use crate::core::{Feedback, Word};

/// One solving session against one game
pub struct SolverSession {
    state: ConstraintState,
}

impl SolverSession {
    /// Start a session over the full vocabulary
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            state: ConstraintState::new(words),
        }
    }

    /// Propose the opening guess
    ///
    /// Runs the selector over the zero-constraint initial state; no special
    /// first-round code path exists.
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidates`] if the vocabulary is empty.
    pub fn first_guess(&self) -> Result<Word, SolverError> {
        select_guess(self.state.candidates()).cloned()
    }

    /// Consume the feedback for the previous guess and propose the next one
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidates`] once the constraints have
    /// pruned every candidate; the session cannot recover from that.
    pub fn next_guess(
        &mut self,
        previous_guess: &Word,
        feedback: &Feedback,
    ) -> Result<Word, SolverError> {
        self.state = self.state.update(previous_guess, feedback);
        select_guess(self.state.candidates()).cloned()
    }

    /// The current constraint state (diagnostics and debug output)
    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, GameStatus};

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn first_guess_comes_from_the_pool() {
        let words = pool(&["solar", "sonar", "sowar"]);
        let session = SolverSession::new(words.clone());

        let guess = session.first_guess().unwrap();
        assert!(words.contains(&guess));
    }

    #[test]
    fn first_guess_on_empty_vocabulary_fails() {
        let session = SolverSession::new(Vec::new());
        assert_eq!(session.first_guess(), Err(SolverError::EmptyCandidates));
    }

    #[test]
    fn solves_solar_in_two_rounds() {
        let words = pool(&["sofar", "sohur", "solar", "sonar", "sopor", "sopra", "sowar"]);
        let secret = Word::new("solar").unwrap();
        let mut session = SolverSession::new(words);

        let first = session.first_guess().unwrap();
        assert_eq!(first.text(), "sofar");

        let feedback = Feedback::evaluate(&secret, &first);
        assert_eq!(feedback.to_string(), "22022");

        let second = session.next_guess(&first, &feedback).unwrap();
        assert_eq!(second.text(), "solar");
        assert_eq!(session.state().rounds(), 1);
    }

    #[test]
    fn inconsistent_feedback_exhausts_the_candidates() {
        let words = pool(&["solar", "sonar"]);
        let mut session = SolverSession::new(words);

        let first = session.first_guess().unwrap();
        // Claim every letter is absent, which no pool word satisfies
        let all_absent = Feedback::from_digits("00000").unwrap();

        assert_eq!(
            session.next_guess(&first, &all_absent),
            Err(SolverError::EmptyCandidates)
        );
    }

    #[test]
    fn session_beats_the_game_within_the_limit() {
        // Full driver loop: game produces feedback, solver consumes it.
        let words = pool(&[
            "sofar", "sohur", "solar", "sonar", "sopor", "sopra", "sowar",
        ]);

        for secret_text in ["solar", "sopra", "sowar", "sohur"] {
            let secret = Word::new(secret_text).unwrap();
            let mut game = GameSession::with_secret(&words, &[], secret);
            let mut solver = SolverSession::new(words.clone());

            let mut guess = solver.first_guess().unwrap();
            let mut feedback = game.guess(guess.text()).unwrap();

            while game.status() == GameStatus::Running {
                guess = solver.next_guess(&guess, &feedback).unwrap();
                feedback = game.guess(guess.text()).unwrap();
            }

            assert_eq!(game.status(), GameStatus::Won, "failed on {secret_text}");
        }
    }
}
