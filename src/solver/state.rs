//! Accumulated solver constraints and candidate filtering
//!
//! A [`ConstraintState`] collects everything learned from previous rounds and
//! the candidate words still consistent with it. Updates are pure: the input
//! state is never mutated, each round produces a new state.

use crate::core::{Feedback, LetterScore, Word, WORD_LENGTH};

/// Constraint knowledge accumulated over solving rounds
///
/// The candidate pool only ever shrinks; fixed positions are only ever
/// added. A fresh state carries no constraints at all, so the first round
/// needs no special handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    /// Number of guess/feedback pairs processed so far
    rounds: usize,
    /// Letters confirmed present among the not-yet-fixed positions
    included: Vec<u8>,
    /// Letters confirmed absent from the word
    excluded: Vec<u8>,
    /// Letters pinned to their exact position
    fixed: [Option<u8>; WORD_LENGTH],
    /// Per position, letters known to be wrong at exactly that position
    misplaced: [Vec<u8>; WORD_LENGTH],
    /// Words still consistent with all constraints
    candidates: Vec<Word>,
}

impl ConstraintState {
    /// Create the zero-constraint initial state over a candidate pool
    #[must_use]
    pub fn new(candidates: Vec<Word>) -> Self {
        Self {
            rounds: 0,
            included: Vec::new(),
            excluded: Vec::new(),
            fixed: [None; WORD_LENGTH],
            misplaced: Default::default(),
            candidates,
        }
    }

    /// Derive the state after observing `feedback` for `guess`
    ///
    /// Constraint derivation per position:
    /// - `Misplaced`: the letter joins the included set (once) and the
    ///   position's exclusion list (once).
    /// - `Absent`: the letter joins the excluded set (once).
    /// - `Correct`: the position is fixed to the letter, and one occurrence
    ///   of the letter is dropped from the included set since that signal is
    ///   now explained. No further duplicate-count bookkeeping is done; a
    ///   letter required both as fixed and as a second occurrence elsewhere
    ///   is a known limitation of this accounting.
    ///
    /// The guess itself leaves the pool (it was not the answer this round),
    /// then the pool is re-filtered against the new constraints and the
    /// round counter advances by one.
    #[must_use]
    pub fn update(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();

        if let Some(index) = next.candidates.iter().position(|word| word == guess) {
            next.candidates.remove(index);
        }

        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);

            match feedback.score_at(i) {
                LetterScore::Misplaced => {
                    if !next.included.contains(&letter) {
                        next.included.push(letter);
                    }
                    if !next.misplaced[i].contains(&letter) {
                        next.misplaced[i].push(letter);
                    }
                }
                LetterScore::Absent => {
                    if !next.excluded.contains(&letter) {
                        next.excluded.push(letter);
                    }
                }
                LetterScore::Correct => {
                    next.fixed[i] = Some(letter);
                    // The inclusion signal is now explained by this position
                    if let Some(index) = next.included.iter().position(|&ch| ch == letter) {
                        next.included.remove(index);
                    }
                }
            }
        }

        // Pool taken out so retain can borrow the constraints immutably
        let mut candidates = std::mem::take(&mut next.candidates);
        candidates.retain(|word| next.satisfies(word));
        next.candidates = candidates;
        next.rounds += 1;

        next
    }

    /// Check a word against every accumulated constraint
    ///
    /// Excluded and included letters are checked only among the word's
    /// characters at positions not pinned by a fixed letter; occurrences at
    /// fixed positions are already explained.
    #[must_use]
    pub fn satisfies(&self, word: &Word) -> bool {
        let unresolved: Vec<u8> = (0..WORD_LENGTH)
            .filter(|&i| self.fixed[i].is_none())
            .map(|i| word.char_at(i))
            .collect();

        for i in 0..WORD_LENGTH {
            if let Some(letter) = self.fixed[i] {
                if word.char_at(i) != letter {
                    return false;
                }
            }
        }

        for letter in &self.excluded {
            if unresolved.contains(letter) {
                return false;
            }
        }

        for letter in &self.included {
            if !unresolved.contains(letter) {
                return false;
            }
        }

        for i in 0..WORD_LENGTH {
            if self.misplaced[i].contains(&word.char_at(i)) {
                return false;
            }
        }

        true
    }

    /// The surviving candidate words, in their original order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of rounds processed
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Letters confirmed present among the not-yet-fixed positions
    #[must_use]
    pub fn included(&self) -> &[u8] {
        &self.included
    }

    /// Letters confirmed absent from the word
    #[must_use]
    pub fn excluded(&self) -> &[u8] {
        &self.excluded
    }

    /// The fixed letter at each position, if known
    #[must_use]
    pub const fn fixed(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    const SCENARIO_POOL: &[&str] = &[
        "sofar", "sohur", "solar", "sonar", "sopor", "sopra", "sowar",
    ];

    #[test]
    fn initial_state_has_no_constraints() {
        let state = ConstraintState::new(pool(SCENARIO_POOL));

        assert_eq!(state.rounds(), 0);
        assert!(state.included().is_empty());
        assert!(state.excluded().is_empty());
        assert!(state.fixed().iter().all(Option::is_none));
        assert_eq!(state.candidates().len(), SCENARIO_POOL.len());
    }

    #[test]
    fn update_full_scenario() {
        // Second round of solving SOLAR: the previous round learned 'r' is
        // misplaced at position 2, 'e'/'s' are out, and positions 0/1 are
        // fixed to 's'/'o'.
        let mut state = ConstraintState::new(pool(SCENARIO_POOL));
        state.rounds = 1;
        state.included = vec![b'r'];
        state.excluded = vec![b'e', b's'];
        state.fixed[0] = Some(b's');
        state.fixed[1] = Some(b'o');
        state.misplaced[2] = vec![b'r'];

        let feedback = Feedback::from_digits("22022").unwrap();
        let updated = state.update(&word("sofar"), &feedback);

        assert_eq!(updated.rounds(), 2);
        // 'r' is now explained by fixed position 4
        assert!(updated.included().is_empty());
        assert_eq!(updated.excluded(), &[b'e', b's', b'f']);
        assert_eq!(
            updated.fixed(),
            &[Some(b's'), Some(b'o'), None, Some(b'a'), Some(b'r')]
        );
        assert_eq!(updated.candidates(), pool(&["solar", "sonar", "sowar"]));

        // Input state untouched
        assert_eq!(state.rounds(), 1);
        assert_eq!(state.candidates().len(), SCENARIO_POOL.len());
    }

    #[test]
    fn update_removes_the_guess_from_the_pool() {
        let state = ConstraintState::new(pool(&["solar", "sonar"]));
        let feedback = Feedback::evaluate(&word("solar"), &word("sonar"));

        let updated = state.update(&word("sonar"), &feedback);

        assert!(!updated.candidates().contains(&word("sonar")));
    }

    #[test]
    fn update_never_grows_the_pool() {
        let words = pool(SCENARIO_POOL);
        let secret = word("solar");

        let mut state = ConstraintState::new(words.clone());
        for guess in &words {
            let feedback = Feedback::evaluate(&secret, guess);
            let updated = state.update(guess, &feedback);
            assert!(updated.candidates().len() <= state.candidates().len());
            state = updated;
        }
    }

    #[test]
    fn consistent_feedback_round_trip_keeps_the_secret() {
        // For every secret/guess pair from the pool, one evaluate-update
        // cycle must leave the secret among the candidates (unless the guess
        // was the secret itself, which ends the game).
        let words = pool(SCENARIO_POOL);

        for secret in &words {
            for guess in &words {
                if secret == guess {
                    continue;
                }
                let state = ConstraintState::new(words.clone());
                let feedback = Feedback::evaluate(secret, guess);
                let updated = state.update(guess, &feedback);

                assert!(
                    updated.candidates().contains(secret),
                    "secret {secret} dropped after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn misplaced_letter_excluded_at_its_position() {
        // 'r' misplaced at position 2 rules out words with 'r' there, but
        // keeps words with 'r' elsewhere.
        let state = ConstraintState::new(pool(&["sonar", "sorar", "smear"]));
        let feedback = Feedback::evaluate(&word("sonar"), &word("strip"));
        // s(2) t(0) r(1) i(0) p(0)
        let updated = state.update(&word("strip"), &feedback);

        // "sorar" carries 'r' at the forbidden position 2, nothing else
        // disqualifies it
        assert_eq!(updated.candidates(), pool(&["sonar", "smear"]));
    }

    #[test]
    fn excluded_letters_prune_candidates() {
        let state = ConstraintState::new(pool(&["solar", "molar", "polar"]));
        let secret = word("solar");
        let feedback = Feedback::evaluate(&secret, &word("prism"));
        // p(0) r(1) i(0) s(1) m(0)
        let updated = state.update(&word("prism"), &feedback);

        // 'p' and 'm' are excluded; 's' and 'r' must appear at unresolved
        // positions.
        assert_eq!(updated.candidates(), pool(&["solar"]));
    }

    #[test]
    fn included_letter_must_appear_among_unresolved_positions() {
        let state = ConstraintState::new(pool(&["nacre", "sabre"]));
        let secret = word("nacre");
        let feedback = Feedback::evaluate(&secret, &word("acorn"));
        // a(1) c(1) o(0) r(2) n(1)
        let updated = state.update(&word("acorn"), &feedback);

        // "sabre" matches the fixed 'r' at position 3 and avoids every
        // excluded letter, but lacks the included 'c'
        assert_eq!(updated.candidates(), pool(&["nacre"]));
    }

    #[test]
    fn fixed_positions_are_only_added() {
        let mut state = ConstraintState::new(pool(SCENARIO_POOL));
        state.fixed[0] = Some(b's');

        // A later feedback without a Correct at position 0 leaves the fix in
        // place.
        let feedback = Feedback::from_digits("00000").unwrap();
        let updated = state.update(&word("pivot"), &feedback);

        assert_eq!(updated.fixed()[0], Some(b's'));
    }
}
