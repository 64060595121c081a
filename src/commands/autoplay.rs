//! Autoplay command
//!
//! The solver plays against the game engine, one session pair per game, and
//! the outcomes are folded into win statistics. Games share no state, so
//! bounded runs without pacing execute in parallel.

use crate::core::{Feedback, Word};
use crate::game::{GameSession, GameStatus, MAX_GUESSES};
use crate::solver::SolverSession;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for an autoplay run
pub struct AutoplayConfig {
    /// Number of games to play (ignored in endless mode)
    pub count: usize,
    /// Play until interrupted
    pub endless: bool,
    /// Walk the word list in order instead of picking secrets at random
    pub ordered: bool,
    /// With `ordered` and `endless`: stop after one pass over the list
    pub quit_on_end: bool,
    /// Force every game to this secret
    pub forced_word: Option<Word>,
    /// Pause between games
    pub sleep: Option<Duration>,
    /// Print a line per finished game
    pub debug: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            count: 1,
            endless: false,
            ordered: false,
            quit_on_end: false,
            forced_word: None,
            sleep: None,
            debug: false,
        }
    }
}

/// Outcome of a single solver-vs-game match
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub secret: String,
    pub guesses: Vec<String>,
    /// One feedback per guess, in guess order
    pub feedbacks: Vec<Feedback>,
    pub status: GameStatus,
}

/// Aggregated statistics over an autoplay run
#[derive(Debug)]
pub struct AutoplayStats {
    pub games_played: usize,
    /// `None` in endless mode
    pub total_games: Option<usize>,
    pub solver_wins: usize,
    pub solver_losses: usize,
    /// Index 0..5: won on try N+1; index 6: failed
    pub win_distribution: [usize; MAX_GUESSES + 1],
    pub failed_words: Vec<String>,
    pub last_game: Option<GameOutcome>,
    pub duration: Duration,
}

impl AutoplayStats {
    fn new(total_games: Option<usize>) -> Self {
        Self {
            games_played: 0,
            total_games,
            solver_wins: 0,
            solver_losses: 0,
            win_distribution: [0; MAX_GUESSES + 1],
            failed_words: Vec::new(),
            last_game: None,
            duration: Duration::ZERO,
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;
        match outcome.status {
            GameStatus::Won => {
                self.solver_wins += 1;
                self.win_distribution[outcome.guesses.len() - 1] += 1;
            }
            GameStatus::Lost | GameStatus::Running => {
                self.solver_losses += 1;
                self.win_distribution[MAX_GUESSES] += 1;
                self.failed_words.push(outcome.secret.clone());
            }
        }
        self.last_game = Some(outcome);
    }
}

/// Play one full solver-vs-game match
///
/// # Errors
///
/// Returns an error if the pool is empty, the solver runs out of candidates,
/// or a solver guess is rejected by the game (a vocabulary mismatch).
pub fn play_one_game(
    words: &[Word],
    validation_words: &[Word],
    secret: Option<&Word>,
) -> Result<GameOutcome, String> {
    let mut game = match secret {
        Some(word) => GameSession::with_secret(words, validation_words, word.clone()),
        None => GameSession::random(words, validation_words)
            .ok_or_else(|| "The wordlist is empty".to_string())?,
    };
    let mut solver = SolverSession::new(words.to_vec());

    let mut guess = solver
        .first_guess()
        .map_err(|e| format!("Solver failed on \"{}\": {e}", game.secret()))?;
    let mut feedback = game
        .guess(guess.text())
        .map_err(|e| format!("Game rejected \"{guess}\": {e}"))?;
    let mut feedbacks = vec![feedback];

    while game.status() == GameStatus::Running {
        guess = solver
            .next_guess(&guess, &feedback)
            .map_err(|e| format!("Solver failed on \"{}\": {e}", game.secret()))?;
        feedback = game
            .guess(guess.text())
            .map_err(|e| format!("Game rejected \"{guess}\": {e}"))?;
        feedbacks.push(feedback);
    }

    Ok(GameOutcome {
        secret: game.secret().text().to_string(),
        guesses: game.guesses().iter().map(|w| w.text().to_string()).collect(),
        feedbacks,
        status: game.status(),
    })
}

/// Run an autoplay session and collect statistics
///
/// Bounded runs without a sleep interval fan the games out with rayon;
/// everything else plays sequentially. Ordered mode walks the word list,
/// wrapping around unless `quit_on_end` caps the run at one pass.
///
/// # Errors
///
/// Propagates the first game error; a forced word outside the wordlist is
/// rejected up front.
pub fn run_autoplay(
    words: &[Word],
    validation_words: &[Word],
    config: &AutoplayConfig,
) -> Result<AutoplayStats, String> {
    if words.is_empty() {
        return Err("The wordlist is empty".to_string());
    }
    if let Some(forced) = &config.forced_word {
        if !words.contains(forced) {
            return Err("The forced word is not in the wordlist!".to_string());
        }
    }

    let total_games = if config.ordered && config.endless && config.quit_on_end {
        Some(words.len())
    } else if config.endless {
        None
    } else {
        Some(config.count)
    };

    let mut stats = AutoplayStats::new(total_games);
    let start = Instant::now();

    let secret_for = |index: usize| {
        if config.ordered {
            Some(&words[index % words.len()])
        } else {
            config.forced_word.as_ref()
        }
    };

    if let (Some(total), None) = (total_games, config.sleep) {
        // Independent games, no pacing requested: play them in parallel
        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );

        let outcomes: Result<Vec<GameOutcome>, String> = (0..total)
            .into_par_iter()
            .map(|index| {
                let outcome = play_one_game(words, validation_words, secret_for(index));
                progress.inc(1);
                outcome
            })
            .collect();
        progress.finish_and_clear();

        for outcome in outcomes? {
            if config.debug {
                print_outcome_line(&outcome);
            }
            stats.record(outcome);
        }
    } else {
        let mut index = 0;
        while stats.total_games.is_none_or(|total| index < total) {
            let outcome = play_one_game(words, validation_words, secret_for(index))?;
            if config.debug {
                print_outcome_line(&outcome);
            }
            stats.record(outcome);
            index += 1;

            if let Some(pause) = config.sleep {
                std::thread::sleep(pause);
            }
        }
    }

    stats.duration = start.elapsed();
    Ok(stats)
}

fn print_outcome_line(outcome: &GameOutcome) {
    let verdict = if outcome.status == GameStatus::Won {
        format!("won in {}", outcome.guesses.len())
    } else {
        "lost".to_string()
    };
    println!(
        "{}: {} ({})",
        outcome.secret,
        verdict,
        outcome.guesses.join(", ")
    );
}
