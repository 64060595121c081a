//! Interactive solver command
//!
//! The solver proposes guesses; the user reports the feedback digits from
//! their game until the word is found.

use super::prompt;
use crate::core::{Feedback, Word};
use crate::solver::SolverSession;
use colored::Colorize;

/// Run interactive solving sessions until the count is exhausted
///
/// # Errors
///
/// Returns an error on an empty word pool or an I/O failure on stdin. An
/// exhausted candidate pool ends the current session with a message but
/// moves on to the next game.
pub fn run_solve(
    words: &[Word],
    count: usize,
    endless: bool,
    debug: bool,
) -> Result<(), String> {
    if words.is_empty() {
        return Err("The wordlist is empty".to_string());
    }

    println!("\n### Running Wordle Solver...");
    println!("Result explanation:");
    println!("    0 = Letter not included in word");
    println!("    1 = Letter included in word, but in different position");
    println!("    2 = Letter is in correct position");
    println!();

    let mut sessions_run = 0;
    while endless || sessions_run < count {
        if let Err(message) = run_single_session(words, debug) {
            println!("{}", message.red());
        }
        sessions_run += 1;
    }

    Ok(())
}

fn run_single_session(words: &[Word], debug: bool) -> Result<(), String> {
    let mut session = SolverSession::new(words.to_vec());

    if debug {
        println!("Starting a new game...");
    }

    let mut guess = session.first_guess().map_err(|e| e.to_string())?;
    println!("Solver's first guess is: {}", guess.text().bright_yellow().bold());

    let mut feedback = read_feedback()?;

    while !feedback.is_win() {
        guess = session
            .next_guess(&guess, &feedback)
            .map_err(|e| e.to_string())?;

        if debug {
            println!("{:?}", session.state());
        }
        println!("Solver's next guess is: {}", guess.text().bright_yellow().bold());

        feedback = read_feedback()?;
    }

    println!("{}", "Solved it!".green().bold());
    println!();
    Ok(())
}

/// Prompt until the user enters a parsable feedback digit string
fn read_feedback() -> Result<Feedback, String> {
    loop {
        let input = prompt("Enter the guess result (five digits, e.g. 20100)")?;
        match Feedback::from_digits(&input) {
            Ok(feedback) => return Ok(feedback),
            Err(invalid) => println!("{invalid}"),
        }
    }
}
