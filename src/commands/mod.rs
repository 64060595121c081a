//! Command implementations

pub mod autoplay;
pub mod play;
pub mod solve;
pub mod spoil;

pub use autoplay::{play_one_game, run_autoplay, AutoplayConfig, AutoplayStats, GameOutcome};
pub use play::{run_play, PlayConfig};
pub use solve::run_solve;
pub use spoil::run_spoil;

use std::io::{self, Write};

/// Get user input with a prompt
pub(crate) fn prompt(question: &str) -> Result<String, String> {
    print!("{question}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
