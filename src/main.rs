//! Wordle Coach - CLI
//!
//! Play Wordle interactively, let the solver assist with a real game, or
//! watch the solver play against the engine and collect statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use wordle_coach::{
    commands::{run_autoplay, run_play, run_solve, run_spoil, AutoplayConfig, PlayConfig},
    core::Word,
    output::print_autoplay_report,
    wordlists::{
        loader::{load_from_file, sort_wordlist, words_from_slice},
        VALIDATION_WORDS, WORDS,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Play and solve Wordle with a frequency-greedy candidate-elimination solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game of Wordle
    #[command(alias = "p")]
    Play {
        /// Force the secret word (must be in the wordlist)
        #[arg(short = 'f', long)]
        force_word: Option<String>,

        /// Inline words to pick secrets from, overrides --wordlist
        #[arg(short, long, num_args = 1..)]
        words: Option<Vec<String>>,

        /// Inline additional words accepted as guesses, overrides --validation-wordlist
        #[arg(long, num_args = 1..)]
        validation_words: Option<Vec<String>>,

        /// Path to a word list file to pick secrets from
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// Path to a word list file additionally accepted for guesses
        #[arg(long)]
        validation_wordlist: Option<PathBuf>,

        /// The amount of games to play
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Play the word of the day
        #[arg(long)]
        word_of_the_day: bool,

        /// Pick secrets in wordlist order instead of randomly
        #[arg(short, long)]
        ordered: bool,

        /// Play forever until interrupted, overrides --count
        #[arg(short, long)]
        endless: bool,

        /// Log details while executing the command
        #[arg(short, long)]
        debug: bool,
    },

    /// Start an interactive solver for a game running elsewhere
    #[command(alias = "s")]
    Solve {
        /// Inline words that could be guessed, overrides --wordlist
        #[arg(short, long, num_args = 1..)]
        words: Option<Vec<String>>,

        /// Path to a word list file containing words that could be guessed
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// The amount of games to solve
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Solve forever until interrupted, overrides --count
        #[arg(short, long)]
        endless: bool,

        /// Log details while executing the command
        #[arg(short, long)]
        debug: bool,
    },

    /// Let the solver play against the game engine automatically
    #[command(alias = "a")]
    Autoplay {
        /// Force the secret word (must be in the wordlist)
        #[arg(short = 'f', long)]
        force_word: Option<String>,

        /// Inline words to pick secrets from, overrides --wordlist
        #[arg(short, long, num_args = 1..)]
        words: Option<Vec<String>>,

        /// Inline additional words accepted as guesses, overrides --validation-wordlist
        #[arg(long, num_args = 1..)]
        validation_words: Option<Vec<String>>,

        /// Path to a word list file to pick secrets from
        #[arg(long)]
        wordlist: Option<PathBuf>,

        /// Path to a word list file additionally accepted for guesses
        #[arg(long)]
        validation_wordlist: Option<PathBuf>,

        /// The amount of games to play
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Pick secrets in wordlist order instead of randomly
        #[arg(short, long)]
        ordered: bool,

        /// Play forever until interrupted, overrides --count
        #[arg(short, long)]
        endless: bool,

        /// With --ordered and --endless: quit after one pass over the wordlist
        #[arg(long)]
        quit_on_end: bool,

        /// Sleep after every game, duration in milliseconds
        #[arg(short, long)]
        sleep: Option<u64>,

        /// Log details while executing the command
        #[arg(short, long)]
        debug: bool,
    },

    /// Spoil yourself with the word of the day
    Spoil {
        /// The day to spoil, as milliseconds since the Unix epoch (default: today)
        #[arg(long)]
        date: Option<u64>,

        /// Inline words to compute the word of the day from, overrides --wordlist
        #[arg(short, long, num_args = 1..)]
        words: Option<Vec<String>>,

        /// Path to a word list file to compute the word of the day from
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },

    /// Sort a word list file
    Sort {
        /// Input word list file
        input: PathBuf,

        /// Output file for the sorted list
        output: PathBuf,
    },
}

/// Resolve a word pool: inline words beat a list file, which beats the
/// embedded default
fn resolve_words(
    inline: Option<Vec<String>>,
    file: Option<PathBuf>,
    embedded: &[&str],
) -> Result<Vec<Word>> {
    if let Some(texts) = inline {
        return texts
            .into_iter()
            .map(|text| {
                Word::new(text.as_str())
                    .map_err(|e| anyhow::anyhow!("Invalid word \"{text}\": {e}"))
            })
            .collect();
    }

    if let Some(path) = file {
        let words = load_from_file(&path)?;
        anyhow::ensure!(
            !words.is_empty(),
            "No valid words in {}",
            path.display()
        );
        return Ok(words);
    }

    Ok(words_from_slice(embedded))
}

fn parse_forced_word(text: Option<String>) -> Result<Option<Word>> {
    text.map(|t| Word::new(t.as_str()).map_err(|e| anyhow::anyhow!("Invalid forced word: {e}")))
        .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            force_word,
            words,
            validation_words,
            wordlist,
            validation_wordlist,
            count,
            word_of_the_day,
            ordered,
            endless,
            debug,
        } => {
            let pool = resolve_words(words, wordlist, WORDS)?;
            let validation = resolve_words(validation_words, validation_wordlist, VALIDATION_WORDS)?;
            let config = PlayConfig {
                count,
                endless,
                ordered,
                word_of_the_day,
                forced_word: parse_forced_word(force_word)?,
                debug,
            };
            run_play(&pool, &validation, &config).map_err(|e| anyhow::anyhow!(e))
        }

        Commands::Solve {
            words,
            wordlist,
            count,
            endless,
            debug,
        } => {
            let pool = resolve_words(words, wordlist, WORDS)?;
            run_solve(&pool, count, endless, debug).map_err(|e| anyhow::anyhow!(e))
        }

        Commands::Autoplay {
            force_word,
            words,
            validation_words,
            wordlist,
            validation_wordlist,
            count,
            ordered,
            endless,
            quit_on_end,
            sleep,
            debug,
        } => {
            let pool = resolve_words(words, wordlist, WORDS)?;
            let validation = resolve_words(validation_words, validation_wordlist, VALIDATION_WORDS)?;
            let config = AutoplayConfig {
                count,
                endless,
                ordered,
                quit_on_end,
                forced_word: parse_forced_word(force_word)?,
                sleep: sleep.map(Duration::from_millis),
                debug,
            };

            println!("\n### Running Wordle Autoplay...");
            let stats = run_autoplay(&pool, &validation, &config).map_err(|e| anyhow::anyhow!(e))?;
            print_autoplay_report(&stats);
            Ok(())
        }

        Commands::Spoil {
            date,
            words,
            wordlist,
        } => {
            let pool = resolve_words(words, wordlist, WORDS)?;
            let at = date.map_or_else(SystemTime::now, |ms| {
                UNIX_EPOCH + Duration::from_millis(ms)
            });
            run_spoil(&pool, at).map_err(|e| anyhow::anyhow!(e))
        }

        Commands::Sort { input, output } => {
            sort_wordlist(&input, &output)?;
            println!("Sorted {} into {}", input.display(), output.display());
            Ok(())
        }
    }
}
