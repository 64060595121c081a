//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::core::Feedback;
use crate::commands::AutoplayStats;
use crate::game::{GameStatus, MAX_GUESSES};
use colored::Colorize;

/// Print the statistics report of an autoplay run
pub fn print_autoplay_report(stats: &AutoplayStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total_label = stats
        .total_games
        .map_or_else(|| "∞".to_string(), |total| total.to_string());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {}/{}", stats.games_played, total_label);
    println!(
        "   Solver wins:      {} ({})",
        stats.solver_wins.to_string().green(),
        percentage(stats.solver_wins, stats.games_played)
    );
    println!(
        "   Solver losses:    {} ({})",
        stats.solver_losses.to_string().red(),
        percentage(stats.solver_losses, stats.games_played)
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Win distribution:".bright_cyan().bold());
    for tries in 0..MAX_GUESSES {
        let count = stats.win_distribution[tries];
        print_distribution_row(&ordinal(tries + 1), count, stats.games_played);
    }
    print_distribution_row("failed", stats.win_distribution[MAX_GUESSES], stats.games_played);

    if !stats.failed_words.is_empty() {
        println!(
            "\n   Failed words:     {}",
            stats.failed_words.join(", ").red()
        );
    }

    if let Some(last) = &stats.last_game {
        println!("\n🎮 {}", "Last game:".bright_cyan().bold());
        println!("   Word:             {}", last.secret.bright_yellow().bold());
        for (index, (guess, feedback)) in last.guesses.iter().zip(&last.feedbacks).enumerate() {
            let label = if index == 0 { "Guesses:" } else { "" };
            println!("   {label:<17} {}", guess_row(guess, feedback));
        }
        if last.status == GameStatus::Won {
            println!("   Solver {}", "won!".green().bold());
        } else {
            println!("   Solver {}", "lost!".red().bold());
        }
    }
}

fn guess_row(guess: &str, feedback: &Feedback) -> String {
    format!("{guess} {}", feedback_to_emoji(feedback))
}

fn print_distribution_row(label: &str, count: usize, total: usize) {
    let pct = if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    };
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   {label:<8} {} {count:4} ({pct:5.1}%)", bar.green());
}

fn percentage(part: usize, total: usize) -> String {
    if total == 0 {
        "0%".to_string()
    } else {
        format!("{}%", (100.0 * part as f64 / total as f64).round())
    }
}

fn ordinal(tries: usize) -> String {
    let suffix = match tries {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{tries}{suffix} try")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st try");
        assert_eq!(ordinal(2), "2nd try");
        assert_eq!(ordinal(3), "3rd try");
        assert_eq!(ordinal(4), "4th try");
        assert_eq!(ordinal(6), "6th try");
    }

    #[test]
    fn percentage_handles_zero_total() {
        assert_eq!(percentage(0, 0), "0%");
        assert_eq!(percentage(1, 2), "50%");
    }

    #[test]
    fn guess_row_pairs_the_word_with_its_emoji() {
        let feedback = Feedback::from_digits("22100").unwrap();
        assert_eq!(guess_row("sores", &feedback), "sores 🟩🟩🟨⬜⬜");
    }
}
