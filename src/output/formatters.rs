//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .scores()
        .iter()
        .map(|score| match score {
            LetterScore::Absent => '⬜',
            LetterScore::Misplaced => '🟨',
            LetterScore::Correct => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_to_emoji_all_absent() {
        let feedback = Feedback::from_digits("00000").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_all_correct() {
        assert_eq!(feedback_to_emoji(&Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback = Feedback::from_digits("22100").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟨⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
