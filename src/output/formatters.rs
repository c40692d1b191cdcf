//! Formatting utilities shared by the terminal front ends

use crate::core::{Evaluation, Feedback};

/// Glyph for one evaluation code
#[must_use]
pub const fn evaluation_glyph(evaluation: Evaluation) -> char {
    match evaluation {
        Evaluation::Correct => '🟩',
        Evaluation::Close => '🟨',
        Evaluation::Wrong => '⬛',
    }
}

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.codes().iter().copied().map(evaluation_glyph).collect()
}

/// Keyboard rows used by both front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation::{Close, Correct, Wrong};

    #[test]
    fn feedback_to_emoji_all_wrong() {
        let emoji = feedback_to_emoji(&Feedback::new([Wrong; 5]));
        assert_eq!(emoji, "⬛⬛⬛⬛⬛");
    }

    #[test]
    fn feedback_to_emoji_all_correct() {
        assert_eq!(feedback_to_emoji(&Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        let emoji = feedback_to_emoji(&Feedback::new([Close, Close, Correct, Close, Wrong]));
        assert_eq!(emoji, "🟨🟨🟩🟨⬛");
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.concat().chars().collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }
}
