//! Shareable summary of a finished game
//!
//! ```text
//! Daily Wordle: won in 3 guesses
//! ⬛⬛⬛🟨🟩
//! 🟨⬛⬛⬛🟩
//! 🟩🟩🟩🟩🟩
//! Play again tomorrow!
//! ```
//!
//! Only colors are shared, never letters.

use super::formatters::feedback_to_emoji;
use crate::game::{Outcome, Session};

/// Last line of every share text
pub const SHARE_TRAILER: &str = "Play again tomorrow!";

/// Outcome line for a session
#[must_use]
pub fn share_header(session: &Session) -> String {
    let guesses = session.guess_count();
    match session.outcome() {
        Some(Outcome::Won) if guesses == 1 => "Daily Wordle: won in 1 guess".to_string(),
        Some(Outcome::Won) => format!("Daily Wordle: won in {guesses} guesses"),
        Some(Outcome::Lost) => "Daily Wordle: lost".to_string(),
        None => format!("Daily Wordle: in progress after {guesses} guesses"),
    }
}

/// Render the session as share text: header, one line per guess, trailer
#[must_use]
pub fn encode_share(session: &Session) -> String {
    let mut lines = vec![share_header(session)];
    lines.extend(session.submitted().map(|(_, feedback)| feedback_to_emoji(feedback)));
    lines.push(SHARE_TRAILER.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvaluationRule, Feedback, Word};

    fn play(secret: &str, guesses: &[&str]) -> Session {
        let secret = Word::new(secret).unwrap();
        let mut session = Session::new(secret.clone());
        for guess in guesses {
            for ch in guess.chars() {
                session.push_letter(ch);
            }
            let word = Word::new(*guess).unwrap();
            session.record(Feedback::evaluate(&word, &secret, EvaluationRule::SinglePass));
        }
        session
    }

    #[test]
    fn won_game_lines() {
        let session = play("genie", &["crane", "slate", "genie"]);
        let text = encode_share(&session);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 2);
        assert_eq!(lines[0], "Daily Wordle: won in 3 guesses");
        assert_eq!(lines[1], "⬛⬛⬛🟨🟩");
        assert_eq!(lines[3], "🟩🟩🟩🟩🟩");
        assert_eq!(lines[4], SHARE_TRAILER);
    }

    #[test]
    fn first_try_is_singular() {
        let session = play("genie", &["genie"]);
        assert!(encode_share(&session).starts_with("Daily Wordle: won in 1 guess\n"));
    }

    #[test]
    fn lost_game_has_six_lines_of_guesses() {
        let session = play(
            "genie",
            &["crane", "slate", "audio", "irate", "stare", "house"],
        );
        let text = encode_share(&session);

        assert_eq!(text.lines().count(), 6 + 2);
        assert_eq!(text.lines().next(), Some("Daily Wordle: lost"));
    }

    #[test]
    fn encoding_leaves_session_untouched() {
        let session = play("genie", &["crane"]);
        let before = session.clone();
        let _ = encode_share(&session);
        assert_eq!(session, before);
    }

    #[test]
    fn letters_never_leak() {
        let session = play("genie", &["crane", "genie"]);
        let text = encode_share(&session);
        assert!(!text.to_lowercase().contains("genie"));
        assert!(!text.contains("crane"));
    }
}
