//! Guess evaluation against the secret word
//!
//! Each letter of a guess is scored as one of three codes, ordered by
//! severity: `Wrong < Close < Correct`. The numeric codes (1, 2, 3) are the
//! ones written to the saved session file.

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-letter verdict for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Evaluation {
    /// Letter does not occur in the secret
    Wrong = 1,
    /// Letter occurs in the secret at another position
    Close = 2,
    /// Letter is at the right position
    Correct = 3,
}

impl Evaluation {
    /// Numeric code used in the persisted session record
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a persisted numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Wrong),
            2 => Some(Self::Close),
            3 => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Rule used to score letters that occur in the secret
///
/// `SinglePass` checks each guessed letter for presence anywhere in the
/// secret, without consuming matches, so a repeated guess letter can be
/// marked more often than it occurs in the secret. `Standard` resolves exact
/// matches first and lets each remaining secret letter account for at most
/// one `Close` mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluationRule {
    #[default]
    SinglePass,
    Standard,
}

impl FromStr for EvaluationRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single-pass" | "single" | "simple" => Ok(Self::SinglePass),
            "standard" | "two-pass" => Ok(Self::Standard),
            other => Err(format!(
                "Unknown evaluation rule '{other}' (expected 'single-pass' or 'standard')"
            )),
        }
    }
}

impl fmt::Display for EvaluationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinglePass => write!(f, "single-pass"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// Evaluation of one submitted guess, one code per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Evaluation; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([Evaluation::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(codes: [Evaluation; WORD_LENGTH]) -> Self {
        Self(codes)
    }

    /// Score `guess` against `secret` using the given rule
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Evaluation::*, EvaluationRule, Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret, EvaluationRule::SinglePass);
    ///
    /// assert_eq!(feedback.codes(), &[Close, Close, Correct, Close, Wrong]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word, rule: EvaluationRule) -> Self {
        match rule {
            EvaluationRule::SinglePass => Self::single_pass(guess, secret),
            EvaluationRule::Standard => Self::standard(guess, secret),
        }
    }

    fn single_pass(guess: &Word, secret: &Word) -> Self {
        let mut result = [Evaluation::Wrong; WORD_LENGTH];

        for (i, (&letter, &target)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            result[i] = if letter == target {
                Evaluation::Correct
            } else if secret.has_letter(letter) {
                Evaluation::Close
            } else {
                Evaluation::Wrong
            };
        }

        Self(result)
    }

    fn standard(guess: &Word, secret: &Word) -> Self {
        let mut result = [Evaluation::Wrong; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: exact matches, removed from the available pool
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = Evaluation::Correct;
                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, drawn from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Evaluation::Wrong
                && let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Evaluation::Close;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position codes
    #[inline]
    #[must_use]
    pub const fn codes(&self) -> &[Evaluation; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Numeric codes for persistence
    #[must_use]
    pub fn to_codes(&self) -> Vec<u8> {
        self.0.iter().map(|e| e.code()).collect()
    }

    /// Rebuild feedback from persisted numeric codes
    ///
    /// Returns `None` if the slice has the wrong length or contains an
    /// unknown code.
    #[must_use]
    pub fn from_codes(codes: &[u8]) -> Option<Self> {
        if codes.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Evaluation::Wrong; WORD_LENGTH];
        for (slot, &code) in result.iter_mut().zip(codes) {
            *slot = Evaluation::from_code(code)?;
        }
        Some(Self(result))
    }
}
