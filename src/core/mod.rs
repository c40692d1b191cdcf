//! Core domain types for Wordle
//!
//! Words, per-letter evaluation and the letter-state view used for keyboard
//! hints. Everything here is pure and free of I/O.

mod evaluation;
mod letters;
mod word;

pub use evaluation::{Evaluation, EvaluationRule, Feedback};
pub use letters::LetterStates;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guess rows per game
pub const MAX_GUESSES: usize = 6;
