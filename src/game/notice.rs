//! Transient error notices raised by rejected submissions

use std::fmt;

/// Why a full row was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The guess is not in the word list
    NotInWordList,
    /// The guess matches an earlier row
    AlreadyGuessed,
}

impl Rejection {
    /// Human-readable message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotInWordList => "Not in word list",
            Self::AlreadyGuessed => "Already guessed",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pending notice shown until the shell acknowledges it
///
/// The game never clears a notice on its own; the shell decides how long it
/// stays on screen and then calls `Game::acknowledge_notice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub rejection: Rejection,
    /// Row the rejected guess was typed into
    pub row: usize,
}

impl Notice {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.rejection.message()
    }

    /// Whether the rejected row should play the shake feedback
    #[must_use]
    pub const fn shakes_row(&self) -> bool {
        matches!(self.rejection, Rejection::NotInWordList)
    }
}
