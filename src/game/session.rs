//! One day's game: the secret, the guess grid and the outcome flags

use crate::core::{Feedback, LetterStates, MAX_GUESSES, WORD_LENGTH, Word};
use thiserror::Error;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Reasons a restored session is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("expected at most {MAX_GUESSES} rows, got {0}")]
    TooManyRows(usize),
    #[error("active row {0} is out of range")]
    ActiveRowOutOfRange(usize),
    #[error("row {0} is not made of up to {WORD_LENGTH} lowercase letters")]
    MalformedRow(usize),
    #[error("row {0} has feedback that does not match its submitted state")]
    FeedbackMismatch(usize),
    #[error("row {0} is filled in past the active row")]
    RowBeyondActive(usize),
    #[error("win/over flags disagree with the grid")]
    InconsistentOutcome,
}

/// The full state of one game
///
/// Rows past `active_row` are empty and unevaluated. A row has feedback iff
/// it was submitted: every row before `active_row`, plus `active_row` itself
/// once the game is over. Nothing changes after the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Word,
    rows: [String; MAX_GUESSES],
    evaluations: [Option<Feedback>; MAX_GUESSES],
    active_row: usize,
    is_over: bool,
    is_won: bool,
}

impl Session {
    /// Fresh session bound to `secret`
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            rows: Default::default(),
            evaluations: [None; MAX_GUESSES],
            active_row: 0,
            is_over: false,
            is_won: false,
        }
    }

    /// Rebuild a session from stored fields, checking every grid invariant
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` naming the first violated invariant.
    pub fn from_parts(
        secret: Word,
        rows: Vec<String>,
        evaluations: Vec<Option<Feedback>>,
        active_row: usize,
        is_over: bool,
        is_won: bool,
    ) -> Result<Self, SessionError> {
        if rows.len() > MAX_GUESSES {
            return Err(SessionError::TooManyRows(rows.len()));
        }
        if evaluations.len() > MAX_GUESSES {
            return Err(SessionError::TooManyRows(evaluations.len()));
        }
        if active_row >= MAX_GUESSES {
            return Err(SessionError::ActiveRowOutOfRange(active_row));
        }

        let mut session = Self::new(secret);
        for (slot, row) in session.rows.iter_mut().zip(rows) {
            *slot = row;
        }
        for (slot, feedback) in session.evaluations.iter_mut().zip(evaluations) {
            *slot = feedback;
        }
        session.active_row = active_row;
        session.is_over = is_over;
        session.is_won = is_won;

        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<(), SessionError> {
        for (i, (row, feedback)) in self.rows.iter().zip(&self.evaluations).enumerate() {
            if row.len() > WORD_LENGTH || !row.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(SessionError::MalformedRow(i));
            }
            if i > self.active_row && !row.is_empty() {
                return Err(SessionError::RowBeyondActive(i));
            }

            let submitted = i < self.active_row || (i == self.active_row && self.is_over);
            if submitted != feedback.is_some() || (submitted && row.len() != WORD_LENGTH) {
                return Err(SessionError::FeedbackMismatch(i));
            }
        }

        let last = &self.rows[self.active_row];
        let consistent = match (self.is_over, self.is_won) {
            (true, true) => last == self.secret.text(),
            (true, false) => {
                self.active_row == MAX_GUESSES - 1 && last != self.secret.text()
            }
            (false, false) => true,
            (false, true) => false,
        };
        if consistent {
            Ok(())
        } else {
            Err(SessionError::InconsistentOutcome)
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// All guess rows, including empty ones
    #[must_use]
    pub const fn rows(&self) -> &[String; MAX_GUESSES] {
        &self.rows
    }

    /// Feedback per row, `None` for rows not yet submitted
    #[must_use]
    pub const fn evaluations(&self) -> &[Option<Feedback>; MAX_GUESSES] {
        &self.evaluations
    }

    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    /// Letters typed into the active row so far
    #[must_use]
    pub fn active_guess(&self) -> &str {
        &self.rows[self.active_row]
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.is_won
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match (self.is_over, self.is_won) {
            (true, true) => Some(Outcome::Won),
            (true, false) => Some(Outcome::Lost),
            _ => None,
        }
    }

    /// Submitted rows with their feedback, in order
    pub fn submitted(&self) -> impl Iterator<Item = (&str, &Feedback)> {
        self.rows
            .iter()
            .zip(&self.evaluations)
            .filter_map(|(row, feedback)| feedback.as_ref().map(|f| (row.as_str(), f)))
    }

    /// Number of submitted guesses
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.evaluations.iter().flatten().count()
    }

    /// Whether `guess` matches any submitted row
    #[must_use]
    pub fn already_guessed(&self, guess: &str) -> bool {
        self.submitted().any(|(row, _)| row == guess)
    }

    /// Best-known state per letter, recomputed from the grid
    #[must_use]
    pub fn letter_states(&self) -> LetterStates {
        LetterStates::aggregate(
            self.rows
                .iter()
                .map(String::as_str)
                .zip(self.evaluations.iter().map(Option::as_ref)),
        )
    }

    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        let row = &mut self.rows[self.active_row];
        if self.is_over || row.len() >= WORD_LENGTH {
            return false;
        }
        row.push(letter);
        true
    }

    pub(crate) fn pop_letter(&mut self) -> bool {
        if self.is_over {
            return false;
        }
        self.rows[self.active_row].pop().is_some()
    }

    /// Store feedback for the active row and advance or finish the game
    pub(crate) fn record(&mut self, feedback: Feedback) -> Option<Outcome> {
        self.evaluations[self.active_row] = Some(feedback);

        if self.rows[self.active_row] == self.secret.text() {
            self.is_won = true;
            self.is_over = true;
        } else if self.active_row + 1 == MAX_GUESSES {
            self.is_over = true;
        } else {
            self.active_row += 1;
        }

        self.outcome()
    }
}
