//! Turn progression: typing, deleting and submitting guesses
//!
//! The game starts waiting for its word list. Once a non-empty list arrives
//! the daily secret is selected, storage is reconciled and play begins.
//! Input is refused until then, so no keystroke can race the secret.

use super::daily::select_daily_word;
use super::notice::{Notice, Rejection};
use super::session::{Outcome, Session};
use crate::core::{EvaluationRule, Feedback, LetterStates, WORD_LENGTH, Word};
use crate::storage::{Origin, SessionStore, StoreError, reconcile};
use crate::wordlists::{WordList, WordListError};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Where the game currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No secret yet; all input is ignored
    AwaitingWord,
    Playing,
    Over(Outcome),
}

/// One unit of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputToken {
    Letter(char),
    Submit,
    Delete,
}

impl InputToken {
    /// Parse a key name, case-insensitive
    ///
    /// Accepts a single ASCII letter, `submit`/`enter` and
    /// `delete`/`backspace`. Anything else is not a token.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next())
            && ch.is_ascii_alphabetic()
        {
            return Some(Self::Letter(ch.to_ascii_lowercase()));
        }

        match key.to_ascii_lowercase().as_str() {
            "submit" | "enter" => Some(Self::Submit),
            "delete" | "backspace" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// What an input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing changed
    Ignored,
    Typed,
    Deleted,
    /// Full row refused; a notice is now pending
    Rejected(Rejection),
    /// Row scored; `outcome` is set when the game just ended
    Evaluated {
        feedback: Feedback,
        outcome: Option<Outcome>,
    },
}

/// The game engine
///
/// Owns the session, the word list and the store. Every accepted mutation is
/// written to the store; write failures are kept for the shell to report
/// and play continues in memory.
pub struct Game<S: SessionStore> {
    rule: EvaluationRule,
    store: S,
    words: WordList,
    session: Option<Session>,
    origin: Option<Origin>,
    notice: Option<Notice>,
    storage_error: Option<StoreError>,
}

impl<S: SessionStore> Game<S> {
    /// New game waiting for its word list
    #[must_use]
    pub fn new(rule: EvaluationRule, store: S) -> Self {
        Self {
            rule,
            store,
            words: WordList::default(),
            session: None,
            origin: None,
            notice: None,
            storage_error: None,
        }
    }

    /// Deliver the word list
    ///
    /// A failed fetch or an empty list leaves the game waiting. Once playing,
    /// later deliveries are ignored.
    pub fn on_word_list(&mut self, result: Result<WordList, WordListError>, date: NaiveDate) -> Phase {
        if self.session.is_some() {
            debug!("word list already delivered, ignoring");
            return self.phase();
        }

        let words = match result {
            Ok(words) => words,
            Err(e) => {
                warn!(error = %e, "word list unavailable, still waiting");
                return self.phase();
            }
        };

        let Some(secret) = select_daily_word(&words, date).cloned() else {
            warn!("word list is empty, still waiting");
            return self.phase();
        };

        info!(%date, words = words.len(), "word list arrived, daily word selected");
        self.words = words;
        self.start(&secret);
        self.phase()
    }

    fn start(&mut self, secret: &Word) {
        let reconciled = reconcile(&self.store, secret);
        if let Some(e) = reconciled.error {
            self.storage_error = Some(e);
        }

        self.origin = Some(reconciled.origin);
        self.session = Some(reconciled.session);

        // Replace a stale or missing record right away
        if reconciled.origin != Origin::Resumed {
            self.persist();
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.session {
            None => Phase::AwaitingWord,
            Some(session) => session.outcome().map_or(Phase::Playing, Phase::Over),
        }
    }

    /// The session, once the secret is known
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// How the session was obtained at startup
    #[must_use]
    pub const fn origin(&self) -> Option<Origin> {
        self.origin
    }

    #[must_use]
    pub const fn rule(&self) -> EvaluationRule {
        self.rule
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Keyboard hints for the current grid
    #[must_use]
    pub fn letter_states(&self) -> LetterStates {
        self.session
            .as_ref()
            .map(Session::letter_states)
            .unwrap_or_default()
    }

    /// Pending notice, if any
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Clear the pending notice
    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }

    /// Take the most recent storage failure, if any
    pub fn take_storage_error(&mut self) -> Option<StoreError> {
        self.storage_error.take()
    }

    /// Apply one input token
    pub fn handle(&mut self, token: InputToken) -> Step {
        match token {
            InputToken::Letter(ch) => self.type_letter(ch),
            InputToken::Submit => self.submit(),
            InputToken::Delete => self.delete_last(),
        }
    }

    fn playing_session(&mut self) -> Option<&mut Session> {
        self.session.as_mut().filter(|session| !session.is_over())
    }

    /// Append a letter to the active row
    ///
    /// Only ASCII letters are accepted, and only while the row has room.
    pub fn type_letter(&mut self, ch: char) -> Step {
        if !ch.is_ascii_alphabetic() {
            return Step::Ignored;
        }
        let Some(session) = self.playing_session() else {
            return Step::Ignored;
        };

        if session.push_letter(ch.to_ascii_lowercase()) {
            self.persist();
            Step::Typed
        } else {
            Step::Ignored
        }
    }

    /// Remove the last letter of the active row
    pub fn delete_last(&mut self) -> Step {
        let Some(session) = self.playing_session() else {
            return Step::Ignored;
        };

        if session.pop_letter() {
            self.persist();
            Step::Deleted
        } else {
            Step::Ignored
        }
    }

    /// Submit the active row
    ///
    /// Ignored unless the row is full and no notice is pending. Checks run
    /// in order: word list membership, then repeats of earlier rows. A
    /// rejected row stays editable.
    pub fn submit(&mut self) -> Step {
        if self.notice.is_some() {
            return Step::Ignored;
        }

        let rule = self.rule;
        let Some(session) = self.session.as_mut().filter(|session| !session.is_over()) else {
            return Step::Ignored;
        };

        let guess = session.active_guess().to_string();
        if guess.len() != WORD_LENGTH {
            return Step::Ignored;
        }

        let rejection = if !self.words.contains(&guess) {
            Some(Rejection::NotInWordList)
        } else if session.already_guessed(&guess) {
            Some(Rejection::AlreadyGuessed)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            debug!(%guess, %rejection, "guess rejected");
            self.notice = Some(Notice {
                rejection,
                row: session.active_row(),
            });
            return Step::Rejected(rejection);
        }

        let Ok(word) = Word::new(guess.as_str()) else {
            return Step::Ignored;
        };
        let feedback = Feedback::evaluate(&word, session.secret(), rule);
        let outcome = session.record(feedback);

        match outcome {
            Some(Outcome::Won) => info!(guesses = session.guess_count(), "game won"),
            Some(Outcome::Lost) => info!("game lost"),
            None => debug!(row = session.active_row(), "guess recorded"),
        }

        self.persist();
        Step::Evaluated { feedback, outcome }
    }

    fn persist(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        if let Err(e) = self.store.save(session) {
            warn!(error = %e, "failed to save session");
            self.storage_error = Some(e);
        }
    }
}
