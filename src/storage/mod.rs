//! Session persistence
//!
//! One record, one fixed slot: only today's game is kept. At startup the
//! stored record is adopted if it was saved for the same secret, otherwise it
//! is discarded and a fresh session starts. Storage failures never stop the
//! game; they are logged and handed back to the caller.

mod file;
mod memory;
mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::SessionRecord;

use crate::core::Word;
use crate::game::Session;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by a session store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed session file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Saved session is invalid: {0}")]
    InvalidRecord(String),
}

/// Durable slot holding the current session
pub trait SessionStore {
    /// Read the raw stored record, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or parsed.
    fn read(&self) -> Result<Option<SessionRecord>, StoreError>;

    /// Replace the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn write(&mut self, record: &SessionRecord) -> Result<(), StoreError>;

    /// Remove the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if an existing record cannot be removed.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Load the stored session if it belongs to `secret`
    ///
    /// A record saved for a different secret is stale and reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or is invalid.
    fn load(&self, secret: &Word) -> Result<Option<Session>, StoreError> {
        match self.read()? {
            Some(record) if record.is_for(secret) => record.into_session().map(Some),
            _ => Ok(None),
        }
    }

    /// Persist the full session as one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&mut self, session: &Session) -> Result<(), StoreError> {
        self.write(&SessionRecord::from(session))
    }
}

impl<T: SessionStore + ?Sized> SessionStore for Box<T> {
    fn read(&self) -> Result<Option<SessionRecord>, StoreError> {
        (**self).read()
    }

    fn write(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        (**self).write(record)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// How the starting session was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Stored game for the same secret was adopted
    Resumed,
    /// Nothing usable was stored
    Fresh,
    /// Stored game belonged to another secret and was dropped
    Stale,
}

/// Result of reconciling storage with today's secret
#[derive(Debug)]
pub struct Reconciled {
    pub session: Session,
    pub origin: Origin,
    /// Read failure, if any; the game still starts fresh
    pub error: Option<StoreError>,
}

/// Restore today's session or start a new one
///
/// Never fails: unreadable or invalid records fall back to a fresh session
/// and the error is returned alongside it.
pub fn reconcile<S: SessionStore + ?Sized>(store: &S, secret: &Word) -> Reconciled {
    let fresh = |origin, error| Reconciled {
        session: Session::new(secret.clone()),
        origin,
        error,
    };

    match store.read() {
        Ok(None) => {
            debug!("no stored session, starting fresh");
            fresh(Origin::Fresh, None)
        }
        Ok(Some(record)) if !record.is_for(secret) => {
            info!(stored_row = record.active_row_index, "stored session is from another day, discarding");
            fresh(Origin::Stale, None)
        }
        Ok(Some(record)) => match record.into_session() {
            Ok(session) => {
                info!(row = session.active_row(), over = session.is_over(), "resuming stored session");
                Reconciled {
                    session,
                    origin: Origin::Resumed,
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "stored session is invalid, starting fresh");
                fresh(Origin::Fresh, Some(e))
            }
        },
        Err(e) => {
            warn!(error = %e, "failed to read stored session, starting fresh");
            fresh(Origin::Fresh, Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvaluationRule, Feedback};

    fn genie() -> Word {
        Word::new("genie").unwrap()
    }

    fn session_with_guess(secret: &Word, guess: &str) -> Session {
        let mut session = Session::new(secret.clone());
        for ch in guess.chars() {
            session.push_letter(ch);
        }
        let feedback = Feedback::evaluate(
            &Word::new(guess).unwrap(),
            secret,
            EvaluationRule::SinglePass,
        );
        session.record(feedback);
        session.push_letter('g');
        session
    }

    #[test]
    fn save_then_load_is_identity() {
        let session = session_with_guess(&genie(), "crane");
        let mut store = MemoryStore::new();

        store.save(&session).unwrap();
        assert_eq!(store.load(&genie()).unwrap(), Some(session));
    }

    #[test]
    fn file_store_save_then_load_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("session.json"));
        let session = session_with_guess(&genie(), "crane");

        store.save(&session).unwrap();
        assert_eq!(store.load(&genie()).unwrap(), Some(session));
    }

    #[test]
    fn load_for_other_secret_is_none() {
        let mut store = MemoryStore::new();
        store.save(&session_with_guess(&genie(), "crane")).unwrap();

        assert_eq!(store.load(&Word::new("crane").unwrap()).unwrap(), None);
    }

    #[test]
    fn reconcile_resumes_same_secret() {
        let session = session_with_guess(&genie(), "crane");
        let mut store = MemoryStore::new();
        store.save(&session).unwrap();

        let reconciled = reconcile(&store, &genie());
        assert_eq!(reconciled.origin, Origin::Resumed);
        assert_eq!(reconciled.session, session);
        assert!(reconciled.error.is_none());
    }

    #[test]
    fn reconcile_discards_stale_record() {
        let mut store = MemoryStore::new();
        store.save(&session_with_guess(&genie(), "crane")).unwrap();

        let today = Word::new("slate").unwrap();
        let reconciled = reconcile(&store, &today);

        assert_eq!(reconciled.origin, Origin::Stale);
        assert_eq!(reconciled.session, Session::new(today));
        assert_eq!(reconciled.session.active_row(), 0);
        assert!(!reconciled.session.is_over());
    }

    #[test]
    fn reconcile_starts_fresh_on_empty_store() {
        let reconciled = reconcile(&MemoryStore::new(), &genie());
        assert_eq!(reconciled.origin, Origin::Fresh);
        assert!(reconciled.error.is_none());
    }

    #[test]
    fn reconcile_reports_invalid_record() {
        let record = SessionRecord {
            secret: "genie".into(),
            rows: vec!["crane".into()],
            evaluations: vec![vec![3, 3]],
            active_row_index: 1,
            is_over: false,
            is_won: false,
        };
        let reconciled = reconcile(&MemoryStore::with_record(record), &genie());

        assert_eq!(reconciled.origin, Origin::Fresh);
        assert!(matches!(reconciled.error, Some(StoreError::InvalidRecord(_))));
        assert_eq!(reconciled.session, Session::new(genie()));
    }

    #[test]
    fn reconcile_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage").unwrap();

        let reconciled = reconcile(&FileStore::new(path), &genie());
        assert_eq!(reconciled.origin, Origin::Fresh);
        assert!(matches!(reconciled.error, Some(StoreError::Json(_))));
    }
}
