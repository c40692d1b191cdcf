//! On-disk shape of a saved session
//!
//! ```json
//! {
//!   "secret": "genie",
//!   "rows": ["crane", "ge", "", "", "", ""],
//!   "evaluations": [[1, 1, 1, 2, 3], [], [], [], [], []],
//!   "activeRowIndex": 1,
//!   "isOver": false,
//!   "isWon": false
//! }
//! ```
//!
//! Evaluation codes are 1 = Wrong, 2 = Close, 3 = Correct. An unsubmitted row
//! has an empty code list.

use super::StoreError;
use crate::core::{Feedback, Word};
use crate::game::Session;
use serde::{Deserialize, Serialize};

/// Serialized session, one per device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub secret: String,
    pub rows: Vec<String>,
    pub evaluations: Vec<Vec<u8>>,
    pub active_row_index: usize,
    pub is_over: bool,
    pub is_won: bool,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            secret: session.secret().text().to_string(),
            rows: session.rows().to_vec(),
            evaluations: session
                .evaluations()
                .iter()
                .map(|feedback| feedback.as_ref().map(Feedback::to_codes).unwrap_or_default())
                .collect(),
            active_row_index: session.active_row(),
            is_over: session.is_over(),
            is_won: session.is_won(),
        }
    }
}

impl SessionRecord {
    /// Whether this record belongs to the game for `secret`
    #[must_use]
    pub fn is_for(&self, secret: &Word) -> bool {
        self.secret == secret.text()
    }

    /// Rebuild the session, validating codes and grid invariants
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidRecord` if the secret is not a valid word,
    /// a code list is malformed, or the grid breaks a session invariant.
    pub fn into_session(self) -> Result<Session, StoreError> {
        let secret = Word::new(self.secret).map_err(|e| StoreError::InvalidRecord(e.to_string()))?;

        let evaluations = self
            .evaluations
            .iter()
            .enumerate()
            .map(|(row, codes)| {
                if codes.is_empty() {
                    Ok(None)
                } else {
                    Feedback::from_codes(codes).map(Some).ok_or_else(|| {
                        StoreError::InvalidRecord(format!("row {row} has bad codes {codes:?}"))
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Session::from_parts(
            secret,
            self.rows,
            evaluations,
            self.active_row_index,
            self.is_over,
            self.is_won,
        )
        .map_err(|e| StoreError::InvalidRecord(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_serializes_to_documented_shape() {
        let session = Session::new(Word::new("genie").unwrap());
        let json = serde_json::to_value(SessionRecord::from(&session)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "secret": "genie",
                "rows": ["", "", "", "", "", ""],
                "evaluations": [[], [], [], [], [], []],
                "activeRowIndex": 0,
                "isOver": false,
                "isWon": false
            })
        );
    }

    #[test]
    fn record_with_bad_codes_is_invalid() {
        let record = SessionRecord {
            secret: "genie".into(),
            rows: vec!["crane".into(), String::new()],
            evaluations: vec![vec![1, 1, 9, 2, 3], vec![]],
            active_row_index: 1,
            is_over: false,
            is_won: false,
        };
        assert!(matches!(record.into_session(), Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn record_with_bad_secret_is_invalid() {
        let record = SessionRecord {
            secret: "toolong".into(),
            rows: vec![],
            evaluations: vec![],
            active_row_index: 0,
            is_over: false,
            is_won: false,
        };
        assert!(matches!(record.into_session(), Err(StoreError::InvalidRecord(_))));
    }

    #[test]
    fn record_restores_progress() {
        let record = SessionRecord {
            secret: "genie".into(),
            rows: vec!["crane".into(), "ge".into()],
            evaluations: vec![vec![1, 1, 1, 2, 3], vec![]],
            active_row_index: 1,
            is_over: false,
            is_won: false,
        };
        let session = record.into_session().unwrap();

        assert_eq!(session.active_row(), 1);
        assert_eq!(session.active_guess(), "ge");
        assert_eq!(session.guess_count(), 1);
    }
}
