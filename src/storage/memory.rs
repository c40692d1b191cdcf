//! In-memory store

use super::{SessionRecord, SessionStore, StoreError};

/// Holds the record in memory only
///
/// Used by tests and as the fallback when no state file can be resolved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<SessionRecord>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record
    #[must_use]
    pub fn with_record(record: SessionRecord) -> Self {
        Self {
            record: Some(record),
            writes: 0,
        }
    }

    #[must_use]
    pub const fn record(&self) -> Option<&SessionRecord> {
        self.record.as_ref()
    }

    /// Number of successful writes so far
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, record: &SessionRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}
