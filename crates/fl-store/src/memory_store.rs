use crate::Result as StoreResult;
use crate::query::{RecordQuery, sort_records};
use crate::record_store::{QueryOutcome, RecordStore};

use fl_core::Record;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-lifetime, append-only store.
///
/// Volatile by design: every process start begins empty. The mutex keeps
/// concurrent appends from parallel handlers atomic; all critical
/// sections are short, non-blocking memory operations.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        // A poisoned lock only means another handler panicked mid-push;
        // the vector itself is still well-formed.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn append(&self, record: T) -> StoreResult<T> {
        self.lock().push(record.clone());
        Ok(record)
    }

    fn query(&self, query: &RecordQuery) -> StoreResult<QueryOutcome<T>> {
        let mut matched: Vec<T> = self
            .lock()
            .iter()
            .filter(|record| query.matches(*record))
            .cloned()
            .collect();

        sort_records(&mut matched);

        let limited = match query.limit {
            Some(limit) => {
                if matched.len() > limit {
                    matched.truncate(limit);
                }
                matched.len() == limit
            }
            None => false,
        };

        Ok(QueryOutcome {
            records: matched,
            limited,
        })
    }
}
