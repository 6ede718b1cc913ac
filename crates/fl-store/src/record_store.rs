use crate::Result as StoreResult;
use crate::query::RecordQuery;

use fl_core::Record;

/// Result of a filtered read: the matching records in their kind's order,
/// plus whether the result was cut at the query limit.
#[derive(Debug, Clone)]
pub struct QueryOutcome<T> {
    pub records: Vec<T>,
    pub limited: bool,
}

/// Append-only store for one record kind.
///
/// Implementations are injected into the request gateway as trait objects
/// so tests can substitute doubles and a persistent backend can replace
/// the in-memory one without touching handlers.
pub trait RecordStore<T: Record>: Send + Sync {
    /// Append a validated record. Owner identity was stamped at
    /// construction and is never rewritten here.
    fn append(&self, record: T) -> StoreResult<T>;

    /// Filtered, sorted retrieval.
    fn query(&self, query: &RecordQuery) -> StoreResult<QueryOutcome<T>>;
}
