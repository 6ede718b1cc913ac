use fl_core::{KindFilter, Record, SortOrder};

/// Whose records a query may see.
#[derive(Debug, Clone)]
pub enum QueryScope {
    /// The caller's own records, matched by id or username (records carry
    /// both, redundantly).
    Owner { user_id: i64, username: String },
    /// All records of one named user. Only reachable for elevated callers.
    User { username: String },
}

/// Filter set applied to a record store read.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub scope: QueryScope,
    /// Exact date match (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Month filter; only effective when both parts are present.
    pub month: Option<String>,
    pub year: Option<String>,
    pub kind: KindFilter,
    /// Result cap; `None` means unbounded.
    pub limit: Option<usize>,
}

impl RecordQuery {
    pub fn for_scope(scope: QueryScope) -> Self {
        Self {
            scope,
            date: None,
            month: None,
            year: None,
            kind: KindFilter::default(),
            limit: None,
        }
    }

    /// `YYYY-MM` prefix for the month/year filter, zero-padding
    /// single-digit months.
    fn month_prefix(&self) -> Option<String> {
        match (&self.month, &self.year) {
            (Some(month), Some(year)) => Some(format!("{year}-{month:0>2}")),
            _ => None,
        }
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        let in_scope = match &self.scope {
            QueryScope::Owner { user_id, username } => {
                record.user_id() == *user_id || record.username() == username
            }
            QueryScope::User { username } => record.username() == username,
        };
        if !in_scope {
            return false;
        }

        if let Some(date) = &self.date
            && record.date() != date
        {
            return false;
        }

        if let Some(prefix) = self.month_prefix()
            && !record.date().starts_with(&prefix)
        {
            return false;
        }

        record.matches_kind_filter(&self.kind)
    }
}

/// Order records by their submitted date and time. Lexicographic
/// comparison matches chronological order for the `YYYY-MM-DD` / `HH:MM`
/// values clients submit. Stable: ties keep append order.
pub fn sort_records<T: Record>(records: &mut [T]) {
    records.sort_by(|a, b| {
        let ka = (a.date(), a.time());
        let kb = (b.date(), b.time());
        match T::SORT_ORDER {
            SortOrder::Ascending => ka.cmp(&kb),
            SortOrder::Descending => kb.cmp(&ka),
        }
    });
}
