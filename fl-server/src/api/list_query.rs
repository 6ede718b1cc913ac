use crate::BearerClaims;

use fl_core::KindFilter;
use fl_store::{QueryScope, RecordQuery};

use serde::Deserialize;

/// Query parameters accepted by the record GET endpoints. Each endpoint
/// honors the subset that applies to its record kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Another user's records; honored only for elevated callers.
    pub user: Option<String>,
    pub date: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub category: Option<String>,
    pub filename: Option<String>,
    /// Kept as text so an unparseable value falls back to the default
    /// instead of rejecting the request.
    pub limit: Option<String>,
}

impl ListQuery {
    /// Resolve into a store query for the given caller.
    ///
    /// Scope defaults to the caller's own records; an elevated caller that
    /// names a `user` reads that user's records instead. A non-elevated
    /// caller's `user` parameter is ignored.
    pub fn to_record_query(&self, caller: &BearerClaims, default_limit: Option<usize>) -> RecordQuery {
        let scope = match &self.user {
            Some(username) if caller.claims.is_elevated() => QueryScope::User {
                username: username.clone(),
            },
            _ => QueryScope::Owner {
                user_id: caller.user_id,
                username: caller.claims.username.clone(),
            },
        };

        RecordQuery {
            scope,
            date: self.date.clone(),
            month: self.month.clone(),
            year: self.year.clone(),
            kind: KindFilter {
                category: self.category.clone(),
                filename: self.filename.clone(),
            },
            limit: default_limit.map(|default| self.parsed_limit(default)),
        }
    }

    fn parsed_limit(&self, default: usize) -> usize {
        self.limit
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(default)
    }
}
