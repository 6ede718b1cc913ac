/// Retrieval order for a record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Kind-specific query filters. A record kind only honors the filters that
/// apply to it and ignores the rest.
#[derive(Debug, Clone, Default)]
pub struct KindFilter {
    pub category: Option<String>,
    pub filename: Option<String>,
}

/// Common surface of every stored record: owner identity stamped at append
/// time plus the client-submitted date and time used for filtering and
/// ordering.
pub trait Record: Clone + Send + Sync + 'static {
    /// Retrieval order for this kind. GPS tracks read oldest-first so a
    /// route replays in travel order; timesheets and expenses read
    /// newest-first.
    const SORT_ORDER: SortOrder;

    fn id(&self) -> &str;
    fn user_id(&self) -> i64;
    fn username(&self) -> &str;
    fn date(&self) -> &str;
    fn time(&self) -> &str;

    fn matches_kind_filter(&self, filter: &KindFilter) -> bool {
        let _ = filter;
        true
    }
}
