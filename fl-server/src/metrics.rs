use metrics::counter;

/// Metrics collector for gateway operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "fl_server" }
    }

    /// Record a successful login
    pub fn login_succeeded(&self) {
        counter!(format!("{}.logins.succeeded", self.prefix)).increment(1);
    }

    /// Record a rejected login attempt
    pub fn login_rejected(&self) {
        counter!(format!("{}.logins.rejected", self.prefix)).increment(1);
    }

    /// Record a stored record of the given kind
    pub fn record_appended(&self, kind: &str) {
        counter!(format!("{}.records.appended", self.prefix)).increment(1);
        counter!(format!("{}.records.appended.{}", self.prefix, kind)).increment(1);
    }

    /// Record a query against a store of the given kind
    pub fn records_queried(&self, kind: &str) {
        counter!(format!("{}.records.queried.{}", self.prefix, kind)).increment(1);
    }

    /// Record a rejected bearer token
    pub fn unauthorized(&self) {
        counter!(format!("{}.requests.unauthorized", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
