use crate::{ConfigError, ConfigErrorResult, DEFAULT_GPS_POINT_LIMIT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Cap on GPS points returned per query when the client does not
    /// supply its own `limit`.
    pub gps_point_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            gps_point_limit: DEFAULT_GPS_POINT_LIMIT,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.gps_point_limit == 0 {
            return Err(ConfigError::query("query.gps_point_limit must be >= 1"));
        }

        Ok(())
    }
}
