mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod query_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use query_config::QueryConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_TOKEN_TTL_DAYS: u32 = 30;
const DEFAULT_USERS_FILE: &str = "users.toml";
const MIN_JWT_SECRET_CHARS: usize = 32;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_GPS_POINT_LIMIT: usize = 1000;
