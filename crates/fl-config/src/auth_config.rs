use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_DAYS, DEFAULT_USERS_FILE,
    MIN_JWT_SECRET_CHARS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. There is deliberately no built-in default:
    /// the server refuses to start without one.
    pub jwt_secret: Option<String>,
    /// Session token lifetime in days.
    pub token_ttl_days: u32,
    /// User directory file, relative to the config directory.
    pub users_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            users_file: String::from(DEFAULT_USERS_FILE),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret must be set; the server will not start with an implicit secret",
                ));
            }
            Some(secret) if secret.chars().count() < MIN_JWT_SECRET_CHARS => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_CHARS
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_days == 0 {
            return Err(ConfigError::auth("auth.token_ttl_days must be >= 1"));
        }

        let users_file = Path::new(&self.users_file);
        if users_file.is_absolute() || self.users_file.contains("..") {
            return Err(ConfigError::auth(
                "auth.users_file must be relative and cannot contain '..'",
            ));
        }
        if !config_dir.join(users_file).exists() {
            return Err(ConfigError::auth(format!(
                "auth.users_file does not exist: {}",
                self.users_file
            )));
        }

        Ok(())
    }
}
