//! User directory - who may log in.
//!
//! The directory is an injected seam so the server never holds a user list
//! of its own and tests can swap in doubles. The static implementation
//! loads a TOML file once at startup:
//!
//! ```toml
//! [[users]]
//! id = 1
//! username = "juan_perez"
//! password_hash = "$argon2id$v=19$..."
//! complete_name = "Juan Pérez"
//! position = "Driver"
//! phone_number = "+34123456789"
//! active = true
//! ```

use crate::{AuthError, Result as AuthErrorResult};

use fl_core::User;

use std::panic::Location;
use std::path::Path;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

/// Any well-formed hash works here; it only has to cost as much as a real
/// verification so unknown usernames are not distinguishable by timing.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Credential check backend.
pub trait UserDirectory: Send + Sync {
    /// Authenticate a username/password pair.
    ///
    /// Every failure mode (unknown user, wrong password, inactive account)
    /// collapses into `AuthError::InvalidCredentials`.
    fn authenticate(&self, username: &str, password: &str) -> AuthErrorResult<User>;
}

/// Directory over a fixed user list loaded at process start.
pub struct StaticUserDirectory {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct UserFile {
    #[serde(default)]
    users: Vec<User>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Load the directory from a TOML file.
    #[track_caller]
    pub fn load(path: &Path) -> AuthErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AuthError::DirectoryIo {
            path: path.display().to_string(),
            source: e,
        })?;
        let directory = Self::from_toml_str(&contents)?;
        info!("User directory loaded: {} users", directory.len());
        Ok(directory)
    }

    /// Parse a directory from TOML text.
    #[track_caller]
    pub fn from_toml_str(raw: &str) -> AuthErrorResult<Self> {
        let file: UserFile = toml::from_str(raw).map_err(|e| AuthError::DirectoryParse {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::new(file.users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for StaticUserDirectory {
    #[track_caller]
    fn authenticate(&self, username: &str, password: &str) -> AuthErrorResult<User> {
        let candidate = self
            .users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username));

        match candidate {
            Some(user) if user.active && verify_hash(password, &user.password_hash) => {
                Ok(user.clone())
            }
            Some(_) => Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            }),
            None => {
                // Burn a verification against the dummy hash so the miss
                // path costs the same as a mismatch.
                let _ = verify_hash(password, DUMMY_HASH);
                Err(AuthError::InvalidCredentials {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}

fn verify_hash(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Hash a password into the PHC string the directory file stores. Used to
/// provision `users.toml` entries and by tests.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
