use serde::Deserialize;

/// A directory user. The set is loaded once at process start and is
/// immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique; looked up case-insensitively.
    pub username: String,
    /// Argon2 PHC string. Never serialized back out.
    pub password_hash: String,
    pub complete_name: String,
    pub position: String,
    pub phone_number: String,
    pub active: bool,
}
