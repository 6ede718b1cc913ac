pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod token_issuer;
pub mod user_directory;

pub use claims::{Claims, ELEVATED_POSITION};
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use token_issuer::TokenIssuer;
pub use user_directory::{StaticUserDirectory, UserDirectory, hash_password};

#[cfg(test)]
mod tests;
