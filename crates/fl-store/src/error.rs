use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A backing store failed. The in-memory store never produces this;
    /// persistent implementations surface their failures through it.
    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
