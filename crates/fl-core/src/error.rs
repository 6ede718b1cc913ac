use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required fields: {fields} {location}")]
    MissingFields {
        fields: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid GPS coordinates {location}")]
    InvalidCoordinates { location: ErrorLocation },

    #[error("Invalid amount: must be between {min} and {max} {location}")]
    InvalidAmount {
        min: f64,
        max: f64,
        location: ErrorLocation,
    },

    #[error("Description must be between {min} and {max} characters {location}")]
    DescriptionLength {
        min: usize,
        max: usize,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
