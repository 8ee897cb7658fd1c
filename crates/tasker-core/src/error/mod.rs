use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid approve status: {value} {location}")]
    InvalidApproveStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort field: {value} {location}")]
    InvalidSortField {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort order: {value} {location}")]
    InvalidSortOrder {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error with the offending field name
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
