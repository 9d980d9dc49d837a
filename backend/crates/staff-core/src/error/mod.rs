use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// Wrap a serde_json error with the caller's location
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CoreError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CoreError::from_json(err)
    }
}

pub type Result<T> = StdResult<T, CoreError>;
