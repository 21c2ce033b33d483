use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::*;

use crate::http::messages::ErrorMessage;

/// Everything a request handler can fail with
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// POST body missing `moistureLevel`, not a JSON object or not a number
    #[error("Invalid data")]
    InvalidData,

    #[error("moisture state mutex poisoned")]
    StatePoisoned,
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidData => StatusCode::BAD_REQUEST,
            RelayError::StatePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let message = match self {
            RelayError::InvalidData => ErrorMessage::new("Invalid data"),
            RelayError::StatePoisoned => {
                error!("Unable to lock the moisture state, returning INTERNAL_SERVER_ERROR");
                ErrorMessage::new("Internal server error")
            }
        };
        (self.status_code(), Json(message)).into_response()
    }
}
