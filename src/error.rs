use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::repository::GatewayError;

/// A set of errors that can occur during request handling
#[derive(Debug, Error)]
pub enum AppError {
    /// Unparsable identifier or body, return `400 Bad Request`
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Empty required field or rejected write, return `400 Bad Request`
    #[error("{0}")]
    Validation(String),

    /// Return `404 Not Found`
    #[error("{0}")]
    NotFound(String),

    /// Return `500 Internal Server Error`
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::InternalServerError(_) => "internal_server_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error = &message,
                error_code = self.code(),
                status = status.as_str(),
                "Request failed with server error"
            );
        }

        (status, message).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(id) => Self::NotFound(format!("Wish with ID {id} not found")),
            GatewayError::Validation(message) => Self::Validation(message),
            GatewayError::Storage(err) => err.into(),
        }
    }
}

// Data exceptions (class 22) and integrity violations (class 23) are caused by
// the submitted values, everything else is on our side.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let rejected = db_err
                    .code()
                    .map(|c| c.starts_with("22") || c.starts_with("23"))
                    .unwrap_or(false);
                if rejected {
                    return Self::Validation(format!("Rejected by database: {db_err}"));
                }

                Self::InternalServerError(format!("Database error: {db_err}"))
            }
            sqlx::Error::RowNotFound => Self::NotFound("Requested data not found".to_string()),
            _ => Self::InternalServerError(format!("Database error: {err}")),
        }
    }
}
