use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers whose `userId` is not the admin identifier.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";
/// Message returned when `/upload` carries no `image` field.
pub const MISSING_FILE_MESSAGE: &str = "No file uploaded";
/// Message returned for every upstream failure. The real cause is only logged.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Server error. Please try again later.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Access denied")]
    AccessDenied,

    #[error("No file uploaded")]
    MissingFile,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AccessDenied => StatusCode::FORBIDDEN,
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::AccessDenied => ACCESS_DENIED_MESSAGE,
            AppError::MissingFile => MISSING_FILE_MESSAGE,
            other => {
                tracing::error!("Request failed: {}", other);
                UPSTREAM_FAILURE_MESSAGE
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the client library.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The response parsed, but the envelope reported `success: false`.
    #[error("{0}")]
    Envelope(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
