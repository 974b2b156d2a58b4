use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Reasons a submitted Gmail address is refused before generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GmailInputError {
    #[error("Gmail address cannot be empty.")]
    Empty,

    #[error("Please enter a valid Gmail address (e.g., example@gmail.com).")]
    InvalidFormat,
}

impl GmailInputError {
    /// Stable machine-readable code used in REST and GraphQL error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            GmailInputError::Empty => "EMPTY_EMAIL",
            GmailInputError::InvalidFormat => "INVALID_GMAIL",
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Application error type returned by REST handlers.
///
/// Rendered as `{"error": CODE, "message": MSG}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] GmailInputError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.code(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}
