//! API error types for the Lending Club REST client.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error type for every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be assembled (malformed URL, method)
    #[error("Failed to build request: {0}")]
    Construction(#[source] reqwest::Error),

    /// A header value was rejected before the request was assembled
    #[error("Invalid header value for '{0}'")]
    InvalidHeader(&'static str),

    /// Network, connection, or body read failure from reqwest
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request payload could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A 200 body did not match the expected payload shape
    #[error("Deserialization error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Missing or rejected auth token (401)
    #[error("Unauthorized")]
    Unauthorized,

    /// Invalid request parameters (400)
    #[error("Bad request: {0}")]
    BadRequest(ErrorBody),

    /// Permission denied (403)
    #[error("Forbidden: {0}")]
    Forbidden(ErrorBody),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(ErrorBody),

    /// Server-side error (500), carrying the HTTP status text
    #[error("Server error: {0}")]
    ServerError(String),

    /// Any status the API does not document, carrying the HTTP status text
    #[error("Unknown status code {0}")]
    UnexpectedStatus(String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status that produced this error, when there was a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::BadRequest(body) | ApiError::Forbidden(body) | ApiError::NotFound(body) => {
                Some(body.status)
            }
            ApiError::ServerError(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Transport(e) | ApiError::Construction(e) => e.status(),
            _ => None,
        }
    }

    /// Response body captured for 400, 403 and 404 responses.
    pub fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::BadRequest(body) | ApiError::Forbidden(body) | ApiError::NotFound(body) => {
                Some(body)
            }
            _ => None,
        }
    }

    /// Whether the API answered with 400, 403 or 404.
    pub fn is_soft_failure(&self) -> bool {
        self.error_body().is_some()
    }
}

/// Error response format from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// A single field-level error entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message.as_deref().unwrap_or("no message");
        match (&self.field, &self.code) {
            (Some(field), Some(code)) => write!(f, "{} ({}): {}", field, code, message),
            (Some(field), None) => write!(f, "{}: {}", field, message),
            (None, Some(code)) => write!(f, "{}: {}", code, message),
            (None, None) => write!(f, "{}", message),
        }
    }
}

/// Drained body of a 400/403/404 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: StatusCode,
    /// Raw response text
    pub body: String,
    /// Field errors, when the body is the API's error JSON
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, body: String) -> Self {
        let errors = serde_json::from_str::<ErrorResponse>(&body)
            .map(|r| r.errors)
            .unwrap_or_default();
        Self {
            status,
            body,
            errors,
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            if self.body.is_empty() {
                return write!(f, "{}", self.status);
            }
            return write!(f, "{}", self.body);
        }
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}
