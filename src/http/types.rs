//! Wire types and error definitions for the reset request.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// JSON body of the forgot-password call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

impl PasswordResetRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// What came back from the endpoint. The status is reported as-is and the
/// body is whatever JSON the server chose to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Errors that can occur while performing the reset request.
///
/// Callers report every variant the same way; the split only exists so the
/// source chain and debug logs say where things went wrong.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Building the HTTP client failed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connecting, sending or receiving the response head failed.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    /// The connection dropped while reading the body.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    /// The body was read but is not JSON.
    #[error("response body is not valid JSON")]
    Decode(#[from] serde_json::Error),
}
