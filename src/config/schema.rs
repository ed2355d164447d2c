//! Configuration schema for the password reset request.

/// Forgot-password endpoint of the locally running backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/v1/auth/forgot-password";

/// Address placed in the request payload.
pub const DEFAULT_EMAIL: &str = "test@example.com";

/// Target and payload for a single password reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterConfig {
    /// Absolute URL the request is POSTed to.
    pub endpoint: String,

    /// Email address sent in the request body.
    pub email: String,
}

impl Default for RequesterConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

impl RequesterConfig {
    /// Same payload, different target. Used to point the requester at a
    /// throwaway server.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
