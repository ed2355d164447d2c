//! Client for the forgot-password endpoint.

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::RequesterConfig;
use crate::http::types::{PasswordResetRequest, RequestError, ResetResponse};

/// Sends one password reset request per call to `request_reset`.
pub struct ResetClient {
    client: Client,
    endpoint: Url,
    payload: PasswordResetRequest,
}

impl ResetClient {
    /// Build a client for the given target.
    ///
    /// Proxy settings from the environment are ignored so the request always
    /// goes straight to the configured host.
    pub fn new(config: &RequesterConfig) -> Result<Self, RequestError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .no_proxy()
            .build()
            .map_err(RequestError::Client)?;

        Ok(Self {
            client,
            endpoint,
            payload: PasswordResetRequest::new(config.email.clone()),
        })
    }

    /// POST the payload and decode whatever comes back as JSON, regardless of
    /// status code.
    pub async fn request_reset(&self) -> Result<ResetResponse, RequestError> {
        tracing::debug!(url = %self.endpoint, email = %self.payload.email, "Sending password reset request");

        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&self.payload)
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = resp.status();
        tracing::debug!(url = %self.endpoint, status = %status, "Response received");

        let text = resp.text().await.map_err(RequestError::Body)?;
        let body: Value = serde_json::from_str(&text)?;

        Ok(ResetResponse { status, body })
    }
}
