//! Password reset request helper.
//!
//! Sends one `POST` with `{"email":"test@example.com"}` to the local
//! forgot-password endpoint and prints what comes back.
//!
//! ```text
//! RequesterConfig::default()
//!     → http::ResetClient (POST, decode JSON)
//!     → console (Status/Response lines on stdout, or one error line on stderr)
//! ```

pub mod config;
pub mod console;
pub mod http;
pub mod observability;

use std::io::{self, Write};

pub use config::RequesterConfig;
pub use http::{RequestError, ResetClient, ResetResponse};

/// Perform the request described by `config` and report the outcome.
///
/// Failures of the request itself are reported on `err_out` and are not
/// returned; the `io::Result` only covers writing to the streams.
pub async fn run_with<O, E>(config: &RequesterConfig, out: &mut O, err_out: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    match request(config).await {
        Ok(response) => console::write_response(out, &response),
        Err(e) => {
            tracing::debug!(error = ?e, "Password reset request failed");
            console::write_failure(err_out, e.into())
        }
    }
}

async fn request(config: &RequesterConfig) -> Result<ResetResponse, RequestError> {
    let client = ResetClient::new(config)?;
    client.request_reset().await
}

/// Run against the built-in endpoint, printing to stdout and stderr.
pub async fn run() {
    let config = RequesterConfig::default();

    if let Err(e) = run_with(&config, &mut io::stdout(), &mut io::stderr()).await {
        tracing::warn!(error = %e, "Failed to write to console");
    }
}
