//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Read the log filter from `RUST_LOG`
//!
//! # Design Decisions
//! - Events go to stderr; stdout is reserved for the response lines
//! - Default level is `warn`, so request/response events (debug) only show
//!   up when asked for
//! - stderr stays empty on a successful run only under the default filter;
//!   `RUST_LOG=reset_requester=debug` adds request/response events there

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "reset_requester=warn";

/// Install the global subscriber. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
