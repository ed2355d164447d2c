//! HTTP side of the requester.
//!
//! # Data Flow
//! ```text
//! RequesterConfig
//!     → client.rs (parse endpoint, build reqwest client)
//!     → POST PasswordResetRequest as JSON
//!     → read body, decode as serde_json::Value
//!     → ResetResponse { status, body } or RequestError
//! ```
//!
//! # Design Decisions
//! - Status code never decides success; only transport and decode do
//! - No timeout, no retry: the call runs until it completes or fails

pub mod client;
pub mod types;

pub use client::ResetClient;
pub use types::{PasswordResetRequest, RequestError, ResetResponse};
