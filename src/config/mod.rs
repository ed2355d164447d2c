//! Requester configuration.
//!
//! # Data Flow
//! ```text
//! RequesterConfig::default() (constants, edited in source)
//!     → ResetClient::new (endpoint parsed into a Url)
//!     → one POST request
//! ```
//!
//! # Design Decisions
//! - No file, flag or environment layer; values are changed by editing them
//! - The endpoint stays a plain string until the client is built so a bad
//!   edit surfaces through the normal failure line

pub mod schema;

pub use schema::RequesterConfig;
