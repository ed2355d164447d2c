//! Console reporting.
//!
//! Success writes `Status:` and `Response:` lines to the output stream.
//! Failure writes a single `Error testing password reset:` line to the error
//! stream, whatever the cause.

use std::io::{self, Write};

use crate::http::ResetResponse;

pub const FAILURE_PREFIX: &str = "Error testing password reset:";

/// Write the status code and decoded body.
pub fn write_response<W: Write>(out: &mut W, response: &ResetResponse) -> io::Result<()> {
    writeln!(out, "Status: {}", response.status.as_u16())?;
    writeln!(out, "Response: {}", response.body)?;
    out.flush()
}

/// Write one line describing the failure, including its causes.
pub fn write_failure<W: Write>(err_out: &mut W, err: anyhow::Error) -> io::Result<()> {
    writeln!(err_out, "{} {}", FAILURE_PREFIX, error_chain(&err))?;
    err_out.flush()
}

/// `outer: cause: root cause`, flattened onto one line.
pub fn error_chain(err: &anyhow::Error) -> String {
    format!("{err:#}").replace(['\r', '\n'], " ")
}
