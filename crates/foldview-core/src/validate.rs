//! Structural sniff of the service response.
//!
//! Error pages, HTML and JSON bodies are rejected by checking for the
//! leading `HEADER` record keyword rather than by parsing the whole file.
//! The HTTP status code is intentionally never consulted: some deployments
//! of folding services return structure data with non-standard codes, so
//! the body shape is the only thing trusted.

use crate::error::FoldError;

/// Accept `body` iff it starts with the `HEADER` record keyword after
/// trimming surrounding whitespace.
///
/// On rejection the returned [`FoldError::InvalidResponse`] carries the
/// first 500 characters of the body for diagnostics.
pub fn validate(body: &str) -> Result<&str, FoldError> {
    if body.trim().starts_with("HEADER") {
        Ok(body)
    } else {
        Err(FoldError::invalid_response(body))
    }
}
