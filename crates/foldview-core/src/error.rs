//! Error taxonomy for the prediction flow.

use thiserror::Error;

/// Longest diagnostic excerpt surfaced from a rejected response body.
pub const EXCERPT_LIMIT: usize = 500;

/// Everything that can terminate a prediction early.
///
/// A failed confidence extraction is deliberately absent: it degrades to
/// [`Confidence::Unavailable`](crate::Confidence::Unavailable) instead of
/// aborting the flow.
#[derive(Error, Debug)]
pub enum FoldError {
    /// Sanitization left no usable residues.
    #[error("no valid amino acids left after cleaning the input")]
    EmptySequence,

    /// The prediction service could not be reached at the transport level.
    #[error("could not reach the folding service: {0}")]
    Transport(String),

    /// The response body does not look like a PDB structure.
    #[error("the folding service did not return a PDB structure; response began:\n{excerpt}")]
    InvalidResponse {
        /// First [`EXCERPT_LIMIT`] characters of the offending body.
        excerpt: String,
    },
}

impl FoldError {
    /// Wrap a transport-level failure (DNS, refused connection, timeout).
    pub fn transport(message: impl Into<String>) -> Self {
        FoldError::Transport(message.into())
    }

    /// Build an `InvalidResponse` carrying a bounded excerpt of `body`.
    pub fn invalid_response(body: &str) -> Self {
        FoldError::InvalidResponse {
            excerpt: body.chars().take(EXCERPT_LIMIT).collect(),
        }
    }
}
