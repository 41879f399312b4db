//! Client for the ESM Atlas folding endpoint.
//!
//! One synchronous POST per prediction: the cleaned sequence goes out as a
//! form-urlencoded body, the structure file comes back as text. The HTTP
//! status code is ignored on purpose — whatever body arrives is handed to
//! the validator, which judges it by content. There are no retries: a fold
//! is expensive remote computation and must run at most once per request.
//!
//! # Example
//!
//! ```no_run
//! use foldview_fetch::FoldClient;
//! use foldview_core::FoldProvider;
//!
//! let client = FoldClient::new();
//! let pdb_text = client.fold("MGSSHHHHHH")?;
//! # Ok::<(), foldview_core::FoldError>(())
//! ```

use std::time::Duration;

use foldview_core::{FoldError, FoldProvider};
use log::{debug, info};

/// The public ESM Atlas single-sequence folding endpoint.
pub const ESM_ATLAS_URL: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";

/// User-Agent header for HTTP requests
const USER_AGENT: &str = concat!("foldview/", env!("CARGO_PKG_VERSION"));

/// Synchronous client for a folding service.
pub struct FoldClient {
    url: String,
    timeout: Option<Duration>,
}

impl FoldClient {
    /// Client against the default ESM Atlas endpoint, blocking without a
    /// timeout like the service's reference front-end.
    pub fn new() -> Self {
        Self::with_url(ESM_ATLAS_URL)
    }

    /// Client against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Bound the whole request. Off by default; observable success
    /// behavior is unchanged when the service answers in time.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The endpoint this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn agent(&self) -> ureq::Agent {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

impl Default for FoldClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldProvider for FoldClient {
    fn fold(&self, sequence: &str) -> Result<String, FoldError> {
        info!("POST {} ({} residues)", self.url, sequence.len());

        let request = self
            .agent()
            .post(&self.url)
            .set("Content-Type", "application/x-www-form-urlencoded")
            .set("User-Agent", USER_AGENT);

        let response = match request.send_string(sequence) {
            Ok(response) => response,
            // Non-2xx answers still carry a body; the validator decides
            // by content, not status.
            Err(ureq::Error::Status(code, response)) => {
                debug!("service answered HTTP {code}; passing body through");
                response
            }
            Err(err) => return Err(FoldError::transport(err.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|err| FoldError::transport(format!("failed to read response: {err}")))?;
        debug!("received {} bytes", body.len());
        Ok(body)
    }
}
