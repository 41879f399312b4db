//! The straight-line prediction pipeline.
//!
//! One user action maps to one call of [`predict`]: sanitize the raw text,
//! fold it through a [`FoldProvider`], validate the returned body, then
//! extract the confidence. There is no retry anywhere, no state survives
//! the call, and each step hands its result directly to the next.

use log::info;

use crate::confidence::{mean_plddt, Confidence};
use crate::error::FoldError;
use crate::seq::clean;
use crate::validate::validate;

/// Something that can turn a clean sequence into a structure file.
///
/// The production implementation lives in `foldview-fetch`; tests supply
/// scripted providers.
pub trait FoldProvider {
    /// Fold `sequence` and return the structure file as text.
    ///
    /// `sequence` is guaranteed non-empty and drawn from the residue
    /// alphabet. Implementations must not retry on failure: a folding call
    /// is expensive remote computation and must run at most once per
    /// prediction.
    fn fold(&self, sequence: &str) -> Result<String, FoldError>;
}

/// The outcome of a successful prediction.
#[derive(Debug)]
pub struct Prediction {
    /// The sanitized sequence that was submitted.
    pub sequence: String,
    /// Raw structure file returned by the service, verbatim.
    pub pdb: String,
    /// Mean plDDT, or `Unavailable` when extraction failed.
    pub confidence: Confidence,
}

/// Run one prediction: clean → fold → validate → extract.
///
/// Rejected input and transport or validation failures terminate the run
/// with the matching [`FoldError`]; the provider is never called when
/// cleaning leaves nothing. A failed confidence extraction does not fail
/// the prediction.
pub fn predict(raw: &str, provider: &dyn FoldProvider) -> Result<Prediction, FoldError> {
    let sequence = clean(raw);
    if sequence.is_empty() {
        return Err(FoldError::EmptySequence);
    }

    info!("submitting {} residues for folding", sequence.len());
    let pdb = provider.fold(&sequence)?;
    validate(&pdb)?;

    let confidence = mean_plddt(&pdb);
    Ok(Prediction {
        sequence,
        pdb,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Scripted provider that records how often and with what it was called.
    struct ScriptedFolder {
        response: Result<String, FoldError>,
        calls: Cell<usize>,
        last_sequence: RefCell<Option<String>>,
    }

    impl ScriptedFolder {
        fn returning(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                calls: Cell::new(0),
                last_sequence: RefCell::new(None),
            }
        }

        fn failing_transport(message: &str) -> Self {
            Self {
                response: Err(FoldError::transport(message)),
                calls: Cell::new(0),
                last_sequence: RefCell::new(None),
            }
        }
    }

    impl FoldProvider for ScriptedFolder {
        fn fold(&self, sequence: &str) -> Result<String, FoldError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_sequence.borrow_mut() = Some(sequence.to_string());
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(FoldError::Transport(msg)) => Err(FoldError::transport(msg.clone())),
                Err(_) => unreachable!("scripts only fail with Transport"),
            }
        }
    }

    #[test]
    fn test_empty_input_is_rejected_before_any_network_call() {
        let folder = ScriptedFolder::returning("HEADER\nEND\n");
        let result = predict(">just a header\n12345  ", &folder);
        assert!(matches!(result, Err(FoldError::EmptySequence)));
        assert_eq!(folder.calls.get(), 0);
    }

    #[test]
    fn test_transport_failure_is_terminal() {
        let folder = ScriptedFolder::failing_transport("connection refused");
        let result = predict("ACDEFG", &folder);
        assert!(matches!(result, Err(FoldError::Transport(_))));
        assert_eq!(folder.calls.get(), 1);
    }

    #[test]
    fn test_invalid_body_is_terminal() {
        let folder = ScriptedFolder::returning("{\"error\":\"bad request\"}");
        let result = predict("ACDEFG", &folder);
        assert!(matches!(result, Err(FoldError::InvalidResponse { .. })));
    }

    #[test]
    fn test_provider_sees_the_cleaned_sequence() {
        let folder = ScriptedFolder::returning("HEADER   FAKE STRUCTURE\nEND\n");
        let prediction = predict(">demo\nacd efg\n", &folder).unwrap();
        assert_eq!(folder.last_sequence.borrow().as_deref(), Some("ACDEFG"));
        assert_eq!(prediction.sequence, "ACDEFG");
        assert_eq!(prediction.pdb, "HEADER   FAKE STRUCTURE\nEND\n");
    }

    #[test]
    fn test_extraction_failure_does_not_block_readiness() {
        // valid sniff, hopeless as a structure
        let folder = ScriptedFolder::returning("HEADER garbage that parses nowhere");
        let prediction = predict("ACDEFG", &folder).unwrap();
        assert_eq!(prediction.confidence, Confidence::Unavailable);
    }
}
