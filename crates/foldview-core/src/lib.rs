//! # foldview-core
//!
//! Core pipeline for folding a protein sequence with a remote prediction
//! service and inspecting the result.
//!
//! ## Features
//!
//! - Sanitize free-text sequence input into the amino-acid alphabet
//! - Validate that a service response is a PDB structure
//! - Extract the mean plDDT confidence from the B-factor column
//! - Run the whole flow as one straight-line pipeline
//!
//! ## Usage
//!
//! ```no_run
//! use foldview_core::{predict, FoldError, FoldProvider};
//!
//! struct Remote;
//! impl FoldProvider for Remote {
//!     fn fold(&self, sequence: &str) -> Result<String, FoldError> {
//!         todo!("POST the sequence to a prediction service")
//!     }
//! }
//!
//! let prediction = predict("MGSSHHHHHH", &Remote)?;
//! println!("plDDT: {}", prediction.confidence);
//! # Ok::<(), foldview_core::FoldError>(())
//! ```
pub mod confidence;
pub mod error;
pub mod pipeline;
pub mod seq;
pub mod validate;

pub use self::confidence::{mean_plddt, Confidence};
pub use self::error::FoldError;
pub use self::pipeline::{predict, FoldProvider, Prediction};
pub use self::seq::{clean, AMINO_ALPHABET, DEMO_SEQUENCE};
pub use self::validate::validate;
