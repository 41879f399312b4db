//! Mean plDDT extraction.
//!
//! ESMFold stores its per-residue plDDT confidence (0-100) in the PDB
//! B-factor column, copied to every atom of the residue. The score reported
//! here is the arithmetic mean of the B-factor over all atoms, rounded to
//! 4 decimals, which equals the per-residue mean for such files.
//!
//! Extraction is best-effort: any parse failure yields
//! [`Confidence::Unavailable`] for the whole structure. It never aborts the
//! surrounding flow.

use std::fmt;
use std::io::Write;

use log::{debug, warn};
use tempfile::Builder;

/// Mean plDDT of a predicted structure, or a sentinel when the structure
/// could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// Mean plDDT over all atoms, rounded to 4 decimals.
    Score(f64),
    /// The structure could not be parsed; shown to the user as `N/A`.
    Unavailable,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Score(value) => write!(f, "{value:.4}"),
            Confidence::Unavailable => write!(f, "N/A"),
        }
    }
}

/// Compute the mean plDDT of a PDB structure given as text.
///
/// The text is written to a scoped temporary file so `pdbtbx` can open it;
/// the file is removed when extraction finishes. Parse errors, I/O errors
/// and structures without atoms all collapse to
/// [`Confidence::Unavailable`].
pub fn mean_plddt(pdb_text: &str) -> Confidence {
    match atom_b_factor_mean(pdb_text) {
        Some(score) => {
            debug!("mean plDDT over structure: {score:.4}");
            Confidence::Score(score)
        }
        None => {
            warn!("could not parse the structure; confidence degraded to N/A");
            Confidence::Unavailable
        }
    }
}

fn atom_b_factor_mean(pdb_text: &str) -> Option<f64> {
    let mut scratch = Builder::new().suffix(".pdb").tempfile().ok()?;
    scratch.write_all(pdb_text.as_bytes()).ok()?;
    scratch.flush().ok()?;

    let (pdb, _discarded_errors) = pdbtbx::open(scratch.path().to_str()?).ok()?;
    let atom_count = pdb.atom_count();
    if atom_count == 0 {
        return None;
    }

    let total: f64 = pdb.atoms().map(|atom| atom.b_factor()).sum();
    let mean = total / atom_count as f64;
    Some((mean * 10_000.0).round() / 10_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldview_test_data::TestFile;

    #[test]
    fn test_three_residue_mean() {
        // fixture carries plDDT 10, 20 and 30 on its three CA atoms
        let pdb_text = TestFile::predicted_01().read_str();
        let confidence = mean_plddt(&pdb_text);
        assert_eq!(confidence, Confidence::Score(20.0));
        assert_eq!(confidence.to_string(), "20.0000");
    }

    #[test]
    fn test_unparsable_blob_degrades_to_unavailable() {
        let blob = TestFile::not_a_structure_01().read_str();
        assert_eq!(mean_plddt(&blob), Confidence::Unavailable);
        assert_eq!(mean_plddt(""), Confidence::Unavailable);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Confidence::Score(88.125).to_string(), "88.1250");
        assert_eq!(Confidence::Unavailable.to_string(), "N/A");
    }
}
