//! foldview-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//!
//! The test files are represented as `TestFile` objects which package the
//! raw bytes and can either hand them over as text or create temporary
//! files for programs to operate on.

use std::fs;
use tempfile::{Builder, NamedTempFile};

/// Test File
///
/// Example usage:
///
/// ```
/// use foldview_test_data::TestFile;
///
/// // as text
/// let pdb_text = TestFile::predicted_01().read_str();
///
/// // as a file; the handle keeps the tempfile alive
/// let (path, _temp) = TestFile::predicted_01().create_temp().unwrap();
/// ```
#[derive(Debug)]
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// A miniature ESMFold-style prediction: three residues whose CA atoms
    /// carry plDDT values 10, 20 and 30 in the B-factor column.
    pub fn predicted_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/predicted_01.pdb"),
            suffix: "pdb",
        }
    }

    /// A JSON error body of the kind folding services return on bad input.
    pub fn not_a_structure_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/error_01.json"),
            suffix: "json",
        }
    }

    /// The embedded bytes as UTF-8 text.
    pub fn read_str(&self) -> String {
        String::from_utf8(self.filebinary.to_vec()).expect("test fixtures are UTF-8")
    }

    /// Materialize the fixture as a named temporary file.
    ///
    /// Returns `(filepath, tempfile_handle)`; keep the handle in scope or
    /// the file disappears.
    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp_file = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;
        fs::write(temp_file.path(), self.filebinary)?;
        let path = temp_file.path().to_string_lossy().into_owned();
        Ok((path, temp_file))
    }
}
