//! Sequence sanitization.
//!
//! Turns pasted or uploaded free text into a plain amino-acid sequence:
//! FASTA headers, whitespace, digits and punctuation are stripped, the rest
//! is uppercased and filtered against the accepted residue alphabet.

/// The 20 standard one-letter residue codes plus the ambiguity codes
/// B, X, Z and J.
pub const AMINO_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWYBXZJ";

/// A 300-residue esterase used as the built-in demo input.
pub const DEMO_SEQUENCE: &str = "MGSSHHHHHHSSGLVPRGSHMRGPNPTAASLEASAGPFTVRSFTVSRPSGYGAGTVYYPTNAGGTVGAIAIVPGYTARQSSIKWWGPRLASHGFVVITIDTNSTLDQPSSRSSQQMAALRQVASLNGTSSSPIYGKVDTARMGVMGWSMGGGGSLISAANNPSLKAAAPQAPWDSSTNFSSVTVPTLIFACENDSIAPVNSSALPIYDSMSRNAKQFLEINGGSHSCANSGNSNQALIGKKGVAWMKRFMDNDTRYSTFACENPNSTRVSDFRTANCSLEDPAANKARKEAELAAATAEQ";

/// Normalize raw user text into a residue string.
///
/// The steps run in order: uppercase the input, drop every line that starts
/// with the FASTA header marker `>`, drop every character that is not an
/// ASCII uppercase letter, then keep only letters in [`AMINO_ALPHABET`].
///
/// This is a total function: any input produces a (possibly empty) string,
/// and an empty result is a valid outcome. Deciding whether an empty
/// sequence is an error belongs to the caller.
pub fn clean(raw: &str) -> String {
    raw.to_uppercase()
        .lines()
        .filter(|line| !line.starts_with('>'))
        .flat_map(|line| line.chars())
        .filter(|c| c.is_ascii_uppercase())
        .filter(|c| AMINO_ALPHABET.contains(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_closed_over_the_alphabet() {
        let noisy = ">sp|P12345|TEST\nmk 123 tayiakqr-qisfvkshfsrqleerlglu\n>another header\nOoOo";
        let cleaned = clean(noisy);
        assert!(!cleaned.is_empty());
        assert!(cleaned.chars().all(|c| AMINO_ALPHABET.contains(c)));
    }

    #[test]
    fn test_empty_and_all_invalid_inputs() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("12345"), "");
        assert_eq!(clean(">only a header line"), "");
        assert_eq!(clean(" \t\n\r\n"), "");
    }

    #[test]
    fn test_header_lines_are_dropped_entirely() {
        assert_eq!(clean(">header\nACDEFG123"), "ACDEFG");
        // every header line goes, not just the first
        assert_eq!(clean(">one\nACD\n>two\nEFG"), "ACDEFG");
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(clean("acdefg"), "ACDEFG");
        assert_eq!(clean("AcDeFg"), "ACDEFG");
    }

    #[test]
    fn test_non_residue_letters_are_dropped() {
        // O and U are letters but not part of the accepted alphabet
        assert_eq!(clean("AOCUD"), "ACD");
        // ambiguity codes stay
        assert_eq!(clean("BXZJ"), "BXZJ");
    }

    #[test]
    fn test_demo_sequence_is_already_clean() {
        assert_eq!(clean(DEMO_SEQUENCE), DEMO_SEQUENCE);
    }
}
