//! Multi-frame scanning for start codons and longest peptide selection.
//!
//! Every "AUG" in a sequence opens its own peptide, whatever its reading
//! frame, so nested and overlapping start codons each produce a result.
//! `get_longest_peptide` repeats the scan on the reverse complement to
//! cover all six reading frames.

use tracing::debug;

use crate::error::{TranslationError, TranslationResult};
use crate::genetic_code::{GeneticCode, START_CODON};
use crate::sequence::{normalize, reverse_and_complement};
use crate::translate::translate_frame;

/// Translates from every start codon of `rna_sequence`.
///
/// The sequence is taken in its given orientation only. Peptides are
/// returned in order of their start position; a start codon directly
/// followed by a stop codon contributes an empty peptide.
///
/// # Examples
///
/// ```
/// use longpep::frames::get_all_translations;
/// use longpep::genetic_code::GeneticCode;
///
/// let code = GeneticCode::standard();
/// assert_eq!(get_all_translations("AUGAUGUAA", &code).unwrap(), vec!["MM", "M"]);
/// ```
pub fn get_all_translations(rna_sequence: &str, genetic_code: &GeneticCode) -> TranslationResult<Vec<String>> {
    let sequence = normalize(rna_sequence);
    let bytes = sequence.as_bytes();

    if bytes.len() < 3 {
        return Ok(Vec::new());
    }

    let mut peptides = Vec::new();
    for (start, window) in bytes.windows(3).enumerate() {
        if window == &START_CODON[..] {
            peptides.push(translate_frame(bytes, genetic_code, start)?);
        }
    }

    debug!(
        length = bytes.len(),
        start_codons = peptides.len(),
        "scanned sequence for start codons"
    );
    Ok(peptides)
}

/// Returns the longest peptide encoded in any of the six reading frames.
///
/// Forward-strand peptides are considered before reverse-complement ones;
/// among peptides of equal length the first one found wins. An empty
/// string is returned when nothing can be translated.
///
/// # Errors
///
/// Fails with `InvalidBase` if the sequence holds a symbol outside
/// {A, C, G, U}, or with `KeyNotFound` on an incomplete genetic code.
/// A `KeyNotFound` from the reverse complement still names the codon as
/// read on that strand, but its `position` is the first base of the
/// matching stretch in the input sequence.
pub fn get_longest_peptide(rna_sequence: &str, genetic_code: &GeneticCode) -> TranslationResult<String> {
    let sequence = normalize(rna_sequence);
    let reverse_complement = reverse_and_complement(&sequence)?;

    let forward = get_all_translations(&sequence, genetic_code)?;
    let reverse = get_all_translations(&reverse_complement, genetic_code).map_err(|err| match err {
        TranslationError::KeyNotFound { codon, position } => TranslationError::KeyNotFound {
            codon,
            position: sequence.len() - position - 3,
        },
        other => other,
    })?;
    debug!(
        forward = forward.len(),
        reverse = reverse.len(),
        "collected peptides from both strands"
    );

    let longest = longest_of(forward.into_iter().chain(reverse));
    debug!(length = longest.chars().count(), "selected longest peptide");
    Ok(longest)
}

/// Picks the longest peptide, keeping the earliest one on ties.
pub fn longest_of<I>(peptides: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut longest = String::new();
    let mut max_len = 0;

    for peptide in peptides {
        let len = peptide.chars().count();
        if len > max_len {
            max_len = len;
            longest = peptide;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::translate_sequence;

    const DEMO_SEQUENCE: &str = "AUGUACUGGCACGCUACUGCUCCAUAUACUCACCAGAAUAUCAGUACAGCG";

    #[test]
    fn test_all_translations_nested_starts() {
        let code = GeneticCode::standard();
        let peptides = get_all_translations("AUGAUGUAA", &code).unwrap();

        assert_eq!(peptides, vec!["MM".to_string(), "M".to_string()]);
    }

    #[test]
    fn test_all_translations_every_frame() {
        let code = GeneticCode::standard();
        // Starts at 0 (frame 0), 4 (frame 1) and 8 (frame 2)
        let peptides = get_all_translations("AUGCAUGCAUGC", &code).unwrap();

        assert_eq!(peptides, vec!["MHAC", "MH", "M"]);
    }

    #[test]
    fn test_all_translations_empty_peptide_kept() {
        let code = GeneticCode::standard();
        assert_eq!(get_all_translations("AUGUGA", &code).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_all_translations_short_or_missing_start() {
        let code = GeneticCode::standard();
        assert!(get_all_translations("", &code).unwrap().is_empty());
        assert!(get_all_translations("AU", &code).unwrap().is_empty());
        assert!(get_all_translations("CCCGGGUUU", &code).unwrap().is_empty());
    }

    #[test]
    fn test_all_translations_lowercase() {
        let code = GeneticCode::standard();
        assert_eq!(get_all_translations("ccaugggg", &code).unwrap(), vec!["MG"]);
    }

    #[test]
    fn test_longest_peptide_demo() {
        let code = GeneticCode::standard();
        assert_eq!(
            get_longest_peptide(DEMO_SEQUENCE, &code).unwrap(),
            "MYWHATAPYTHQNISTA"
        );
        assert_eq!(
            get_longest_peptide(&DEMO_SEQUENCE.to_lowercase(), &code).unwrap(),
            "MYWHATAPYTHQNISTA"
        );
    }

    #[test]
    fn test_longest_peptide_from_reverse_strand() {
        let code = GeneticCode::standard();
        // Reverse complement is "AUGUUUCCCUAA"
        assert_eq!(get_longest_peptide("UUAGGGAAACAU", &code).unwrap(), "MFP");
    }

    #[test]
    fn test_longest_peptide_is_at_least_every_candidate() {
        let code = GeneticCode::standard();
        for seq in [DEMO_SEQUENCE, "AUGAUGUAA", "AUGCAUGCAUGC", "UUAGGGAAACAUAUGCC"] {
            let longest = get_longest_peptide(seq, &code).unwrap();
            let rc = reverse_and_complement(seq).unwrap();
            let candidates = get_all_translations(seq, &code)
                .unwrap()
                .into_iter()
                .chain(get_all_translations(&rc, &code).unwrap());
            for peptide in candidates {
                assert!(longest.len() >= peptide.len());
            }
        }
    }

    #[test]
    fn test_longest_peptide_empty_results() {
        let code = GeneticCode::standard();
        assert_eq!(get_longest_peptide("", &code).unwrap(), "");
        assert_eq!(get_longest_peptide("CCCGGG", &code).unwrap(), "");
        // Only start codons immediately followed by stops
        assert_eq!(get_longest_peptide("AUGUAA", &code).unwrap(), "");
    }

    #[test]
    fn test_longest_peptide_tie_prefers_forward_strand() {
        let code = GeneticCode::standard();
        // Forward gives "MP"; reverse complement "AUGAAAUAGUUAGGGCAU" gives "MK"
        assert_eq!(get_longest_peptide("AUGCCCUAACUAUUUCAU", &code).unwrap(), "MP");
        assert_eq!(get_longest_peptide("AUGAAAUAGUUAGGGCAU", &code).unwrap(), "MK");
    }

    #[test]
    fn test_longest_peptide_reverse_strand_error_position() {
        let code = GeneticCode::from_pairs("partial", [("AUG", 'M')]);
        // Reverse complement is "AUGCCC"; its CCC pairs with the input's GGG at 0
        match get_longest_peptide("GGGCAU", &code) {
            Err(TranslationError::KeyNotFound { codon, position }) => {
                assert_eq!(codon, "CCC");
                assert_eq!(position, 0);
            }
            other => panic!("expected KeyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_longest_of_first_wins_on_ties() {
        let peptides = vec!["".to_string(), "MA".to_string(), "MB".to_string(), "M".to_string()];
        assert_eq!(longest_of(peptides), "MA");
        assert_eq!(longest_of(Vec::new()), "");
    }

    #[test]
    fn test_longest_peptide_invalid_base() {
        let code = GeneticCode::standard();
        assert!(matches!(
            get_longest_peptide("AUGNNN", &code),
            Err(TranslationError::InvalidBase { base: 'N', .. })
        ));
    }

    #[test]
    fn test_longest_peptide_incomplete_code() {
        let code = GeneticCode::from_pairs("partial", [("AUG", 'M')]);
        assert!(matches!(
            get_longest_peptide("AUGCCC", &code),
            Err(TranslationError::KeyNotFound { .. })
        ));
        // Same table succeeds when only known codons are read
        assert_eq!(translate_sequence("AUGUAA", &code).unwrap(), "M");
    }
}
