//! Orientation helpers for RNA sequences.
//!
//! All functions uppercase their input first, so `get_reverse("augc")` and
//! `get_reverse("AUGC")` agree.

use crate::error::{TranslationError, TranslationResult};

/// Uppercases a sequence (ASCII only; other characters are left as-is).
pub fn normalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

/// Returns the complementary base of an uppercase nucleotide.
fn complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('U'),
        'C' => Some('G'),
        'U' => Some('A'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Reverses the orientation of `sequence`.
///
/// # Examples
///
/// ```
/// use longpep::sequence::get_reverse;
///
/// assert_eq!(get_reverse("AUGC"), "CGUA");
/// ```
pub fn get_reverse(sequence: &str) -> String {
    normalize(sequence).chars().rev().collect()
}

/// Complements every base of `sequence` (A↔U, C↔G).
///
/// Any symbol outside {A, C, G, U} is rejected with `InvalidBase`.
///
/// # Examples
///
/// ```
/// use longpep::sequence::get_complement;
///
/// assert_eq!(get_complement("AUGC").unwrap(), "UACG");
/// ```
pub fn get_complement(sequence: &str) -> TranslationResult<String> {
    normalize(sequence)
        .chars()
        .enumerate()
        .map(|(position, base)| {
            complement_base(base).ok_or(TranslationError::InvalidBase { base, position })
        })
        .collect()
}

/// Returns the reverse complement: the sequence reversed, then each base
/// of the reversed sequence complemented.
///
/// Positions in an `InvalidBase` error refer to the reversed sequence.
///
/// # Examples
///
/// ```
/// use longpep::sequence::reverse_and_complement;
///
/// assert_eq!(reverse_and_complement("AUGC").unwrap(), "GCAU");
/// ```
pub fn reverse_and_complement(sequence: &str) -> TranslationResult<String> {
    get_complement(&get_reverse(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(get_reverse("AUGC"), "CGUA");
        assert_eq!(get_reverse("augc"), "CGUA");
        assert_eq!(get_reverse("A"), "A");
        assert_eq!(get_reverse(""), "");
    }

    #[test]
    fn test_complement() {
        assert_eq!(get_complement("AUGC").unwrap(), "UACG");
        assert_eq!(get_complement("aUgC").unwrap(), "UACG");
        assert_eq!(get_complement("").unwrap(), "");
    }

    #[test]
    fn test_reverse_and_complement() {
        assert_eq!(reverse_and_complement("AUGC").unwrap(), "GCAU");
        assert_eq!(reverse_and_complement("UUACG").unwrap(), "CGUAA");
        assert_eq!(reverse_and_complement("").unwrap(), "");
    }

    #[test]
    fn test_involutions() {
        for seq in ["AUGC", "augcUUAg", "G", "CCCAAAUUUGGG", "acguACGU"] {
            let upper = seq.to_uppercase();
            assert_eq!(get_reverse(&get_reverse(seq)), upper);
            assert_eq!(get_complement(&get_complement(seq).unwrap()).unwrap(), upper);
            assert_eq!(
                reverse_and_complement(&reverse_and_complement(seq).unwrap()).unwrap(),
                upper
            );
        }
    }

    #[test]
    fn test_complement_rejects_unknown_base() {
        let result = get_complement("ACNG");
        assert!(matches!(
            result,
            Err(TranslationError::InvalidBase { base: 'N', position: 2 })
        ));

        // DNA thymine is not part of the RNA alphabet
        assert!(get_complement("ACGT").is_err());
    }

    #[test]
    fn test_reverse_and_complement_error_position() {
        // "ACNGG" reversed is "GGNCA"
        let result = reverse_and_complement("ACNGG");
        assert!(matches!(
            result,
            Err(TranslationError::InvalidBase { base: 'N', position: 2 })
        ));
    }
}
