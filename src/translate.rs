//! Codon-by-codon translation of a single reading frame.

use tracing::trace;

use crate::error::{TranslationError, TranslationResult};
use crate::genetic_code::{is_stop_codon, GeneticCode};
use crate::sequence::normalize;

/// Translates `rna_sequence` from its first base.
///
/// Translation runs codon by codon until the first stop codon (UAA, UGA,
/// UAG) or until fewer than three bases remain. Sequences shorter than
/// three bases, or starting with a stop codon, give an empty peptide.
///
/// # Examples
///
/// ```
/// use longpep::genetic_code::GeneticCode;
/// use longpep::translate::translate_sequence;
///
/// let code = GeneticCode::standard();
/// assert_eq!(translate_sequence("AUGUACUGG", &code).unwrap(), "MYW");
/// ```
pub fn translate_sequence(rna_sequence: &str, genetic_code: &GeneticCode) -> TranslationResult<String> {
    translate_from(rna_sequence, genetic_code, 0)
}

/// Translates the reading frame that starts at `start_offset`.
///
/// # Errors
///
/// Returns `KeyNotFound` if a non-stop codon has no entry in
/// `genetic_code`. Stop codons are detected literally and never looked up.
pub fn translate_from(
    rna_sequence: &str,
    genetic_code: &GeneticCode,
    start_offset: usize,
) -> TranslationResult<String> {
    translate_frame(normalize(rna_sequence).as_bytes(), genetic_code, start_offset)
}

/// Translates an already-uppercased sequence from `start_offset`.
pub(crate) fn translate_frame(
    sequence: &[u8],
    genetic_code: &GeneticCode,
    start_offset: usize,
) -> TranslationResult<String> {
    let mut peptide = String::with_capacity(sequence.len().saturating_sub(start_offset) / 3);
    let mut pos = start_offset;

    while let Some(codon) = sequence.get(pos..pos.saturating_add(3)) {
        if is_stop_codon(codon) {
            trace!(position = pos, "stop codon");
            break;
        }

        let aa = std::str::from_utf8(codon)
            .ok()
            .and_then(|codon| genetic_code.get(codon))
            .ok_or_else(|| TranslationError::KeyNotFound {
                codon: String::from_utf8_lossy(codon).into_owned(),
                position: pos,
            })?;
        peptide.push(aa);
        pos += 3;
    }

    Ok(peptide)
}
