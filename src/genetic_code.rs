//! Genetic code definitions.
//!
//! This module provides:
//! - The `GeneticCode` lookup table (codon → one-letter amino acid)
//! - NCBI genetic code tables, expressed in the RNA alphabet
//! - A loader for user-supplied codon table files
//!
//! A genetic code is always handed to the translation functions explicitly;
//! there is no process-wide table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{TranslationError, TranslationResult};

/// The codon that opens a translatable region.
pub const START_CODON: &[u8; 3] = b"AUG";

/// Codons that terminate translation. They are matched literally, before
/// any table lookup.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"UAA", b"UGA", b"UAG"];

/// Number of codons in a complete table (4^3).
const CODON_COUNT: usize = 64;

const RNA_BASES: [char; 4] = ['U', 'C', 'A', 'G'];

/// Returns true if `codon` is one of UAA, UGA or UAG (uppercase only).
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == &stop[..])
}

/// A genetic code table for translating codons to amino acids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    /// NCBI genetic code ID (`None` for caller-supplied tables)
    pub id: Option<u8>,
    /// Name of the genetic code
    pub name: String,
    /// Codon to amino acid mapping, keys in uppercase RNA alphabet
    codon_table: HashMap<String, char>,
}

impl GeneticCode {
    /// Creates a genetic code from an NCBI `ncbieaa` string.
    ///
    /// The 64 letters follow NCBI order (UUU, UUC, UUA, UUG, UCU, ...).
    fn from_ncbieaa(id: u8, name: &str, ncbieaa: &str) -> Self {
        let mut codon_table = HashMap::with_capacity(CODON_COUNT);
        let mut amino_acids = ncbieaa.chars();

        for &b1 in &RNA_BASES {
            for &b2 in &RNA_BASES {
                for &b3 in &RNA_BASES {
                    let aa = amino_acids.next().unwrap_or('X');
                    codon_table.insert(format!("{}{}{}", b1, b2, b3), aa);
                }
            }
        }

        Self {
            id: Some(id),
            name: name.to_string(),
            codon_table,
        }
    }

    /// The standard genetic code (NCBI table 1).
    pub fn standard() -> Self {
        Self::from_ncbieaa(1, "Standard", STANDARD_NCBIEAA)
    }

    /// Builds a genetic code from caller-supplied `(codon, amino acid)` pairs.
    ///
    /// Codons are uppercased; no completeness check is made here, so a
    /// missing codon only surfaces as `KeyNotFound` when it is translated.
    pub fn from_pairs<I, K>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, char)>,
        K: AsRef<str>,
    {
        let codon_table = pairs
            .into_iter()
            .map(|(codon, aa)| (codon.as_ref().to_uppercase(), aa))
            .collect();

        Self {
            id: None,
            name: name.into(),
            codon_table,
        }
    }

    /// Looks up the amino acid for an uppercase codon.
    pub fn get(&self, codon: &str) -> Option<char> {
        self.codon_table.get(codon).copied()
    }

    /// Number of codons in the table.
    pub fn len(&self) -> usize {
        self.codon_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codon_table.is_empty()
    }

    /// Returns true if all 64 {A,C,G,U} codons have an entry.
    pub fn is_complete(&self) -> bool {
        RNA_BASES.iter().all(|&b1| {
            RNA_BASES.iter().all(|&b2| {
                RNA_BASES
                    .iter()
                    .all(|&b3| self.codon_table.contains_key(&format!("{}{}{}", b1, b2, b3)))
            })
        })
    }
}

impl<K: AsRef<str>> FromIterator<(K, char)> for GeneticCode {
    fn from_iter<T: IntoIterator<Item = (K, char)>>(iter: T) -> Self {
        Self::from_pairs("Custom", iter)
    }
}

/// Loads a codon table file (see [`parse_code_table`]).
pub fn load_code_table<P: AsRef<Path>>(path: P) -> TranslationResult<GeneticCode> {
    let name = path.as_ref().display().to_string();
    let file = File::open(&path)?;
    parse_code_table(BufReader::new(file), name)
}

/// Parses a codon table.
///
/// One `CODON AMINO_ACID` pair per line, e.g. `AUG M` or `UAA *`. Blank
/// lines and `#` comments are ignored, `T` is read as `U`. The table must
/// list each of the 64 codons exactly once.
pub fn parse_code_table<R: BufRead>(reader: R, name: impl Into<String>) -> TranslationResult<GeneticCode> {
    let mut codon_table = HashMap::with_capacity(CODON_COUNT);
    let mut line_number = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let line = line.split('#').next().unwrap_or("").trim();

        if line.is_empty() {
            continue;
        }

        let invalid = |reason: String| TranslationError::InvalidTable {
            line: line_number,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let (codon, aa) = match fields.as_slice() {
            [codon, aa] => (*codon, *aa),
            _ => return Err(invalid(format!("expected 'CODON AMINO_ACID', got '{}'", line))),
        };

        let codon: String = codon
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                'T' => 'U',
                other => other,
            })
            .collect();
        if codon.len() != 3 || !codon.chars().all(|c| RNA_BASES.contains(&c)) {
            return Err(invalid(format!("'{}' is not a codon over A, C, G, U", codon)));
        }

        let mut aa_chars = aa.chars();
        let aa = match (aa_chars.next(), aa_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(invalid(format!("amino acid '{}' must be a single character", aa))),
        };

        if codon_table.insert(codon.clone(), aa).is_some() {
            return Err(invalid(format!("codon '{}' listed twice", codon)));
        }
    }

    if codon_table.len() != CODON_COUNT {
        return Err(TranslationError::InvalidTable {
            line: line_number,
            reason: format!("expected {} codons, found {}", CODON_COUNT, codon_table.len()),
        });
    }

    Ok(GeneticCode {
        id: None,
        name: name.into(),
        codon_table,
    })
}

const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// All available genetic codes from NCBI.
pub struct GeneticCodes {
    codes: Vec<GeneticCode>,
}

impl GeneticCodes {
    /// Creates the complete set of NCBI genetic codes.
    pub fn new() -> Self {
        let codes = vec![
            GeneticCode::standard(),
            GeneticCode::from_ncbieaa(2, "Vertebrate Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(3, "Yeast Mitochondrial",
                "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(4, "Mold/Protozoan/Coelenterate Mito...",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(5, "Invertebrate Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(6, "Ciliate/Dasycladacean/Hexamita Nuclear",
                "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(9, "Echinoderm/Flatworm Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(10, "Euplotid Nuclear",
                "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(11, "Bacterial/Archaeal/Plant Plastid",
                "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(12, "Alternative Yeast Nuclear",
                "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(13, "Ascidian Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(14, "Alternative Flatworm Mitochondrial",
                "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(16, "Chlorophycean Mitochondrial",
                "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(21, "Trematode Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(22, "Scenedesmus obliquus Mitochondrial",
                "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(23, "Thraustochytrium Mitochondrial",
                "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(24, "Rhabdopleuridae Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(25, "Candidate Division SR1/Gracilibacteria",
                "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(26, "Pachysolen tannophilus Nuclear",
                "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(29, "Mesodinium Nuclear",
                "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::from_ncbieaa(30, "Peritrich Nuclear",
                "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
        ];

        Self { codes }
    }

    /// Returns all genetic codes.
    pub fn all(&self) -> &[GeneticCode] {
        &self.codes
    }

    /// Gets a genetic code by NCBI ID.
    pub fn get(&self, id: u8) -> Option<&GeneticCode> {
        self.codes.iter().find(|c| c.id == Some(id))
    }
}

impl Default for GeneticCodes {
    fn default() -> Self {
        Self::new()
    }
}
