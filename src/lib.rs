//! # longpep - RNA translation and longest peptide search
//!
//! Translates RNA sequences with an explicit genetic code and finds the
//! longest peptide encoded across all six reading frames.
//!
//! ## Modules
//!
//! - `genetic_code`: codon tables (NCBI tables, custom tables, table files)
//! - `translate`: translation of one reading frame from a start offset
//! - `sequence`: reverse, complement and reverse complement
//! - `frames`: start codon scanning and longest peptide selection
//! - `fasta`: FASTA input for batch runs
//! - `logging`: tracing subscriber setup for the binary
//!
//! ## Example
//!
//! ```
//! use longpep::{get_longest_peptide, GeneticCode};
//!
//! let code = GeneticCode::standard();
//! let peptide = get_longest_peptide("UUAGGGAAACAU", &code).unwrap();
//! assert_eq!(peptide, "MFP");
//! ```

pub mod error;
pub mod fasta;
pub mod frames;
pub mod genetic_code;
pub mod logging;
pub mod sequence;
pub mod translate;

pub use error::{TranslationError, TranslationResult};
pub use frames::{get_all_translations, get_longest_peptide};
pub use genetic_code::GeneticCode;
pub use sequence::{get_complement, get_reverse, reverse_and_complement};
pub use translate::{translate_from, translate_sequence};
