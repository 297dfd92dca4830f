//! Error types shared by the translation functions.

use thiserror::Error;

/// Errors that can occur while translating or transforming a sequence.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A non-stop codon has no entry in the genetic code.
    #[error("Codon '{codon}' at position {position} is not in the genetic code")]
    KeyNotFound { codon: String, position: usize },

    #[error("Invalid nucleotide '{base}' at position {position} (expected A, C, G or U)")]
    InvalidBase { base: char, position: usize },

    #[error("Invalid codon table at line {line}: {reason}")]
    InvalidTable { line: usize, reason: String },

    #[error("Failed to read codon table: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;
