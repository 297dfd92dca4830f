//! FASTA input for batch translation.
//!
//! Records may span several lines; whitespace inside sequence lines is
//! dropped and case is preserved (translation normalizes it later).
//!
//! ```text
//! >transcript_1 optional description
//! AUGUACUGGCAC...
//! >transcript_2
//! GCUACUGCUCCA...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA input")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// One named RNA sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RnaRecord {
    /// The identifier (first word of the header, without '>')
    pub id: String,
    pub sequence: String,
}

impl RnaRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// Parses a FASTA file.
///
/// # Examples
///
/// ```no_run
/// use longpep::fasta::parse_fasta_file;
///
/// let records = parse_fasta_file("transcripts.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<RnaRecord>> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA content from a reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<RnaRecord>> {
    let mut records = Vec::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();
    let mut line_number = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                if !current_seq.is_empty() {
                    records.push(RnaRecord::new(id, std::mem::take(&mut current_seq)));
                }
            }

            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::InvalidFormat(format!(
                    "Empty sequence identifier at line {}",
                    line_number
                )));
            }

            current_id = Some(id.to_string());
            current_seq.clear();
        } else {
            if current_id.is_none() {
                return Err(FastaError::SequenceWithoutHeader(line_number));
            }

            current_seq.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    if let Some(id) = current_id {
        if !current_seq.is_empty() {
            records.push(RnaRecord::new(id, current_seq));
        }
    }

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(records)
}

/// Parses FASTA content from a string.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<RnaRecord>> {
    parse_fasta(content.as_bytes())
}
