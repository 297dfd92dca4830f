//! longpep - longest peptide finder
//!
//! ## Usage
//!
//! ```bash
//! longpep transcripts.fasta                 # longest peptide per record
//! longpep -s AUGUACUGGCAC                   # single sequence
//! longpep -m all -g 2 transcripts.fasta     # every peptide, vertebrate mito code
//! longpep -c my_code.txt -o out.fasta -     # custom table, FASTA from stdin
//! longpep --demo
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use longpep::fasta::{parse_fasta, parse_fasta_file, RnaRecord};
use longpep::frames::{get_all_translations, get_longest_peptide};
use longpep::genetic_code::{load_code_table, GeneticCode, GeneticCodes};
use longpep::logging::init_tracing;
use longpep::translate::translate_sequence;

const DEMO_SEQUENCE: &str = "AUGUACUGGCACGCUACUGCUCCAUAUACUCACCAGAAUAUCAGUACAGCG";
const DEMO_EXPECTED: &str = "MYWHATAPYTHQNISTA";

/// What to report for each input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Longest peptide over all six reading frames
    Longest,
    /// Every peptide opened by a start codon on the given strand
    All,
    /// Plain translation from the first base
    Translate,
}

/// longpep - find the longest peptide encoded by RNA sequences
///
/// Reads sequences from a FASTA file (or stdin with "-"), or a single
/// sequence given with -s, and writes peptides as FASTA records.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file of RNA sequences ("-" for stdin)
    input: Option<PathBuf>,

    /// A single RNA sequence to process instead of a file
    #[arg(short = 's', long = "sequence", conflicts_with = "input")]
    sequence: Option<String>,

    /// What to report
    #[arg(short = 'm', long = "mode", value_enum, default_value = "longest")]
    mode: Mode,

    /// NCBI genetic code (default: 1 = Standard)
    #[arg(short = 'g', long = "genetic-code", default_value = "1")]
    genetic_code: u8,

    /// Codon table file ("CODON AA" per line); overrides -g
    #[arg(short = 'c', long = "code-table")]
    code_table: Option<PathBuf>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Wrap peptide lines at this width (0 = no wrapping)
    #[arg(short = 'w', long = "width", default_value = "60")]
    width: usize,

    /// Log progress to stderr (LONGPEP_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Run the built-in demonstration sequence and exit
    #[arg(long = "demo")]
    demo: bool,

    /// List the available NCBI genetic codes and exit
    #[arg(long = "list-codes")]
    list_codes: bool,
}

/// Resolves the genetic code from -c or -g.
fn select_genetic_code(args: &Args) -> Result<GeneticCode> {
    if let Some(path) = &args.code_table {
        let code = load_code_table(path)
            .with_context(|| format!("Cannot load codon table {}", path.display()))?;
        info!(table = %code.name, "using custom codon table");
        return Ok(code);
    }

    let codes = GeneticCodes::new();
    let code = codes
        .get(args.genetic_code)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown genetic code: {}", args.genetic_code))?;
    info!(id = args.genetic_code, name = %code.name, "using NCBI genetic code");
    Ok(code)
}

/// Collects the input records from -s, a file, or stdin.
fn read_records(args: &Args) -> Result<Vec<RnaRecord>> {
    if let Some(sequence) = &args.sequence {
        return Ok(vec![RnaRecord::new("sequence", sequence.as_str())]);
    }

    match &args.input {
        Some(path) if path.as_os_str() == "-" => Ok(parse_fasta(io::stdin().lock())?),
        Some(path) => parse_fasta_file(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        None => anyhow::bail!("No input: give a FASTA file, \"-\" for stdin, or -s <SEQUENCE>"),
    }
}

/// Computes the output records for one input record.
fn process_record(record: &RnaRecord, code: &GeneticCode, mode: Mode) -> Result<Vec<RnaRecord>> {
    let context = || format!("Cannot translate sequence '{}'", record.id);

    let peptides = match mode {
        Mode::Longest => {
            let peptide = get_longest_peptide(&record.sequence, code).with_context(context)?;
            vec![RnaRecord::new(record.id.as_str(), peptide)]
        }
        Mode::Translate => {
            let peptide = translate_sequence(&record.sequence, code).with_context(context)?;
            vec![RnaRecord::new(record.id.as_str(), peptide)]
        }
        Mode::All => get_all_translations(&record.sequence, code)
            .with_context(context)?
            .into_iter()
            .enumerate()
            .map(|(i, peptide)| RnaRecord::new(format!("{}_{}", record.id, i + 1), peptide))
            .collect(),
    };

    debug!(id = %record.id, peptides = peptides.len(), "processed record");
    Ok(peptides)
}

/// Writes peptides as FASTA, wrapping sequence lines at `width`.
fn write_fasta<W: Write>(out: &mut W, records: &[RnaRecord], width: usize) -> io::Result<()> {
    for record in records {
        writeln!(out, ">{}", record.id)?;
        if width == 0 || record.sequence.is_empty() {
            writeln!(out, "{}", record.sequence)?;
        } else {
            for line in textwrap::wrap(&record.sequence, width) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}

/// Writes one "ID  Name" line per NCBI genetic code.
fn write_code_list<W: Write>(out: &mut W, codes: &GeneticCodes) -> io::Result<()> {
    for code in codes.all() {
        if let Some(id) = code.id {
            writeln!(out, "{:>2}  {}", id, code.name)?;
        }
    }
    Ok(())
}

fn demo_message(sequence: &str, peptide: &str) -> String {
    format!(
        "The longest peptide encoded by\n\t'{}'\nis\n\t'{}'\n",
        sequence, peptide
    )
}

/// Runs the demonstration sequence against the standard code.
fn run_demo() -> Result<()> {
    let code = GeneticCode::standard();
    let peptide = get_longest_peptide(DEMO_SEQUENCE, &code)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", demo_message(DEMO_SEQUENCE, &peptide))?;
    if peptide == DEMO_EXPECTED {
        writeln!(handle, "Indeed.")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.demo {
        return run_demo();
    }

    if args.list_codes {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_code_list(&mut handle, &GeneticCodes::new())?;
        return Ok(());
    }

    let code = select_genetic_code(&args)?;
    let records = read_records(&args)?;
    info!(count = records.len(), mode = ?args.mode, "read input sequences");

    let mut peptides = Vec::with_capacity(records.len());
    for record in &records {
        peptides.extend(process_record(record, &code, args.mode)?);
    }

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_fasta(&mut handle, &peptides, args.width)?;
    } else {
        let mut file = io::BufWriter::new(
            std::fs::File::create(&args.output)
                .with_context(|| format!("Cannot create {}", args.output))?,
        );
        write_fasta(&mut file, &peptides, args.width)?;
        file.flush()?;
        eprintln!("Wrote {} peptides to {}", peptides.len(), args.output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_defaults() {
        let args = Args::try_parse_from(["longpep", "in.fasta"]).unwrap();

        assert_eq!(args.mode, Mode::Longest);
        assert_eq!(args.genetic_code, 1);
        assert_eq!(args.output, "-");
        assert_eq!(args.width, 60);
        assert!(!args.demo);
    }

    #[test]
    fn test_sequence_conflicts_with_input() {
        assert!(Args::try_parse_from(["longpep", "in.fasta", "-s", "AUG"]).is_err());
    }

    #[test]
    fn test_unknown_genetic_code() {
        let args = Args::try_parse_from(["longpep", "-s", "AUG", "-g", "7"]).unwrap();
        assert!(select_genetic_code(&args).is_err());
    }

    #[test]
    fn test_process_record_modes() {
        let code = GeneticCode::standard();
        let record = RnaRecord::new("tx", "AUGAUGUAA");

        let longest = process_record(&record, &code, Mode::Longest).unwrap();
        assert_eq!(longest, vec![RnaRecord::new("tx", "MM")]);

        let all = process_record(&record, &code, Mode::All).unwrap();
        assert_eq!(all, vec![RnaRecord::new("tx_1", "MM"), RnaRecord::new("tx_2", "M")]);

        let translated = process_record(&RnaRecord::new("tx", "CCCAUG"), &code, Mode::Translate).unwrap();
        assert_eq!(translated, vec![RnaRecord::new("tx", "PM")]);
    }

    #[test]
    fn test_process_record_lookup_failure() {
        let code = GeneticCode::from_pairs("partial", [("AUG", 'M')]);
        let record = RnaRecord::new("tx", "AUGCCC");

        let err = process_record(&record, &code, Mode::Longest).unwrap_err();
        assert!(err.to_string().contains("tx"));
    }

    #[test]
    fn test_write_fasta_wraps() {
        let records = vec![RnaRecord::new("p1", "MYWHATAP"), RnaRecord::new("p2", "")];
        let mut out = Vec::new();
        write_fasta(&mut out, &records, 3).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), ">p1\nMYW\nHAT\nAP\n>p2\n\n");
    }

    #[test]
    fn test_write_fasta_unwrapped() {
        let records = vec![RnaRecord::new("p1", "MYWHATAP")];
        let mut out = Vec::new();
        write_fasta(&mut out, &records, 0).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), ">p1\nMYWHATAP\n");
    }

    #[test]
    fn test_list_codes() {
        let args = Args::try_parse_from(["longpep", "--list-codes"]).unwrap();
        assert!(args.list_codes);

        let mut out = Vec::new();
        write_code_list(&mut out, &GeneticCodes::new()).unwrap();
        let listing = String::from_utf8(out).unwrap();

        assert!(listing.starts_with(" 1  Standard\n"));
        assert!(listing.contains(" 2  Vertebrate Mitochondrial\n"));
        assert_eq!(listing.lines().count(), GeneticCodes::new().all().len());
    }

    #[test]
    fn test_demo_message() {
        let code = GeneticCode::standard();
        let peptide = get_longest_peptide(DEMO_SEQUENCE, &code).unwrap();

        assert_eq!(peptide, DEMO_EXPECTED);
        assert!(demo_message(DEMO_SEQUENCE, &peptide).ends_with("\t'MYWHATAPYTHQNISTA'\n"));
    }
}
