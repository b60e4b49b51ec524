use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::*;
use log::warn;
use paste::paste;
use md_sequence::DnaSequence;

/// A sequence with the FASTA header that preceded it, if any.
pub type NamedSequence = (Option<String>, DnaSequence);

// ============================================================
//  Generic FASTA-like parser supporting lenient/strict modes
// ============================================================

#[derive(Clone, Copy)]
enum FastaMode {
    /// Skip unreadable sequences with a warning.
    Lenient,
    /// Fail on the first unreadable sequence.
    Strict,
}

/// Core parsing logic shared by all adapters. Every non-empty, non-header
/// line contributes its first whitespace-separated token as one sequence.
fn parse_fasta_like<R: BufRead>(
    reader: R,
    mode: FastaMode,
) -> Result<Vec<NamedSequence>> {
    let mut header: Option<String> = None;
    let mut sequences = Vec::new();

    for (lnum, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            header = Some(line.to_string());
            continue;
        }

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        match (DnaSequence::try_from(token), mode) {
            (Ok(seq), _) => sequences.push((header.take(), seq)),
            (Err(e), FastaMode::Lenient) => {
                warn!("{} line {}: {} -> skipped", "WARNING:".red(), lnum + 1, e);
                header = None;
            }
            (Err(e), FastaMode::Strict) => {
                return Err(anyhow!("line {}: {}", lnum + 1, e));
            }
        }
    }

    if sequences.is_empty() {
        return Err(anyhow!("No sequences found in input"));
    }
    Ok(sequences)
}

// ============================================================
//  Base parser functions (lenient and strict variants)
// ============================================================

pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<NamedSequence>> {
    parse_fasta_like(reader, FastaMode::Lenient)
}

pub fn read_sequences_strict<R: BufRead>(reader: R) -> Result<Vec<NamedSequence>> {
    parse_fasta_like(reader, FastaMode::Strict)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type SequencesResult = Result<Vec<NamedSequence>>;

define_input_variants!(read_sequences, SequencesResult);
define_input_variants!(read_sequences_strict, SequencesResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let seqs = read_sequences_string("ACGT\n\ngcgc  # comment\n").unwrap();
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0], (None, DnaSequence::try_from("ACGT").unwrap()));
        assert_eq!(seqs[1].1.to_string(), "GCGC");
    }

    #[test]
    fn test_headers_attach_to_next_sequence() {
        let seqs = read_sequences_string(">one\nAAAA\nTTTT\n>two\nCCGG\n").unwrap();
        let headers: Vec<_> = seqs.iter().map(|(h, _)| h.clone()).collect();
        assert_eq!(headers, vec![Some(">one".to_string()), None, Some(">two".to_string())]);
    }

    #[test]
    fn test_lenient_skips_strict_fails() {
        let input = ">bad\nACNT\n>good\nACGT\n";
        let seqs = read_sequences_string(input).unwrap();
        assert_eq!(seqs, vec![(Some(">good".to_string()), DnaSequence::try_from("ACGT").unwrap())]);

        let err = read_sequences_strict_string(input).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_empty_input() {
        assert!(read_sequences_string(">only a header\n").is_err());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.txt");
        std::fs::write(&path, "GATTACA\n").unwrap();
        let seqs = read_sequences_file(&path).unwrap();
        assert_eq!(seqs[0].1.to_string(), "GATTACA");
        assert!(read_sequences_file(dir.path().join("missing.txt")).is_err());
    }
}
