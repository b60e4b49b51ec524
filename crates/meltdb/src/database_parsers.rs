use std::path::PathBuf;

use clap::Args;
use anyhow::Result;
use anyhow::bail;
use log::warn;
use md_database::config::DatabaseConfig;
use md_database::ConcentrationInput;

/// Beyond this length a single table no longer fits comfortably in memory.
const LARGE_N: usize = 12;

#[derive(Debug, Args)]
pub struct DatabaseArguments {
    /// JSON run configuration; the flags below override its fields.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shortest sequence length [default: 6]
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Longest sequence length, inclusive [default: 9]
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Duplex concentrations in µM [default: 1]
    #[arg(short, long, value_name = "UMOL", num_args = 1..)]
    pub duplex_umol: Vec<f64>,

    /// Salt concentrations in M [default: 0.5]
    #[arg(short = 'S', long, value_name = "MOL", num_args = 1..)]
    pub salt_mol: Vec<f64>,

    /// Output directory [default: melting_database]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl DatabaseArguments {
    /// The configuration file (or the defaults), overridden by flags.
    pub fn to_config(&self) -> Result<DatabaseConfig> {
        let mut config = match &self.config {
            Some(path) => DatabaseConfig::from_file(path)?,
            None => DatabaseConfig::default(),
        };
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(end) = self.end {
            config.end = end;
        }
        if !self.duplex_umol.is_empty() {
            config.duplex_umol = ConcentrationInput::List(self.duplex_umol.clone());
        }
        if !self.salt_mol.is_empty() {
            config.salt_mol = ConcentrationInput::List(self.salt_mol.clone());
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        validate(&config)?;
        Ok(config)
    }
}

/// Validate that the length range makes sense.
pub fn validate(config: &DatabaseConfig) -> Result<()> {
    if config.start == 0 {
        bail!("start must be at least 1 (got start={})", config.start);
    }
    if config.end < config.start {
        warn!("end ({}) is smaller than start ({}): nothing to do.", config.end, config.start);
    }
    if config.end > LARGE_N {
        warn!("{}-mer tables hold 4^{} sequences per concentration pair.", config.end, config.end);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        db: DatabaseArguments,
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.db.to_config().unwrap(), DatabaseConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "test", "--start", "2", "--end", "5", "--duplex-umol", "1", "2", "-S", "0.5",
            "-o", "out",
        ]);
        let config = cli.db.to_config().unwrap();
        assert_eq!(config.start, 2);
        assert_eq!(config.end, 5);
        assert_eq!(config.duplex_umol, ConcentrationInput::List(vec![1.0, 2.0]));
        assert_eq!(config.salt_mol, ConcentrationInput::List(vec![0.5]));
        assert_eq!(config.output, PathBuf::from("out"));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{"start": 3, "end": 4, "salt_mol": [0.1, 1.0]}"#).unwrap();

        let cli = Cli::parse_from(["test", "-c", path.to_str().unwrap(), "-e", "6"]);
        let config = cli.db.to_config().unwrap();
        assert_eq!(config.start, 3);
        assert_eq!(config.end, 6);
        assert_eq!(config.salt_mol, ConcentrationInput::List(vec![0.1, 1.0]));
        assert_eq!(config.duplex_umol, ConcentrationInput::Scalar(1.0));
    }

    #[test]
    fn test_validate() {
        let cli = Cli::parse_from(["test", "--start", "0"]);
        assert!(cli.db.to_config().is_err());

        // An inverted range is an empty run, not an error.
        let cli = Cli::parse_from(["test", "--start", "5", "--end", "4"]);
        assert!(cli.db.to_config().is_ok());
    }
}
