use std::fs;
use std::path::Path;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::DatabaseError;
use crate::DatabaseBuilder;
use crate::ConcentrationInput;
use crate::DEFAULT_OUTPUT;

/// Everything a database run needs, as stored in a JSON file. Missing
/// fields fall back to the defaults (6- to 9-mers, 1 µM duplex, 0.5 M salt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub start: usize,
    pub end: usize,
    pub duplex_umol: ConcentrationInput,
    pub salt_mol: ConcentrationInput,
    pub output: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            start: 6,
            end: 9,
            duplex_umol: ConcentrationInput::Scalar(1.0),
            salt_mol: ConcentrationInput::Scalar(0.5),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl DatabaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DatabaseError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn to_builder(&self) -> Result<DatabaseBuilder, DatabaseError> {
        Ok(DatabaseBuilder::new(
                self.start,
                self.end,
                self.duplex_umol.clone(),
                self.salt_mol.clone())?
            .output_dir(&self.output))
    }
}
