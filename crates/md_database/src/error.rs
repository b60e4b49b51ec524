use std::fmt;
use std::error::Error;

use md_thermo::ModelError;

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    EmptyConcentrations(&'static str),
    InvalidConcentration { name: &'static str, value: f64 },
    Model { n: usize, sequence: String, source: ModelError },
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Json(e) => write!(f, "JSON parse error: {}", e),
            Self::EmptyConcentrations(name) =>
                write!(f, "At least one {name} concentration is required"),
            Self::InvalidConcentration { name, value } =>
                write!(f, "Invalid {name} concentration: {value} (must be positive and finite)"),
            Self::Model { n, sequence, source } =>
                write!(f, "Failed to build the {n}-mer table at '{sequence}': {source}"),
        }
    }
}

impl Error for DatabaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Model { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

impl From<csv::Error> for DatabaseError {
    fn from(e: csv::Error) -> Self { Self::Csv(e) }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e) }
}
