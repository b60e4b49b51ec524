use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidChar(char, usize),   // unsupported character and position
    InvalidOrdinal(usize),      // digit outside of the 4-letter alphabet
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c, i) => {
                write!(f, "Unsupported nucleotide '{}' at position {}", c, i)
            }
            SequenceError::InvalidOrdinal(o) => {
                write!(f, "No DNA base with ordinal {}", o)
            }
        }
    }
}

impl std::error::Error for SequenceError {}

