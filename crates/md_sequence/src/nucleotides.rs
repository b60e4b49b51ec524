use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use crate::SequenceError;

/// The DNA alphabet. The discriminant of each variant is its ordinal, which
/// fixes the enumeration order of n-mers (A < T < C < G).
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Base { A = 0, T = 1, C = 2, G = 3 }
pub const BCOUNT: usize = 4; // 4 Base variants for tables.

/// All bases in ordinal order.
pub const ALPHABET: [Base; BCOUNT] = [Base::A, Base::T, Base::C, Base::G];

impl Base {
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(o: usize) -> Result<Self, SequenceError> {
        ALPHABET.get(o).copied().ok_or(SequenceError::InvalidOrdinal(o))
    }

    /// Watson-Crick partner.
    pub fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Base::C | Base::G)
    }
}

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' | 'U' => Ok(Base::T),
            _ => Err(SequenceError::InvalidChar(c, 0)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::T => 'T',
            Base::C => 'C',
            Base::G => 'G',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// A DNA strand, written in the direction it was enumerated or parsed.
#[derive(Clone, Hash, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct DnaSequence(pub Vec<Base>);

impl Deref for DnaSequence {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for DnaSequence {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

impl From<Vec<Base>> for DnaSequence {
    fn from(v: Vec<Base>) -> Self {
        DnaSequence(v)
    }
}

impl TryFrom<&str> for DnaSequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            let base = Base::try_from(c)
                .map_err(|_| SequenceError::InvalidChar(c, i))?;
            vec.push(base);
        }
        Ok(DnaSequence(vec))
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl DnaSequence {
    pub fn reverse_complement(&self) -> Self {
        DnaSequence(self.0.iter().rev().map(|b| b.complement()).collect())
    }

    /// True if the strand pairs with a copy of itself.
    pub fn is_self_complementary(&self) -> bool {
        is_self_complementary(&self.0)
    }

    pub fn gc_count(&self) -> usize {
        self.0.iter().filter(|b| b.is_gc()).count()
    }
}

pub fn is_self_complementary(seq: &[Base]) -> bool {
    let n = seq.len();
    (0..n / 2).all(|i| seq[i] == seq[n - 1 - i].complement())
        && n % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use Base::*;

    #[test]
    fn test_base_ordinals() {
        assert_eq!(ALPHABET.map(|b| b.ordinal()), [0, 1, 2, 3]);
        for o in 0..BCOUNT {
            assert_eq!(Base::from_ordinal(o).unwrap().ordinal(), o);
        }
        assert_eq!(Base::from_ordinal(4), Err(SequenceError::InvalidOrdinal(4)));
    }

    #[test]
    fn test_base_parsing() {
        assert_eq!(Base::try_from('a').unwrap(), A);
        assert_eq!(Base::try_from('U').unwrap(), T);
        assert!(Base::try_from('N').is_err());
        assert_eq!(format!("{}", G), "G");
    }

    #[test]
    fn test_sequence_parsing() {
        let seq = DnaSequence::try_from("acgT").unwrap();
        assert_eq!(seq.0, vec![A, C, G, T]);
        assert_eq!(seq.to_string(), "ACGT");

        let err = DnaSequence::try_from("ACXT").unwrap_err();
        assert_eq!(err, SequenceError::InvalidChar('X', 2));
        assert_eq!(err.to_string(), "Unsupported nucleotide 'X' at position 2");
    }

    #[test]
    fn test_reverse_complement() {
        let seq = DnaSequence::try_from("AACG").unwrap();
        assert_eq!(seq.reverse_complement().to_string(), "CGTT");
        assert_eq!(seq.gc_count(), 2);
    }

    #[test]
    fn test_self_complementary() {
        assert!(DnaSequence::try_from("ACGT").unwrap().is_self_complementary());
        assert!(DnaSequence::try_from("GAATTC").unwrap().is_self_complementary());
        assert!(!DnaSequence::try_from("AACG").unwrap().is_self_complementary());
        assert!(!DnaSequence::try_from("ATA").unwrap().is_self_complementary());
        assert!(DnaSequence::default().is_self_complementary());
    }
}
