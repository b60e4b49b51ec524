use std::ops::Deref;
use serde::{Serialize, Deserialize};

use crate::DatabaseError;

/// A concentration parameter as a caller may hand it over: one value or
/// several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConcentrationInput {
    Scalar(f64),
    List(Vec<f64>),
}

impl From<f64> for ConcentrationInput {
    fn from(c: f64) -> Self { Self::Scalar(c) }
}

impl From<Vec<f64>> for ConcentrationInput {
    fn from(c: Vec<f64>) -> Self { Self::List(c) }
}

impl From<&[f64]> for ConcentrationInput {
    fn from(c: &[f64]) -> Self { Self::List(c.to_vec()) }
}

impl<const N: usize> From<[f64; N]> for ConcentrationInput {
    fn from(c: [f64; N]) -> Self { Self::List(c.to_vec()) }
}

impl From<Concentrations> for ConcentrationInput {
    fn from(c: Concentrations) -> Self { Self::List(c.0) }
}

/// A non-empty, ordered list of positive concentrations.
#[derive(Debug, Clone, PartialEq)]
pub struct Concentrations(Vec<f64>);

impl Deref for Concentrations {
    type Target = [f64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Concentrations {
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Turn either form of a concentration parameter into a [`Concentrations`]
/// list, keeping the given order. `name` only labels errors.
pub fn normalize_concentrations(
    name: &'static str,
    input: impl Into<ConcentrationInput>,
) -> Result<Concentrations, DatabaseError> {
    let values = match input.into() {
        ConcentrationInput::Scalar(c) => vec![c],
        ConcentrationInput::List(cs) => cs,
    };
    if values.is_empty() {
        return Err(DatabaseError::EmptyConcentrations(name));
    }
    if let Some(&value) = values.iter().find(|c| !(c.is_finite() && **c > 0.0)) {
        return Err(DatabaseError::InvalidConcentration { name, value });
    }
    Ok(Concentrations(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_equals_singleton() {
        let scalar = normalize_concentrations("duplex", 1.0).unwrap();
        let single = normalize_concentrations("duplex", vec![1.0]).unwrap();
        assert_eq!(scalar, single);
        assert_eq!(&scalar[..], &[1.0]);
    }

    #[test]
    fn test_order_is_kept() {
        let cs = normalize_concentrations("salt", [0.5, 0.05, 1.0]).unwrap();
        assert_eq!(cs.into_inner(), vec![0.5, 0.05, 1.0]);
    }

    #[test]
    fn test_rejects_empty_and_invalid() {
        assert!(matches!(
            normalize_concentrations("salt", Vec::<f64>::new()),
            Err(DatabaseError::EmptyConcentrations("salt"))
        ));
        assert!(matches!(
            normalize_concentrations("duplex", [1.0, 0.0]),
            Err(DatabaseError::InvalidConcentration { name: "duplex", value }) if value == 0.0
        ));
        assert!(normalize_concentrations("duplex", f64::NAN).is_err());
        assert!(normalize_concentrations("duplex", -2.0).is_err());
    }

    #[test]
    fn test_untagged_json() {
        let scalar: ConcentrationInput = serde_json::from_str("0.5").unwrap();
        let list: ConcentrationInput = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(scalar, ConcentrationInput::Scalar(0.5));
        assert_eq!(list, ConcentrationInput::List(vec![1.0, 2.0]));
    }
}
