use std::fmt;
use std::error::Error;

use md_sequence::Base;

pub const K0: f64 = 273.15;

/// Gas constant in cal/(K mol).
pub const R: f64 = 1.9872;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    EmptySequence,
    InvalidConcentration { name: &'static str, value: f64 },
    NonFinite(f64),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence =>
                write!(f, "Cannot melt an empty sequence"),
            Self::InvalidConcentration { name, value } =>
                write!(f, "Invalid {name} concentration: {value} (must be positive and finite)"),
            Self::NonFinite(tm) =>
                write!(f, "Melting temperature is not a finite number: {tm}"),
        }
    }
}

impl Error for ModelError {}

/// The outcome of a melting calculation. Only `tm` ends up in a database;
/// the enthalpy and entropy are informational.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Melting {
    /// Melting temperature in Celsius.
    pub tm: f64,
    /// Duplex formation enthalpy in kcal/mol.
    pub delta_h: f64,
    /// Duplex formation entropy in cal/(K mol).
    pub delta_s: f64,
}

pub trait MeltingModel {
    fn name(&self) -> &str;

    /// Melt the duplex formed by `sequence` and its complement.
    ///
    /// Both concentrations are molar: `salt_mol` is the monovalent cation
    /// concentration, `duplex_mol` the total strand concentration.
    fn melting(&self,
        sequence: &[Base],
        salt_mol: f64,
        duplex_mol: f64
    ) -> Result<Melting, ModelError>;

    fn melting_temperature(&self,
        sequence: &[Base],
        salt_mol: f64,
        duplex_mol: f64
    ) -> Result<f64, ModelError> {
        Ok(self.melting(sequence, salt_mol, duplex_mol)?.tm)
    }
}

impl<M: MeltingModel + ?Sized> MeltingModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn melting(&self, sequence: &[Base], salt_mol: f64, duplex_mol: f64
    ) -> Result<Melting, ModelError> {
        (**self).melting(sequence, salt_mol, duplex_mol)
    }
}

impl<M: MeltingModel + ?Sized> MeltingModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn melting(&self, sequence: &[Base], salt_mol: f64, duplex_mol: f64
    ) -> Result<Melting, ModelError> {
        (**self).melting(sequence, salt_mol, duplex_mol)
    }
}

/// Shared input checks for model implementations.
pub fn check_inputs(sequence: &[Base], salt_mol: f64, duplex_mol: f64) -> Result<(), ModelError> {
    if sequence.is_empty() {
        return Err(ModelError::EmptySequence);
    }
    if !(salt_mol.is_finite() && salt_mol > 0.0) {
        return Err(ModelError::InvalidConcentration { name: "salt", value: salt_mol });
    }
    if !(duplex_mol.is_finite() && duplex_mol > 0.0) {
        return Err(ModelError::InvalidConcentration { name: "duplex", value: duplex_mol });
    }
    Ok(())
}

/// Reject results that would poison a database.
pub fn check_finite(melting: Melting) -> Result<Melting, ModelError> {
    if melting.tm.is_finite() {
        Ok(melting)
    } else {
        Err(ModelError::NonFinite(melting.tm))
    }
}
