use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::path::PathBuf;

use log::{debug, info, warn};
use rayon::prelude::*;

use md_sequence::nmers;
use md_sequence::nmer_count;
use md_thermo::MeltingModel;

use crate::Record;
use crate::Table;
use crate::Concentrations;
use crate::ConcentrationInput;
use crate::DatabaseError;
use crate::normalize_concentrations;

pub const DEFAULT_OUTPUT: &str = "melting_database";

/// µM -> M
pub const MICROMOLAR: f64 = 1e-6;

/// Builds and writes one melting temperature table per sequence length.
#[derive(Debug, Clone)]
pub struct DatabaseBuilder {
    start: usize,
    end: usize,
    duplex_umol: Concentrations,
    salt_mol: Concentrations,
    output: PathBuf,
}

impl DatabaseBuilder {
    /// Lengths run from `start` to `end` inclusive. Duplex concentrations are
    /// given in µM, salt concentrations in M.
    pub fn new(
        start: usize,
        end: usize,
        duplex_umol: impl Into<ConcentrationInput>,
        salt_mol: impl Into<ConcentrationInput>,
    ) -> Result<Self, DatabaseError> {
        Ok(Self {
            start,
            end,
            duplex_umol: normalize_concentrations("duplex", duplex_umol)?,
            salt_mol: normalize_concentrations("salt", salt_mol)?,
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn duplex_umol(&self) -> &Concentrations {
        &self.duplex_umol
    }

    pub fn salt_mol(&self) -> &Concentrations {
        &self.salt_mol
    }

    /// Empty if `end < start`.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Number of base columns shared by every table of this run.
    pub fn max_width(&self) -> usize {
        self.end
    }

    pub fn expected_rows(&self, n: usize) -> u64 {
        nmer_count(n)
            .saturating_mul(self.duplex_umol.len() as u64)
            .saturating_mul(self.salt_mol.len() as u64)
    }

    pub fn table_path(&self, n: usize) -> PathBuf {
        self.output.join(format!("{n}meres.csv"))
    }

    /// Succeeds if the directory already exists.
    pub fn create_output_dir(&self) -> Result<(), DatabaseError> {
        fs::create_dir_all(&self.output)?;
        Ok(())
    }

    pub fn build_table<M: MeltingModel + ?Sized>(
        &self,
        n: usize,
        model: &M,
    ) -> Result<Table, DatabaseError> {
        self.build_table_with(n, model, || {})
    }

    /// Melt every n-mer at every (duplex, salt) pair. Rows are ordered by
    /// sequence, then duplex concentration, then salt concentration.
    /// `progress` is called once per finished sequence.
    pub fn build_table_with<M, F>(
        &self,
        n: usize,
        model: &M,
        mut progress: F,
    ) -> Result<Table, DatabaseError>
    where
        M: MeltingModel + ?Sized,
        F: FnMut(),
    {
        let width = self.max_width();
        let capacity = usize::try_from(self.expected_rows(n)).unwrap_or(0);
        debug!("Building {n}-mer table: {} rows with {width} base columns using {}.",
            self.expected_rows(n), model.name());

        let mut table = Table::with_capacity(n, width, capacity);
        for sequence in nmers(n) {
            for &c in self.duplex_umol.iter() {
                for &s in self.salt_mol.iter() {
                    let tm = model
                        .melting_temperature(&sequence, s, c * MICROMOLAR)
                        .map_err(|source| DatabaseError::Model {
                            n,
                            sequence: sequence.to_string(),
                            source,
                        })?;
                    table.push(Record::new(sequence.clone(), s, c, tm, width));
                }
            }
            progress();
        }
        Ok(table)
    }

    /// Build the table for length `n` and write it to [`Self::table_path`].
    /// The output directory must exist.
    pub fn write_table<M: MeltingModel + ?Sized>(
        &self,
        n: usize,
        model: &M,
    ) -> Result<PathBuf, DatabaseError> {
        let table = self.build_table(n, model)?;
        self.persist(&table)
    }

    pub fn persist(&self, table: &Table) -> Result<PathBuf, DatabaseError> {
        let path = self.table_path(table.n_bases());
        table.to_file(&path)?;
        info!("Wrote {} records to {}", table.len(), path.display());
        Ok(path)
    }

    /// Write all tables one length after the other and return their paths.
    /// An empty length range writes nothing.
    pub fn write_database<M: MeltingModel + ?Sized>(
        &self,
        model: &M,
    ) -> Result<Vec<PathBuf>, DatabaseError> {
        if self.lengths().is_empty() {
            warn!("Empty length range {}..={}, no tables written.", self.start, self.end);
            return Ok(Vec::new());
        }
        self.create_output_dir()?;
        self.lengths()
            .map(|n| self.write_table(n, model))
            .collect()
    }

    /// Like [`Self::write_database`], with lengths processed concurrently.
    /// Row order within each table is unchanged.
    pub fn write_database_parallel<M: MeltingModel + Sync + ?Sized>(
        &self,
        model: &M,
    ) -> Result<Vec<PathBuf>, DatabaseError> {
        if self.lengths().is_empty() {
            warn!("Empty length range {}..={}, no tables written.", self.start, self.end);
            return Ok(Vec::new());
        }
        self.create_output_dir()?;
        self.lengths()
            .into_par_iter()
            .map(|n| self.write_table(n, model))
            .collect()
    }
}
