use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use md_sequence::Base;
use md_sequence::DnaSequence;

use crate::DatabaseError;

/// Fixed leading columns of every table.
pub const RECORD_COLUMNS: [&str; 4] = ["sequence", "salt_conc", "duplex_conc", "melting_temp"];

/// Column names of a table whose base columns span `width` positions.
pub fn columns(width: usize) -> Vec<String> {
    RECORD_COLUMNS.iter()
        .map(|c| c.to_string())
        .chain((0..width).map(|i| format!("base_{i}")))
        .collect()
}

/// One per-position column: the base itself or padding past the end of a
/// sequence shorter than the table width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseColumn {
    Base(Base),
    Pad,
}

impl fmt::Display for BaseColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseColumn::Base(b) => write!(f, "{}", b),
            BaseColumn::Pad => write!(f, "0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub sequence: DnaSequence,
    /// Salt concentration in M.
    pub salt_mol: f64,
    /// Duplex concentration in µM.
    pub duplex_umol: f64,
    /// Melting temperature in Celsius.
    pub melting_temp: f64,
    pub bases: Vec<BaseColumn>,
}

impl Record {
    pub fn new(
        sequence: DnaSequence,
        salt_mol: f64,
        duplex_umol: f64,
        melting_temp: f64,
        width: usize,
    ) -> Self {
        debug_assert!(sequence.len() <= width);
        let mut bases: Vec<BaseColumn> = sequence.iter()
            .map(|&b| BaseColumn::Base(b))
            .collect();
        bases.resize(width.max(sequence.len()), BaseColumn::Pad);
        Self { sequence, salt_mol, duplex_umol, melting_temp, bases }
    }

    /// The record as one CSV row, in [`columns`] order.
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(RECORD_COLUMNS.len() + self.bases.len());
        fields.push(self.sequence.to_string());
        fields.push(self.salt_mol.to_string());
        fields.push(self.duplex_umol.to_string());
        fields.push(self.melting_temp.to_string());
        fields.extend(self.bases.iter().map(|b| b.to_string()));
        fields
    }
}

/// All records for one sequence length.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    n_bases: usize,
    width: usize,
    records: Vec<Record>,
}

impl Table {
    pub fn new(n_bases: usize, width: usize) -> Self {
        Self::with_capacity(n_bases, width, 0)
    }

    pub fn with_capacity(n_bases: usize, width: usize, capacity: usize) -> Self {
        Self { n_bases, width, records: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, record: Record) {
        debug_assert_eq!(record.sequence.len(), self.n_bases);
        self.records.push(record);
    }

    pub fn n_bases(&self) -> usize { self.n_bases }
    pub fn width(&self) -> usize { self.width }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[Record] { &self.records }

    pub fn columns(&self) -> Vec<String> {
        columns(self.width)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DatabaseError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.columns())?;
        for record in &self.records {
            wtr.write_record(record.to_fields())?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DatabaseError> {
        self.write_csv(File::create(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: &str, width: usize) -> Record {
        let seq = DnaSequence::try_from(seq).unwrap();
        Record::new(seq, 0.5, 1.0, 42.0, width)
    }

    #[test]
    fn test_columns() {
        assert_eq!(columns(2), vec![
            "sequence", "salt_conc", "duplex_conc", "melting_temp", "base_0", "base_1"
        ]);
        assert_eq!(columns(0).len(), 4);
    }

    #[test]
    fn test_record_padding() {
        let r = record("AC", 4);
        assert_eq!(r.bases, vec![
            BaseColumn::Base(Base::A),
            BaseColumn::Base(Base::C),
            BaseColumn::Pad,
            BaseColumn::Pad,
        ]);
        assert_eq!(r.to_fields(), vec!["AC", "0.5", "1", "42", "A", "C", "0", "0"]);
    }

    #[test]
    fn test_record_full_width() {
        let r = record("GTA", 3);
        assert!(r.bases.iter().all(|b| matches!(b, BaseColumn::Base(_))));
        assert_eq!(r.to_fields().len(), columns(3).len());
    }

    #[test]
    fn test_write_csv() {
        let mut table = Table::new(2, 3);
        table.push(record("AA", 3));
        table.push(record("AT", 3));

        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "\
sequence,salt_conc,duplex_conc,melting_temp,base_0,base_1,base_2
AA,0.5,1,42,A,A,0
AT,0.5,1,42,A,T,0
");
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = Table::new(1, 1);
        assert!(table.is_empty());
        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(),
            "sequence,salt_conc,duplex_conc,melting_temp,base_0\n");
    }
}
