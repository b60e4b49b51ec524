//! # md_database
//!
//! Enumerates every DNA n-mer in a range of lengths, melts each one over a
//! grid of duplex and salt concentrations, and writes one CSV table per
//! length.

pub mod config;

mod error;
mod concentrations;
mod table;
mod builder;

pub use error::*;
pub use concentrations::*;
pub use table::*;
pub use builder::*;
