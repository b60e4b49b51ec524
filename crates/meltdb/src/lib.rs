//! # meltdb
//!
//! Unified API for building DNA melting temperature databases.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod input_parsers;
pub mod model_parsers;
pub mod database_parsers;

use std::io::Write;
use env_logger::Builder;

pub mod sequence {
    pub use ::md_sequence::*;
}

pub mod thermo {
    pub use ::md_thermo::*;
}

pub mod database {
    pub use ::md_database::*;
}

/// Message-only logging; -v = info, -vv = debug. RUST_LOG still wins.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(buf, "{}", record.args())
        })
        .init();
}
