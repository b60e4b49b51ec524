mod error;
mod nucleotides;
mod enumerate;

pub use error::*;
pub use nucleotides::*;
pub use enumerate::*;

