/// The melting model trait, its result and error types.
mod melting_model;

/// Unified nearest neighbor parameters (SantaLucia & Hicks, 2004).
mod santalucia;

/// The 2(A+T) + 4(G+C) rule of thumb.
mod wallace;

pub use melting_model::*;
pub use santalucia::*;
pub use wallace::*;

