//! aq-core: stable foundation for aquacarb.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - species (carbonate species tags + validated value types)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod species;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AqError, AqResult};
pub use numeric::*;
pub use species::*;
