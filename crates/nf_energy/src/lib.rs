//! The nf_energy crate.
//!
//! Provides the pairwise nucleotide energy lookup used by folding:
//!  - EnergyTable (ordered nucleotide pair -> energy, with a default)
//!  - EnergyParams (JSON parameter files)
//!

mod error;
mod table;
mod params;

pub use error::*;
pub use table::*;
pub use params::*;
