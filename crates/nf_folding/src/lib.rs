//! The nf_folding crate.
//!
//! Nussinov-style base-pair energy maximization over one DNA chain, or
//! two chains folded together:
//!  - Indexer (one linear index space over one or two chains)
//!  - EnergyMatrix (the dynamic programming table)
//!  - depth-first traceback of a single optimal structure
//!  - bounded breadth-first enumeration of tied optimal structures
//!  - Folder (lazy front end tying it all together)
//!

mod error;
mod config;
mod indexer;
mod matrix;
mod traceback;
mod enumeration;
mod folder;

pub use error::*;
pub use config::*;
pub use indexer::*;
pub use matrix::*;
pub use enumeration::enumerate_structures;
pub use traceback::find_in_depth;
pub use folder::*;
