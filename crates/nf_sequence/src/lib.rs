//! The nf_sequence crate.
//!
//! Provides the DNA alphabet and single-stranded chains:
//!  - Nucleotide (A, C, G, T and the N wildcard)
//!  - Sequence (5' end at index 0)
//!  - Codon (nucleotide triplets) and the standard genetic code
//!

mod error;
mod nucleotide;
mod sequence;
mod codon;
mod genetic_code;

pub use error::*;
pub use nucleotide::*;
pub use sequence::*;
pub use codon::*;
pub use genetic_code::*;
