//! The nucfold crate.
//!
//! Maximum pairing energy secondary structures of one DNA chain, or of
//! two chains folded together. This crate re-exports the workspace:
//!  - nf_sequence (nucleotides, sequences, codons)
//!  - nf_energy (pair energy tables)
//!  - nf_structure (base pairs, structures, dot-bracket notation)
//!  - nf_folding (energy matrix, tracebacks, Folder)
//!
//! ```
//! use nucfold::{EnergyTable, FoldConfig, Folder, Sequence};
//!
//! let table = EnergyTable::standard();
//! let seq: Sequence = "GGGAAATCCC".parse().unwrap();
//! let folder = Folder::single(seq, &table, FoldConfig::default()).unwrap();
//! assert_eq!(folder.energy(), 11);
//! ```

pub use nf_energy;
pub use nf_folding;
pub use nf_sequence;
pub use nf_structure;

pub use nf_energy::Energy;
pub use nf_energy::EnergyError;
pub use nf_energy::EnergyTable;
pub use nf_folding::FoldConfig;
pub use nf_folding::FoldError;
pub use nf_folding::Folder;
pub use nf_folding::Indexer;
pub use nf_sequence::AminoAcid;
pub use nf_sequence::Codon;
pub use nf_sequence::Nucleotide;
pub use nf_sequence::Sequence;
pub use nf_sequence::SequenceError;
pub use nf_structure::ConnectPair;
pub use nf_structure::DotBracketVec;
pub use nf_structure::SecondaryStructure;
pub use nf_structure::StructureError;
