//! The nf_structure crate.
//!
//! Secondary structure representations:
//!  - ConnectPair (one base pair)
//!  - SecondaryStructure (a set of base pairs)
//!  - DotBracket notation
//!

mod error;
mod pair;
mod secondary;
mod dotbracket;

pub use error::*;
pub use pair::*;
pub use secondary::*;
pub use dotbracket::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for the
/// quadratic-space folding matrices built on top of it. Beware that `P1KEY`
/// needs to be *twice as large* (in bits) as `NAIDX`, since pairs
/// `(NAIDX, NAIDX)` are compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};
