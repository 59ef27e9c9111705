//! Pairwise nucleotide energies.
//!
//! An `EnergyTable` is a plain key -> value store over *ordered*
//! nucleotide pairs with a default for everything not listed. It does
//! not enforce symmetry: whoever builds a biologically symmetric table
//! inserts both orderings (see `put_symmetric` and `standard`).

use ahash::AHashMap;
use nf_sequence::Nucleotide;

/// Pairing energy. Larger is better for folding.
pub type Energy = i32;

/// Energy of every pair the standard table does not list.
pub const DEFAULT_PAIR_ENERGY: Energy = -1000;

#[derive(Debug, Clone)]
pub struct EnergyTable {
    pairs: AHashMap<(Nucleotide, Nucleotide), Energy>,
    default: Energy,
}

impl EnergyTable {
    /// An empty table; every lookup returns `default`.
    pub fn new(default: Energy) -> Self {
        Self {
            pairs: AHashMap::default(),
            default,
        }
    }

    /// G-C = 3, A-T = 2, G-T = 1 (both orderings), otherwise -1000.
    pub fn standard() -> Self {
        Self::standard_with_default(DEFAULT_PAIR_ENERGY)
    }

    /// The standard pairs with a custom fallback energy.
    pub fn standard_with_default(default: Energy) -> Self {
        use Nucleotide::*;
        let mut table = Self::new(default);
        table.put_symmetric(Guanine, Cytosine, 3);
        table.put_symmetric(Adenine, Thymine, 2);
        table.put_symmetric(Guanine, Thymine, 1);
        table
    }

    /// Energy of the ordered pair (a, b), or the default.
    pub fn get(&self, a: Nucleotide, b: Nucleotide) -> Energy {
        self.pairs.get(&(a, b)).copied().unwrap_or(self.default)
    }

    /// Store (or overwrite) the energy of the ordered pair (a, b).
    /// Returns the previous entry, if any.
    pub fn put(&mut self, a: Nucleotide, b: Nucleotide, energy: Energy) -> Option<Energy> {
        self.pairs.insert((a, b), energy)
    }

    /// Store the energy for (a, b) and (b, a).
    pub fn put_symmetric(&mut self, a: Nucleotide, b: Nucleotide, energy: Energy) {
        self.put(a, b, energy);
        self.put(b, a, energy);
    }

    pub fn default_energy(&self) -> Energy {
        self.default
    }

    /// Number of explicitly listed ordered pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All listed pairs, sorted by pair.
    pub fn entries(&self) -> Vec<((Nucleotide, Nucleotide), Energy)> {
        let mut v: Vec<_> = self.pairs.iter().map(|(&k, &e)| (k, e)).collect();
        v.sort_unstable_by_key(|&(k, _)| k);
        v
    }
}

impl Default for EnergyTable {
    fn default() -> Self {
        Self::standard()
    }
}
