//! One linear index space over one or two chains.
//!
//! The folding matrix and both tracebacks are written once against
//! `Indexer`: a single chain maps [0, N) onto itself, a paired fold maps
//! the first M indices onto chain A and the remaining ones onto chain B.

use nf_energy::Energy;
use nf_energy::EnergyTable;
use nf_sequence::Nucleotide;
use nf_sequence::Sequence;
use nf_structure::SecondaryStructure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indexer {
    Single(Sequence),
    Paired(Sequence, Sequence),
}

impl Indexer {
    /// Total number of positions.
    pub fn len(&self) -> usize {
        match self {
            Indexer::Single(s) => s.len(),
            Indexer::Paired(a, b) => a.len() + b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first index belonging to the second chain (`len()` for a single chain).
    pub fn split_index(&self) -> usize {
        match self {
            Indexer::Single(s) => s.len(),
            Indexer::Paired(a, _) => a.len(),
        }
    }

    /// Nucleotide at a global index. Panics if out of range.
    pub fn symbol_at(&self, index: usize) -> Nucleotide {
        match self {
            Indexer::Single(s) => s[index],
            Indexer::Paired(a, b) => {
                if index < a.len() {
                    a[index]
                } else {
                    b[index - a.len()]
                }
            }
        }
    }

    /// Position of a global index within its own chain.
    pub fn chain_offset(&self, index: usize) -> usize {
        let split = self.split_index();
        if index < split { index } else { index - split }
    }

    /// True if i and j lie on different chains.
    pub fn is_cross_chain(&self, i: usize, j: usize) -> bool {
        let split = self.split_index();
        (i < split) != (j < split)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        (0..self.len()).map(|i| self.symbol_at(i))
    }

    /// Lookup of the ordered pair (symbol_at(i), symbol_at(j)).
    pub fn pair_energy(&self, table: &EnergyTable, i: usize, j: usize) -> Energy {
        table.get(self.symbol_at(i), self.symbol_at(j))
    }

    /// Sum of the pair energies of all pairs in `structure`.
    pub fn structure_energy(&self, structure: &SecondaryStructure, table: &EnergyTable) -> Energy {
        structure
            .iter()
            .map(|p| self.pair_energy(table, p.i() as usize, p.j() as usize))
            .fold(0, Energy::saturating_add)
    }
}

impl From<Sequence> for Indexer {
    fn from(sequence: Sequence) -> Self {
        Indexer::Single(sequence)
    }
}

impl From<(Sequence, Sequence)> for Indexer {
    fn from((first, second): (Sequence, Sequence)) -> Self {
        Indexer::Paired(first, second)
    }
}
