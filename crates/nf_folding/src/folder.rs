use std::collections::BTreeSet;
use std::fmt::Write;

use itertools::Itertools;
use log::info;
use once_cell::sync::OnceCell;
use nf_energy::Energy;
use nf_energy::EnergyTable;
use nf_sequence::Sequence;
use nf_structure::DotBracketVec;
use nf_structure::SecondaryStructure;
use nf_structure::NAIDX;

use crate::enumerate_structures;
use crate::find_in_depth;
use crate::EnergyMatrix;
use crate::FoldConfig;
use crate::FoldError;
use crate::Indexer;

/// Folds one chain, or two chains together, against a borrowed
/// `EnergyTable`.
///
/// The matrix, the depth-first structure and the enumerated structures
/// are each computed once, on first use.
///
/// # Examples
///
/// ```
/// use nf_energy::EnergyTable;
/// use nf_folding::{Folder, FoldConfig};
/// use nf_sequence::Sequence;
///
/// let table = EnergyTable::standard();
/// let seq = Sequence::try_from("GC").unwrap();
/// let folder = Folder::single(seq, &table, FoldConfig::default()).unwrap();
/// assert_eq!(folder.energy(), 3);
/// assert_eq!(folder.find_in_depth().to_string(), "(0,1)");
/// ```
#[derive(Debug)]
pub struct Folder<'a> {
    indexer: Indexer,
    energy: &'a EnergyTable,
    config: FoldConfig,
    matrix: OnceCell<EnergyMatrix>,
    depth: OnceCell<SecondaryStructure>,
    structures: OnceCell<BTreeSet<SecondaryStructure>>,
}

impl<'a> Folder<'a> {
    pub fn new(indexer: Indexer, energy: &'a EnergyTable, config: FoldConfig) -> Result<Self, FoldError> {
        // Positions are addressed as 0..=NAIDX::MAX.
        let limit = NAIDX::MAX as usize + 1;
        if indexer.len() > limit {
            return Err(FoldError::SequenceTooLong { length: indexer.len(), limit });
        }
        Ok(Self {
            indexer,
            energy,
            config,
            matrix: OnceCell::new(),
            depth: OnceCell::new(),
            structures: OnceCell::new(),
        })
    }

    /// Self-folding of one chain.
    pub fn single(sequence: Sequence, energy: &'a EnergyTable, config: FoldConfig) -> Result<Self, FoldError> {
        Self::new(Indexer::Single(sequence), energy, config)
    }

    /// Two chains folded together; the second starts at `first.len()`.
    pub fn paired(
        first: Sequence,
        second: Sequence,
        energy: &'a EnergyTable,
        config: FoldConfig,
    ) -> Result<Self, FoldError> {
        Self::new(Indexer::Paired(first, second), energy, config)
    }

    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }

    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    pub fn energy_table(&self) -> &EnergyTable {
        self.energy
    }

    pub fn matrix(&self) -> &EnergyMatrix {
        self.matrix.get_or_init(|| {
            EnergyMatrix::build(&self.indexer, self.energy, self.config.min_hairpin)
        })
    }

    /// The optimal total pairing energy.
    pub fn energy(&self) -> Energy {
        self.matrix().optimum()
    }

    /// One optimal structure, with the deterministic tie-break of
    /// `find_in_depth`.
    pub fn find_in_depth(&self) -> &SecondaryStructure {
        self.depth.get_or_init(|| find_in_depth(self.matrix()))
    }

    /// Up to `max_foldings` distinct optimal structures.
    pub fn structures(&self) -> &BTreeSet<SecondaryStructure> {
        self.structures.get_or_init(|| {
            let found = enumerate_structures(self.matrix(), self.config.max_foldings);
            info!(
                "Found {} structure(s) of energy {} (limit {}).",
                found.len(),
                self.energy(),
                self.config.max_foldings
            );
            found
        })
    }

    /// Energy of an arbitrary structure over this fold's positions.
    pub fn structure_energy(&self, structure: &SecondaryStructure) -> Energy {
        self.indexer.structure_energy(structure, self.energy)
    }

    /// Dot-bracket view; paired folds show the chain break as `+`.
    pub fn dot_bracket(&self, structure: &SecondaryStructure) -> DotBracketVec {
        let split = match self.indexer {
            Indexer::Single(_) => None,
            Indexer::Paired(..) => Some(self.indexer.split_index()),
        };
        structure.to_dot_bracket(self.indexer.len(), split)
    }

    pub fn render_matrix(&self, width: usize) -> String {
        self.matrix().render(&self.indexer, width)
    }

    /// Listing of all enumerated structures, under a header of symbols
    /// and chain-relative positions.
    pub fn render_structures(&self, width: usize) -> String {
        let structures = self.structures();
        let mut out = String::new();
        let _ = writeln!(out, "sequence length: {}", self.indexer.len());
        let _ = writeln!(out, "found: {} structures", structures.len());
        let _ = writeln!(
            out,
            "{}",
            self.indexer.symbols().map(|sym| format!("{:>width$}", char::from(sym))).join("")
        );
        let _ = writeln!(
            out,
            "{}",
            (0..self.indexer.len())
                .map(|i| format!("{:>width$}", self.indexer.chain_offset(i)))
                .join("")
        );
        for structure in structures {
            let _ = writeln!(out, "{structure}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_sequence::Nucleotide;
    use nf_structure::ConnectPair;

    fn seq(s: &str) -> Sequence {
        Sequence::try_from(s).unwrap()
    }

    /// Best energy on [i, j] where i either stays unpaired or pairs with
    /// some k, without any shared state with `EnergyMatrix`.
    fn naive_optimum(ix: &Indexer, table: &EnergyTable, i: usize, j: usize) -> Energy {
        if i >= j || j == usize::MAX {
            return 0;
        }
        let mut best = naive_optimum(ix, table, i + 1, j);
        for k in i + 1..=j {
            let e = ix.pair_energy(table, i, k);
            if e <= 0 {
                continue;
            }
            let rest = if k < j { naive_optimum(ix, table, k + 1, j) } else { 0 };
            best = best.max(e + naive_optimum(ix, table, i + 1, k - 1) + rest);
        }
        best
    }

    #[test]
    fn test_gc_scenario() {
        let table = EnergyTable::standard();
        let folder = Folder::single(seq("GC"), &table, FoldConfig::default()).unwrap();
        assert_eq!(folder.matrix().get(0, 1), 3);
        assert_eq!(folder.energy(), 3);
        assert_eq!(folder.find_in_depth().to_string(), "(0,1)");
        let all: Vec<String> = folder.structures().iter().map(|s| s.to_string()).collect();
        assert_eq!(all, vec!["(0,1)"]);
    }

    #[test]
    fn test_hairpin_scenario() {
        let table = EnergyTable::standard();
        let folder = Folder::single(seq("GGGAAATCCC"), &table, FoldConfig::default()).unwrap();
        let n = folder.indexer().len();
        let expected = naive_optimum(folder.indexer(), &table, 0, n - 1);
        assert!(expected > 0);
        assert_eq!(folder.energy(), expected);

        let depth = folder.find_in_depth();
        assert!(depth.contains(&ConnectPair::new(0, (n - 1) as NAIDX)));
        assert_eq!(folder.structure_energy(depth), expected);
        assert!(!folder.structures().is_empty());
        for s in folder.structures() {
            assert_eq!(folder.structure_energy(s), expected);
            assert!(s.is_non_overlapping());
        }
    }

    #[test]
    fn test_unfavourable_scenario() {
        let table = EnergyTable::standard();
        let folder = Folder::single(seq("AAAA"), &table, FoldConfig::default()).unwrap();
        assert_eq!(folder.matrix().get(0, 3), 0);
        assert!(folder.find_in_depth().is_empty());
        assert_eq!(folder.structures().len(), 1);
        assert!(folder.structures().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_no_enumeration() {
        let table = EnergyTable::standard();
        let config = FoldConfig::default().with_max_foldings(0);
        let folder = Folder::single(seq("GGGAAATCCC"), &table, config).unwrap();
        assert!(folder.structures().is_empty());
        assert_eq!(folder.energy(), 11);
        assert_eq!(folder.structure_energy(folder.find_in_depth()), 11);
    }

    #[test]
    fn test_paired_scenario() {
        let table = EnergyTable::standard();
        let folder = Folder::paired(seq("GC"), seq("GC"), &table, FoldConfig::default()).unwrap();
        assert_eq!(folder.indexer().split_index(), 2);
        assert!(folder.indexer().is_cross_chain(1, 2));
        assert_eq!(folder.energy(), 6);

        let depth = folder.find_in_depth();
        assert_eq!(folder.dot_bracket(depth).to_string(), "((+))");
        let views: Vec<String> = folder
            .structures()
            .iter()
            .map(|s| folder.dot_bracket(s).to_string())
            .collect();
        assert_eq!(views, vec!["((+))", "()+()"]);
    }

    #[test]
    fn test_min_hairpin_is_per_chain() {
        let table = EnergyTable::standard();
        let config = FoldConfig::default().with_min_hairpin(3);
        let single = Folder::single(seq("GCGC"), &table, config).unwrap();
        assert_eq!(single.energy(), 0);
        let paired = Folder::paired(seq("GC"), seq("GC"), &table, config).unwrap();
        // Only (0,3) and (1,2) cross the split.
        assert_eq!(paired.energy(), 6);
        assert_eq!(paired.find_in_depth().to_string(), "(0,3),(1,2)");
    }

    #[test]
    fn test_too_long() {
        let table = EnergyTable::standard();
        let limit = NAIDX::MAX as usize + 1;
        let at_limit: Sequence = std::iter::repeat_n(nf_sequence::Nucleotide::Adenine, limit).collect();
        assert!(Folder::single(at_limit, &table, FoldConfig::default()).is_ok());

        let long: Sequence = std::iter::repeat_n(nf_sequence::Nucleotide::Adenine, limit + 1).collect();
        let err = Folder::single(long, &table, FoldConfig::default()).unwrap_err();
        assert_eq!(err, FoldError::SequenceTooLong { length: limit + 1, limit });

        let half: Sequence = std::iter::repeat_n(nf_sequence::Nucleotide::Guanine, limit / 2 + 1).collect();
        assert!(Folder::paired(half.clone(), half, &table, FoldConfig::default()).is_err());
    }

    #[test]
    fn test_render_structures() {
        let table = EnergyTable::standard();
        let folder = Folder::paired(seq("GC"), seq("GC"), &table, FoldConfig::default()).unwrap();
        let out = folder.render_structures(4);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "sequence length: 4");
        assert_eq!(lines[1], "found: 2 structures");
        assert_eq!(lines[2], "   G   C   G   C");
        assert_eq!(lines[3], "   0   1   0   1");
        assert_eq!(&lines[4..], &["(0,3),(1,2)", "(0,1),(2,3)"]);
        assert!(folder.render_matrix(3).starts_with("  0  1  2  3"));
    }

    #[test]
    fn test_computed_once() {
        let table = EnergyTable::standard();
        let folder = Folder::single(seq("GATCGATC"), &table, FoldConfig::default()).unwrap();
        let a: *const EnergyMatrix = folder.matrix();
        let b: *const EnergyMatrix = folder.matrix();
        assert_eq!(a, b);
        assert!(std::ptr::eq(folder.structures(), folder.structures()));
    }

    #[test]
    fn test_huge_energies_saturate() {
        let mut table = EnergyTable::standard();
        table.put_symmetric(Nucleotide::Guanine, Nucleotide::Cytosine, Energy::MAX);
        let folder = Folder::single(seq("GGCC"), &table, FoldConfig::default()).unwrap();
        assert_eq!(folder.energy(), Energy::MAX);
        assert_eq!(folder.structure_energy(folder.find_in_depth()), Energy::MAX);
        assert_eq!(folder.find_in_depth().to_string(), "(1,2)");
        assert!(!folder.structures().is_empty());
        for s in folder.structures() {
            assert_eq!(folder.structure_energy(s), Energy::MAX);
        }
    }
}
