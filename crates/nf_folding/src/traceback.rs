//! Depth-first reconstruction of one optimal structure.
//!
//! The tie-break is fixed so the result is deterministic: leave j
//! unpaired, else leave i unpaired, else pair (i, j), else split at the
//! smallest k with `M[i][k] + M[k+1][j] == M[i][j]`.

use log::debug;
use nf_structure::ConnectPair;
use nf_structure::SecondaryStructure;
use nf_structure::NAIDX;

use crate::EnergyMatrix;

/// One structure whose energy equals `matrix.optimum()`.
pub fn find_in_depth(matrix: &EnergyMatrix) -> SecondaryStructure {
    let mut structure = SecondaryStructure::new();
    if !matrix.is_empty() {
        traceback(0, matrix.len() - 1, matrix, &mut structure);
    }
    debug!("Depth-first structure with {} pairs: {}", structure.len(), structure);
    structure
}

fn traceback(i: usize, j: usize, dp: &EnergyMatrix, structure: &mut SecondaryStructure) {
    if i >= j {
        return;
    }
    let dp_ij = dp.get(i, j);
    if dp_ij == 0 {
        return;
    }

    if dp_ij == dp.get(i, j - 1) {
        traceback(i, j - 1, dp, structure);
    } else if dp_ij == dp.get(i + 1, j) {
        traceback(i + 1, j, dp, structure);
    } else if dp.paired_value(i, j) == Some(dp_ij) {
        structure.add_pair(ConnectPair::new(i as NAIDX, j as NAIDX));
        traceback(i + 1, j - 1, dp, structure);
    } else {
        match (i + 1..j - 1).find(|&k| dp_ij == dp.get(i, k).saturating_add(dp.get(k + 1, j))) {
            Some(k) => {
                traceback(i, k, dp, structure);
                traceback(k + 1, j, dp, structure);
            }
            None => unreachable!("energy matrix is inconsistent at ({i},{j})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_energy::EnergyTable;
    use nf_sequence::Sequence;

    use crate::Indexer;

    fn fold(s: &str) -> (Indexer, EnergyMatrix, SecondaryStructure) {
        let ix = Indexer::Single(Sequence::try_from(s).unwrap());
        let m = EnergyMatrix::build(&ix, &EnergyTable::standard(), 0);
        let st = find_in_depth(&m);
        (ix, m, st)
    }

    #[test]
    fn test_gc() {
        let (_, _, st) = fold("GC");
        assert_eq!(st.to_string(), "(0,1)");
    }

    #[test]
    fn test_empty_and_unfavourable() {
        assert!(fold("").2.is_empty());
        assert!(fold("A").2.is_empty());
        assert!(fold("AAAA").2.is_empty());
    }

    #[test]
    fn test_tie_break_prefers_unpaired_right() {
        // Both (0,1) and (0,2) score 3; leaving j unpaired comes first.
        let (_, _, st) = fold("GCC");
        assert_eq!(st.to_string(), "(0,1)");
    }

    #[test]
    fn test_bifurcation() {
        // G0-G3 cannot pair and neither end is free: only a split reaches 6.
        let (ix, m, st) = fold("GCCG");
        assert_eq!(m.optimum(), 6);
        assert_eq!(st.to_string(), "(0,1),(2,3)");
        assert_eq!(ix.structure_energy(&st, &EnergyTable::standard()), 6);
    }

    #[test]
    fn test_energy_matches_optimum() {
        let t = EnergyTable::standard();
        for s in ["GGGAAATCCC", "GATCGATC", "TTGACGTCAA", "CCCCGGGG", "GTACGTAC"] {
            let (ix, m, st) = fold(s);
            assert_eq!(ix.structure_energy(&st, &t), m.optimum(), "{s}");
            assert!(st.is_non_overlapping(), "{s}");
        }
    }
}
