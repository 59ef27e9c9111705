//! The Nussinov energy matrix.
//!
//! `M[i][j]` is the best total pairing energy achievable on [i, j]:
//!
//! ```text
//! M[i][j] = max( M[i][j-1],                       j unpaired
//!                M[i+1][j],                       i unpaired
//!                M[i+1][j-1] + e(i,j),            i pairs with j
//!                M[i][k] + M[k+1][j] )            bifurcation, i <= k < j
//! ```
//!
//! with `M[i][i] = 0` and every empty range worth 0. Only the upper
//! triangle is meaningful. The table is filled by increasing span, so
//! every cell only reads cells of smaller span.

use std::fmt::Write;

use log::debug;
use ndarray::Array2;
use nf_energy::Energy;
use nf_energy::EnergyTable;

use crate::Indexer;

#[derive(Debug, Clone)]
pub struct EnergyMatrix {
    /// e(i,j) for admitted pairs, `None` where pairing is not allowed.
    pair_scores: Array2<Option<Energy>>,
    dp_table: Array2<Energy>,
}

impl EnergyMatrix {
    /// Fill the matrix for all positions of `indexer`.
    ///
    /// Pairs (i, j) on the same chain need `j - i > min_hairpin`.
    pub fn build(indexer: &Indexer, table: &EnergyTable, min_hairpin: usize) -> Self {
        let pair_scores = build_pair_scores(indexer, table, min_hairpin);
        let dp_table = nussinov(&pair_scores);
        let matrix = Self { pair_scores, dp_table };
        debug!(
            "Filled {n}x{n} energy matrix (split at {}), optimum {}.",
            indexer.split_index(),
            matrix.optimum(),
            n = matrix.len()
        );
        matrix
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.dp_table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `M[i][j]`; 0 for an empty range (i > j).
    pub fn get(&self, i: usize, j: usize) -> Energy {
        if i > j { 0 } else { self.dp_table[(i, j)] }
    }

    /// e(i,j) if (i, j) may pair.
    pub fn pair_score(&self, i: usize, j: usize) -> Option<Energy> {
        self.pair_scores[(i, j)]
    }

    /// `M[i+1][j-1] + e(i,j)`, the value of closing (i, j). Requires i < j.
    pub fn paired_value(&self, i: usize, j: usize) -> Option<Energy> {
        debug_assert!(i < j);
        self.pair_score(i, j).map(|e| self.get(i + 1, j - 1).saturating_add(e))
    }

    /// `M[0][n-1]`, or 0 for an empty index space.
    pub fn optimum(&self) -> Energy {
        match self.len() {
            0 => 0,
            n => self.get(0, n - 1),
        }
    }

    /// Grid view for debugging: column indices, symbols, a separator with
    /// `+` at the split index, then one row per i with `.` below the
    /// diagonal.
    pub fn render(&self, indexer: &Indexer, width: usize) -> String {
        let n = self.len();
        let split = indexer.split_index();
        let mut out = String::new();

        for j in 0..n {
            let _ = write!(out, "{:>width$}", j);
        }
        let _ = writeln!(out, "{:>7}", "j/");
        for sym in indexer.symbols() {
            let _ = write!(out, "{:>width$}", char::from(sym));
        }
        let _ = writeln!(out, "{:>7}", "i");
        out.push_str(&"-".repeat(width * split));
        out.push('+');
        out.push_str(&"-".repeat(width * (n - split)));
        out.push('\n');

        for i in 0..n {
            for j in 0..n {
                if j >= i {
                    let _ = write!(out, "{:>width$}", self.get(i, j));
                } else {
                    let _ = write!(out, "{:>width$}", ".");
                }
            }
            let _ = writeln!(out, "|{:>2}{:>4}", char::from(indexer.symbol_at(i)), i);
        }
        out
    }
}

/// Returns the pairwise score matrix; only the upper triangle is set.
fn build_pair_scores(
    indexer: &Indexer,
    table: &EnergyTable,
    min_hairpin: usize,
) -> Array2<Option<Energy>> {
    let n = indexer.len();
    let mut p = Array2::from_elem((n, n), None);

    for ((i, j), value) in p.indexed_iter_mut() {
        if i < j && (j - i > min_hairpin || indexer.is_cross_chain(i, j)) {
            *value = Some(indexer.pair_energy(table, i, j));
        }
    }
    p
}

fn nussinov(p: &Array2<Option<Energy>>) -> Array2<Energy> {
    let (n, m) = p.dim();
    assert!(n == m);
    let mut dp: Array2<Energy> = Array2::from_elem((n, n), 0);
    for l in 1..n {
        for i in 0..n - l {
            let j = i + l;
            let mut max_val = dp[(i + 1, j)].max(dp[(i, j - 1)]);
            if let Some(e) = p[(i, j)] {
                let inner = if i + 1 < j { dp[(i + 1, j - 1)] } else { 0 };
                max_val = max_val.max(inner.saturating_add(e));
            }
            // k = i and k = j - 1 only repeat the unpaired cases.
            for k in i + 1..j - 1 {
                max_val = max_val.max(dp[(i, k)].saturating_add(dp[(k + 1, j)]));
            }
            dp[(i, j)] = max_val;
        }
    }
    dp
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use nf_sequence::Sequence;

    fn single(s: &str) -> Indexer {
        Indexer::Single(Sequence::try_from(s).unwrap())
    }

    /// The recurrence evaluated literally, top-down and memoized,
    /// including the redundant bifurcations at k = i and k = j - 1.
    fn reference(
        ix: &Indexer,
        table: &EnergyTable,
        i: usize,
        j: usize,
        memo: &mut HashMap<(usize, usize), Energy>,
    ) -> Energy {
        if i >= j {
            return 0;
        }
        if let Some(&e) = memo.get(&(i, j)) {
            return e;
        }
        let inner = if i + 1 < j { reference(ix, table, i + 1, j - 1, memo) } else { 0 };
        let mut best = reference(ix, table, i, j - 1, memo)
            .max(reference(ix, table, i + 1, j, memo))
            .max(inner + ix.pair_energy(table, i, j));
        for k in i..j {
            best = best.max(reference(ix, table, i, k, memo) + reference(ix, table, k + 1, j, memo));
        }
        memo.insert((i, j), best);
        best
    }

    #[test]
    fn test_gc_pair() {
        let t = EnergyTable::standard();
        let m = EnergyMatrix::build(&single("GC"), &t, 0);
        assert_eq!(m.get(0, 0), 0);
        assert_eq!(m.get(1, 1), 0);
        assert_eq!(m.get(0, 1), 3);
        assert_eq!(m.optimum(), 3);
        assert_eq!(m.paired_value(0, 1), Some(3));
    }

    #[test]
    fn test_no_favourable_pairs() {
        let t = EnergyTable::standard();
        let m = EnergyMatrix::build(&single("AAAA"), &t, 0);
        assert_eq!(m.get(0, 3), 0);
        assert_eq!(m.optimum(), 0);
    }

    #[test]
    fn test_empty_matrix() {
        let t = EnergyTable::standard();
        let m = EnergyMatrix::build(&single(""), &t, 0);
        assert!(m.is_empty());
        assert_eq!(m.optimum(), 0);
        let m = EnergyMatrix::build(&single("G"), &t, 0);
        assert_eq!(m.len(), 1);
        assert_eq!(m.optimum(), 0);
    }

    #[test]
    fn test_matches_literal_recurrence() {
        let t = EnergyTable::standard();
        for s in ["GGGAAATCCC", "GATCGATC", "TTGACGTCAA", "ACGTTGCA", "GTGTCACA"] {
            let ix = single(s);
            let m = EnergyMatrix::build(&ix, &t, 0);
            let mut memo = HashMap::new();
            for i in 0..ix.len() {
                for j in i..ix.len() {
                    assert_eq!(m.get(i, j), reference(&ix, &t, i, j, &mut memo), "{s} at ({i},{j})");
                }
            }
        }
    }

    #[test]
    fn test_hairpin_gate() {
        let t = EnergyTable::standard();
        // G and C three apart: allowed with min_hairpin 2, not with 3.
        let ix = single("GAAC");
        assert_eq!(EnergyMatrix::build(&ix, &t, 2).optimum(), 3);
        assert_eq!(EnergyMatrix::build(&ix, &t, 3).optimum(), 0);
        assert_eq!(EnergyMatrix::build(&ix, &t, 3).pair_score(0, 3), None);

        // Across chains the gate does not apply.
        let ix = Indexer::Paired(Sequence::try_from("G").unwrap(), Sequence::try_from("C").unwrap());
        let m = EnergyMatrix::build(&ix, &t, 3);
        assert_eq!(m.optimum(), 3);
    }

    #[test]
    fn test_render() {
        let t = EnergyTable::standard();
        let ix = Indexer::Paired(Sequence::try_from("G").unwrap(), Sequence::try_from("C").unwrap());
        let m = EnergyMatrix::build(&ix, &t, 0);
        let out = m.render(&ix, 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  0  1     j/");
        assert_eq!(lines[1], "  G  C      i");
        assert_eq!(lines[2], "---+---");
        assert_eq!(lines[3], "  0  3| G   0");
        assert_eq!(lines[4], "  .  0| C   1");
    }
}
