//! The SecondaryStructure definition.
//!
//! A `SecondaryStructure` is a set of `ConnectPair`s representing one
//! folding. Equality and ordering are structural (set comparison), so
//! collections of structures deduplicate naturally. Iteration follows
//! the `ConnectPair` view order.
//!
//! Non-crossing is not enforced here; `is_non_overlapping` only checks
//! that no position takes part in two pairs.

use std::collections::BTreeSet;
use std::fmt;
use nohash_hasher::IntSet;

use crate::ConnectPair;
use crate::DotBracket;
use crate::DotBracketVec;
use crate::NAIDX;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SecondaryStructure {
    pairs: BTreeSet<ConnectPair>,
}

impl SecondaryStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of base pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn add_pair(&mut self, pair: ConnectPair) -> bool {
        self.pairs.insert(pair)
    }

    /// Insert all pairs of another structure.
    pub fn append(&mut self, other: &SecondaryStructure) {
        self.pairs.extend(other.pairs.iter().copied());
    }

    pub fn contains(&self, pair: &ConnectPair) -> bool {
        self.pairs.contains(pair)
    }

    /// Pairs in view order.
    pub fn iter(&self) -> impl Iterator<Item = ConnectPair> + '_ {
        self.pairs.iter().copied()
    }

    pub fn pairs(&self) -> &BTreeSet<ConnectPair> {
        &self.pairs
    }

    /// The position paired with `pos`, if any.
    pub fn partner(&self, pos: NAIDX) -> Option<NAIDX> {
        self.pairs.iter().find_map(|p| {
            if p.i() == pos {
                Some(p.j())
            } else if p.j() == pos {
                Some(p.i())
            } else {
                None
            }
        })
    }

    /// True if every position takes part in at most one pair.
    pub fn is_non_overlapping(&self) -> bool {
        let mut seen: IntSet<NAIDX> = IntSet::default();
        self.pairs
            .iter()
            .all(|p| p.i() < p.j() && seen.insert(p.i()) && seen.insert(p.j()))
    }

    /// Dot-bracket view over `length` positions, with a strand break
    /// before `split` if it lies strictly inside the index space.
    pub fn to_dot_bracket(&self, length: usize, split: Option<usize>) -> DotBracketVec {
        let mut dbv = vec![DotBracket::Unpaired; length];
        for p in &self.pairs {
            debug_assert!((p.j() as usize) < length);
            dbv[p.i() as usize] = DotBracket::Open;
            dbv[p.j() as usize] = DotBracket::Close;
        }
        if let Some(s) = split.filter(|&s| s > 0 && s < length) {
            dbv.insert(s, DotBracket::Break);
        }
        DotBracketVec(dbv)
    }
}

impl FromIterator<ConnectPair> for SecondaryStructure {
    fn from_iter<I: IntoIterator<Item = ConnectPair>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

impl Extend<ConnectPair> for SecondaryStructure {
    fn extend<I: IntoIterator<Item = ConnectPair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

/// Compact pair list, e.g. `(0,5),(1,4),(7,9)`.
impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in &self.pairs {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", pair)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(i: NAIDX, j: NAIDX) -> ConnectPair {
        ConnectPair::new(i, j)
    }

    #[test]
    fn test_add_and_append() {
        let mut s = SecondaryStructure::new();
        assert!(s.is_empty());
        assert!(s.add_pair(cp(0, 5)));
        assert!(!s.add_pair(cp(0, 5)));
        let other: SecondaryStructure = [cp(1, 4), cp(7, 9)].into_iter().collect();
        s.append(&other);
        assert_eq!(s.len(), 3);
        assert!(s.contains(&cp(7, 9)));
        assert_eq!(s.to_string(), "(0,5),(1,4),(7,9)");
    }

    #[test]
    fn test_structural_equality_and_order() {
        let a: SecondaryStructure = [cp(0, 3), cp(1, 2)].into_iter().collect();
        let b: SecondaryStructure = [cp(1, 2), cp(0, 3)].into_iter().collect();
        let c: SecondaryStructure = [cp(0, 1), cp(2, 3)].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        // (0,3) precedes (0,1) in view order.
        assert!(a < c);
        let set: BTreeSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_partner_and_overlap() {
        let s: SecondaryStructure = [cp(0, 5), cp(1, 4)].into_iter().collect();
        assert_eq!(s.partner(5), Some(0));
        assert_eq!(s.partner(1), Some(4));
        assert_eq!(s.partner(2), None);
        assert!(s.is_non_overlapping());

        let bad: SecondaryStructure = [cp(0, 5), cp(5, 7)].into_iter().collect();
        assert!(!bad.is_non_overlapping());
        assert!(SecondaryStructure::new().is_non_overlapping());
    }

    #[test]
    fn test_to_dot_bracket() {
        let s: SecondaryStructure = [cp(0, 5), cp(1, 4)].into_iter().collect();
        assert_eq!(s.to_dot_bracket(7, None).to_string(), "((..)).");
        assert_eq!(s.to_dot_bracket(7, Some(7)).to_string(), "((..)).");
        assert_eq!(s.to_dot_bracket(7, Some(3)).to_string(), "((.+.)).");
        assert_eq!(SecondaryStructure::new().to_dot_bracket(0, None).to_string(), "");
    }
}
