//! The ConnectPair definition.
//!
//! A `ConnectPair` joins two positions (i, j), i < j, of one folding
//! index space (a single chain, or two chains laid out one after the
//! other). Both indices (`NAIDX`) can be packed into one `P1KEY`.
//!
//! Pairs are ordered in traversal ("view") order: by the 5' index
//! ascending, then by the 3' index *descending*, so that
//! (0,15) < (0,14) < (1,16).

use std::cmp::Ordering;
use std::fmt;

use crate::NAIDX;
use crate::P1KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectPair {
    i: NAIDX,
    j: NAIDX,
}

impl ConnectPair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        ConnectPair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// True if `pos` is one of the two paired positions.
    pub fn contains(&self, pos: NAIDX) -> bool {
        self.i == pos || self.j == pos
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << NAIDX::BITS) | (self.j as P1KEY)
    }

    /// Decode a key back into a `ConnectPair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> NAIDX::BITS) as NAIDX;
        let j = (key & NAIDX::MAX as P1KEY) as NAIDX;
        debug_assert!(i < j);
        ConnectPair { i, j }
    }
}

impl Ord for ConnectPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.i.cmp(&other.i).then_with(|| other.j.cmp(&self.j))
    }
}

impl PartialOrd for ConnectPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ConnectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_roundtrip() {
        let p = ConnectPair::new(1, 42);
        let q = ConnectPair::from_key(p.key());
        assert_eq!(p, q);
        assert_eq!(p.key(), (1 << 16) | 42);
    }

    #[test]
    fn test_view_order() {
        let a = ConnectPair::new(0, 15);
        let b = ConnectPair::new(0, 14);
        let c = ConnectPair::new(1, 16);
        assert!(a < b);
        assert!(b < c);
        let mut v = vec![c, b, a];
        v.sort();
        assert_eq!(v, vec![a, b, c]);
    }

    #[test]
    fn test_contains_and_display() {
        let p = ConnectPair::new(3, 9);
        assert!(p.contains(3));
        assert!(p.contains(9));
        assert!(!p.contains(4));
        assert_eq!(p.to_string(), "(3,9)");
    }
}
