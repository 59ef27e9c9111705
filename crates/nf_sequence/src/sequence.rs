//! Single-stranded DNA chain.
//!
//! Index 0 is the 5' end of the molecule, the last index the 3' end.
//! A `Sequence` only grows by appending; all other transformations
//! (complementary strand, sub-ranges) return fresh sequences.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::AminoAcid;
use crate::Codon;
use crate::Nucleotide;
use crate::SequenceError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    nucleotides: Vec<Nucleotide>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nucleotides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleotides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.nucleotides.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.nucleotides.iter().copied()
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.nucleotides
    }

    /// Insert a nucleotide at the 3' end.
    pub fn push(&mut self, nucleotide: Nucleotide) {
        self.nucleotides.push(nucleotide);
    }

    /// Append another chain at the 3' end.
    pub fn append(&mut self, other: &Sequence) {
        self.nucleotides.extend_from_slice(&other.nucleotides);
    }

    /// The complementary strand, again with its 5' end at index 0.
    ///
    /// Fails if the chain contains the wildcard.
    pub fn complementary(&self) -> Result<Sequence, SequenceError> {
        self.nucleotides
            .iter()
            .rev()
            .map(|n| n.complement())
            .collect()
    }

    /// The largest sub-chain starting at `start` with at most `length`
    /// nucleotides. Out-of-range requests are clamped, never rejected.
    pub fn subsequence(&self, start: usize, length: usize) -> Sequence {
        let start = start.min(self.len());
        let end = start.saturating_add(length).min(self.len());
        Sequence::from(self.nucleotides[start..end].to_vec())
    }

    /// Complete triplets of the reading frame starting at index 0.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.nucleotides
            .chunks_exact(3)
            .map(|c| Codon::new(c[0], c[1], c[2]))
    }

    /// Amino acids of the reading frame starting at index 0.
    pub fn translate(&self) -> Vec<AminoAcid> {
        self.codons().map(|c| c.amino_acid()).collect()
    }
}

impl Index<usize> for Sequence {
    type Output = Nucleotide;

    fn index(&self, index: usize) -> &Nucleotide {
        &self.nucleotides[index]
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self { nucleotides }
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self { nucleotides: iter.into_iter().collect() }
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars().map(Nucleotide::try_from).collect()
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::try_from(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.nucleotides {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
