//! The standard genetic code.
//!
//! The code is a constant table indexed by the codon's bases in T, C, A,
//! G order, so `TTT` is entry 0 and `GGG` entry 63.

use std::collections::BTreeSet;
use std::fmt;

use crate::Codon;
use crate::Nucleotide;

const STANDARD_CODE: &[u8; 64] = b"FFLLSSSSYY..CC.WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Amino acids by their one-letter code; `.` marks a stop codon.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AminoAcid {
    Phenylalanine = b'F',
    Leucine = b'L',
    Isoleucine = b'I',
    Methionine = b'M',
    Valine = b'V',
    Serine = b'S',
    Proline = b'P',
    Threonine = b'T',
    Alanine = b'A',
    Tyrosine = b'Y',
    Stop = b'.',
    Histidine = b'H',
    Glutamine = b'Q',
    Asparagine = b'N',
    Lysine = b'K',
    AsparticAcid = b'D',
    GlutamicAcid = b'E',
    Cysteine = b'C',
    Tryptophan = b'W',
    Arginine = b'R',
    Glycine = b'G',
    /// Codons containing the wildcard.
    Unknown = b'?',
}

impl AminoAcid {
    fn from_letter(letter: u8) -> Self {
        use AminoAcid::*;
        match letter {
            b'F' => Phenylalanine,
            b'L' => Leucine,
            b'I' => Isoleucine,
            b'M' => Methionine,
            b'V' => Valine,
            b'S' => Serine,
            b'P' => Proline,
            b'T' => Threonine,
            b'A' => Alanine,
            b'Y' => Tyrosine,
            b'.' => Stop,
            b'H' => Histidine,
            b'Q' => Glutamine,
            b'N' => Asparagine,
            b'K' => Lysine,
            b'D' => AsparticAcid,
            b'E' => GlutamicAcid,
            b'C' => Cysteine,
            b'W' => Tryptophan,
            b'R' => Arginine,
            b'G' => Glycine,
            _ => Unknown,
        }
    }

    pub fn letter(self) -> char {
        self as u8 as char
    }

    /// All codons coding for this amino acid (none for `Unknown`).
    pub fn codons(self) -> BTreeSet<Codon> {
        Codon::all().filter(|c| c.amino_acid() == self).collect()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.letter(), f)
    }
}

fn code_index(n: Nucleotide) -> Option<usize> {
    match n {
        Nucleotide::Thymine => Some(0),
        Nucleotide::Cytosine => Some(1),
        Nucleotide::Adenine => Some(2),
        Nucleotide::Guanine => Some(3),
        Nucleotide::Any => None,
    }
}

impl Codon {
    /// The 64 codons over A, C, G, T.
    pub fn all() -> impl Iterator<Item = Codon> {
        Nucleotide::BASES.into_iter().flat_map(|a| {
            Nucleotide::BASES.into_iter().flat_map(move |b| {
                Nucleotide::BASES.into_iter().map(move |c| Codon::new(a, b, c))
            })
        })
    }

    pub fn amino_acid(&self) -> AminoAcid {
        [self.first(), self.second(), self.third()]
            .into_iter()
            .try_fold(0, |acc, n| code_index(n).map(|i| acc * 4 + i))
            .map_or(AminoAcid::Unknown, |i| AminoAcid::from_letter(STANDARD_CODE[i]))
    }

    /// Codons coding for the same amino acid, this one included.
    pub fn synonyms(&self) -> BTreeSet<Codon> {
        self.amino_acid().codons()
    }
}
