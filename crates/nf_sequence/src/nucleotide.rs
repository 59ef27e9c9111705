//! The DNA nucleotide alphabet.
//!
//! Four concrete bases plus the `Any` wildcard. Ordering and equality
//! follow the one-letter code, i.e. `A < C < G < N < T`.

use std::fmt;

use crate::SequenceError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nucleotide {
    Adenine = b'A',
    Cytosine = b'C',
    Guanine = b'G',
    /// Wildcard, never produced by parsing.
    #[default]
    Any = b'N',
    Thymine = b'T',
}

impl Nucleotide {
    /// The four concrete bases.
    pub const BASES: [Nucleotide; 4] = [
        Nucleotide::Adenine,
        Nucleotide::Cytosine,
        Nucleotide::Guanine,
        Nucleotide::Thymine,
    ];

    /// Watson-Crick partner. Fails for the wildcard.
    pub fn complement(self) -> Result<Nucleotide, SequenceError> {
        use Nucleotide::*;
        match self {
            Adenine => Ok(Thymine),
            Cytosine => Ok(Guanine),
            Guanine => Ok(Cytosine),
            Thymine => Ok(Adenine),
            Any => Err(SequenceError::InvalidSymbol(char::from(self))),
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Nucleotide::Any
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' | 'a' => Ok(Nucleotide::Adenine),
            'C' | 'c' => Ok(Nucleotide::Cytosine),
            'G' | 'g' => Ok(Nucleotide::Guanine),
            'T' | 't' => Ok(Nucleotide::Thymine),
            _ => Err(SequenceError::InvalidSymbol(c)),
        }
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        n as u8 as char
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&char::from(*self), f)
    }
}
