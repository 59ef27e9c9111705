use std::fmt;

/// Error type for nucleotide, sequence and codon construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The character is not a nucleotide name (or the wildcard was complemented).
    InvalidSymbol(char),

    /// A codon needs three nucleotides, only this many were given.
    CodonTooShort(usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidSymbol(c) => {
                write!(f, "Char '{}' is not a nucleotide name.", c.escape_debug())
            }
            SequenceError::CodonTooShort(n) => {
                write!(f, "String for codon is too short ({n} of 3 nucleotides).")
            }
        }
    }
}

impl std::error::Error for SequenceError {}
