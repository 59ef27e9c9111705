use std::fmt;

use crate::Nucleotide;
use crate::SequenceError;

/// A nucleotide triplet. Defaults to three wildcards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Codon([first, second, third])
    }

    pub fn first(&self) -> Nucleotide {
        self.0[0]
    }

    pub fn second(&self) -> Nucleotide {
        self.0[1]
    }

    pub fn third(&self) -> Nucleotide {
        self.0[2]
    }
}

/// Parses the first three characters; anything beyond is ignored.
impl TryFrom<&str> for Codon {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = s.chars().take(3).collect();
        if chars.len() < 3 {
            return Err(SequenceError::CodonTooShort(chars.len()));
        }
        Ok(Codon::new(
            Nucleotide::try_from(chars[0])?,
            Nucleotide::try_from(chars[1])?,
            Nucleotide::try_from(chars[2])?,
        ))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.first(), self.second(), self.third())
    }
}
