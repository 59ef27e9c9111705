use std::fmt;

/// Error type for parsing structure notations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Not one of `.`, `(`, `)` or `+`.
    InvalidToken(char),

    /// Opening bracket at this position is never closed.
    UnmatchedOpen(usize),

    /// Closing bracket at this position has no partner.
    UnmatchedClose(usize),

    /// More positions than `NAIDX` can address.
    TooLong(usize),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::InvalidToken(c) => {
                write!(f, "Invalid dot-bracket character '{}'.", c.escape_debug())
            }
            StructureError::UnmatchedOpen(i) => write!(f, "Unmatched '(' at position {i}."),
            StructureError::UnmatchedClose(i) => write!(f, "Unmatched ')' at position {i}."),
            StructureError::TooLong(n) => write!(f, "Structure of length {n} is too long."),
        }
    }
}

impl std::error::Error for StructureError {}
