use std::fmt;

/// Error type for setting up a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// The (combined) chain length exceeds what `NAIDX` can address.
    SequenceTooLong { length: usize, limit: usize },
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::SequenceTooLong { length, limit } => {
                write!(f, "Cannot fold {length} nucleotides (limit is {limit}).")
            }
        }
    }
}

impl std::error::Error for FoldError {}
