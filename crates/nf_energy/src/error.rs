use std::fmt;

use nf_sequence::SequenceError;

/// Error type for loading and storing energy parameters.
#[derive(Debug)]
pub enum EnergyError {
    /// The parameter file could not be read.
    Io(std::io::Error),

    /// The parameter file is not valid JSON for `EnergyParams`.
    Json(serde_json::Error),

    /// A pair key contains a character that is not a nucleotide.
    Symbol(SequenceError),

    /// A pair key is not exactly two nucleotides.
    PairKey(String),
}

impl fmt::Display for EnergyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyError::Io(e) => write!(f, "Cannot read energy parameters: {e}"),
            EnergyError::Json(e) => write!(f, "Malformed energy parameters: {e}"),
            EnergyError::Symbol(e) => write!(f, "Bad energy pair: {e}"),
            EnergyError::PairKey(key) => {
                write!(f, "Energy pair '{key}' must name exactly two nucleotides.")
            }
        }
    }
}

impl std::error::Error for EnergyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnergyError::Io(e) => Some(e),
            EnergyError::Json(e) => Some(e),
            EnergyError::Symbol(e) => Some(e),
            EnergyError::PairKey(_) => None,
        }
    }
}

impl From<std::io::Error> for EnergyError {
    fn from(e: std::io::Error) -> Self {
        EnergyError::Io(e)
    }
}

impl From<serde_json::Error> for EnergyError {
    fn from(e: serde_json::Error) -> Self {
        EnergyError::Json(e)
    }
}

impl From<SequenceError> for EnergyError {
    fn from(e: SequenceError) -> Self {
        EnergyError::Symbol(e)
    }
}
