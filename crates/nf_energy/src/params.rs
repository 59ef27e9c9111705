//! JSON energy parameter files.
//!
//! ```json
//! {
//!   "default": -1000,
//!   "pairs": [
//!     { "pair": "GC", "energy": 3, "symmetric": true },
//!     { "pair": "AT", "energy": 2, "symmetric": true }
//!   ]
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde::Serialize;
use nf_sequence::Nucleotide;

use crate::Energy;
use crate::EnergyError;
use crate::EnergyTable;
use crate::DEFAULT_PAIR_ENERGY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyParams {
    #[serde(default = "default_pair_energy")]
    pub default: Energy,
    #[serde(default)]
    pub pairs: Vec<PairEnergy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEnergy {
    /// Two nucleotide letters, e.g. "GC".
    pub pair: String,
    pub energy: Energy,
    /// Also store the reversed pair.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub symmetric: bool,
}

fn default_pair_energy() -> Energy {
    DEFAULT_PAIR_ENERGY
}

fn parse_pair_key(key: &str) -> Result<(Nucleotide, Nucleotide), EnergyError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => Ok((Nucleotide::try_from(a)?, Nucleotide::try_from(b)?)),
        _ => Err(EnergyError::PairKey(key.to_string())),
    }
}

impl TryFrom<&EnergyParams> for EnergyTable {
    type Error = EnergyError;

    fn try_from(params: &EnergyParams) -> Result<Self, Self::Error> {
        let mut table = EnergyTable::new(params.default);
        for p in &params.pairs {
            let (a, b) = parse_pair_key(&p.pair)?;
            if p.symmetric {
                table.put_symmetric(a, b, p.energy);
            } else {
                table.put(a, b, p.energy);
            }
        }
        Ok(table)
    }
}

impl From<&EnergyTable> for EnergyParams {
    fn from(table: &EnergyTable) -> Self {
        let pairs = table
            .entries()
            .into_iter()
            .map(|((a, b), energy)| PairEnergy {
                pair: format!("{a}{b}"),
                energy,
                symmetric: false,
            })
            .collect();
        EnergyParams {
            default: table.default_energy(),
            pairs,
        }
    }
}

impl EnergyTable {
    pub fn from_json_str(json: &str) -> Result<Self, EnergyError> {
        let params: EnergyParams = serde_json::from_str(json)?;
        EnergyTable::try_from(&params)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EnergyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        debug!("Loaded {} pair energies from {}.", table.len(), path.display());
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, EnergyError> {
        Ok(serde_json::to_string_pretty(&EnergyParams::from(self))?)
    }
}
