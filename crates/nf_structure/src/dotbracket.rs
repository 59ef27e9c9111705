//! Dot-bracket notation.
//!
//! `.` unpaired, `(`/`)` paired, `+` strand break. A break does not
//! occupy a position: "((+))" describes four positions with the second
//! strand starting at index 2.

use std::fmt;
use std::ops::Deref;

use crate::ConnectPair;
use crate::SecondaryStructure;
use crate::StructureError;
use crate::NAIDX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
    Break,
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            '+' | '&' => Ok(DotBracket::Break),
            _ => Err(StructureError::InvalidToken(c)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::Break => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// Number of positions (breaks excluded).
    pub fn length(&self) -> usize {
        self.0.iter().filter(|&&db| db != DotBracket::Break).count()
    }

    /// Index of the first position after the first strand break.
    pub fn split_index(&self) -> Option<usize> {
        self.0.iter().position(|&db| db == DotBracket::Break)
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .map(DotBracket::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(DotBracketVec)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in &self.0 {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}

impl TryFrom<&DotBracketVec> for SecondaryStructure {
    type Error = StructureError;

    fn try_from(dbv: &DotBracketVec) -> Result<Self, Self::Error> {
        let length = dbv.length();
        if length > NAIDX::MAX as usize {
            return Err(StructureError::TooLong(length));
        }
        let mut stack: Vec<NAIDX> = Vec::new();
        let mut structure = SecondaryStructure::new();
        let mut pos: NAIDX = 0;
        for &db in dbv.iter() {
            match db {
                DotBracket::Break => continue,
                DotBracket::Unpaired => (),
                DotBracket::Open => stack.push(pos),
                DotBracket::Close => {
                    let i = stack.pop().ok_or(StructureError::UnmatchedClose(pos as usize))?;
                    structure.add_pair(ConnectPair::new(i, pos));
                }
            }
            pos += 1;
        }
        match stack.pop() {
            Some(i) => Err(StructureError::UnmatchedOpen(i as usize)),
            None => Ok(structure),
        }
    }
}

impl TryFrom<&str> for SecondaryStructure {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        SecondaryStructure::try_from(&DotBracketVec::try_from(s)?)
    }
}
