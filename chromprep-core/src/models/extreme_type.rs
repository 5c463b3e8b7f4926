use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{MAX_CHROM_COL, MIN_CHROM_COL};
use crate::errors::ChromPrepError;

/// Which end of the chromosome count range to look for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtremeType {
    #[default]
    Min,
    Max,
}

impl ExtremeType {
    /// Column of the family table the extreme is taken over.
    pub fn column(&self) -> &'static str {
        match self {
            ExtremeType::Min => MIN_CHROM_COL,
            ExtremeType::Max => MAX_CHROM_COL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtremeType::Min => "min",
            ExtremeType::Max => "max",
        }
    }
}

impl FromStr for ExtremeType {
    type Err = ChromPrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(ExtremeType::Min),
            "max" => Ok(ExtremeType::Max),
            _ => Err(ChromPrepError::InvalidExtremeType(s.to_string())),
        }
    }
}

impl Display for ExtremeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
