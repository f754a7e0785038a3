use crate::types::error::InvalidParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a file covers the historical archive, the recent (current year) window,
/// near-real-time ("now") data, or row-level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Historical,
    Recent,
    Now,
    Row,
}

impl PeriodType {
    pub const ALL: [PeriodType; 4] = [
        PeriodType::Historical,
        PeriodType::Recent,
        PeriodType::Now,
        PeriodType::Row,
    ];

    /// The archive folder name for this period type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Historical => "historical",
            PeriodType::Recent => "recent",
            PeriodType::Now => "now",
            PeriodType::Row => "row",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        PeriodType::ALL
            .into_iter()
            .find(|p| raw.eq_ignore_ascii_case(p.as_str()))
            .ok_or_else(|| InvalidParameterError::new("period type", s))
    }
}

impl TryFrom<&str> for PeriodType {
    type Error = InvalidParameterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for PeriodType {
    type Error = InvalidParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
