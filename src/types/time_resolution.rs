//! Defines the temporal resolution of DWD observation datasets.

use crate::types::error::InvalidParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sampling granularity of a dataset, from 1-minute values up to annual values.
///
/// The string form (see [`TimeResolution::as_str`]) is the folder name used by the
/// archive, e.g. `"10_minutes"` or `"daily"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeResolution {
    #[serde(rename = "1_minute")]
    Minute1,
    #[serde(rename = "10_minutes")]
    Minute10,
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "annual")]
    Annual,
}

impl TimeResolution {
    /// Every resolution, finest first.
    pub const ALL: [TimeResolution; 6] = [
        TimeResolution::Minute1,
        TimeResolution::Minute10,
        TimeResolution::Hourly,
        TimeResolution::Daily,
        TimeResolution::Monthly,
        TimeResolution::Annual,
    ];

    /// The archive folder name for this resolution.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeResolution::Minute1 => "1_minute",
            TimeResolution::Minute10 => "10_minutes",
            TimeResolution::Hourly => "hourly",
            TimeResolution::Daily => "daily",
            TimeResolution::Monthly => "monthly",
            TimeResolution::Annual => "annual",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            TimeResolution::Minute1 => "MINUTE_1",
            TimeResolution::Minute10 => "MINUTE_10",
            TimeResolution::Hourly => "HOURLY",
            TimeResolution::Daily => "DAILY",
            TimeResolution::Monthly => "MONTHLY",
            TimeResolution::Annual => "ANNUAL",
        }
    }
}

/// Formats a `TimeResolution` using its archive folder name.
///
/// # Examples
///
/// ```
/// use dwd_index::TimeResolution;
///
/// assert_eq!(TimeResolution::Minute10.to_string(), "10_minutes");
/// assert_eq!(format!("{}", TimeResolution::Daily), "daily");
/// ```
impl fmt::Display for TimeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parsing: accepts the folder name (`"daily"`) or the variant name (`"DAILY"`),
/// ignoring ASCII case. Anything else is rejected.
impl FromStr for TimeResolution {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        TimeResolution::ALL
            .into_iter()
            .find(|r| {
                raw.eq_ignore_ascii_case(r.as_str()) || raw.eq_ignore_ascii_case(r.variant_name())
            })
            .ok_or_else(|| InvalidParameterError::new("time resolution", s))
    }
}

impl TryFrom<&str> for TimeResolution {
    type Error = InvalidParameterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TimeResolution {
    type Error = InvalidParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
