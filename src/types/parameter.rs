//! Defines the measured quantities published in the DWD observation archive.

use crate::types::error::InvalidParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The physical quantity a dataset measures.
///
/// The string form (see [`Parameter::as_str`]) is the folder name of the dataset in the
/// archive, which for some parameters is an abbreviation (`"kl"` for the daily/monthly
/// climate summary, `"more_precip"` for the extended precipitation network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parameter {
    /// Daily, monthly or annual climate summary (temperature, precipitation, wind, ...).
    #[serde(rename = "kl")]
    ClimateSummary,
    #[serde(rename = "precipitation")]
    Precipitation,
    /// Precipitation from the denser precipitation-only station network.
    #[serde(rename = "more_precip")]
    PrecipitationMore,
    #[serde(rename = "air_temperature")]
    TemperatureAir,
    #[serde(rename = "extreme_temperature")]
    TemperatureExtreme,
    #[serde(rename = "soil_temperature")]
    TemperatureSoil,
    #[serde(rename = "wind")]
    Wind,
    #[serde(rename = "extreme_wind")]
    WindExtreme,
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "cloud_type")]
    CloudType,
    #[serde(rename = "cloudiness")]
    Cloudiness,
    #[serde(rename = "pressure")]
    Pressure,
    #[serde(rename = "sun")]
    SunshineDuration,
    #[serde(rename = "visibility")]
    Visibility,
    #[serde(rename = "water_equiv")]
    WaterEquivalent,
}

impl Parameter {
    pub const ALL: [Parameter; 15] = [
        Parameter::ClimateSummary,
        Parameter::Precipitation,
        Parameter::PrecipitationMore,
        Parameter::TemperatureAir,
        Parameter::TemperatureExtreme,
        Parameter::TemperatureSoil,
        Parameter::Wind,
        Parameter::WindExtreme,
        Parameter::Solar,
        Parameter::CloudType,
        Parameter::Cloudiness,
        Parameter::Pressure,
        Parameter::SunshineDuration,
        Parameter::Visibility,
        Parameter::WaterEquivalent,
    ];

    /// The archive folder name for this parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::ClimateSummary => "kl",
            Parameter::Precipitation => "precipitation",
            Parameter::PrecipitationMore => "more_precip",
            Parameter::TemperatureAir => "air_temperature",
            Parameter::TemperatureExtreme => "extreme_temperature",
            Parameter::TemperatureSoil => "soil_temperature",
            Parameter::Wind => "wind",
            Parameter::WindExtreme => "extreme_wind",
            Parameter::Solar => "solar",
            Parameter::CloudType => "cloud_type",
            Parameter::Cloudiness => "cloudiness",
            Parameter::Pressure => "pressure",
            Parameter::SunshineDuration => "sun",
            Parameter::Visibility => "visibility",
            Parameter::WaterEquivalent => "water_equiv",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Parameter::ClimateSummary => "CLIMATE_SUMMARY",
            Parameter::Precipitation => "PRECIPITATION",
            Parameter::PrecipitationMore => "PRECIPITATION_MORE",
            Parameter::TemperatureAir => "TEMPERATURE_AIR",
            Parameter::TemperatureExtreme => "TEMPERATURE_EXTREME",
            Parameter::TemperatureSoil => "TEMPERATURE_SOIL",
            Parameter::Wind => "WIND",
            Parameter::WindExtreme => "WIND_EXTREME",
            Parameter::Solar => "SOLAR",
            Parameter::CloudType => "CLOUD_TYPE",
            Parameter::Cloudiness => "CLOUDINESS",
            Parameter::Pressure => "PRESSURE",
            Parameter::SunshineDuration => "SUNSHINE_DURATION",
            Parameter::Visibility => "VISIBILITY",
            Parameter::WaterEquivalent => "WATER_EQUIVALENT",
        }
    }
}

/// Formats a `Parameter` using its archive folder name.
///
/// # Examples
///
/// ```
/// use dwd_index::Parameter;
///
/// assert_eq!(Parameter::ClimateSummary.to_string(), "kl");
/// assert_eq!(Parameter::TemperatureAir.to_string(), "air_temperature");
/// ```
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parsing: accepts the folder name (`"kl"`) or the variant name
/// (`"CLIMATE_SUMMARY"`), ignoring ASCII case. Unknown values are rejected rather than
/// mapped to a default.
impl FromStr for Parameter {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Parameter::ALL
            .into_iter()
            .find(|p| {
                raw.eq_ignore_ascii_case(p.as_str()) || raw.eq_ignore_ascii_case(p.variant_name())
            })
            .ok_or_else(|| InvalidParameterError::new("parameter", s))
    }
}

impl TryFrom<&str> for Parameter {
    type Error = InvalidParameterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Parameter {
    type Error = InvalidParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_folder_and_variant_names() {
        assert_eq!("kl".parse::<Parameter>(), Ok(Parameter::ClimateSummary));
        assert_eq!("KL".parse::<Parameter>(), Ok(Parameter::ClimateSummary));
        assert_eq!(
            "precipitation_more".parse::<Parameter>(),
            Ok(Parameter::PrecipitationMore)
        );
        assert_eq!(Parameter::try_from("sun"), Ok(Parameter::SunshineDuration));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "air_temp".parse::<Parameter>().unwrap_err();
        assert_eq!(err.kind, "parameter");
        assert_eq!(err.to_string(), "'air_temp' is not a valid parameter");
    }

    #[test]
    fn test_folder_names_are_unique() {
        let mut names: Vec<&str> = Parameter::ALL.iter().map(Parameter::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Parameter::ALL.len());
    }
}
