//! Which parameters and period types the archive offers for each time resolution.

use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;
use std::fmt;

/// Allowed parameters and period types for one time resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub time_resolution: TimeResolution,
    pub parameters: &'static [Parameter],
    pub period_types: &'static [PeriodType],
}

const HISTORICAL_RECENT_NOW: &[PeriodType] =
    &[PeriodType::Historical, PeriodType::Recent, PeriodType::Now];
const HISTORICAL_RECENT: &[PeriodType] = &[PeriodType::Historical, PeriodType::Recent];

/// One entry per time resolution, finest first.
pub const TIME_RESOLUTION_PARAMETER_MAPPING: [AvailabilityEntry; 6] = [
    AvailabilityEntry {
        time_resolution: TimeResolution::Minute1,
        parameters: &[Parameter::Precipitation],
        period_types: HISTORICAL_RECENT_NOW,
    },
    AvailabilityEntry {
        time_resolution: TimeResolution::Minute10,
        parameters: &[
            Parameter::TemperatureAir,
            Parameter::TemperatureExtreme,
            Parameter::WindExtreme,
            Parameter::Precipitation,
            Parameter::Solar,
            Parameter::Wind,
        ],
        period_types: HISTORICAL_RECENT_NOW,
    },
    AvailabilityEntry {
        time_resolution: TimeResolution::Hourly,
        parameters: &[
            Parameter::TemperatureAir,
            Parameter::CloudType,
            Parameter::Cloudiness,
            Parameter::Precipitation,
            Parameter::Pressure,
            Parameter::TemperatureSoil,
            Parameter::Solar,
            Parameter::SunshineDuration,
            Parameter::Visibility,
            Parameter::Wind,
        ],
        period_types: HISTORICAL_RECENT,
    },
    AvailabilityEntry {
        time_resolution: TimeResolution::Daily,
        parameters: &[
            Parameter::ClimateSummary,
            Parameter::PrecipitationMore,
            Parameter::TemperatureSoil,
            Parameter::Solar,
            Parameter::WaterEquivalent,
        ],
        period_types: HISTORICAL_RECENT,
    },
    AvailabilityEntry {
        time_resolution: TimeResolution::Monthly,
        parameters: &[Parameter::ClimateSummary, Parameter::PrecipitationMore],
        period_types: HISTORICAL_RECENT,
    },
    AvailabilityEntry {
        time_resolution: TimeResolution::Annual,
        parameters: &[Parameter::ClimateSummary, Parameter::PrecipitationMore],
        period_types: HISTORICAL_RECENT,
    },
];

/// Looks up the entry for `time_resolution`.
pub fn availability(time_resolution: TimeResolution) -> &'static AvailabilityEntry {
    match time_resolution {
        TimeResolution::Minute1 => &TIME_RESOLUTION_PARAMETER_MAPPING[0],
        TimeResolution::Minute10 => &TIME_RESOLUTION_PARAMETER_MAPPING[1],
        TimeResolution::Hourly => &TIME_RESOLUTION_PARAMETER_MAPPING[2],
        TimeResolution::Daily => &TIME_RESOLUTION_PARAMETER_MAPPING[3],
        TimeResolution::Monthly => &TIME_RESOLUTION_PARAMETER_MAPPING[4],
        TimeResolution::Annual => &TIME_RESOLUTION_PARAMETER_MAPPING[5],
    }
}

/// Renders the whole matrix, used in validation error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityMatrix;

impl fmt::Display for AvailabilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in TIME_RESOLUTION_PARAMETER_MAPPING.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            let parameters: Vec<&str> = entry.parameters.iter().map(Parameter::as_str).collect();
            let periods: Vec<&str> = entry.period_types.iter().map(PeriodType::as_str).collect();
            write!(
                f,
                "{}: [{}] x [{}]",
                entry.time_resolution,
                parameters.join(", "),
                periods.join(", ")
            )?;
        }
        Ok(())
    }
}
