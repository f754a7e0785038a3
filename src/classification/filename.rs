//! Decodes archive filenames into the dataset they belong to.
//!
//! The archive has no machine-readable catalog, so the dataset of a file is inferred
//! from substrings of its name, e.g. `tageswerte_KL_01048_19340101_20181231_hist.zip`
//! is daily (`tageswerte_`), climate summary (`_kl_`) and historical (`_hist`).
//! Several markers are substrings of, or share meaning with, others, so every table
//! below is checked in order and the first hit wins.

use crate::classification::error::{ClassificationError, ClassificationStage};
use crate::types::dataset_key::DatasetKey;
use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;

type Markers<T> = &'static [(&'static [&'static str], T)];

const TIME_RESOLUTION_MARKERS: Markers<TimeResolution> = &[
    (&["1minutenwerte_"], TimeResolution::Minute1),
    (&["10minutenwerte_"], TimeResolution::Minute10),
    (&["stundenwerte_"], TimeResolution::Hourly),
    (&["tageswerte_"], TimeResolution::Daily),
    (&["monatswerte_"], TimeResolution::Monthly),
    (&["jahreswerte_"], TimeResolution::Annual),
];

const PERIOD_TYPE_MARKERS: Markers<PeriodType> = &[
    (&["_hist"], PeriodType::Historical),
    (&["_akt"], PeriodType::Recent),
    (&["_now"], PeriodType::Now),
    (&["_row"], PeriodType::Row),
];

const MINUTE_1_PARAMETERS: Markers<Parameter> = &[(&["_nieder_"], Parameter::Precipitation)];

const MINUTE_10_PARAMETERS: Markers<Parameter> = &[
    (&["_tu_"], Parameter::TemperatureAir),
    (&["_tx_", "_extrema_temp_"], Parameter::TemperatureExtreme),
    (&["_fx_", "_extrema_wind_"], Parameter::WindExtreme),
    (&["_rr_", "_nieder_"], Parameter::Precipitation),
    (&["_solar_"], Parameter::Solar),
    (&["_ff_", "_wind_"], Parameter::Wind),
];

const HOURLY_PARAMETERS: Markers<Parameter> = &[
    (&["_tu_"], Parameter::TemperatureAir),
    (&["_cs_"], Parameter::CloudType),
    (&["_n_"], Parameter::Cloudiness),
    (&["_rr_"], Parameter::Precipitation),
    (&["_p0_"], Parameter::Pressure),
    (&["_eb_"], Parameter::TemperatureSoil),
    (&["_st_"], Parameter::Solar),
    (&["_sd_"], Parameter::SunshineDuration),
    (&["_vv_"], Parameter::Visibility),
    (&["_ff_"], Parameter::Wind),
];

const DAILY_PARAMETERS: Markers<Parameter> = &[
    (&["_kl_"], Parameter::ClimateSummary),
    (&["_rr_"], Parameter::PrecipitationMore),
    (&["_eb_"], Parameter::TemperatureSoil),
    (&["_st_"], Parameter::Solar),
    (&["_wa_"], Parameter::WaterEquivalent),
];

// Shared by monthly and annual files.
const SUMMARY_PARAMETERS: Markers<Parameter> = &[
    (&["_kl_"], Parameter::ClimateSummary),
    (&["_rr_"], Parameter::PrecipitationMore),
];

fn first_match<T: Copy>(filename: &str, markers: Markers<T>) -> Option<T> {
    markers
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| filename.contains(needle)))
        .map(|(_, value)| *value)
}

/// Time resolution of a lower-cased filename, if it carries one of the known markers.
pub fn time_resolution_from_filename(filename: &str) -> Option<TimeResolution> {
    first_match(filename, TIME_RESOLUTION_MARKERS)
}

/// Parameter of a lower-cased filename. The candidate markers depend on the time
/// resolution: `_rr_` is plain precipitation for hourly files but the extended
/// precipitation network for daily ones.
pub fn parameter_from_filename(filename: &str, time_resolution: TimeResolution) -> Option<Parameter> {
    let markers = match time_resolution {
        TimeResolution::Minute1 => MINUTE_1_PARAMETERS,
        TimeResolution::Minute10 => MINUTE_10_PARAMETERS,
        TimeResolution::Hourly => HOURLY_PARAMETERS,
        TimeResolution::Daily => DAILY_PARAMETERS,
        TimeResolution::Monthly | TimeResolution::Annual => SUMMARY_PARAMETERS,
    };
    first_match(filename, markers)
}

/// Period type of a lower-cased filename.
pub fn period_type_from_filename(filename: &str) -> Option<PeriodType> {
    first_match(filename, PERIOD_TYPE_MARKERS)
}

/// Determines the dataset a file belongs to from its bare name.
///
/// Matching is case-insensitive. All three parts must be found; otherwise the error
/// names the first part that could not be determined.
///
/// # Examples
///
/// ```
/// use dwd_index::{classify, Parameter, PeriodType, TimeResolution};
///
/// let key = classify("tageswerte_KL_01048_19340101_20181231_hist.zip")?;
/// assert_eq!(key.parameter, Parameter::ClimateSummary);
/// assert_eq!(key.time_resolution, TimeResolution::Daily);
/// assert_eq!(key.period_type, PeriodType::Historical);
/// # Ok::<(), dwd_index::ClassificationError>(())
/// ```
pub fn classify(filename: &str) -> Result<DatasetKey, ClassificationError> {
    let lowered = filename.to_lowercase();
    let fail = |stage| ClassificationError {
        stage,
        filename: filename.to_string(),
    };

    let time_resolution = time_resolution_from_filename(&lowered)
        .ok_or_else(|| fail(ClassificationStage::TimeResolution))?;
    let parameter = parameter_from_filename(&lowered, time_resolution)
        .ok_or_else(|| fail(ClassificationStage::Parameter))?;
    let period_type =
        period_type_from_filename(&lowered).ok_or_else(|| fail(ClassificationStage::PeriodType))?;

    Ok(DatasetKey::new(parameter, time_resolution, period_type))
}
