use crate::constants::parameter_mapping::{availability, AvailabilityMatrix};
use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;
use thiserror::Error;

/// A well-formed triple that the archive does not publish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Combination of time_resolution={time_resolution}, parameter={parameter} and \
     period_type={period_type} not available. Possible combinations are: {matrix}",
    matrix = AvailabilityMatrix
)]
pub struct InvalidCombinationError {
    pub parameter: Parameter,
    pub time_resolution: TimeResolution,
    pub period_type: PeriodType,
}

/// Checks that `parameter` and `period_type` are both offered at `time_resolution`.
///
/// This is a precondition for every index lookup; callers should run it before doing
/// any I/O for the triple.
///
/// # Examples
///
/// ```
/// use dwd_index::{check_parameters, Parameter, PeriodType, TimeResolution};
///
/// assert!(check_parameters(
///     Parameter::ClimateSummary,
///     TimeResolution::Annual,
///     PeriodType::Historical
/// )
/// .is_ok());
/// assert!(check_parameters(
///     Parameter::Precipitation,
///     TimeResolution::Annual,
///     PeriodType::Historical
/// )
/// .is_err());
/// ```
pub fn check_parameters(
    parameter: Parameter,
    time_resolution: TimeResolution,
    period_type: PeriodType,
) -> Result<(), InvalidCombinationError> {
    let entry = availability(time_resolution);
    if entry.parameters.contains(&parameter) && entry.period_types.contains(&period_type) {
        Ok(())
    } else {
        Err(InvalidCombinationError {
            parameter,
            time_resolution,
            period_type,
        })
    }
}
