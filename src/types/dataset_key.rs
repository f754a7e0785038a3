use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;
use crate::validation::{check_parameters, InvalidCombinationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (parameter, time resolution, period type) triple identifying one dataset folder
/// of the archive.
///
/// This is both the result of classifying a filename and the key every index lookup is
/// made with.
///
/// # Examples
///
/// ```
/// use dwd_index::{DatasetKey, Parameter, PeriodType, TimeResolution};
///
/// let key = DatasetKey::new(
///     Parameter::ClimateSummary,
///     TimeResolution::Daily,
///     PeriodType::Historical,
/// );
/// assert_eq!(key.remote_path(), "daily/kl/historical");
/// assert!(key.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub parameter: Parameter,
    pub time_resolution: TimeResolution,
    pub period_type: PeriodType,
}

impl DatasetKey {
    pub fn new(
        parameter: Parameter,
        time_resolution: TimeResolution,
        period_type: PeriodType,
    ) -> Self {
        Self {
            parameter,
            time_resolution,
            period_type,
        }
    }

    /// Folder of this dataset relative to the archive root, e.g. `"hourly/wind/recent"`.
    pub fn remote_path(&self) -> String {
        format!(
            "{}/{}/{}",
            self.time_resolution, self.parameter, self.period_type
        )
    }

    /// Name of a locally stored artifact for this dataset, e.g.
    /// `metadata_kl_daily_historical.csv` for `file_type = "metadata"` and
    /// `postfix = ".csv"`.
    pub fn local_file_name(&self, file_type: &str, postfix: &str) -> String {
        format!(
            "{}_{}_{}_{}{}",
            file_type, self.parameter, self.time_resolution, self.period_type, postfix
        )
    }

    /// Checks this key against the availability matrix.
    pub fn validate(&self) -> Result<(), InvalidCombinationError> {
        check_parameters(self.parameter, self.time_resolution, self.period_type)
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.remote_path())
    }
}
