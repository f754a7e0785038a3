use crate::constants::column_names::STATION_ID;
use crate::error::DwdError;
use polars::prelude::*;

/// A station id as it is compared across indexes.
///
/// Numeric ids compare by value, so `"01048"`, `" 1048"` and `1048` are the same station.
/// Ids that are not numbers are kept as trimmed text and compare verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum StationKey {
    Numeric(i64),
    Text(String),
}

impl StationKey {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.parse() {
            Ok(id) => Self::Numeric(id),
            Err(_) => Self::Text(trimmed.to_string()),
        })
    }

    pub(crate) fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(id) => Some(*id),
            Self::Text(_) => None,
        }
    }
}

/// One key per row of `frame`, read from its `STATION_ID` column whatever its dtype.
/// Only null or blank ids give `None`.
pub(crate) fn station_keys(frame: &DataFrame) -> Result<Vec<Option<StationKey>>, DwdError> {
    let column = frame
        .column(STATION_ID)
        .map_err(|_| DwdError::MissingColumn(STATION_ID.to_string()))?;
    // Floats would render as "1048.0".
    let column = if column.dtype().is_float() {
        column.strict_cast(&DataType::Int64)?
    } else {
        column.clone()
    };
    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|id| id.and_then(StationKey::parse))
        .collect())
}
