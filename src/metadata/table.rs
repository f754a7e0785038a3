//! Contains the `MetadataTable` wrapper returned by the metadata index builder.

use crate::constants::column_names::{
    FROM_DATE, HAS_FILE, LAT, LON, STATE, STATION_HEIGHT, STATION_ID, STATION_NAME, TO_DATE,
};
use crate::error::DwdError;
use crate::metadata::station_key::station_keys;
use crate::types::station::{DateRange, Location, StationMetadata};
use chrono::NaiveDate;
use log::warn;
use polars::prelude::*;

fn get_opt_float(column: Option<&Column>, idx: usize) -> Option<f64> {
    column?.f64().ok()?.get(idx)
}

fn get_opt_str(column: Option<&Column>, idx: usize) -> Option<String> {
    column?.str().ok()?.get(idx).map(|s| s.trim().to_string())
}

fn get_opt_date(column: Option<&Column>, idx: usize) -> Option<NaiveDate> {
    let raw = column?.str().ok()?.get(idx)?.trim();
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// A column cast to `dtype`, or `None` when the frame does not have it.
fn optional_column(frame: &DataFrame, name: &str, dtype: &DataType) -> PolarsResult<Option<Column>> {
    if frame.get_column_index(name).is_none() {
        return Ok(None);
    }
    frame.column(name)?.cast(dtype).map(Some)
}

/// Station metadata for one dataset, annotated with `STATE` and `HAS_FILE`.
///
/// Instances are produced by [`crate::build_metadata_index`] and [`crate::DwdIndex::metadata`].
/// The frame keeps every column the meta index provider returned, with the original archive
/// headers renamed to the names in [`crate::constants::column_names`].
#[derive(Clone, Debug)]
pub struct MetadataTable {
    /// The underlying frame, one row per station of the meta index.
    pub frame: DataFrame,
}

impl MetadataTable {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Number of stations in the table.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Lazily restricts the table to stations the file index has at least one file for.
    ///
    /// # Example
    ///
    /// ```
    /// use dwd_index::MetadataTable;
    /// use polars::prelude::*;
    ///
    /// # fn main() -> Result<(), PolarsError> {
    /// let table = MetadataTable::new(df!(
    ///     "STATION_ID" => [44i64, 1048],
    ///     "HAS_FILE" => [false, true]
    /// )?);
    /// let with_files = table.with_files().collect()?;
    /// assert_eq!(with_files.height(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_files(&self) -> LazyFrame {
        self.frame.clone().lazy().filter(col(HAS_FILE))
    }

    /// Converts every row into a [`StationMetadata`].
    ///
    /// Only `STATION_ID` is required. Other columns may be missing or hold unparsable
    /// values, in which case the matching field is `None` (or `false` for `has_file`).
    /// Padded ids such as `" 01048"` are read as numbers. Rows whose id is blank or not
    /// numeric have no `StationMetadata` and are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`DwdError::MissingColumn`] when the frame has no `STATION_ID` column,
    /// [`DwdError::DataFrame`] when a present column cannot be cast.
    pub fn stations(&self) -> Result<Vec<StationMetadata>, DwdError> {
        let frame = &self.frame;
        let keys = station_keys(frame)?;
        let names = optional_column(frame, STATION_NAME, &DataType::String)?;
        let states = optional_column(frame, STATE, &DataType::String)?;
        let latitudes = optional_column(frame, LAT, &DataType::Float64)?;
        let longitudes = optional_column(frame, LON, &DataType::Float64)?;
        let heights = optional_column(frame, STATION_HEIGHT, &DataType::Float64)?;
        let from_dates = optional_column(frame, FROM_DATE, &DataType::String)?;
        let to_dates = optional_column(frame, TO_DATE, &DataType::String)?;
        let has_file = optional_column(frame, HAS_FILE, &DataType::Boolean)?;

        let stations: Vec<StationMetadata> = keys
            .iter()
            .enumerate()
            .filter_map(|(idx, key)| {
                Some(StationMetadata {
                    station_id: key.as_ref()?.as_numeric()?,
                    name: get_opt_str(names.as_ref(), idx),
                    state: get_opt_str(states.as_ref(), idx),
                    location: Location {
                        latitude: get_opt_float(latitudes.as_ref(), idx),
                        longitude: get_opt_float(longitudes.as_ref(), idx),
                        height: get_opt_float(heights.as_ref(), idx),
                    },
                    validity: DateRange {
                        from: get_opt_date(from_dates.as_ref(), idx),
                        to: get_opt_date(to_dates.as_ref(), idx),
                    },
                    has_file: has_file
                        .as_ref()
                        .and_then(|c| c.bool().ok()?.get(idx))
                        .unwrap_or(false),
                })
            })
            .collect();

        let skipped = keys.len() - stations.len();
        if skipped > 0 {
            warn!(
                "Skipped {} of {} rows without a numeric {}",
                skipped,
                keys.len(),
                STATION_ID
            );
        }
        Ok(stations)
    }
}
