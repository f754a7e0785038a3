//! Defines the typed view of one row of a station metadata index: identification,
//! location, validity range and whether the archive currently holds a file for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One weather station as described by a metadata index.
///
/// Obtained from [`crate::MetadataTable::stations`]. The underlying table is the source
/// of truth; this struct is a convenience for callers who prefer plain Rust values over
/// a `DataFrame`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StationMetadata {
    /// The DWD station identifier (e.g. `1048` for Dresden-Klotzsche).
    pub station_id: i64,
    /// Station name as published by the archive.
    pub name: Option<String>,
    /// Federal state ("Bundesland"), either from the index itself or backfilled.
    pub state: Option<String>,
    /// Geographical location details.
    pub location: Location,
    /// Period for which the station reports data.
    pub validity: DateRange,
    /// Whether the file index lists at least one file for this station.
    pub has_file: bool,
}

/// Represents a date range with optional start and end dates.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date with data, if known.
    pub from: Option<NaiveDate>,
    /// Last date with data, if known.
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Whether `date` lies inside the range. Open ends never match.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => false,
        }
    }
}

/// Represents the geographical location of a weather station.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Station height above sea level in meters.
    pub height: Option<f64>,
}
