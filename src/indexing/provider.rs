//! Contracts for the two external indexes the metadata builder reads from.

use crate::indexing::error::IndexUnavailableError;
use crate::types::dataset_key::DatasetKey;
use polars::prelude::DataFrame;
use std::future::Future;

/// Supplies per-station metadata for a dataset.
///
/// The returned frame holds one row per station with at least a station id column
/// (`STATION_ID` or the original `STATIONS_ID`). Further expected columns are the
/// coordinates, height, name, validity dates and, for some datasets, the state.
pub trait MetaIndexProvider: Send + Sync {
    fn get_meta_index(
        &self,
        key: DatasetKey,
    ) -> impl Future<Output = Result<DataFrame, IndexUnavailableError>> + Send;

    /// Drops anything cached so the next call rebuilds the index.
    fn invalidate_cache(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}

/// Supplies the catalog of remote files for a dataset, keyed by station.
///
/// The returned frame holds one row per file with at least `STATION_ID` and `FILENAME`.
/// Implementations are expected to validate the key and classify remote filenames, as
/// [`crate::ListingFileIndex`] does.
pub trait FileIndexProvider: Send + Sync {
    fn get_file_index(
        &self,
        key: DatasetKey,
    ) -> impl Future<Output = Result<DataFrame, IndexUnavailableError>> + Send;

    /// Drops anything cached so the next call rebuilds the index.
    fn invalidate_cache(&self) -> impl Future<Output = ()> + Send {
        async {}
    }
}
