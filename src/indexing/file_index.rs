//! Builds file indexes from raw directory listings of the archive.

use crate::classification::filename::classify;
use crate::constants::column_names::{FILENAME, FILE_ID, STATION_ID};
use crate::indexing::error::{BoxError, IndexKind, IndexUnavailableError};
use crate::indexing::provider::FileIndexProvider;
use crate::types::dataset_key::DatasetKey;
use log::{debug, info};
use polars::prelude::*;
use std::collections::HashSet;
use std::future::Future;

/// Lists the files below one folder of the archive, e.g. `"daily/kl/historical"`.
///
/// Entries may be bare file names or paths relative to the archive root. How the
/// listing is obtained (HTTP index page, FTP, local mirror) is up to the implementer.
pub trait ListingSource: Send + Sync {
    fn list_files(
        &self,
        remote_path: &str,
    ) -> impl Future<Output = Result<Vec<String>, BoxError>> + Send;
}

/// A [`FileIndexProvider`] that turns a directory listing into a file index.
///
/// Every `.zip` entry is classified by its name; entries belonging to another dataset,
/// entries that cannot be classified and entries without a station id are skipped.
pub struct ListingFileIndex<L> {
    listing: L,
}

impl<L: ListingSource> ListingFileIndex<L> {
    pub fn new(listing: L) -> Self {
        Self { listing }
    }
}

impl<L: ListingSource> FileIndexProvider for ListingFileIndex<L> {
    async fn get_file_index(&self, key: DatasetKey) -> Result<DataFrame, IndexUnavailableError> {
        key.validate()
            .map_err(|e| IndexUnavailableError::new(IndexKind::File, key, e))?;

        let remote_path = key.remote_path();
        let entries = self
            .listing
            .list_files(&remote_path)
            .await
            .map_err(|e| IndexUnavailableError::new(IndexKind::File, key, e))?;
        info!("Listed {} entries under {}", entries.len(), remote_path);

        build_file_index(key, &remote_path, &entries)
            .map_err(|e| IndexUnavailableError::new(IndexKind::File, key, e))
    }
}

/// Station id encoded in an archive filename: the first underscore-separated token
/// made of exactly five digits (`tageswerte_KL_01048_...` gives `1048`).
pub fn station_id_from_filename(filename: &str) -> Option<i64> {
    filename
        .split('_')
        .find(|token| token.len() == 5 && token.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// Builds the `STATION_ID` / `FILENAME` / `FILEID` frame for `key` from listing
/// entries below `remote_path`, sorted by station id and then filename.
pub fn build_file_index(
    key: DatasetKey,
    remote_path: &str,
    entries: &[String],
) -> PolarsResult<DataFrame> {
    let mut rows: Vec<(i64, String)> = entries
        .iter()
        .filter_map(|entry| {
            let name = entry.rsplit('/').next().unwrap_or(entry);
            if !name.to_lowercase().ends_with(".zip") {
                return None;
            }
            match classify(name) {
                Ok(found) if found == key => {}
                Ok(found) => {
                    debug!("Skipping {}: belongs to {}, not {}", name, found, key);
                    return None;
                }
                Err(e) => {
                    debug!("Skipping unclassifiable entry: {}", e);
                    return None;
                }
            }
            let Some(station_id) = station_id_from_filename(name) else {
                debug!("Skipping {}: no station id in filename", name);
                return None;
            };
            let path = if entry.contains('/') {
                entry.trim_start_matches('/').to_string()
            } else {
                format!("{}/{}", remote_path.trim_end_matches('/'), entry)
            };
            Some((station_id, path))
        })
        .collect();
    rows.sort();

    let station_ids: Vec<i64> = rows.iter().map(|(id, _)| *id).collect();
    let file_ids: Vec<u32> = (0..rows.len() as u32).collect();
    let filenames: Vec<String> = rows.into_iter().map(|(_, path)| path).collect();

    df!(
        STATION_ID => station_ids,
        FILENAME => filenames,
        FILE_ID => file_ids
    )
}

/// Remote paths of all files of the given stations, in file index order.
pub fn create_file_list(file_index: &DataFrame, station_ids: &[i64]) -> PolarsResult<Vec<String>> {
    let wanted: HashSet<i64> = station_ids.iter().copied().collect();
    let ids = file_index.column(STATION_ID)?.cast(&DataType::Int64)?;
    let ids = ids.i64()?;
    let names = file_index.column(FILENAME)?.str()?;

    Ok(ids
        .into_iter()
        .zip(names)
        .filter_map(|pair| match pair {
            (Some(id), Some(name)) if wanted.contains(&id) => Some(name.to_string()),
            _ => None,
        })
        .collect())
}
