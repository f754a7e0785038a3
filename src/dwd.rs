//! This module provides the main entry point for building DWD station metadata indexes.
//! A [`DwdIndex`] owns the providers for meta indexes and file indexes and combines them
//! into [`MetadataTable`]s.

use crate::error::DwdError;
use crate::indexing::file_index::create_file_list;
use crate::indexing::provider::{FileIndexProvider, MetaIndexProvider};
use crate::metadata::builder::build_metadata_index;
use crate::metadata::table::MetadataTable;
use crate::types::dataset_key::DatasetKey;
use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;
use bon::bon;

/// The main client for building metadata indexes of the DWD climate archive.
///
/// How indexes are obtained is left to the providers. Wrap them in
/// [`crate::CachedIndex`] to keep fetched indexes in memory between calls.
///
/// # Examples
///
/// ```rust,no_run
/// # use dwd_index::{DwdIndex, DwdError, MetaIndexProvider, FileIndexProvider};
/// # async fn run<M: MetaIndexProvider, F: FileIndexProvider>(meta: M, files: F) -> Result<(), DwdError> {
/// let client = DwdIndex::new(meta, files);
/// let table = client
///     .metadata()
///     .parameter("kl")
///     .time_resolution("daily")
///     .period_type("historical")
///     .call()
///     .await?;
/// println!("{} stations", table.height());
/// # Ok(())
/// # }
/// ```
pub struct DwdIndex<M, F> {
    meta_index: M,
    file_index: F,
}

#[bon]
impl<M: MetaIndexProvider, F: FileIndexProvider> DwdIndex<M, F> {
    pub fn new(meta_index: M, file_index: F) -> Self {
        Self {
            meta_index,
            file_index,
        }
    }

    pub fn meta_index(&self) -> &M {
        &self.meta_index
    }

    pub fn file_index(&self) -> &F {
        &self.file_index
    }

    /// Builds the metadata table of one dataset.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.parameter(..)`: **Required.** A [`Parameter`] or its archive name, e.g. `"kl"`.
    /// * `.time_resolution(..)`: **Required.** A [`TimeResolution`] or its name, e.g. `"daily"`.
    /// * `.period_type(..)`: **Required.** A [`PeriodType`] or its name, e.g. `"historical"`.
    /// * `.force_rebuild_meta(bool)`: Optional. Invalidates the meta index cache first. Defaults to `false`.
    /// * `.force_rebuild_file_index(bool)`: Optional. Invalidates the file index cache first. Defaults to `false`.
    ///
    /// # Errors
    ///
    /// See [`build_metadata_index`].
    #[builder]
    pub async fn metadata<P, T, R>(
        &self,
        parameter: P,
        time_resolution: T,
        period_type: R,
        force_rebuild_meta: Option<bool>,
        force_rebuild_file_index: Option<bool>,
    ) -> Result<MetadataTable, DwdError>
    where
        P: TryInto<Parameter>,
        T: TryInto<TimeResolution>,
        R: TryInto<PeriodType>,
        DwdError: From<P::Error> + From<T::Error> + From<R::Error>,
    {
        build_metadata_index(
            &self.meta_index,
            &self.file_index,
            parameter,
            time_resolution,
            period_type,
            force_rebuild_meta.unwrap_or(false),
            force_rebuild_file_index.unwrap_or(false),
        )
        .await
    }

    /// Remote paths of all files the file index of `key` lists for `station_ids`.
    pub async fn file_list(
        &self,
        key: DatasetKey,
        station_ids: &[i64],
    ) -> Result<Vec<String>, DwdError> {
        key.validate()?;
        let file_index = self.file_index.get_file_index(key).await?;
        Ok(create_file_list(&file_index, station_ids)?)
    }
}
