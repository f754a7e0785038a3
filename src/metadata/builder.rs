use crate::constants::column_names::{HAS_FILE, STATE, STATION_ID};
use crate::error::DwdError;
use crate::indexing::provider::{FileIndexProvider, MetaIndexProvider};
use crate::metadata::normalize::normalize_column_names;
use crate::metadata::station_key::{station_keys, StationKey};
use crate::metadata::table::MetadataTable;
use crate::types::dataset_key::DatasetKey;
use crate::types::parameter::Parameter;
use crate::types::period_type::PeriodType;
use crate::types::time_resolution::TimeResolution;
use log::{debug, info, warn};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Dataset whose meta index is used to fill in `STATE` when the requested one lacks it.
pub const STATE_REFERENCE: DatasetKey = DatasetKey {
    parameter: Parameter::PrecipitationMore,
    time_resolution: TimeResolution::Daily,
    period_type: PeriodType::Historical,
};

/// Builds the metadata table for one dataset.
///
/// `parameter`, `time_resolution` and `period_type` accept either the typed enums or
/// their archive strings (`"kl"`, `"daily"`, `"historical"`). The combination is checked
/// before any provider is touched.
///
/// The resulting table has exactly one row per row of the meta index, in the same order.
/// A `STATE` column is guaranteed: when the meta index has none it is taken from the
/// [`STATE_REFERENCE`] meta index, leaving it null for stations not found there.
/// `HAS_FILE` tells whether the file index lists at least one file for the station.
///
/// Station ids are matched after trimming; numeric ids compare by value (`"01048"` equals
/// `1048`), other ids compare as text.
///
/// The `force_rebuild_*` flags invalidate the respective provider cache before fetching.
/// Invalid input is rejected first and leaves the caches untouched.
///
/// # Errors
///
/// * [`DwdError::InvalidParameter`] when a string cannot be parsed.
/// * [`DwdError::InvalidCombination`] when the archive does not offer the combination.
/// * [`DwdError::IndexUnavailable`] when a provider fails.
/// * [`DwdError::MissingColumn`] when an index has no station id column.
pub async fn build_metadata_index<M, F, P, T, R>(
    meta_provider: &M,
    file_provider: &F,
    parameter: P,
    time_resolution: T,
    period_type: R,
    force_rebuild_meta: bool,
    force_rebuild_file_index: bool,
) -> Result<MetadataTable, DwdError>
where
    M: MetaIndexProvider,
    F: FileIndexProvider,
    P: TryInto<Parameter>,
    T: TryInto<TimeResolution>,
    R: TryInto<PeriodType>,
    DwdError: From<P::Error> + From<T::Error> + From<R::Error>,
{
    let key = DatasetKey::new(
        parameter.try_into()?,
        time_resolution.try_into()?,
        period_type.try_into()?,
    );
    key.validate()?;

    if force_rebuild_meta {
        info!("Rebuilding meta index for {}", key);
        meta_provider.invalidate_cache().await;
    }
    if force_rebuild_file_index {
        info!("Rebuilding file index for {}", key);
        file_provider.invalidate_cache().await;
    }

    let mut meta_index = meta_provider.get_meta_index(key).await?;
    normalize_column_names(&mut meta_index)?;
    if meta_index.get_column_index(STATION_ID).is_none() {
        return Err(DwdError::MissingColumn(STATION_ID.to_string()));
    }
    let station_count = meta_index.height();
    debug!("Meta index for {} has {} stations", key, station_count);

    if meta_index.get_column_index(STATE).is_none() {
        info!("Meta index for {} has no {}, taking it from {}", key, STATE, STATE_REFERENCE);
        let mut reference = meta_provider.get_meta_index(STATE_REFERENCE).await?;
        normalize_column_names(&mut reference)?;
        backfill_state(&mut meta_index, &reference)?;
    }

    meta_index.with_column(Series::new(HAS_FILE.into(), vec![false; station_count]))?;

    let mut file_index = file_provider.get_file_index(key).await?;
    normalize_column_names(&mut file_index)?;
    mark_available_files(&mut meta_index, &file_index)?;

    debug_assert_eq!(meta_index.height(), station_count);
    Ok(MetadataTable::new(meta_index))
}

/// Left join of `STATE` from `reference` onto `meta_index` by station id.
/// The first reference row of a station wins, so the row count never changes.
fn backfill_state(meta_index: &mut DataFrame, reference: &DataFrame) -> Result<(), DwdError> {
    let reference_keys = station_keys(reference)?;
    let reference_states = reference
        .column(STATE)
        .map_err(|_| DwdError::MissingColumn(STATE.to_string()))?
        .cast(&DataType::String)?;

    let mut states: HashMap<StationKey, &str> = HashMap::with_capacity(reference.height());
    for (key, state) in reference_keys.into_iter().zip(reference_states.str()?) {
        if let (Some(key), Some(state)) = (key, state) {
            states.entry(key).or_insert(state);
        }
    }

    let backfilled: Vec<Option<&str>> = station_keys(meta_index)?
        .into_iter()
        .map(|key| key.and_then(|key| states.get(&key).copied()))
        .collect();
    let matched = backfilled.iter().filter(|state| state.is_some()).count();
    debug!("Backfilled {} of {} stations with a state", matched, backfilled.len());

    meta_index.with_column(Series::new(STATE.into(), backfilled))?;
    Ok(())
}

fn mark_available_files(meta_index: &mut DataFrame, file_index: &DataFrame) -> Result<(), DwdError> {
    let available: HashSet<StationKey> = station_keys(file_index)?.into_iter().flatten().collect();

    let keys = station_keys(meta_index)?;
    let missing_ids = keys.iter().filter(|key| key.is_none()).count();
    if missing_ids > 0 {
        warn!("{} stations have no {} and cannot have files", missing_ids, STATION_ID);
    }
    let has_file: Vec<bool> = keys
        .iter()
        .map(|key| key.as_ref().is_some_and(|key| available.contains(key)))
        .collect();

    meta_index.with_column(Series::new(HAS_FILE.into(), has_file))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::column_names::FILENAME;
    use crate::indexing::mock::MockIndex;
    use std::error::Error;
    use std::sync::atomic::Ordering;

    fn daily_kl() -> DatasetKey {
        DatasetKey::new(
            Parameter::ClimateSummary,
            TimeResolution::Daily,
            PeriodType::Historical,
        )
    }

    fn meta_without_state() -> Result<DataFrame, PolarsError> {
        df!(
            "Stations_id" => [44i64, 1048, 99999],
            "Stationsname" => ["Großenkneten", "Dresden-Klotzsche", "Nirgendwo"]
        )
    }

    fn state_reference() -> Result<DataFrame, PolarsError> {
        df!(
            "Stations_id" => [1048i64, 44, 1048],
            "Bundesland" => ["Sachsen", "Niedersachsen", "Bayern"]
        )
    }

    fn file_index() -> Result<DataFrame, PolarsError> {
        df!(
            STATION_ID => [1048i64],
            FILENAME => ["daily/kl/historical/tageswerte_KL_01048_19340101_20181231_hist.zip"]
        )
    }

    #[tokio::test]
    async fn test_state_backfilled_and_row_count_preserved() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), meta_without_state()?)
            .with_frame(STATE_REFERENCE, state_reference()?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        assert_eq!(table.height(), 3);
        let states: Vec<Option<&str>> = table.frame.column(STATE)?.str()?.into_iter().collect();
        assert_eq!(states, vec![Some("Niedersachsen"), Some("Sachsen"), None]);
        assert_eq!(meta.fetched_keys(), vec![daily_kl(), STATE_REFERENCE]);
        Ok(())
    }

    #[tokio::test]
    async fn test_present_state_skips_reference() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default().with_frame(
            daily_kl(),
            df!("STATIONS_ID" => [1048i64], "BUNDESLAND" => ["Sachsen"])?,
        );
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(
            &meta,
            &files,
            Parameter::ClimateSummary,
            TimeResolution::Daily,
            PeriodType::Historical,
            false,
            false,
        )
        .await?;

        assert_eq!(meta.fetched_keys(), vec![daily_kl()]);
        assert_eq!(table.frame.column(STATE)?.str()?.get(0), Some("Sachsen"));
        Ok(())
    }

    #[tokio::test]
    async fn test_has_file_marks_listed_stations() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), meta_without_state()?)
            .with_frame(STATE_REFERENCE, state_reference()?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        let has_file: Vec<Option<bool>> = table.frame.column(HAS_FILE)?.bool()?.into_iter().collect();
        assert_eq!(has_file, vec![Some(false), Some(true), Some(false)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_string_station_ids_are_matched() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default().with_frame(
            daily_kl(),
            df!(STATION_ID => ["00044", "01048"], STATE => ["Niedersachsen", "Sachsen"])?,
        );
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        let has_file: Vec<Option<bool>> = table.frame.column(HAS_FILE)?.bool()?.into_iter().collect();
        assert_eq!(has_file, vec![Some(false), Some(true)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_string_fails_before_any_provider_call() {
        let meta = MockIndex::default();
        let files = MockIndex::default();

        let result =
            build_metadata_index(&meta, &files, "kl", "fortnightly", "historical", true, true).await;

        assert!(matches!(result, Err(DwdError::InvalidParameter(_))));
        assert_eq!(meta.calls(), 0);
        assert_eq!(files.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_combination_fails_before_any_provider_call() {
        let meta = MockIndex::default();
        let files = MockIndex::default();

        let result = build_metadata_index(
            &meta,
            &files,
            Parameter::Precipitation,
            TimeResolution::Annual,
            PeriodType::Historical,
            true,
            false,
        )
        .await;

        assert!(matches!(result, Err(DwdError::InvalidCombination(_))));
        assert_eq!(meta.calls(), 0);
        assert_eq!(files.calls(), 0);
    }

    #[tokio::test]
    async fn test_force_flags_invalidate_providers() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), meta_without_state()?)
            .with_frame(STATE_REFERENCE, state_reference()?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        build_metadata_index(&meta, &files, "kl", "daily", "historical", true, false).await?;
        assert_eq!(meta.invalidations.load(Ordering::SeqCst), 1);
        assert_eq!(files.invalidations.load(Ordering::SeqCst), 0);

        build_metadata_index(&meta, &files, "kl", "daily", "historical", false, true).await?;
        assert_eq!(meta.invalidations.load(Ordering::SeqCst), 1);
        assert_eq!(files.invalidations.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file_index_is_unavailable() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default().with_frame(
            daily_kl(),
            df!(STATION_ID => [1048i64], STATE => ["Sachsen"])?,
        );
        let files = MockIndex::default();

        let result = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await;
        assert!(matches!(result, Err(DwdError::IndexUnavailable(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_station_id_column() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default().with_frame(daily_kl(), df!(STATE => ["Sachsen"])?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let result = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await;
        assert!(matches!(result, Err(DwdError::MissingColumn(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_padded_station_ids_are_matched() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), df!(STATION_ID => ["  1048", "01048 ", "1048", "  "])?)
            .with_frame(STATE_REFERENCE, df!(STATION_ID => ["1048 "], STATE => ["Sachsen"])?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        let has_file: Vec<Option<bool>> = table.frame.column(HAS_FILE)?.bool()?.into_iter().collect();
        assert_eq!(has_file, vec![Some(true), Some(true), Some(true), Some(false)]);
        let states: Vec<Option<&str>> = table.frame.column(STATE)?.str()?.into_iter().collect();
        assert_eq!(states, vec![Some("Sachsen"), Some("Sachsen"), Some("Sachsen"), None]);
        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_station_ids_compare_as_text() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default().with_frame(
            daily_kl(),
            df!(STATION_ID => ["A1048", "B1048"], STATE => ["Sachsen", "Sachsen"])?,
        );
        let files = MockIndex::default().with_frame(
            daily_kl(),
            df!(STATION_ID => [" A1048"], FILENAME => ["daily/kl/historical/a.zip"])?,
        );

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        let has_file: Vec<Option<bool>> = table.frame.column(HAS_FILE)?.bool()?.into_iter().collect();
        assert_eq!(has_file, vec![Some(true), Some(false)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_reference_without_state_column() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), meta_without_state()?)
            .with_frame(STATE_REFERENCE, df!("Stations_id" => [1048i64])?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let result = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await;
        match result {
            Err(DwdError::MissingColumn(column)) => assert_eq!(column, STATE),
            other => panic!("expected missing {} column, got {:?}", STATE, other),
        }
        assert_eq!(files.calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_meta_index_gives_empty_table() -> Result<(), Box<dyn Error>> {
        let meta = MockIndex::default()
            .with_frame(daily_kl(), df!("Stations_id" => Vec::<i64>::new())?)
            .with_frame(STATE_REFERENCE, state_reference()?);
        let files = MockIndex::default().with_frame(daily_kl(), file_index()?);

        let table = build_metadata_index(&meta, &files, "kl", "daily", "historical", false, false)
            .await?;

        assert_eq!(table.height(), 0);
        assert!(table.frame.get_column_index(STATE).is_some());
        assert!(table.frame.get_column_index(HAS_FILE).is_some());
        Ok(())
    }
}
