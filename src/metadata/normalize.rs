use crate::constants::column_names::to_english;
use log::{debug, warn};
use polars::prelude::*;

/// Renames original archive headers (`STATIONS_ID`, `GEOBREITE`, ...) to their
/// normalized names in place. Columns without a mapping are left untouched.
///
/// Two aliases of the same column (`GEOBREITE` and `GEOGR.BREITE`) never both survive:
/// the first one is renamed and any later alias of an already present name is dropped.
pub fn normalize_column_names(frame: &mut DataFrame) -> PolarsResult<()> {
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for name in names {
        let Some(english) = to_english(&name) else {
            continue;
        };
        if name == english {
            continue;
        }
        if frame.get_column_index(english).is_some() {
            warn!(
                "Dropping column '{}', its normalized name '{}' is already present",
                name, english
            );
            frame.drop_in_place(&name)?;
        } else {
            debug!("Renaming column '{}' to '{}'", name, english);
            frame.rename(&name, english.into())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::column_names::{LAT, LON, STATE, STATION_ID};

    #[test]
    fn test_renames_german_headers() -> Result<(), PolarsError> {
        let mut frame = df!(
            "STATIONS_ID" => [1048i64],
            "GEOBREITE" => [51.1278f64],
            "GEOGR.LAENGE" => [13.7543f64],
            "BUNDESLAND" => ["Sachsen"],
            "EXTRA" => [1i32]
        )?;
        normalize_column_names(&mut frame)?;

        let names: Vec<String> = frame.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec![STATION_ID, LAT, LON, STATE, "EXTRA"]);
        Ok(())
    }

    #[test]
    fn test_aliases_collapse_to_one_column() -> Result<(), PolarsError> {
        let mut frame = df!(
            "STATIONS_ID" => [1i64, 2],
            "GEOBREITE" => [50.0f64, 51.0],
            "GEOGR.BREITE" => [50.0f64, 51.0]
        )?;
        normalize_column_names(&mut frame)?;

        assert_eq!(frame.width(), 2);
        assert_eq!(frame.column(LAT)?.f64()?.get(1), Some(51.0));
        Ok(())
    }

    #[test]
    fn test_already_normalized_frame_is_unchanged() -> Result<(), PolarsError> {
        let mut frame = df!(STATION_ID => [1i64], LAT => [50.0f64])?;
        let before = frame.clone();
        normalize_column_names(&mut frame)?;
        assert!(frame.equals(&before));
        Ok(())
    }
}
