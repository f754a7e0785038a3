//! Mapping from the German column headers used by the archive to the normalized
//! English names used throughout this crate.

pub const STATION_ID: &str = "STATION_ID";
pub const DATE: &str = "DATE";
pub const FROM_DATE: &str = "FROM_DATE";
pub const TO_DATE: &str = "TO_DATE";
pub const STATION_HEIGHT: &str = "STATIONHEIGHT";
pub const LAT: &str = "LAT";
pub const LON: &str = "LON";
pub const STATION_NAME: &str = "STATIONNAME";
pub const STATE: &str = "STATE";

// Columns that only exist in derived indexes.
pub const FILENAME: &str = "FILENAME";
pub const HAS_FILE: &str = "HAS_FILE";
pub const FILE_ID: &str = "FILEID";

/// Original header to normalized name. Latitude and longitude changed their header
/// between archive format versions, so both spellings map to the same name.
pub const GERMAN_TO_ENGLISH_COLUMNS: [(&str, &str); 11] = [
    ("STATIONS_ID", STATION_ID),
    ("MESS_DATUM", DATE),
    ("VON_DATUM", FROM_DATE),
    ("BIS_DATUM", TO_DATE),
    ("STATIONSHOEHE", STATION_HEIGHT),
    ("GEOBREITE", LAT),
    ("GEOGR.BREITE", LAT),
    ("GEOLAENGE", LON),
    ("GEOGR.LAENGE", LON),
    ("STATIONSNAME", STATION_NAME),
    ("BUNDESLAND", STATE),
];

/// Normalized name for an original header, ignoring ASCII case and surrounding
/// whitespace.
pub fn to_english(german: &str) -> Option<&'static str> {
    let german = german.trim();
    GERMAN_TO_ENGLISH_COLUMNS
        .iter()
        .find(|(orig, _)| orig.eq_ignore_ascii_case(german))
        .map(|(_, english)| *english)
}

/// All original headers that normalize to `english`, in table order.
pub fn german_aliases(english: &str) -> impl Iterator<Item = &'static str> + '_ {
    GERMAN_TO_ENGLISH_COLUMNS
        .iter()
        .filter(move |(_, target)| target.eq_ignore_ascii_case(english.trim()))
        .map(|(orig, _)| *orig)
}
