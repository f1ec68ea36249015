use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::model::{City, CitySchema, TripRecord, TripTable};

/// Timestamp layout shared by all three source files.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable naming the directory that holds the city CSVs.
/// Defaults to the working directory.
const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// A trip log could not be read. Propagated to the caller, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}, row {row}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{}, row {row}: bad start time {value:?}", .path.display())]
    Timestamp {
        path: PathBuf,
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

// ---------------------------------------------------------------------------
// Raw row decoding
// ---------------------------------------------------------------------------

/// One CSV row as serde sees it. The renamed headers are the fixed schema
/// contract shared by the source files; `Gender` and `Birth Year` exist
/// only in some of them. Extra columns (the unnamed index, `End Time`)
/// are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "User Type", default)]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Written as a float by the upstream export (e.g. `1992.0`).
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Load a city's trip log from the standard data directory.
pub fn load_city(city: City) -> Result<TripTable, LoadError> {
    load_file(&data_dir().join(city.data_file()))
}

/// Load a trip log from an explicit path, deriving the calendar fields
/// (month, weekday, hour) for every row.
pub fn load_file(path: &Path) -> Result<TripTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let schema = CitySchema {
        has_gender: headers.iter().any(|h| h == "Gender"),
        has_birth_year: headers.iter().any(|h| h == "Birth Year"),
    };

    let mut trips = Vec::new();
    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            row,
            source,
        })?;

        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, TIMESTAMP_FORMAT)
            .map_err(|source| LoadError::Timestamp {
                path: path.to_path_buf(),
                row,
                value: raw.start_time.clone(),
                source,
            })?;

        trips.push(TripRecord::new(
            start_time,
            raw.start_station,
            raw.end_station,
            raw.duration_secs,
            raw.user_type,
            raw.gender,
            raw.birth_year.map(|y| y as i32),
        ));
    }

    log::info!("loaded {} trips from {}", trips.len(), path.display());
    Ok(TripTable::new(trips, schema))
}

/// Resolve the directory holding the city CSV files.
fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::Weekday;
    use tempfile::NamedTempFile;

    use super::*;

    /// Helper to write a temp CSV file.
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    const FULL_SCHEMA: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:15:00,2017-01-02 08:25:00,600.0,A St,B St,Subscriber,Male,1992.0
1,2017-06-21 17:05:30,2017-06-21 17:20:30,900.0,B St,A St,Customer,,
";

    const NO_DEMOGRAPHICS: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-05 12:00:00,2017-03-05 12:10:00,612.5,C Ave,D Ave,Subscriber
";

    #[test]
    fn loads_rows_and_derives_calendar_fields() {
        let file = create_temp_csv(FULL_SCHEMA);
        let table = load_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.trips[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, Weekday::Mon);
        assert_eq!(first.hour, 8);
        assert_eq!(first.duration_secs, 600.0);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        // Empty optional cells become None.
        let second = &table.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
    }

    #[test]
    fn detects_optional_columns_from_the_header() {
        let with = load_file(create_temp_csv(FULL_SCHEMA).path()).unwrap();
        assert!(with.schema.has_gender);
        assert!(with.schema.has_birth_year);

        let without = load_file(create_temp_csv(NO_DEMOGRAPHICS).path()).unwrap();
        assert!(!without.schema.has_gender);
        assert!(!without.schema.has_birth_year);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = load_file(Path::new("/nonexistent/enoent.csv"));
        assert!(matches!(result, Err(LoadError::Open { .. })));
    }

    #[test]
    fn unparseable_start_time_is_a_timestamp_error() {
        let file = create_temp_csv(
            "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,01/02/2017 08:15,01/02/2017 08:25,600.0,A St,B St,Subscriber
",
        );
        let result = load_file(file.path());
        assert!(matches!(result, Err(LoadError::Timestamp { row: 0, .. })));
    }

    #[test]
    fn non_numeric_duration_is_a_csv_error() {
        let file = create_temp_csv(
            "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 08:15:00,2017-01-02 08:25:00,soon,A St,B St,Subscriber
",
        );
        let result = load_file(file.path());
        assert!(matches!(result, Err(LoadError::Csv { row: 0, .. })));
    }
}
