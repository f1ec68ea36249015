use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

// ---------------------------------------------------------------------------
// City – which trip log to analyze
// ---------------------------------------------------------------------------

/// One of the three cities with published trip logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of this city's trip log inside the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive lookup against the fixed city vocabulary.
    pub fn parse(input: &str) -> Option<City> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Month – filter vocabulary (the datasets cover January–June)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// Calendar number, 1 for January through 6 for June.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Case-insensitive lookup against the fixed month vocabulary.
    pub fn parse(input: &str) -> Option<Month> {
        match input.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Day-of-week helpers
// ---------------------------------------------------------------------------

/// Parse a full English weekday name, case-insensitively.
///
/// Only the seven full names are accepted; abbreviations are not part of
/// the prompt vocabulary.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    match input.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Full English name for a weekday (`chrono`'s own Display abbreviates).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ---------------------------------------------------------------------------
// FilterCriteria – validated prompt output
// ---------------------------------------------------------------------------

/// Validated user selections from the prompt stage. `None` means "all".
///
/// Instances are only built by the prompt layer after vocabulary checks,
/// so invalid values never reach the load/filter stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

// ---------------------------------------------------------------------------
// TripRecord – one row of the loaded table
// ---------------------------------------------------------------------------

/// A single trip plus the calendar fields derived once at load time.
/// Filtering and statistics read the derived fields and never re-parse
/// the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in seconds as recorded in the source file.
    pub duration_secs: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time`, 1–12.
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day of `start_time`, 0–23.
    pub hour: u32,
}

impl TripRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        start_station: String,
        end_station: String,
        duration_secs: f64,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            start_station,
            end_station,
            duration_secs,
            user_type,
            gender,
            birth_year,
        }
    }
}

// ---------------------------------------------------------------------------
// TripTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Which optional columns the loaded file carried. This is fixed per city
/// and detected from the header row, not from individual cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CitySchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// The in-memory trip table under analysis at a given stage.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub trips: Vec<TripRecord>,
    pub schema: CitySchema,
}

impl TripTable {
    pub fn new(trips: Vec<TripRecord>, schema: CitySchema) -> Self {
        TripTable { trips, schema }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
