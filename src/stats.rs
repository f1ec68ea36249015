//! Descriptive statistics over a [`TripTable`].
//!
//! Four independent read-only passes: travel times, stations, trip
//! durations, and user demographics. Every mode-style statistic breaks
//! ties toward the value that appears first in table order, so results
//! are deterministic for a given file. All passes are defined on an
//! empty table: modes come back as `None`, frequency lists as empty.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use chrono::Weekday;

use crate::data::model::TripTable;

// ---------------------------------------------------------------------------
// Mode / frequency helpers
// ---------------------------------------------------------------------------

/// Most frequent value, or `None` for an empty iterator.
/// Ties resolve to the value encountered first.
fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for value in order {
        let count = counts[&value];
        if best.as_ref().map_or(true, |(_, n)| count > *n) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency of each distinct value, most common first. Equal counts keep
/// first-seen order (stable sort).
fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut out: Vec<(T, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

// ---------------------------------------------------------------------------
// Time statistics
// ---------------------------------------------------------------------------

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Modal calendar month, 1–12.
    pub common_month: Option<u32>,
    pub common_weekday: Option<Weekday>,
    /// Modal start hour, 0–23.
    pub common_hour: Option<u32>,
    pub elapsed: Duration,
}

impl TimeStats {
    pub fn from_table(table: &TripTable) -> Self {
        let started = Instant::now();
        TimeStats {
            common_month: mode(table.trips.iter().map(|t| t.month)),
            common_weekday: mode(table.trips.iter().map(|t| t.weekday)),
            common_hour: mode(table.trips.iter().map(|t| t.hour)),
            elapsed: started.elapsed(),
        }
    }
}

// ---------------------------------------------------------------------------
// Station statistics
// ---------------------------------------------------------------------------

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: Option<String>,
    pub common_end: Option<String>,
    /// Mode of the combined `"start/end"` key.
    pub common_trip: Option<String>,
    pub elapsed: Duration,
}

impl StationStats {
    pub fn from_table(table: &TripTable) -> Self {
        let started = Instant::now();
        let common_start = mode(table.trips.iter().map(|t| t.start_station.as_str()));
        let common_end = mode(table.trips.iter().map(|t| t.end_station.as_str()));
        let common_trip = mode(
            table
                .trips
                .iter()
                .map(|t| format!("{}/{}", t.start_station, t.end_station)),
        );
        StationStats {
            common_start: common_start.map(str::to_owned),
            common_end: common_end.map(str::to_owned),
            common_trip,
            elapsed: started.elapsed(),
        }
    }
}

// ---------------------------------------------------------------------------
// Duration statistics
// ---------------------------------------------------------------------------

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Sum of all durations in seconds; 0.0 for an empty table.
    pub total_secs: f64,
    /// Arithmetic mean in seconds; `None` for an empty table.
    pub mean_secs: Option<f64>,
    pub elapsed: Duration,
}

impl DurationStats {
    pub fn from_table(table: &TripTable) -> Self {
        let started = Instant::now();
        let total_secs: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
        let mean_secs = if table.is_empty() {
            None
        } else {
            Some(total_secs / table.len() as f64)
        };
        DurationStats {
            total_secs,
            mean_secs,
            elapsed: started.elapsed(),
        }
    }
}

// ---------------------------------------------------------------------------
// User statistics
// ---------------------------------------------------------------------------

/// Earliest, latest, and most common rider birth year. All fields are
/// `None` when the column exists but the table has no values in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
    pub common: Option<i32>,
}

/// Rider demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Trips per user type, most common first.
    pub user_types: Vec<(String, usize)>,
    /// Trips per gender; `None` when the city's file has no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// Birth year span; `None` when the city's file has no birth year column.
    pub birth_years: Option<BirthYearStats>,
    pub elapsed: Duration,
}

impl UserStats {
    pub fn from_table(table: &TripTable) -> Self {
        let started = Instant::now();

        // Empty cells are dropped from the frequency counts.
        let user_types = value_counts(
            table
                .trips
                .iter()
                .map(|t| t.user_type.as_str())
                .filter(|s| !s.is_empty()),
        )
        .into_iter()
        .map(|(s, n)| (s.to_owned(), n))
        .collect();

        let genders = table.schema.has_gender.then(|| {
            value_counts(table.trips.iter().filter_map(|t| t.gender.as_deref()))
                .into_iter()
                .map(|(s, n)| (s.to_owned(), n))
                .collect()
        });

        let birth_years = table.schema.has_birth_year.then(|| {
            let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
            BirthYearStats {
                earliest: years.iter().copied().min(),
                latest: years.iter().copied().max(),
                common: mode(years),
            }
        });

        UserStats {
            user_types,
            genders,
            birth_years,
            elapsed: started.elapsed(),
        }
    }
}
