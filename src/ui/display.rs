use std::fmt;

use crate::data::model::{weekday_name, TripRecord};
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};

const RULE: &str = "----------------------------------------";

/// Print the horizontal rule separating report sections.
pub fn rule() {
    println!("{RULE}");
}

fn or_no_data<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "no data".to_string(),
    }
}

fn footer(elapsed: std::time::Duration) {
    println!("\nThis took {:.6} seconds.", elapsed.as_secs_f64());
    rule();
}

// ---------------------------------------------------------------------------
// Statistics reports
// ---------------------------------------------------------------------------

pub fn time_stats(stats: &TimeStats) {
    println!("\nCalculating the most frequent times of travel...\n");
    println!("Most common month:       {}", or_no_data(stats.common_month));
    println!(
        "Most common day of week: {}",
        or_no_data(stats.common_weekday.map(weekday_name))
    );
    println!("Most common start hour:  {}", or_no_data(stats.common_hour));
    footer(stats.elapsed);
}

pub fn station_stats(stats: &StationStats) {
    println!("\nCalculating the most popular stations and trip...\n");
    println!(
        "Most common start station: {}",
        or_no_data(stats.common_start.as_deref())
    );
    println!(
        "Most common end station:   {}",
        or_no_data(stats.common_end.as_deref())
    );
    println!(
        "Most common trip:          {}",
        or_no_data(stats.common_trip.as_deref())
    );
    footer(stats.elapsed);
}

pub fn duration_stats(stats: &DurationStats) {
    println!("\nCalculating trip duration...\n");
    match stats.mean_secs {
        Some(mean) => {
            println!("Total travel time: {:.0} seconds", stats.total_secs);
            println!("Mean travel time:  {mean:.2} seconds");
        }
        None => println!("No trips to sum: no data"),
    }
    footer(stats.elapsed);
}

pub fn user_stats(stats: &UserStats) {
    println!("\nCalculating user stats...\n");
    print_counts("user type", &stats.user_types);

    match &stats.genders {
        Some(counts) => print_counts("gender", counts),
        None => println!("Gender data is not available for this city."),
    }

    match &stats.birth_years {
        Some(span) => match (span.earliest, span.latest, span.common) {
            (Some(earliest), Some(latest), Some(common)) => println!(
                "Earliest birth year: {earliest}, most recent: {latest}, most common: {common}"
            ),
            _ => println!("Birth year: no data"),
        },
        None => println!("Birth year data is not available for this city."),
    }
    footer(stats.elapsed);
}

fn print_counts(label: &str, counts: &[(String, usize)]) {
    if counts.is_empty() {
        println!("Trips per {label}: no data");
        return;
    }
    println!("Trips per {label}:");
    for (value, count) in counts {
        println!("  {value}: {count}");
    }
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// Print one page of raw trips, one line per trip.
pub fn raw_rows(trips: &[TripRecord]) {
    for trip in trips {
        let user_type = if trip.user_type.is_empty() {
            "?"
        } else {
            trip.user_type.as_str()
        };
        let mut line = format!(
            "{}  {:>7.0}s  {} -> {}  [{user_type}",
            trip.start_time, trip.duration_secs, trip.start_station, trip.end_station,
        );
        if let Some(gender) = &trip.gender {
            line.push_str(&format!(", {gender}"));
        }
        if let Some(year) = trip.birth_year {
            line.push_str(&format!(", born {year}"));
        }
        line.push(']');
        println!("{line}");
    }
}
