//! The interaction loop.
//!
//! One cycle per analysis: prompt for filters, load and filter the city's
//! table, print the four statistics reports, offer a paginated raw view,
//! then offer a restart. Filter criteria flow by value from the prompt
//! stage into load/filter; no state is shared across cycles and every
//! cycle re-reads the source file.

use std::io::{self, BufRead};

use anyhow::Result;

use crate::data::model::TripTable;
use crate::data::{filter, loader};
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::ui::{display, prompt};

/// Rows shown per page of raw data.
const PAGE_SIZE: usize = 5;

/// Run the explorer against stdin until the user declines a restart.
pub fn run() -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with(&mut input)
}

/// Drive the prompt/analyze/restart cycle on an arbitrary input stream,
/// so tests can script a whole session.
pub fn run_with<R: BufRead>(input: &mut R) -> Result<()> {
    loop {
        let criteria = prompt::filter_criteria(input)?;
        display::rule();

        match loader::load_city(criteria.city) {
            Ok(table) => {
                let filtered = filter::apply(&table, &criteria);
                show_statistics(&filtered);
                raw_view(input, &table)?;
            }
            Err(e) => {
                // A missing or corrupt source file ends this cycle only;
                // the restart prompt still runs.
                log::error!("loading {} failed: {e}", criteria.city);
                println!("Could not load data for {}: {e}", criteria.city);
            }
        }

        if !prompt::confirm(input, "\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }
    Ok(())
}

fn show_statistics(table: &TripTable) {
    display::time_stats(&TimeStats::from_table(table));
    display::station_stats(&StationStats::from_table(table));
    display::duration_stats(&DurationStats::from_table(table));
    display::user_stats(&UserStats::from_table(table));
}

/// Offer the raw-row view over the full, unfiltered city table, five rows
/// at a time from the start. Each further page needs an affirmative reply.
fn raw_view<R: BufRead>(input: &mut R, table: &TripTable) -> Result<()> {
    if !prompt::confirm(
        input,
        "\nWould you like to view the raw trip data? Enter yes or no.\n",
    )? {
        return Ok(());
    }

    for (i, (start, end)) in pages(table.len(), PAGE_SIZE).into_iter().enumerate() {
        if i > 0 && !prompt::confirm(input, "\nShow five more rows? Enter yes or no.\n")? {
            return Ok(());
        }
        display::raw_rows(&table.trips[start..end]);
    }
    println!("\nEnd of data.");
    Ok(())
}

/// Half-open `(start, end)` row ranges covering `total` rows in pages of
/// `page_size`; the final page may be short.
fn pages(total: usize, page_size: usize) -> Vec<(usize, usize)> {
    assert!(page_size > 0, "page_size must be positive");
    (0..total)
        .step_by(page_size)
        .map(|start| (start, (start + page_size).min(total)))
        .collect()
}
