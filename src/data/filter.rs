use super::model::{FilterCriteria, TripTable};

/// Return a new table containing only the trips matching `criteria`.
///
/// Month and day constraints compare against the calendar fields derived
/// at load time; `None` means no constraint. With both at `None` the
/// result is a full copy. An empty result is valid, not an error.
pub fn apply(table: &TripTable, criteria: &FilterCriteria) -> TripTable {
    let trips = table
        .trips
        .iter()
        .filter(|trip| criteria.month.is_none_or(|m| trip.month == m.number()))
        .filter(|trip| criteria.day.is_none_or(|d| trip.weekday == d))
        .cloned()
        .collect();
    TripTable::new(trips, table.schema)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, Weekday};

    use super::*;
    use crate::data::model::{City, CitySchema, Month, TripRecord};

    fn trip(start: &str) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(
            start_time,
            "A St".to_string(),
            "B St".to_string(),
            300.0,
            "Subscriber".to_string(),
            None,
            None,
        )
    }

    fn table() -> TripTable {
        TripTable::new(
            vec![
                trip("2017-01-02 08:00:00"), // January, Monday
                trip("2017-01-07 09:30:00"), // January, Saturday
                trip("2017-02-06 18:00:00"), // February, Monday
                trip("2017-06-15 07:45:00"), // June, Thursday
            ],
            CitySchema::default(),
        )
    }

    fn criteria(month: Option<Month>, day: Option<Weekday>) -> FilterCriteria {
        FilterCriteria {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn no_constraints_returns_a_full_copy() {
        let full = table();
        let out = apply(&full, &criteria(None, None));
        assert_eq!(out, full);
    }

    #[test]
    fn month_constraint_keeps_only_that_month() {
        let full = table();
        let out = apply(&full, &criteria(Some(Month::January), None));
        assert_eq!(out.len(), 2);
        assert!(out.trips.iter().all(|t| t.month == 1));
    }

    #[test]
    fn day_constraint_keeps_only_that_day() {
        let full = table();
        let out = apply(&full, &criteria(None, Some(Weekday::Mon)));
        assert_eq!(out.len(), 2);
        assert!(out.trips.iter().all(|t| t.weekday == Weekday::Mon));
    }

    #[test]
    fn combined_constraints_are_conjunctive() {
        let full = table();
        let out = apply(&full, &criteria(Some(Month::January), Some(Weekday::Mon)));
        assert_eq!(out.len(), 1);
        assert_eq!(out.trips[0], full.trips[0]);
    }

    #[test]
    fn output_is_a_subset_of_the_input() {
        let full = table();
        let out = apply(&full, &criteria(Some(Month::February), Some(Weekday::Mon)));
        assert!(out.trips.iter().all(|t| full.trips.contains(t)));
        // Excluded rows violate at least one constraint.
        for t in full.trips.iter().filter(|t| !out.trips.contains(t)) {
            assert!(t.month != 2 || t.weekday != Weekday::Mon);
        }
    }

    #[test]
    fn empty_result_is_valid() {
        let full = table();
        // No June Mondays in the fixture.
        let out = apply(&full, &criteria(Some(Month::June), Some(Weekday::Mon)));
        assert!(out.is_empty());
        assert_eq!(out.schema, full.schema);
    }
}
