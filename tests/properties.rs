use chrono::{Datelike, NaiveDate};
use monthgrid::{days_in_month, MonthGrid};
use proptest::prelude::*;

proptest! {
    /// Invariant: first/last day and the day list agree with the month length.
    #[test]
    fn days_span_the_month(month in 1u32..=12, year in 1600i32..2400) {
        let grid = MonthGrid::new(month, year).unwrap();
        let len  = days_in_month(year, month).unwrap();
        let days = grid.days().unwrap();

        prop_assert_eq!((grid.last_day() - grid.first_day()).num_days(), i64::from(len) - 1);
        prop_assert_eq!(days.len() as u32, len);
        prop_assert_eq!(days[0], grid.first_day());
        prop_assert_eq!(days[days.len() - 1], grid.last_day());
        prop_assert_eq!(grid.first_day().day(), 1);
        prop_assert!(days.windows(2).all(|w| (w[1] - w[0]).num_days() == 1));
    }

    /// Invariant: every row has seven consecutive days starting on week_start.
    #[test]
    fn weeks_are_aligned_rows(month in 1u32..=12, year in 1600i32..2400, start in 0u32..7) {
        let mut grid = MonthGrid::new(month, year).unwrap();
        grid.week_starts_at(start).unwrap();
        let weeks = grid.weeks().unwrap();

        prop_assert!(weeks.len() >= 4 && weeks.len() <= 6);
        for row in &weeks {
            prop_assert_eq!(row.len(), 7);
            prop_assert_eq!(row[0].weekday().num_days_from_sunday(), start);
            prop_assert_eq!((row[6] - row[0]).num_days(), 6);
        }
        for pair in weeks.windows(2) {
            prop_assert_eq!((pair[1][0] - pair[0][6]).num_days(), 1);
        }
    }

    /// Invariant: fillers stay below a full week and fill the grid exactly.
    #[test]
    fn filler_counts_complete_the_grid(month in 1u32..=12, year in 1600i32..2400, start in 0u32..7) {
        let mut grid = MonthGrid::new(month, year).unwrap();
        grid.week_starts_at(start).unwrap();

        let before = grid.previous_filler_days().unwrap();
        let after  = grid.next_filler_days().unwrap();
        let cells: usize = grid.weeks().unwrap().iter().map(Vec::len).sum();

        prop_assert!(before.len() < 7);
        prop_assert!(after.len() < 7);
        prop_assert_eq!(cells % 7, 0);
        prop_assert_eq!(before.len() + after.len(), cells - grid.days().unwrap().len());
        prop_assert!(before.iter().all(|d| *d < grid.first_day() && !grid.contains(*d)));
        prop_assert!(after.iter().all(|d| *d > grid.last_day() && !grid.contains(*d)));
    }

    /// Invariant: contains matches exactly the grid's year and month.
    #[test]
    fn contains_matches_year_and_month(
        month in 1u32..=12,
        year in 1600i32..2400,
        offset in -400i64..400,
    ) {
        let grid = MonthGrid::new(month, year).unwrap();
        let probe: NaiveDate = grid.first_day() + chrono::Duration::days(offset);
        let expected = probe.year() == year && probe.month() == month;
        prop_assert_eq!(grid.contains(probe), expected);
        let text = probe.format("%Y-%m-%d 12:00:00").to_string();
        prop_assert_eq!(grid.contains_str(&text).unwrap(), expected);
    }
}
