//! Date-string parsing for `MonthGrid::contains_str`.
//!
//! Accepts the usual ISO-like shapes; any time-of-day is read and then
//! dropped, since a grid only cares about the calendar day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::GridError;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_date(input: &str) -> Result<NaiveDate, GridError> {
    let s = input.trim();

    // An explicit offset keeps the calendar day as written, no conversion.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| GridError::UnparseableDate { input: input.to_owned() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_date() {
        assert_eq!(parse_date("2018-05-01").unwrap(), ymd(2018, 5, 1));
        assert_eq!(parse_date("  2018-05-01\n").unwrap(), ymd(2018, 5, 1));
    }

    #[test]
    fn date_with_time() {
        assert_eq!(parse_date("2018-04-30 23:59:59").unwrap(), ymd(2018, 4, 30));
        assert_eq!(parse_date("2018-04-30T23:59:59").unwrap(), ymd(2018, 4, 30));
        assert_eq!(parse_date("2018-04-30 23:59:59.250").unwrap(), ymd(2018, 4, 30));
        assert_eq!(parse_date("2018-04-30 08:15").unwrap(), ymd(2018, 4, 30));
    }

    #[test]
    fn rfc3339_keeps_written_day() {
        assert_eq!(parse_date("2018-05-01T00:30:00+02:00").unwrap(), ymd(2018, 5, 1));
        assert_eq!(parse_date("2018-05-31T23:59:59Z").unwrap(), ymd(2018, 5, 31));
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in ["", "tomorrow", "2018-13-01", "2018-02-30", "01/05/2018"] {
            let err = parse_date(bad).unwrap_err();
            assert_eq!(err, GridError::UnparseableDate { input: bad.to_owned() });
        }
    }
}
