//! Module for handling date parsing and formatting.
//!
//! Dates use the fixed `YYYY-MM-DD` layout. Month lengths come from a fixed
//! table without a leap-year exception, so February never has a 29th.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Output format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Day count for each month, January first
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Check the `\d{4}-\d{2}-\d{2}` layout
#[must_use]
pub fn matches_date_layout(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a date string under the fixed month table
///
/// Returns `None` if the layout does not match, the month is outside 1-12,
/// or the day is zero or exceeds the month's table entry.
#[must_use]
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    if !matches_date_layout(s) {
        return None;
    }

    // Layout guarantees ASCII digits at these positions
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }
    let max_day = DAYS_IN_MONTH[(month - 1) as usize];
    if day == 0 || day > max_day {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date supplied as a filter argument
pub fn parse_date_argument(s: &str) -> Result<NaiveDate> {
    parse_calendar_date(s).ok_or_else(|| Error::InvalidDate(s.to_string()))
}

/// Format a date back into its `YYYY-MM-DD` form
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates() {
        assert_eq!(
            parse_calendar_date("2020-03-15"),
            NaiveDate::from_ymd_opt(2020, 3, 15)
        );
        assert!(parse_calendar_date("2021-12-31").is_some());
        assert!(parse_calendar_date("2021-02-28").is_some());
    }

    #[test]
    fn rejects_february_29_even_in_leap_years() {
        assert!(parse_calendar_date("2020-02-29").is_none());
        assert!(parse_calendar_date("2024-02-29").is_none());
    }

    #[test]
    fn rejects_out_of_range_parts() {
        assert!(parse_calendar_date("2020-13-01").is_none());
        assert!(parse_calendar_date("2020-00-10").is_none());
        assert!(parse_calendar_date("2020-04-31").is_none());
        assert!(parse_calendar_date("2020-04-00").is_none());
    }

    #[test]
    fn rejects_bad_layout() {
        assert!(parse_calendar_date("2020-3-15").is_none());
        assert!(parse_calendar_date("20200315").is_none());
        assert!(parse_calendar_date("2020/03/15").is_none());
        assert!(parse_calendar_date("2020-03-15x").is_none());
        assert!(parse_calendar_date("").is_none());
    }

    #[test]
    fn format_round_trips_layout() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(format_date(date), "2021-01-05");
    }

    #[test]
    fn argument_errors_carry_input() {
        let err = parse_date_argument("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
