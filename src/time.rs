//! Calendar and clock conversions.
//!
//! Julian Day Numbers for the solar model, plus the `H:MM AM/PM` clock format
//! shared by the calculator (which produces it) and the tracker (which parses it).

use crate::math::{normalize_hours, round};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Julian Day Number of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JDN: i64 = 2_451_545;

const MINUTES_PER_DAY: u32 = 24 * 60;

const CLOCK_FORMAT: &str = "%-I:%M %p";
const CLOCK_PARSE_FORMAT: &str = "%I:%M %p";

/// Computes the Julian Day Number of a Gregorian calendar date.
///
/// Uses the Fliegel–Van Flandern integer algorithm; every division truncates
/// toward zero.
///
/// # Arguments
/// * `year` - Proleptic Gregorian year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
///
/// # Example
/// ```
/// # use salat_times::time::julian_day_number;
/// assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
/// assert_eq!(julian_day_number(1970, 1, 1), 2_440_588);
/// ```
#[must_use]
pub const fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (m - 14) / 12;

    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Julian Day Number of a chrono date.
#[must_use]
pub fn julian_day_number_of(date: NaiveDate) -> i64 {
    julian_day_number(date.year(), date.month(), date.day())
}

/// Whole days elapsed between J2000.0 and the given date.
#[must_use]
pub fn days_since_j2000(date: NaiveDate) -> i64 {
    julian_day_number_of(date) - J2000_JDN
}

/// Rounds fractional clock hours to whole minutes since midnight, wrapped into one day.
fn rounded_minutes(hours: f64) -> u32 {
    let minutes = round(normalize_hours(hours) * 60.0) as u32;
    minutes % MINUTES_PER_DAY
}

/// Converts fractional clock hours to a wall-clock time, rounded to the nearest minute.
///
/// Values outside [0, 24) wrap around midnight. A rounded 60th minute carries
/// into the next hour (23:59:45 becomes 00:00).
#[must_use]
pub fn clock_time(hours: f64) -> NaiveTime {
    let seconds = rounded_minutes(hours) * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
}

/// Formats fractional clock hours as `H:MM AM/PM`.
///
/// # Example
/// ```
/// # use salat_times::time::format_clock;
/// assert_eq!(format_clock(0.0), "12:00 AM");
/// assert_eq!(format_clock(12.5), "12:30 PM");
/// assert_eq!(format_clock(17.9999), "6:00 PM");
/// ```
#[must_use]
pub fn format_clock(hours: f64) -> String {
    format_naive_clock(clock_time(hours))
}

/// Formats a wall-clock time as `H:MM AM/PM`.
#[must_use]
pub fn format_naive_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Parses a `H:MM AM/PM` string back into a wall-clock time.
///
/// Leading and trailing whitespace is ignored; the meridiem is case-insensitive.
///
/// # Errors
/// Returns `InvalidClockTime` if the input does not match the format.
///
/// # Example
/// ```
/// # use salat_times::time::parse_clock;
/// use chrono::NaiveTime;
///
/// let time = parse_clock("5:07 PM").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(17, 7, 0).unwrap());
/// assert!(parse_clock("17:07").is_err());
/// ```
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_PARSE_FORMAT)
        .map_err(|_| Error::invalid_clock_time(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day_number_reference_dates() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(julian_day_number(1970, 1, 1), 2_440_588);
        assert_eq!(julian_day_number(2024, 2, 29), 2_460_370);
        assert_eq!(julian_day_number(2024, 3, 1), 2_460_371);
        assert_eq!(julian_day_number(1858, 11, 17), 2_400_001);
    }

    #[test]
    fn test_julian_day_number_matches_chrono_day_count() {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let mut date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        while date.year() < 2040 {
            let expected = (date - epoch).num_days();
            assert_eq!(days_since_j2000(date), expected, "date={date}");
            date += chrono::Duration::days(17);
        }
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "12:00 AM");
        assert_eq!(format_clock(5.25), "5:15 AM");
        assert_eq!(format_clock(12.0), "12:00 PM");
        assert_eq!(format_clock(13.0 + 5.0 / 60.0), "1:05 PM");
        assert_eq!(format_clock(23.5), "11:30 PM");
    }

    #[test]
    fn test_format_clock_rounds_and_carries() {
        // 4:59:40 rounds up into the next hour
        assert_eq!(format_clock(4.0 + 59.0 / 60.0 + 40.0 / 3600.0), "5:00 AM");
        // 4:59:20 rounds down
        assert_eq!(format_clock(4.0 + 59.0 / 60.0 + 20.0 / 3600.0), "4:59 AM");
        // 23:59:50 wraps to midnight
        assert_eq!(format_clock(23.0 + 59.0 / 60.0 + 50.0 / 3600.0), "12:00 AM");
    }

    #[test]
    fn test_format_clock_wraps_out_of_range_hours() {
        assert_eq!(format_clock(25.0), "1:00 AM");
        assert_eq!(format_clock(-1.0), "11:00 PM");
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(
            parse_clock("12:00 AM").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock("12:30 PM").unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock(" 7:45 pm ").unwrap(),
            NaiveTime::from_hms_opt(19, 45, 0).unwrap()
        );

        assert!(parse_clock("").is_err());
        assert!(parse_clock("13:00 PM").is_err());
        assert!(parse_clock("noon").is_err());
    }

    #[test]
    fn test_formatted_clock_parses_back_to_clock_time() {
        for quarter in 0..96 {
            let hours = f64::from(quarter) * 0.25 + 0.1;
            let formatted = format_clock(hours);
            assert_eq!(parse_clock(&formatted).unwrap(), clock_time(hours), "{formatted}");
        }
    }
}
