//! Next-prayer selection and countdown.
//!
//! The tracker is a pure function of a timetable and the current wall-clock
//! time; re-evaluating it once per second yields the countdown. After Isha the
//! next prayer is tomorrow's Fajr, recomputed for the following date.

use crate::calculator::compute_prayer_hours;
use crate::time::{clock_time, parse_clock};
use crate::{CalculationParams, GeoLocation, Prayer, PrayerTimeSet};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use core::fmt;
use log::{debug, warn};

/// The upcoming obligatory prayer and the time left until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayerState {
    prayer: Prayer,
    remaining: Duration,
    is_tomorrow: bool,
}

impl NextPrayerState {
    /// Gets the upcoming prayer (never [`Prayer::Sunrise`]).
    #[must_use]
    pub const fn prayer(&self) -> Prayer {
        self.prayer
    }

    /// Gets the time left; never negative.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Whether the upcoming prayer is tomorrow's Fajr.
    #[must_use]
    pub const fn is_tomorrow(&self) -> bool {
        self.is_tomorrow
    }

    /// Remaining time as `"{h}h {m}m"`.
    #[must_use]
    pub fn remaining_display(&self) -> String {
        format_remaining(self.remaining)
    }
}

impl fmt::Display for NextPrayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.prayer, self.remaining_display())
    }
}

/// Formats a duration as whole hours and whole minutes, e.g. `"3h 7m"`.
///
/// Both components are floored; negative durations display as `"0h 0m"`.
///
/// # Example
/// ```
/// # use salat_times::tracker::format_remaining;
/// use chrono::Duration;
///
/// assert_eq!(format_remaining(Duration::seconds(3 * 3600 + 7 * 60 + 59)), "3h 7m");
/// assert_eq!(format_remaining(Duration::seconds(59)), "0h 0m");
/// ```
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let remaining = remaining.max(Duration::zero());
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() - hours * 60;
    format!("{hours}h {minutes}m")
}

/// Selects the next obligatory prayer from a formatted timetable.
///
/// Each of the five obligatory times is placed on `now`'s date; the one with the
/// smallest strictly positive distance from `now` wins, earlier prayers winning
/// ties. Entries that fail to parse are skipped. When nothing is left today the
/// result is `tomorrow_fajr` on the following date.
///
/// # Arguments
/// * `times` - Today's formatted timetable
/// * `now` - Current local wall-clock time
/// * `tomorrow_fajr` - Fajr of the day after `now`
#[must_use]
pub fn next_prayer(
    times: &PrayerTimeSet,
    now: NaiveDateTime,
    tomorrow_fajr: NaiveTime,
) -> NextPrayerState {
    match next_prayer_today(times, now) {
        Some(state) => state,
        None => tomorrows_fajr(now, tomorrow_fajr),
    }
}

fn tomorrows_fajr(now: NaiveDateTime, fajr: NaiveTime) -> NextPrayerState {
    let remaining = match now.date().succ_opt() {
        Some(tomorrow) => tomorrow.and_time(fajr) - now,
        None => {
            warn!("no calendar day after {now}; countdown pinned at zero");
            Duration::zero()
        }
    };
    debug!("all prayers passed at {now}; next is tomorrow's Fajr");

    NextPrayerState {
        prayer: Prayer::Fajr,
        remaining: remaining.max(Duration::zero()),
        is_tomorrow: true,
    }
}

fn next_prayer_today(times: &PrayerTimeSet, now: NaiveDateTime) -> Option<NextPrayerState> {
    let today = now.date();
    let mut best: Option<(Prayer, Duration)> = None;

    for prayer in Prayer::OBLIGATORY {
        let time = match parse_clock(times.get(prayer)) {
            Ok(time) => time,
            Err(err) => {
                warn!("skipping {prayer}: {err}");
                continue;
            }
        };

        let diff = today.and_time(time) - now;
        if diff <= Duration::zero() {
            continue;
        }
        if best.is_none_or(|(_, shortest)| diff < shortest) {
            best = Some((prayer, diff));
        }
    }

    best.map(|(prayer, remaining)| NextPrayerState {
        prayer,
        remaining,
        is_tomorrow: false,
    })
}

/// Tracks the next prayer for a fixed place and set of calculation parameters.
///
/// # Example
/// ```
/// use salat_times::{compute_prayer_times, GeoLocation, NextPrayerTracker, Prayer, TwilightMethod};
/// use chrono::NaiveDate;
///
/// let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let times = compute_prayer_times(date, karachi, TwilightMethod::Sunni);
///
/// let tracker = NextPrayerTracker::new(karachi, TwilightMethod::Sunni.into());
/// let now = date.and_hms_opt(10, 0, 0).unwrap();
/// let next = tracker.compute_next(&times, now);
/// assert_eq!(next.prayer(), Prayer::Dhuhr);
/// assert!(!next.is_tomorrow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextPrayerTracker {
    location: GeoLocation,
    params: CalculationParams,
}

impl NextPrayerTracker {
    /// Creates a tracker for a place and calculation parameters.
    #[must_use]
    pub const fn new(location: GeoLocation, params: CalculationParams) -> Self {
        Self { location, params }
    }

    /// Gets the tracked location.
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Gets the calculation parameters used for the wraparound Fajr.
    #[must_use]
    pub const fn params(&self) -> &CalculationParams {
        &self.params
    }

    /// Fajr on the given date, rounded to the displayed minute.
    #[must_use]
    pub fn fajr_on(&self, date: NaiveDate) -> NaiveTime {
        clock_time(compute_prayer_hours(date, self.location, &self.params).fajr)
    }

    /// Determines the next obligatory prayer and the time left until it.
    ///
    /// Tomorrow's Fajr is only computed when every prayer of today has passed.
    #[must_use]
    pub fn compute_next(&self, times: &PrayerTimeSet, now: NaiveDateTime) -> NextPrayerState {
        next_prayer_today(times, now).unwrap_or_else(|| {
            let fajr = now
                .date()
                .succ_opt()
                .map_or_else(NaiveTime::default, |tomorrow| self.fajr_on(tomorrow));
            tomorrows_fajr(now, fajr)
        })
    }
}
