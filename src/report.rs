//! Plain-text timetable exports for download and sharing.

use crate::tracker::NextPrayerState;
use crate::{PrayerTimeSet, TwilightMethod};
use chrono::NaiveDate;
use core::fmt;

/// A day's timetable with the context needed to export it.
///
/// `Display` renders the multi-line download format:
///
/// ```text
/// Prayer Times for Karachi
/// Date: Wednesday, March 20, 2024
/// Method: Sunni (Karachi)
///
/// Fajr: 5:13 AM
/// ...
///
/// Next Prayer: Dhuhr in 2h 29m
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerReport<'a> {
    /// City name
    pub city: &'a str,
    /// Date of the timetable
    pub date: NaiveDate,
    /// Twilight method the times were computed with
    pub method: TwilightMethod,
    /// The six formatted times
    pub times: &'a PrayerTimeSet,
    /// Next prayer, if the report is produced for "today"
    pub next: Option<NextPrayerState>,
}

impl PrayerReport<'_> {
    fn long_date(&self) -> impl fmt::Display {
        self.date.format("%A, %B %-d, %Y")
    }

    /// Single-paragraph text for share targets.
    ///
    /// # Example
    /// ```
    /// use salat_times::{compute_prayer_times, City, PrayerReport, TwilightMethod};
    /// use chrono::NaiveDate;
    ///
    /// let city = City::find("Lahore").unwrap();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    /// let times = compute_prayer_times(date, city.location(), TwilightMethod::Shia);
    /// let report = PrayerReport { city: city.name(), date, method: TwilightMethod::Shia, times: &times, next: None };
    ///
    /// let text = report.share_text();
    /// assert!(text.starts_with("Prayer times for Lahore on Wednesday, March 20, 2024 (Shia (Jafari)): Fajr "));
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let times = self
            .times
            .iter()
            .map(|(prayer, time)| format!("{prayer} {time}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut text = format!(
            "Prayer times for {} on {} ({}): {times}.",
            self.city,
            self.long_date(),
            self.method
        );
        if let Some(next) = &self.next {
            text.push_str(&format!(" Next: {next}."));
        }
        text
    }
}

impl fmt::Display for PrayerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prayer Times for {}", self.city)?;
        writeln!(f, "Date: {}", self.long_date())?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f)?;
        for (prayer, time) in self.times.iter() {
            writeln!(f, "{prayer}: {time}")?;
        }
        if let Some(next) = &self.next {
            writeln!(f)?;
            writeln!(f, "Next Prayer: {next}")?;
        }
        Ok(())
    }
}
