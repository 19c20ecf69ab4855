//! Prayer time calculation from a low-order solar model.
//!
//! The sun's declination comes from the mean longitude / mean anomaly series
//! (accurate to about 0.01° for dates near J2000) and solar noon from the mean
//! noon of the observer's meridian, without an equation of time term. Every
//! event is then an hour angle east or west of noon for a given solar depression.
//!
//! The calculation is total: wherever the hour angle is undefined (polar day
//! or night for the requested depression) its cosine is clamped to [-1, 1],
//! producing a degenerate but well-formed time instead of an error.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    acos, asin, atan, cos_deg, degrees_to_radians, normalize_degrees_0_to_360, normalize_hours,
    radians_to_degrees, sin_deg, tan,
};
use crate::time::{days_since_j2000, format_clock};
use crate::{CalculationParams, GeoLocation, Prayer, PrayerHours, PrayerTimeSet, TwilightMethod};
use chrono::NaiveDate;
use log::{debug, trace};

/// Depression of the sun's centre at sunrise and sunset (solar radius plus refraction).
pub const SUNRISE_SUNSET_DEPRESSION: f64 = 0.833;

/// Mean-noon offset in days applied to the J2000 day count.
const MEAN_NOON_OFFSET_DAYS: f64 = 0.0009;

/// Below this `cos φ · cos δ` the hour angle is treated as saturated.
const DEGENERATE_DENOMINATOR: f64 = 1e-12;

/// Side of solar noon on which an event falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Morning,
    Noon,
    Evening,
}

impl Side {
    const fn sign(self) -> f64 {
        match self {
            Self::Morning => -1.0,
            Self::Noon => 0.0,
            Self::Evening => 1.0,
        }
    }
}

/// Solar quantities that depend only on the date and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    /// Solar noon in fractional UTC hours
    noon_utc: f64,
    /// Solar declination in degrees
    declination: f64,
}

impl SolarDay {
    /// Computes solar noon and declination for a date at a longitude.
    ///
    /// # Example
    /// ```
    /// # use salat_times::calculator::SolarDay;
    /// use chrono::NaiveDate;
    ///
    /// let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let day = SolarDay::new(june, 0.0);
    /// assert!((day.declination() - 23.44).abs() < 0.05);
    /// assert!((day.noon_utc() - 12.0).abs() < 0.05);
    /// ```
    #[must_use]
    pub fn new(date: NaiveDate, longitude: f64) -> Self {
        let n = days_since_j2000(date) as f64;
        let mean_noon = n + MEAN_NOON_OFFSET_DAYS - longitude / 360.0;

        Self {
            noon_utc: 12.0 + 24.0 * MEAN_NOON_OFFSET_DAYS - longitude / 15.0,
            declination: solar_declination(mean_noon),
        }
    }

    /// Gets solar noon in fractional UTC hours.
    #[must_use]
    pub const fn noon_utc(&self) -> f64 {
        self.noon_utc
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Solar declination in degrees for a (fractional) day count since J2000.
fn solar_declination(days: f64) -> f64 {
    let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.9856474 * days);
    let mean_anomaly = normalize_degrees_0_to_360(357.528 + 0.9856003 * days);
    let ecliptic_longitude = mean_longitude
        + 1.915 * sin_deg(mean_anomaly)
        + 0.020 * sin_deg(2.0 * mean_anomaly);
    let obliquity = 23.439 - 0.0000004 * days;

    radians_to_degrees(asin(sin_deg(obliquity) * sin_deg(ecliptic_longitude)))
}

/// Hour angle in degrees at which the sun's centre is `depression` degrees below the horizon.
///
/// Undefined cases are clamped: the result is 180° when the sun stays above the
/// depression all day and 0° when it never rises to it.
///
/// # Example
/// ```
/// # use salat_times::calculator::hour_angle;
/// // Equinox at the equator: sunrise is six hours before noon
/// assert!((hour_angle(0.0, 0.0, 0.0) - 90.0).abs() < 1e-9);
/// // Midsummer near the pole: clamped instead of NaN
/// assert_eq!(hour_angle(89.0, 23.4, 18.0), 180.0);
/// ```
#[must_use]
pub fn hour_angle(latitude: f64, declination: f64, depression: f64) -> f64 {
    let numerator = -sin_deg(depression) - sin_deg(latitude) * sin_deg(declination);
    let denominator = cos_deg(latitude) * cos_deg(declination);

    let cos_h = if denominator.abs() < DEGENERATE_DENOMINATOR {
        debug!("hour angle saturated at latitude {latitude}° (cos φ·cos δ ≈ 0)");
        if numerator >= 0.0 { 1.0 } else { -1.0 }
    } else {
        let raw = numerator / denominator;
        if !(-1.0..=1.0).contains(&raw) {
            debug!(
                "hour angle clamped at latitude {latitude}°, declination {declination:.3}°, depression {depression}° (cos H = {raw:.4})"
            );
        }
        raw.clamp(-1.0, 1.0)
    };

    radians_to_degrees(acos(cos_h))
}

/// Depression of the sun at Asr under a shadow-length rule (negative: the sun is above the horizon).
fn asr_depression(shadow_factor: f64, latitude: f64, declination: f64) -> f64 {
    let noon_zenith = (latitude - declination).abs();
    let shadow = shadow_factor + tan(degrees_to_radians(noon_zenith));
    -radians_to_degrees(atan(1.0 / shadow))
}

/// Depression angle and side of noon for one event.
fn event_geometry(
    prayer: Prayer,
    params: &CalculationParams,
    latitude: f64,
    declination: f64,
) -> (f64, Side) {
    match prayer {
        Prayer::Fajr => (params.method.fajr_angle(), Side::Morning),
        Prayer::Sunrise => (SUNRISE_SUNSET_DEPRESSION, Side::Morning),
        Prayer::Dhuhr => (0.0, Side::Noon),
        Prayer::Asr => match params.asr.shadow_factor() {
            None => (0.0, Side::Evening),
            Some(factor) => (asr_depression(factor, latitude, declination), Side::Evening),
        },
        Prayer::Maghrib => (SUNRISE_SUNSET_DEPRESSION, Side::Evening),
        Prayer::Isha => (params.method.isha_angle(), Side::Evening),
    }
}

/// Clock hours of a single event.
fn event_hours(
    prayer: Prayer,
    day: &SolarDay,
    location: GeoLocation,
    params: &CalculationParams,
) -> f64 {
    let latitude = location.latitude();
    let (depression, side) = event_geometry(prayer, params, latitude, day.declination);

    let offset_hours = match side {
        Side::Noon => 0.0,
        _ => side.sign() * hour_angle(latitude, day.declination, depression) / 15.0,
    };
    let utc = day.noon_utc + offset_hours;

    normalize_hours(params.clock.to_clock_hours(utc, location.longitude()))
}

/// Computes the six prayer instants as fractional clock hours.
///
/// # Arguments
/// * `date` - Calendar date in the location's local context
/// * `location` - Observer position
/// * `params` - Twilight method, Asr rule and clock correction
///
/// # Returns
/// Clock hours in [0, 24) for each event; never NaN.
///
/// # Example
/// ```
/// use salat_times::{calculator, CalculationParams, GeoLocation, TwilightMethod};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
/// let hours = calculator::compute_prayer_hours(
///     date,
///     karachi,
///     &CalculationParams::new(TwilightMethod::Sunni),
/// );
/// assert!(hours.fajr < hours.sunrise && hours.maghrib < hours.isha);
/// ```
#[must_use]
pub fn compute_prayer_hours(
    date: NaiveDate,
    location: GeoLocation,
    params: &CalculationParams,
) -> PrayerHours {
    let day = SolarDay::new(date, location.longitude());
    trace!(
        "{date}: solar noon {:.4}h UTC, declination {:.4}°",
        day.noon_utc, day.declination
    );

    let hours = |prayer| event_hours(prayer, &day, location, params);
    PrayerHours {
        fajr: hours(Prayer::Fajr),
        sunrise: hours(Prayer::Sunrise),
        dhuhr: hours(Prayer::Dhuhr),
        asr: hours(Prayer::Asr),
        maghrib: hours(Prayer::Maghrib),
        isha: hours(Prayer::Isha),
    }
}

/// Computes the six formatted prayer times with explicit calculation parameters.
#[must_use]
pub fn compute_prayer_times_with(
    date: NaiveDate,
    location: GeoLocation,
    params: &CalculationParams,
) -> PrayerTimeSet {
    format_prayer_hours(&compute_prayer_hours(date, location, params))
}

/// Computes the six formatted prayer times for a date, place and twilight method.
///
/// Uses the default Asr rule and clock correction.
///
/// # Example
/// ```
/// use salat_times::{compute_prayer_times, GeoLocation, TwilightMethod};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
/// let times = compute_prayer_times(date, karachi, TwilightMethod::Sunni);
/// assert!(times.dhuhr.starts_with("12:"));
/// assert!(times.dhuhr.ends_with("PM"));
/// ```
#[must_use]
pub fn compute_prayer_times(
    date: NaiveDate,
    location: GeoLocation,
    method: TwilightMethod,
) -> PrayerTimeSet {
    compute_prayer_times_with(date, location, &CalculationParams::new(method))
}

/// Formats numeric prayer hours as `H:MM AM/PM` strings.
#[must_use]
pub fn format_prayer_hours(hours: &PrayerHours) -> PrayerTimeSet {
    PrayerTimeSet {
        fajr: format_clock(hours.fajr),
        sunrise: format_clock(hours.sunrise),
        dhuhr: format_clock(hours.dhuhr),
        asr: format_clock(hours.asr),
        maghrib: format_clock(hours.maghrib),
        isha: format_clock(hours.isha),
    }
}
