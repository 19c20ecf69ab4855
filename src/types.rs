//! Core data types for prayer time calculations.

use crate::error::{check_coordinates, check_twilight_angle, check_utc_offset};
use crate::Result;
use core::fmt;

/// Geographic position of an observer.
///
/// # Example
/// ```
/// # use salat_times::GeoLocation;
/// let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
/// assert_eq!(karachi.latitude(), 24.8607);
/// assert!(GeoLocation::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, positive north
    latitude: f64,
    /// Longitude in degrees, positive east
    longitude: f64,
}

impl GeoLocation {
    /// Creates a location after validating the coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a location without validation, for static tables known to be in range.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the latitude in degrees (-90 to +90).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (-180 to +180).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Twilight angles used for Fajr and Isha.
///
/// Angles are depressions: degrees of the sun below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TwilightMethod {
    /// University of Islamic Sciences, Karachi: Fajr 18°, Isha 18°
    #[default]
    Sunni,
    /// Shia Ithna Ashari (Jafari): Fajr 16°, Isha 14°
    Shia,
    /// Custom depression angles
    Custom {
        /// Fajr depression angle in degrees
        fajr: f64,
        /// Isha depression angle in degrees
        isha: f64,
    },
}

impl TwilightMethod {
    /// Creates a custom method with the given Fajr and Isha depression angles.
    ///
    /// # Errors
    /// Returns `InvalidTwilightAngle` unless both angles lie strictly between 0° and 90°.
    pub fn custom(fajr: f64, isha: f64) -> Result<Self> {
        check_twilight_angle(fajr)?;
        check_twilight_angle(isha)?;
        Ok(Self::Custom { fajr, isha })
    }

    /// Gets the Fajr depression angle in degrees.
    #[must_use]
    pub const fn fajr_angle(&self) -> f64 {
        match self {
            Self::Sunni => 18.0,
            Self::Shia => 16.0,
            Self::Custom { fajr, .. } => *fajr,
        }
    }

    /// Gets the Isha depression angle in degrees.
    #[must_use]
    pub const fn isha_angle(&self) -> f64 {
        match self {
            Self::Sunni => 18.0,
            Self::Shia => 14.0,
            Self::Custom { isha, .. } => *isha,
        }
    }

    /// Human-readable method name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sunni => "Sunni (Karachi)",
            Self::Shia => "Shia (Jafari)",
            Self::Custom { .. } => "Custom",
        }
    }
}

impl fmt::Display for TwilightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom { fajr, isha } => write!(f, "Custom ({fajr}°/{isha}°)"),
            _ => f.write_str(self.name()),
        }
    }
}

/// How the afternoon (Asr) time is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrRule {
    /// Afternoon event with zero depression, mirroring sunrise without refraction
    #[default]
    ZeroDepression,
    /// Shadow length equals object height plus the noon shadow (Shafi'i, Maliki, Hanbali)
    Shafii,
    /// Shadow length equals twice the object height plus the noon shadow
    Hanafi,
}

impl AsrRule {
    /// Shadow ratio for the shadow-length rules, `None` for [`AsrRule::ZeroDepression`].
    #[must_use]
    pub const fn shadow_factor(&self) -> Option<f64> {
        match self {
            Self::ZeroDepression => None,
            Self::Shafii => Some(1.0),
            Self::Hanafi => Some(2.0),
        }
    }
}

/// Conversion from UTC hours to displayed clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClockCorrection {
    /// Local mean solar time shifted by `longitude / 15 - 4` hours.
    ///
    /// Reproduces the published timetables for the built-in Pakistani cities.
    #[default]
    Legacy,
    /// Fixed offset from UTC in hours, positive east
    UtcOffset(f64),
}

impl ClockCorrection {
    /// Creates an explicit UTC offset correction.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` outside -14..=14 hours.
    ///
    /// # Example
    /// ```
    /// # use salat_times::ClockCorrection;
    /// let pkt = ClockCorrection::utc_offset(5.0).unwrap();
    /// assert_eq!(pkt.to_clock_hours(7.0, 67.0), 12.0);
    /// ```
    pub fn utc_offset(hours: f64) -> Result<Self> {
        check_utc_offset(hours)?;
        Ok(Self::UtcOffset(hours))
    }

    /// Converts UTC hours at the given longitude to clock hours (not yet wrapped).
    #[must_use]
    pub fn to_clock_hours(&self, utc_hours: f64, longitude: f64) -> f64 {
        match self {
            Self::Legacy => {
                let local_mean_solar = utc_hours + longitude / 15.0;
                local_mean_solar + (longitude / 15.0 - 4.0)
            }
            Self::UtcOffset(offset) => utc_hours + offset,
        }
    }
}

/// Everything besides date and location that shapes a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationParams {
    /// Fajr/Isha twilight angles
    pub method: TwilightMethod,
    /// Asr derivation
    pub asr: AsrRule,
    /// UTC to clock conversion
    pub clock: ClockCorrection,
}

impl CalculationParams {
    /// Parameters for a twilight method with the default Asr rule and clock correction.
    #[must_use]
    pub fn new(method: TwilightMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Replaces the Asr rule.
    #[must_use]
    pub const fn with_asr(mut self, asr: AsrRule) -> Self {
        self.asr = asr;
        self
    }

    /// Replaces the clock correction.
    #[must_use]
    pub const fn with_clock(mut self, clock: ClockCorrection) -> Self {
        self.clock = clock;
        self
    }
}

impl From<TwilightMethod> for CalculationParams {
    fn from(method: TwilightMethod) -> Self {
        Self::new(method)
    }
}

/// The six daily prayer events, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    /// Dawn prayer, start of morning twilight
    Fajr,
    /// Sunrise (not a prayer, ends the Fajr window)
    Sunrise,
    /// Midday prayer at solar noon
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer, end of evening twilight
    Isha,
}

impl Prayer {
    /// All six events in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// The five obligatory prayers eligible as "next prayer", in canonical order.
    pub const OBLIGATORY: [Self; 5] = [
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// English name of the event.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Whether the event is one of the five obligatory prayers.
    #[must_use]
    pub const fn is_obligatory(&self) -> bool {
        !matches!(self, Self::Sunrise)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prayer instants as fractional clock hours in [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerHours {
    /// Fajr
    pub fajr: f64,
    /// Sunrise
    pub sunrise: f64,
    /// Dhuhr
    pub dhuhr: f64,
    /// Asr
    pub asr: f64,
    /// Maghrib
    pub maghrib: f64,
    /// Isha
    pub isha: f64,
}

impl PrayerHours {
    /// Gets the clock hours of one event.
    #[must_use]
    pub const fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// The six formatted prayer times for one date and place.
///
/// Each entry is a 12-hour clock string such as `"5:07 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrayerTimeSet {
    /// Fajr
    pub fajr: String,
    /// Sunrise
    pub sunrise: String,
    /// Dhuhr
    pub dhuhr: String,
    /// Asr
    pub asr: String,
    /// Maghrib
    pub maghrib: String,
    /// Isha
    pub isha: String,
}

impl PrayerTimeSet {
    /// Gets the formatted time of one event.
    #[must_use]
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// Iterates over `(event, time)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &str)> {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}
