//! Error types for the prayer time library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by validating constructors and the clock-string parser.
///
/// The prayer time calculation itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid twilight depression angle for a custom method.
    InvalidTwilightAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// Invalid UTC offset in hours.
    InvalidUtcOffset {
        /// The invalid offset value provided.
        value: f64,
    },
    /// A clock string that is not of the form `H:MM AM/PM`.
    InvalidClockTime {
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidTwilightAngle { value } => {
                write!(
                    f,
                    "invalid twilight angle {value}° (must be between 0° and 90°)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value}h (must be between -14h and +14h)"
                )
            }
            Self::InvalidClockTime { value } => {
                write!(f, "invalid clock time {value:?} (expected H:MM AM/PM)")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid twilight angle error.
    #[must_use]
    pub const fn invalid_twilight_angle(value: f64) -> Self {
        Self::InvalidTwilightAngle { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid clock time error.
    #[must_use]
    pub fn invalid_clock_time(value: impl Into<String>) -> Self {
        Self::InvalidClockTime {
            value: value.into(),
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a twilight depression angle lies strictly between 0 and 90 degrees.
///
/// # Errors
/// Returns `InvalidTwilightAngle` otherwise.
pub fn check_twilight_angle(angle: f64) -> Result<()> {
    if !(angle > 0.0 && angle < 90.0) {
        return Err(Error::invalid_twilight_angle(angle));
    }
    Ok(())
}

/// Validates a UTC offset in hours (-14 to +14).
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is not finite or out of range.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    if !(-14.0..=14.0).contains(&hours) {
        return Err(Error::invalid_utc_offset(hours));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(24.8607).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(67.0011).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_twilight_angle_validation() {
        assert!(check_twilight_angle(18.0).is_ok());
        assert!(check_twilight_angle(0.5).is_ok());

        assert!(check_twilight_angle(0.0).is_err());
        assert!(check_twilight_angle(-4.0).is_err());
        assert!(check_twilight_angle(90.0).is_err());
        assert!(check_twilight_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_utc_offset_validation() {
        assert!(check_utc_offset(5.0).is_ok());
        assert!(check_utc_offset(-14.0).is_ok());
        assert!(check_utc_offset(5.75).is_ok());

        assert!(check_utc_offset(15.0).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_clock_time("25:00");
        assert_eq!(
            err.to_string(),
            "invalid clock time \"25:00\" (expected H:MM AM/PM)"
        );

        let err = Error::invalid_utc_offset(20.0);
        assert_eq!(
            err.to_string(),
            "invalid UTC offset 20h (must be between -14h and +14h)"
        );
    }
}
