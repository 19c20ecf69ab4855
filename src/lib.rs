//! # Salat Times
//!
//! Islamic prayer times from a compact solar position model, plus a
//! next-prayer countdown.
//!
//! The library computes the six daily events (Fajr, Sunrise, Dhuhr, Asr,
//! Maghrib, Isha) for a date and place from the sun's declination and the
//! hour angle at which it reaches a given depression below the horizon. It
//! never fails on valid input: hour angles that do not exist at high latitudes
//! are clamped, yielding a degenerate but well-formed time.
//!
//! ## Features
//!
//! - Two twilight methods: Sunni/Karachi (18°/18°) and Shia/Jafari (16°/14°), plus custom angles
//! - Pure, deterministic calculation; no I/O and no global state
//! - Next-prayer tracking with wraparound to tomorrow's Fajr
//! - An RAII ticker that re-evaluates the countdown every second
//! - Plain-text exports for download and share
//!
//! ## Feature Flags
//!
//! - `libm`: Use pure Rust math for platform-identical results
//!
//! ## Quick Start
//!
//! ```rust
//! use salat_times::{compute_prayer_times, City, NextPrayerTracker, TwilightMethod};
//! use chrono::NaiveDate;
//!
//! let karachi = City::find("Karachi").unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let times = compute_prayer_times(date, karachi.location(), TwilightMethod::Sunni);
//!
//! for (prayer, time) in times.iter() {
//!     println!("{prayer}: {time}");
//! }
//!
//! let tracker = NextPrayerTracker::new(karachi.location(), TwilightMethod::Sunni.into());
//! let now = date.and_hms_opt(14, 0, 0).unwrap();
//! let next = tracker.compute_next(&times, now);
//! println!("Next: {} in {}", next.prayer(), next.remaining_display());
//! ```
//!
//! ## Countdown
//!
//! ```rust
//! use salat_times::watch::{PrayerWatch, SystemClock};
//! use salat_times::{compute_prayer_times, City, NextPrayerTracker, TwilightMethod};
//! use chrono::Local;
//!
//! let city = City::find("Lahore").unwrap();
//! let today = Local::now().date_naive();
//! let times = compute_prayer_times(today, city.location(), TwilightMethod::Shia);
//! let tracker = NextPrayerTracker::new(city.location(), TwilightMethod::Shia.into());
//!
//! let watch = PrayerWatch::start(tracker, times, SystemClock, |next| {
//!     println!("{next}");
//! })?;
//! watch.stop();
//! # Ok::<(), std::io::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp, // Exact comparisons of table constants in tests
)]

// Public API exports
pub use crate::calculator::{compute_prayer_hours, compute_prayer_times, compute_prayer_times_with};
pub use crate::cities::{CITIES, City};
pub use crate::error::{Error, Result};
pub use crate::report::PrayerReport;
pub use crate::tracker::{NextPrayerState, NextPrayerTracker};
pub use crate::types::{
    AsrRule, CalculationParams, ClockCorrection, GeoLocation, Prayer, PrayerHours, PrayerTimeSet,
    TwilightMethod,
};

// Algorithm modules
pub mod calculator;
pub mod tracker;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod cities;
pub mod report;
pub mod time;
pub mod watch;
