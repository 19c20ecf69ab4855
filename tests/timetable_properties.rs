//! Properties of computed timetables across cities, dates and methods.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use salat_times::time::parse_clock;
use salat_times::{
    CITIES, CalculationParams, ClockCorrection, GeoLocation, Prayer, PrayerTimeSet,
    TwilightMethod, compute_prayer_hours, compute_prayer_times, compute_prayer_times_with,
};

fn days_of(year: i32) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    (0..366)
        .map(move |i| start + Duration::days(i))
        .filter(move |d| d.year() == year)
}

fn parsed(times: &PrayerTimeSet) -> Vec<NaiveTime> {
    times.iter().map(|(_, t)| parse_clock(t).unwrap()).collect()
}

#[test]
fn six_times_strictly_increase_for_every_city_and_day() {
    let methods = [TwilightMethod::Sunni, TwilightMethod::Shia];
    let clocks = [ClockCorrection::Legacy, ClockCorrection::UtcOffset(5.0)];

    for city in CITIES {
        for date in days_of(2024) {
            for method in methods {
                for clock in clocks {
                    let params = CalculationParams::new(method).with_clock(clock);
                    let hours = compute_prayer_hours(date, city.location(), &params);
                    let values: Vec<f64> = Prayer::ALL.iter().map(|p| hours.get(*p)).collect();
                    assert!(
                        values.windows(2).all(|w| w[0] < w[1]),
                        "{} {date} {method:?} {clock:?}: {values:?}",
                        city.name()
                    );

                    let times = compute_prayer_times_with(date, city.location(), &params);
                    let clock_times = parsed(&times);
                    assert!(
                        clock_times.windows(2).all(|w| w[0] < w[1]),
                        "{} {date}: {times:?}",
                        city.name()
                    );
                }
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_strings() {
    let location = GeoLocation::new(31.5204, 74.3587).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();

    let first = compute_prayer_times(date, location, TwilightMethod::Shia);
    for _ in 0..10 {
        assert_eq!(compute_prayer_times(date, location, TwilightMethod::Shia), first);
    }
}

#[test]
fn switching_method_only_moves_fajr_and_isha() {
    for city in CITIES {
        for date in days_of(2024).step_by(5) {
            let sunni = compute_prayer_times(date, city.location(), TwilightMethod::Sunni);
            let shia = compute_prayer_times(date, city.location(), TwilightMethod::Shia);

            assert_eq!(sunni.sunrise, shia.sunrise);
            assert_eq!(sunni.dhuhr, shia.dhuhr);
            assert_eq!(sunni.asr, shia.asr);
            assert_eq!(sunni.maghrib, shia.maghrib);

            // Shallower angles: later dawn, earlier nightfall
            let (sf, hf) = (parse_clock(&sunni.fajr).unwrap(), parse_clock(&shia.fajr).unwrap());
            let (si, hi) = (parse_clock(&sunni.isha).unwrap(), parse_clock(&shia.isha).unwrap());
            assert!(hf > sf, "{} {date}", city.name());
            assert!(hi < si, "{} {date}", city.name());
        }
    }
}

#[test]
fn karachi_dhuhr_is_around_half_past_noon() {
    let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
    let earliest = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let latest = NaiveTime::from_hms_opt(12, 35, 0).unwrap();

    for date in days_of(2024) {
        let times = compute_prayer_times(date, karachi, TwilightMethod::Sunni);
        let dhuhr = parse_clock(&times.dhuhr).unwrap();
        assert!((earliest..=latest).contains(&dhuhr), "{date}: {}", times.dhuhr);
        assert!(times.dhuhr.ends_with("PM"));
    }
}

#[test]
fn karachi_fixed_date_timetable() {
    let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let times = compute_prayer_times(date, karachi, TwilightMethod::Sunni);

    assert_eq!(times.fajr, "4:14 AM");
    assert_eq!(times.sunrise, "5:42 AM");
    assert_eq!(times.dhuhr, "12:29 PM");
    assert_eq!(times.asr, "7:13 PM");
    assert_eq!(times.maghrib, "7:17 PM");
    assert_eq!(times.isha, "8:44 PM");
}

#[test]
fn explicit_pkt_offset_tracks_the_75th_meridian() {
    let karachi = GeoLocation::new(24.8607, 67.0011).unwrap();
    let lahore = GeoLocation::new(31.5204, 74.3587).unwrap();
    let params = CalculationParams::new(TwilightMethod::Sunni)
        .with_clock(ClockCorrection::utc_offset(5.0).unwrap());
    let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();

    let karachi_noon = compute_prayer_hours(date, karachi, &params).dhuhr;
    let lahore_noon = compute_prayer_hours(date, lahore, &params).dhuhr;
    // Four minutes of clock time per degree of longitude
    let expected_minutes = (74.3587 - 67.0011) * 4.0;
    assert!(((karachi_noon - lahore_noon) * 60.0 - expected_minutes).abs() < 1e-6);
}

#[test]
fn polar_inputs_never_panic_and_stay_well_formed() {
    let dates = [
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
    ];
    let latitudes = [90.0, 89.0, 70.0, 66.5, -66.5, -70.0, -89.0, -90.0];

    for latitude in latitudes {
        let location = GeoLocation::new(latitude, 25.0).unwrap();
        for date in dates {
            for method in [TwilightMethod::Sunni, TwilightMethod::Shia] {
                let hours = compute_prayer_hours(date, location, &CalculationParams::new(method));
                for prayer in Prayer::ALL {
                    let value = hours.get(prayer);
                    assert!((0.0..24.0).contains(&value), "{latitude} {date} {prayer}: {value}");
                }

                let times = compute_prayer_times(date, location, method);
                assert_eq!(parsed(&times).len(), 6);
            }
        }
    }
}

#[test]
fn midsummer_near_the_pole_collapses_to_solar_midnight() {
    let location = GeoLocation::new(89.0, 25.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let times = compute_prayer_times(date, location, TwilightMethod::Sunni);

    // The sun never reaches any depression: every non-noon event clamps to 180°
    assert_eq!(times.fajr, times.isha);
    assert_eq!(times.sunrise, times.maghrib);
    assert_eq!(times.fajr, times.sunrise);
    assert_ne!(times.dhuhr, times.fajr);
}
