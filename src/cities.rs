//! Built-in table of Pakistani cities.

use crate::GeoLocation;

/// A named place the timetable can be computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    name: &'static str,
    location: GeoLocation,
}

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            location: GeoLocation::new_unchecked(latitude, longitude),
        }
    }

    /// Gets the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the coordinates.
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Looks a city up by name, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// # use salat_times::City;
    /// let city = City::find(" karachi").unwrap();
    /// assert_eq!(city.name(), "Karachi");
    /// assert!(City::find("Atlantis").is_none());
    /// ```
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        let name = name.trim();
        CITIES.iter().find(|city| city.name.eq_ignore_ascii_case(name))
    }
}

/// Cities offered by the timetable, Karachi first.
pub static CITIES: &[City] = &[
    City::new("Karachi", 24.8607, 67.0011),
    City::new("Lahore", 31.5204, 74.3587),
    City::new("Islamabad", 33.6844, 73.0479),
    City::new("Rawalpindi", 33.5651, 73.0169),
    City::new("Peshawar", 34.0151, 71.5249),
    City::new("Quetta", 30.1798, 66.9750),
    City::new("Multan", 30.1575, 71.5249),
    City::new("Faisalabad", 31.4504, 73.1350),
    City::new("Hyderabad", 25.3960, 68.3578),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::check_coordinates;

    #[test]
    fn test_table_coordinates_are_valid() {
        for city in CITIES {
            let loc = city.location();
            assert!(
                check_coordinates(loc.latitude(), loc.longitude()).is_ok(),
                "{}",
                city.name()
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            for b in &CITIES[i + 1..] {
                assert!(!a.name().eq_ignore_ascii_case(b.name()));
            }
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let city = City::find("ISLAMABAD").unwrap();
        assert_eq!(city.location().latitude(), 33.6844);
        assert_eq!(City::find("Karachi").unwrap().name(), CITIES[0].name());
        assert!(City::find("").is_none());
    }
}
