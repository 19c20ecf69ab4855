//! Mathematical utilities for the solar model.

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Wraps fractional clock hours into [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    let normalized = hours % 24.0;
    if normalized >= 0.0 {
        normalized
    } else if normalized + 24.0 < 24.0 {
        normalized + 24.0
    } else {
        // -ε + 24 rounds up to 24
        0.0
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Computes sin(x) using the configured math backend.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.sin();

    #[cfg(feature = "libm")]
    return libm::sin(x);
}

/// Computes cos(x) using the configured math backend.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.cos();

    #[cfg(feature = "libm")]
    return libm::cos(x);
}

/// Computes tan(x) using the configured math backend.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.tan();

    #[cfg(feature = "libm")]
    return libm::tan(x);
}

/// Computes asin(x) using the configured math backend.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.asin();

    #[cfg(feature = "libm")]
    return libm::asin(x);
}

/// Computes acos(x) using the configured math backend.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.acos();

    #[cfg(feature = "libm")]
    return libm::acos(x);
}

/// Computes atan(x) using the configured math backend.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.atan();

    #[cfg(feature = "libm")]
    return libm::atan(x);
}

/// Computes round(x), halves away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.round();

    #[cfg(feature = "libm")]
    return libm::round(x);
}
