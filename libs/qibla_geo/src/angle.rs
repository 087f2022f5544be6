//! Circular angle arithmetic.

use std::fmt::{Debug, Display, Formatter};

/// Wraps an angle, in degrees, into the half-open range `[0, 360)`.
///
/// Non-finite input has no meaningful direction and collapses to `0`.
///
/// ```rust
/// use qibla_geo::normalize;
///
/// assert_eq!(normalize(-90.0), 270.0);
/// assert_eq!(normalize(720.0), 0.0);
/// ```
#[inline]
pub fn normalize(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }

    let wrapped = degrees.rem_euclid(360.0);

    // `rem_euclid` of a tiny negative value rounds up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A direction relative to true north, in degrees, always within `[0, 360)`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Bearing(f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.0);

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }
}

impl From<f64> for Bearing {
    fn from(degrees: f64) -> Self {
        Bearing(normalize(degrees))
    }
}

impl From<Bearing> for f64 {
    fn from(value: Bearing) -> Self {
        value.0
    }
}

impl Debug for Bearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bearing({}°)", self.0)
    }
}

impl Display for Bearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}
