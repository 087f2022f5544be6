use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use geodesy::{Bearing, normalize};

/// The direction the device is facing, in degrees within `[0, 360)`.
///
/// Refreshed on every orientation sample; never persisted.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Heading(f64);

impl Heading {
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Angle to rotate from this heading to face `bearing`, clockwise,
    /// within `[0, 360)`.
    pub fn clockwise_to(&self, bearing: Bearing) -> f64 {
        normalize(bearing.degrees() - self.0)
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self {
        Heading(normalize(degrees))
    }
}

/// Parses a heading in decimal degrees. Unlike the `f64` conversion, which
/// maps non-finite readings to north, textual input must be a finite number.
impl FromStr for Heading {
    type Err = HeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = s
            .trim()
            .parse::<f64>()
            .map_err(|_| HeadingError::Unparsable(s.to_string()))?;

        if !degrees.is_finite() {
            return Err(HeadingError::NonFinite(s.to_string()));
        }

        Ok(Heading::from(degrees))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeadingError {
    Unparsable(String),
    NonFinite(String),
}

impl Display for HeadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingError::Unparsable(value) => write!(f, "`{value}` is not a number of degrees"),
            HeadingError::NonFinite(value) => write!(f, "heading must be finite, given `{value}`"),
        }
    }
}

impl std::error::Error for HeadingError {}

impl From<Heading> for f64 {
    fn from(value: Heading) -> Self {
        value.0
    }
}

impl Debug for Heading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Heading({}°)", self.0)
    }
}

impl Display for Heading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}
