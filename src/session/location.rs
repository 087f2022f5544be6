use std::fmt::{Display, Formatter};

use geodesy::GeoPoint;

/// Classified failure of a location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// The platform offers no location service at all.
    Unsupported,
    /// A failure code outside the known set.
    Unknown(u16),
}

impl LocationError {
    /// Maps a `GeolocationPositionError.code` onto its classification.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::PositionUnavailable,
            3 => LocationError::Timeout,
            other => LocationError::Unknown(other),
        }
    }
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "location access denied"),
            LocationError::PositionUnavailable => write!(f, "location unavailable"),
            LocationError::Timeout => write!(f, "location request timed out"),
            LocationError::Unsupported => write!(f, "geolocation not supported"),
            LocationError::Unknown(code) => {
                write!(f, "location could not be determined (code {code})")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// A source of location fixes.
pub trait LocationProvider {
    fn locate(&mut self) -> Result<GeoPoint, LocationError>;
}

/// Always reports the same position. Used where the coordinates are
/// already known, such as on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    fn locate(&mut self) -> Result<GeoPoint, LocationError> {
        Ok(self.0)
    }
}

impl<F> LocationProvider for F
where
    F: FnMut() -> Result<GeoPoint, LocationError>,
{
    fn locate(&mut self) -> Result<GeoPoint, LocationError> {
        self()
    }
}
