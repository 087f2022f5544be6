use std::fmt::{Debug, Display, Formatter};

use crate::angle::Bearing;
use crate::error::GeoError;

pub type Degree = f64;

/// `GeoPoint`
/// The latitude, longitude pair of a location reading, in degrees.
///
/// ```rust
/// use qibla_geo::GeoPoint;
///
/// let point = GeoPoint::new(-33.8568, 151.2153).expect("valid coordinate");
/// println!("Position: {}", point);
/// ```
#[derive(Clone, Copy, PartialOrd, PartialEq)]
pub struct GeoPoint {
    lat: Degree,
    lng: Degree,
}

impl GeoPoint {
    /// Constructs a new `GeoPoint`, validating that the latitude lies within
    /// `[-90, 90]` and the longitude within `[-180, 180]`.
    ///
    /// Coordinates are stored in canonical form, so every spelling of the
    /// same place compares equal: a longitude of `180` becomes `-180`, and
    /// both poles carry a longitude of `0`.
    pub fn new(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90f64..=90f64).contains(&lat) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be within -90 and 90. Given: {}",
                lat
            )));
        }

        if !lng.is_finite() || !(-180f64..=180f64).contains(&lng) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be within -180 and 180. Given: {}",
                lng
            )));
        }

        Ok(Self::new_unchecked(lat, lng))
    }

    /// Constructs a `GeoPoint` without range checks, for trusted constants.
    /// The coordinate is still canonicalized, see [`GeoPoint::new`].
    pub const fn new_unchecked(lat: Degree, lng: Degree) -> Self {
        let lng = if lat == 90.0 || lat == -90.0 {
            0.0
        } else if lng == 180.0 {
            -180.0
        } else {
            lng
        };

        GeoPoint { lat, lng }
    }

    pub fn lat(&self) -> Degree {
        self.lat
    }

    pub fn lng(&self) -> Degree {
        self.lng
    }

    /// Returns the `(φ, λ)` pair in radians.
    pub fn radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Initial great-circle bearing from this point towards `target`.
    pub fn bearing_to(&self, target: GeoPoint) -> Bearing {
        crate::bearing::compute_bearing(*self, target)
    }

    /// Great-circle distance to `other`, in kilometres.
    pub fn distance_km_to(&self, other: GeoPoint) -> f64 {
        crate::distance::compute_distance_km(*self, other)
    }

    /// The point reached travelling `distance_km` along `bearing`.
    pub fn destination(&self, bearing: Bearing, distance_km: f64) -> GeoPoint {
        crate::destination::project(*self, bearing, distance_km)
    }
}

impl From<GeoPoint> for geo::Point {
    fn from(value: GeoPoint) -> Self {
        geo::Point::new(value.lng, value.lat)
    }
}

impl TryFrom<geo::Point> for GeoPoint {
    type Error = GeoError;

    fn try_from(value: geo::Point) -> Result<Self, Self::Error> {
        GeoPoint::new(value.y(), value.x())
    }
}

impl Debug for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
