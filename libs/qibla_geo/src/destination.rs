use crate::EARTH_RADIUS_KM;
use crate::angle::Bearing;
use crate::coord::point::GeoPoint;

/// Projects a point `distance_km` from `origin` along the initial `bearing`,
/// solving the direct problem on a sphere.
///
/// The returned longitude is wrapped into `[-180, 180)`, so lines which
/// cross the antimeridian still yield a valid [`GeoPoint`]. A non-finite
/// distance leaves the origin unchanged.
///
/// ### Example
/// ```rust
/// use qibla_geo::{Bearing, GeoPoint, project};
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let north = project(origin, Bearing::NORTH, 111.19);
///
/// assert!((north.lat() - 1.0).abs() < 1e-3);
/// ```
pub fn project(origin: GeoPoint, bearing: Bearing, distance_km: f64) -> GeoPoint {
    if !distance_km.is_finite() || distance_km == 0.0 {
        return origin;
    }

    let (phi1, lambda1) = origin.radians();
    let theta = bearing.radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let sin_phi2 =
        (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();

    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    let lng = (lambda2.to_degrees() + 180.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new_unchecked(phi2.to_degrees(), lng)
}
