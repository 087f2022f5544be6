use crate::EARTH_RADIUS_KM;
use crate::coord::point::GeoPoint;

/// Great-circle distance between `a` and `b` in kilometres, using the
/// haversine formula.
///
/// The haversine term is clamped into `[0, 1]` since rounding can push it
/// just past either bound for coincident or antipodal points.
///
/// ```rust
/// use qibla_geo::{GeoPoint, KAABA, compute_distance_km};
///
/// let jeddah = GeoPoint::new(21.5433, 39.1728).unwrap();
/// let km = compute_distance_km(jeddah, KAABA);
///
/// assert!(km > 60.0 && km < 80.0);
/// ```
pub fn compute_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }

    let (phi1, lambda1) = a.radians();
    let (phi2, lambda2) = b.radians();

    let delta_phi = phi2 - phi1;
    let delta_lambda = lambda2 - lambda1;

    let hav = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let hav = hav.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * hav.sqrt().atan2((1.0 - hav).sqrt())
}
