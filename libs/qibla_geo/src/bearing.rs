use log::trace;

use crate::angle::Bearing;
use crate::coord::point::GeoPoint;

/// Computes the initial great-circle bearing from `origin` towards `target`,
/// relative to true north and normalized into `[0, 360)`.
///
/// Uses the cotangent form of the initial-course formula:
///
/// ```text
/// y = sin Δλ
/// x = cos φ1 · tan φ2 − sin φ1 · cos Δλ
/// θ = atan2(y, x)
/// ```
///
/// The bearing between coincident points is undefined, in which case
/// [`Bearing::NORTH`] is returned.
///
/// ### Example
/// ```rust
/// use qibla_geo::{GeoPoint, compute_bearing};
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let east = GeoPoint::new(0.0, 10.0).unwrap();
///
/// assert!((compute_bearing(origin, east).degrees() - 90.0).abs() < 1e-9);
/// ```
pub fn compute_bearing(origin: GeoPoint, target: GeoPoint) -> Bearing {
    if origin == target {
        return Bearing::NORTH;
    }

    let (phi1, lambda1) = origin.radians();
    let (phi2, lambda2) = target.radians();
    let delta_lambda = lambda2 - lambda1;

    let y = delta_lambda.sin();
    let x = phi1.cos() * phi2.tan() - phi1.sin() * delta_lambda.cos();

    if (x == 0.0 && y == 0.0) || !x.is_finite() || !y.is_finite() {
        trace!("Degenerate bearing between {:?} and {:?}", origin, target);
        return Bearing::NORTH;
    }

    Bearing::from(y.atan2(x).to_degrees())
}
