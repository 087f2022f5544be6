//! Spherical geodesy primitives.
//!
//! All calculations assume a spherical earth of radius [`EARTH_RADIUS_KM`],
//! which is well inside the sub-degree tolerance a handheld compass offers.
//!
//! ```rust
//! use qibla_geo::{GeoPoint, KAABA, compute_bearing, compute_distance_km};
//!
//! let london = GeoPoint::new(51.5074, -0.1278).expect("valid coordinate");
//! let bearing = compute_bearing(london, KAABA);
//! let distance = compute_distance_km(london, KAABA);
//!
//! println!("{:.1}° over {:.0} km", bearing.degrees(), distance);
//! ```

/// Mean earth radius, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Location of the Kaaba, Mecca.
pub const KAABA: GeoPoint = GeoPoint::new_unchecked(21.422487, 39.826206);

pub mod angle;
pub mod bearing;
#[doc(hidden)]
pub mod coord;
pub mod destination;
pub mod distance;
#[doc(hidden)]
pub mod error;


#[doc(inline)]
pub use angle::{Bearing, normalize};
#[doc(inline)]
pub use bearing::compute_bearing;
#[doc(inline)]
pub use coord::point::GeoPoint;
#[doc(inline)]
pub use destination::project;
#[doc(inline)]
pub use distance::compute_distance_km;
#[doc(inline)]
pub use error::GeoError;
