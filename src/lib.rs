#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod compass;
pub mod config;
pub mod error;
pub mod session;
pub mod util;

#[doc(inline)]
pub use compass::{AlignmentState, Heading, HeadingError, Turn, TurnConvention, evaluate_alignment};
#[doc(inline)]
pub use config::{FinderConfig, Preference};
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use session::{Finder, Fix, Guidance, LocationError};

pub use geodesy::{
    Bearing, EARTH_RADIUS_KM, GeoError, GeoPoint, KAABA, compute_bearing, compute_distance_km,
    normalize, project,
};
