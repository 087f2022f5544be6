//! Threads location fixes and orientation samples through the geodesy
//! and compass calculations.
//!
//! A [`Finder`] owns the state a guidance screen needs between events:
//! whether a fix exists yet, how the heading source is calibrated, and
//! when the last haptic cue fired. The platform layer owns the actual
//! subscriptions and forwards each event here.

pub mod finder;
pub mod location;
pub mod orientation;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use finder::{Finder, Fix, Guidance, HapticCue};
#[doc(inline)]
pub use location::{FixedLocation, LocationError, LocationProvider};
#[doc(inline)]
pub use orientation::{Calibration, OrientationSample};
