use std::time::{Duration, Instant};

use geodesy::{Bearing, GeoPoint, compute_bearing, compute_distance_km, project};
use log::{debug, info, trace, warn};

use crate::Error;
use crate::compass::{AlignmentState, Heading, evaluate_alignment};
use crate::config::FinderConfig;
use crate::session::location::{LocationError, LocationProvider};
use crate::session::orientation::{Calibration, OrientationSample};

/// Everything derived from one location reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub origin: GeoPoint,
    pub bearing: Bearing,
    pub distance_km: f64,
    /// End of the fixed-length direction line drawn from `origin`.
    pub indicator: GeoPoint,
}

impl Fix {
    pub fn new(origin: GeoPoint, target: GeoPoint, indicator_km: f64) -> Self {
        let bearing = compute_bearing(origin, target);

        Fix {
            origin,
            bearing,
            distance_km: compute_distance_km(origin, target),
            indicator: project(origin, bearing, indicator_km),
        }
    }
}

/// Request to vibrate the device, emitted on becoming aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticCue;

impl HapticCue {
    /// Vibrate, pause, vibrate. In milliseconds.
    pub const PATTERN_MS: [u64; 3] = [100, 50, 100];

    pub fn pattern(&self) -> [Duration; 3] {
        Self::PATTERN_MS.map(Duration::from_millis)
    }
}

/// Outcome of one orientation sample once a fix exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guidance {
    pub heading: Heading,
    pub bearing: Bearing,
    pub state: AlignmentState,
    pub cue: Option<HapticCue>,
}

/// Holds the state between location and orientation events.
///
/// ```rust
/// use std::time::Instant;
/// use qibla::{Finder, FinderConfig, GeoPoint};
/// use qibla::session::OrientationSample;
///
/// let mut finder = Finder::new(FinderConfig::default());
/// let origin = GeoPoint::new(51.5074, -0.1278).unwrap();
///
/// let fix = *finder.on_location(Ok(origin)).expect("fix");
/// let guidance = finder
///     .on_orientation(OrientationSample::absolute(fix.bearing.degrees()), Instant::now())
///     .expect("guidance once a fix exists");
///
/// assert!(guidance.state.aligned);
/// ```
#[derive(Debug, Clone)]
pub struct Finder {
    config: FinderConfig,
    fix: Option<Fix>,
    calibration: Calibration,
    last_cue: Option<Instant>,
}

impl Finder {
    pub fn new(config: FinderConfig) -> Self {
        Finder {
            config,
            fix: None,
            calibration: Calibration::Uncalibrated,
            last_cue: None,
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Requests a position from `provider` and records it.
    pub fn locate(&mut self, provider: &mut impl LocationProvider) -> Result<&Fix, Error> {
        let reading = provider.locate();
        self.on_location(reading)
    }

    /// Records the outcome of a location request.
    ///
    /// A failed request leaves any earlier fix in place.
    pub fn on_location(&mut self, reading: Result<GeoPoint, LocationError>) -> Result<&Fix, Error> {
        let origin = reading.inspect_err(|err| warn!("Location request failed: {err}"))?;
        let fix = Fix::new(origin, self.config.target(), self.config.indicator_km());

        debug!(
            "Fix at {:?}: bearing {} over {:.1}km",
            origin, fix.bearing, fix.distance_km
        );

        Ok(&*self.fix.insert(fix))
    }

    /// Evaluates one orientation sample against the current fix.
    ///
    /// Returns `None` if the sample has no reading, or if there is no fix to
    /// compare against yet.
    pub fn on_orientation(&mut self, sample: OrientationSample, now: Instant) -> Option<Guidance> {
        let heading = sample.heading()?;
        self.calibration = sample.calibration();

        let fix = self.fix?;
        let state = evaluate_alignment(
            heading,
            fix.bearing,
            self.config.tolerance_deg(),
            self.config.convention(),
        );

        trace!(
            "Heading {} against {}: off by {:.1}°",
            heading, fix.bearing, state.signed
        );

        let cue = state.aligned.then(|| self.cue(now)).flatten();

        Some(Guidance {
            heading,
            bearing: fix.bearing,
            state,
            cue,
        })
    }

    fn cue(&mut self, now: Instant) -> Option<HapticCue> {
        let cooldown = self.config.cue_cooldown();
        let cooled = self
            .last_cue
            .is_none_or(|last| now.saturating_duration_since(last) > cooldown);

        if !cooled {
            return None;
        }

        info!("Aligned with target, issuing haptic cue");
        self.last_cue = Some(now);
        Some(HapticCue)
    }
}
