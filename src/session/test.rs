use std::time::{Duration, Instant};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use geodesy::{GeoPoint, KAABA, compute_distance_km};

use crate::Error;
use crate::compass::{Turn, TurnConvention};
use crate::config::{FinderConfig, Preference};
use crate::session::{
    Calibration, Finder, FixedLocation, HapticCue, LocationError, LocationProvider,
    OrientationSample,
};

fn near_mecca() -> GeoPoint {
    GeoPoint::new(21.0, 39.0).expect("valid coordinate")
}

fn located() -> Finder {
    let mut finder = Finder::new(FinderConfig::default());
    finder
        .on_location(Ok(near_mecca()))
        .expect("fix must be recorded");
    finder
}

#[test_log::test]
fn fix_computes_bearing_distance_and_indicator() {
    let finder = located();
    let fix = finder.fix().expect("fix must exist");

    assert_eq!(fix.origin, near_mecca());
    assert_abs_diff_eq!(fix.bearing.degrees(), 61.105, epsilon = 1e-2);
    assert_abs_diff_eq!(fix.distance_km, 97.684, epsilon = 1e-2);

    // The indicator line is drawn along the bearing, at the configured length.
    assert_relative_eq!(
        compute_distance_km(fix.origin, fix.indicator),
        finder.config().indicator_km(),
        max_relative = 1e-9
    );
    assert_abs_diff_eq!(
        fix.origin.bearing_to(fix.indicator).degrees(),
        fix.bearing.degrees(),
        epsilon = 1e-6
    );
}

#[test_log::test]
fn failed_location_keeps_previous_fix() {
    let mut finder = located();
    let before = *finder.fix().expect("fix must exist");

    let err = finder
        .on_location(Err(LocationError::Timeout))
        .expect_err("timeout must surface");

    assert_eq!(err, Error::Location(LocationError::Timeout));
    assert_eq!(finder.fix(), Some(&before));
}

#[test]
fn location_error_codes_are_classified() {
    assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
    assert_eq!(LocationError::from_code(2), LocationError::PositionUnavailable);
    assert_eq!(LocationError::from_code(3), LocationError::Timeout);
    assert_eq!(LocationError::from_code(9), LocationError::Unknown(9));

    assert_eq!(
        Error::from(LocationError::PermissionDenied).to_string(),
        "location access denied"
    );
}

#[test]
fn locates_through_providers() {
    let mut finder = Finder::new(FinderConfig::default());

    let mut fixed = FixedLocation(KAABA);
    let fix = finder.locate(&mut fixed).expect("fixed location must resolve");
    assert_eq!(fix.distance_km, 0.0);
    assert_eq!(fix.bearing.degrees(), 0.0);

    let mut denied = || -> Result<GeoPoint, LocationError> { Err(LocationError::PermissionDenied) };
    assert!(denied.locate().is_err());
    assert_eq!(
        finder.locate(&mut denied).map(|fix| fix.origin),
        Err(Error::Location(LocationError::PermissionDenied))
    );
}

#[test]
fn no_guidance_without_a_fix() {
    let mut finder = Finder::new(FinderConfig::default());
    let guidance = finder.on_orientation(OrientationSample::absolute(61.0), Instant::now());

    assert!(guidance.is_none());
    // The heading source is still calibrated by the sample.
    assert_eq!(finder.calibration(), Calibration::Absolute);
}

#[test]
fn ignores_samples_without_reading() {
    let mut finder = located();
    let now = Instant::now();

    let empty = OrientationSample {
        alpha: None,
        absolute: true,
    };
    assert!(finder.on_orientation(empty, now).is_none());
    assert!(
        finder
            .on_orientation(OrientationSample::relative(f64::NAN), now)
            .is_none()
    );
    assert_eq!(finder.calibration(), Calibration::Uncalibrated);

    assert!(
        finder
            .on_orientation(OrientationSample::relative(10.0), now)
            .is_some()
    );
    assert_eq!(finder.calibration(), Calibration::Relative);
}

#[test_log::test]
fn guidance_reports_alignment_and_turn() {
    let mut finder = located();
    let now = Instant::now();

    let guidance = finder
        .on_orientation(OrientationSample::absolute(62.0), now)
        .expect("guidance must be produced");
    assert!(guidance.state.aligned);
    assert_abs_diff_eq!(guidance.heading.degrees(), 62.0);

    let guidance = finder
        .on_orientation(OrientationSample::absolute(150.0), now)
        .expect("guidance must be produced");
    assert!(!guidance.state.aligned);
    assert_eq!(guidance.state.turn, Turn::Left);
    assert_eq!(guidance.cue, None);

    let mut config = FinderConfig::default();
    config
        .set(Preference::TurnConvention, "counter-clockwise")
        .expect("convention");
    assert_eq!(config.convention(), TurnConvention::CounterClockwise);

    let mut finder = Finder::new(config);
    finder.on_location(Ok(near_mecca())).expect("fix");

    let guidance = finder
        .on_orientation(OrientationSample::absolute(150.0), now)
        .expect("guidance must be produced");
    assert_eq!(guidance.state.turn, Turn::Right);
}

#[test_log::test]
fn haptic_cue_respects_cooldown() {
    let mut finder = located();
    let start = Instant::now();
    let aligned = OrientationSample::absolute(61.0);

    let first = finder.on_orientation(aligned, start).expect("guidance");
    assert_eq!(first.cue, Some(HapticCue));

    let soon = finder
        .on_orientation(aligned, start + Duration::from_secs(2))
        .expect("guidance");
    assert_eq!(soon.cue, None);

    // Exactly at the cooldown is still too soon
    let boundary = finder
        .on_orientation(aligned, start + Duration::from_secs(5))
        .expect("guidance");
    assert_eq!(boundary.cue, None);

    let later = finder
        .on_orientation(aligned, start + Duration::from_millis(5_001))
        .expect("guidance");
    assert_eq!(later.cue, Some(HapticCue));
}

#[test]
fn haptic_pattern() {
    assert_eq!(
        HapticCue.pattern(),
        [
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(100)
        ]
    );
}
