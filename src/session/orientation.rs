use strum::Display;

use crate::compass::Heading;

/// Reference frame of the heading source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Calibration {
    /// No usable orientation sample has arrived yet.
    #[default]
    Uncalibrated,
    /// Headings are relative to an arbitrary starting direction.
    Relative,
    /// Headings are relative to north.
    Absolute,
}

/// A single device-orientation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    /// Rotation about the vertical axis, in degrees. Absent when the
    /// sensor has no reading.
    pub alpha: Option<f64>,
    pub absolute: bool,
}

impl OrientationSample {
    pub fn absolute(alpha: f64) -> Self {
        OrientationSample {
            alpha: Some(alpha),
            absolute: true,
        }
    }

    pub fn relative(alpha: f64) -> Self {
        OrientationSample {
            alpha: Some(alpha),
            absolute: false,
        }
    }

    /// The normalized heading, if the sample carries a finite reading.
    pub fn heading(&self) -> Option<Heading> {
        self.alpha.filter(|alpha| alpha.is_finite()).map(Heading::from)
    }

    pub fn calibration(&self) -> Calibration {
        if self.absolute {
            Calibration::Absolute
        } else {
            Calibration::Relative
        }
    }
}
