use geodesy::{Bearing, normalize};
use strum::{Display, EnumIter, EnumString};

use crate::compass::heading::Heading;

/// The direction a user should rotate to face the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    pub fn opposite(self) -> Turn {
        match self {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
        }
    }
}

/// Which way the heading source grows, and therefore which [`Turn`] closes
/// the gap to the target.
///
/// With `δ = normalize(bearing − heading)`, a δ within `(0, 180]` means the
/// target lies clockwise of the heading *if* the heading grows clockwise.
///
/// | Convention         | δ ∈ (0, 180] | otherwise |
/// |--------------------|--------------|-----------|
/// | `Clockwise`        | right        | left      |
/// | `CounterClockwise` | left         | right     |
///
/// Compass headings (and `webkitCompassHeading`) grow clockwise. The raw
/// `alpha` angle of a DeviceOrientation event grows counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TurnConvention {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl TurnConvention {
    /// Picks the turn which closes the clockwise gap `delta`, in degrees.
    pub fn turn(self, delta: f64) -> Turn {
        let clockwise = if delta > 0.0 && delta <= 180.0 {
            Turn::Right
        } else {
            Turn::Left
        };

        match self {
            TurnConvention::Clockwise => clockwise,
            TurnConvention::CounterClockwise => clockwise.opposite(),
        }
    }
}

/// Result of comparing a heading against a target bearing.
///
/// Derived fresh for every orientation sample, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentState {
    /// `normalize(heading − bearing)`, within `[0, 360)`.
    pub difference: f64,
    /// Shortest angular distance between heading and bearing, within `[0, 180]`.
    pub minimal: f64,
    /// Signed offset within `(-180, 180]`, positive when the heading is
    /// clockwise of the bearing.
    pub signed: f64,
    pub aligned: bool,
    pub turn: Turn,
}

/// Classifies how well `heading` lines up with `bearing`.
///
/// The heading is aligned when the minimal circular difference is no more
/// than `tolerance_deg`. The turn hint is chosen by `convention`, see
/// [`TurnConvention`].
///
/// Callers only have a bearing once a location fix exists, so gating on the
/// fix is their responsibility.
///
/// ### Example
/// ```rust
/// use qibla::{Bearing, Heading, Turn, TurnConvention, evaluate_alignment};
///
/// let state = evaluate_alignment(
///     Heading::from(100.0),
///     Bearing::from(40.5),
///     3.0,
///     TurnConvention::Clockwise,
/// );
///
/// assert!(!state.aligned);
/// assert_eq!(state.turn, Turn::Left);
/// ```
pub fn evaluate_alignment(
    heading: Heading,
    bearing: Bearing,
    tolerance_deg: f64,
    convention: TurnConvention,
) -> AlignmentState {
    let difference = normalize(heading.degrees() - bearing.degrees());
    let minimal = difference.min(360.0 - difference);
    let signed = if difference > 180.0 {
        difference - 360.0
    } else {
        difference
    };

    AlignmentState {
        difference,
        minimal,
        signed,
        aligned: minimal <= tolerance_deg,
        turn: convention.turn(heading.clockwise_to(bearing)),
    }
}
