//! Finder configuration, assembled from defaults, user preferences and the
//! environment.
//!
//! Every [`Preference`] can be supplied as a `QIBLA_<KEY>` environment
//! variable; binaries load a `.env` file first. An example environment:
//! ```bash
//! QIBLA_TOLERANCE=5
//! QIBLA_TURN_CONVENTION=counter-clockwise
//! QIBLA_INDICATOR_KM=250
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use geodesy::{GeoPoint, KAABA};
use log::debug;
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::compass::TurnConvention;


pub const DEFAULT_TOLERANCE_DEG: f64 = 3.0;
pub const DEFAULT_INDICATOR_KM: f64 = 100.0;
pub const DEFAULT_CUE_COOLDOWN: Duration = Duration::from_secs(5);

const ENV_PREFIX: &str = "QIBLA_";

/// A single configurable value, addressed by its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Preference {
    Tolerance,
    TurnConvention,
    TargetLat,
    TargetLng,
    IndicatorKm,
    CueCooldownMs,
}

impl Preference {
    /// Name of the environment variable carrying this preference.
    pub fn env_key(&self) -> String {
        format!("{ENV_PREFIX}{}", self.to_string().to_uppercase().replace('-', "_"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownPreference(String),
    InvalidValue {
        key: Preference,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: Preference, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownPreference(key) => write!(f, "unknown preference `{key}`"),
            ConfigError::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for `{key}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings which shape a [`Finder`](crate::Finder).
///
/// Fields change only through [`FinderConfig::set`] and its callers,
/// so every stored value has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    target: GeoPoint,
    tolerance_deg: f64,
    convention: TurnConvention,
    indicator_km: f64,
    cue_cooldown: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            target: KAABA,
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            convention: TurnConvention::default(),
            indicator_km: DEFAULT_INDICATOR_KM,
            cue_cooldown: DEFAULT_CUE_COOLDOWN,
        }
    }
}

impl FinderConfig {
    /// The point the bearing is computed towards.
    pub fn target(&self) -> GeoPoint {
        self.target
    }

    /// Largest heading error, in degrees, still considered aligned.
    pub fn tolerance_deg(&self) -> f64 {
        self.tolerance_deg
    }

    pub fn convention(&self) -> TurnConvention {
        self.convention
    }

    /// Length of the rendered direction line, in kilometres.
    pub fn indicator_km(&self) -> f64 {
        self.indicator_km
    }

    /// Time which must pass between two haptic cues.
    pub fn cue_cooldown(&self) -> Duration {
        self.cue_cooldown
    }

    /// Builds a configuration from `QIBLA_*` environment variables, falling
    /// back to defaults for those which are absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration by resolving each preference's environment
    /// key through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = FinderConfig::default();

        for preference in Preference::iter() {
            if let Some(value) = lookup(&preference.env_key()) {
                debug!("Using {}={}", preference.env_key(), value);
                config.set(preference, &value)?;
            }
        }

        Ok(config)
    }

    /// Applies a preference given by name, as stored by a settings panel.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let preference = Preference::from_str(key)
            .map_err(|_| ConfigError::UnknownPreference(key.to_string()))?;

        self.set(preference, value)
    }

    /// Parses, validates and stores a single preference.
    ///
    /// The configuration is left untouched if the value is rejected.
    pub fn set(&mut self, key: Preference, value: &str) -> Result<(), ConfigError> {
        let raw = value.trim();

        match key {
            Preference::Tolerance => {
                let tolerance = parse_finite(key, raw)?;
                if !(0.0..=180.0).contains(&tolerance) {
                    return Err(ConfigError::invalid(key, value, "must be within 0 and 180"));
                }

                self.tolerance_deg = tolerance;
            }
            Preference::TurnConvention => {
                self.convention = TurnConvention::from_str(raw).map_err(|_| {
                    ConfigError::invalid(key, value, "expected clockwise or counter-clockwise")
                })?;
            }
            Preference::TargetLat => {
                let lat = parse_finite(key, raw)?;
                self.target = GeoPoint::new(lat, self.target.lng())
                    .map_err(|err| ConfigError::invalid(key, value, err.to_string()))?;
            }
            Preference::TargetLng => {
                let lng = parse_finite(key, raw)?;
                self.target = GeoPoint::new(self.target.lat(), lng)
                    .map_err(|err| ConfigError::invalid(key, value, err.to_string()))?;
            }
            Preference::IndicatorKm => {
                let km = parse_finite(key, raw)?;
                if km <= 0.0 {
                    return Err(ConfigError::invalid(key, value, "must be positive"));
                }

                self.indicator_km = km;
            }
            Preference::CueCooldownMs => {
                let millis = raw
                    .parse::<u64>()
                    .map_err(|err| ConfigError::invalid(key, value, err.to_string()))?;

                self.cue_cooldown = Duration::from_millis(millis);
            }
        }

        Ok(())
    }

    /// Renders a preference back into its stored string form.
    pub fn get(&self, key: Preference) -> String {
        match key {
            Preference::Tolerance => self.tolerance_deg.to_string(),
            Preference::TurnConvention => self.convention.to_string(),
            Preference::TargetLat => self.target.lat().to_string(),
            Preference::TargetLng => self.target.lng().to_string(),
            Preference::IndicatorKm => self.indicator_km.to_string(),
            Preference::CueCooldownMs => self.cue_cooldown.as_millis().to_string(),
        }
    }

    /// All preferences with their stored string form.
    pub fn preferences(&self) -> Vec<(Preference, String)> {
        Preference::iter().map(|key| (key, self.get(key))).collect()
    }
}

/// Parses a finite decimal value.
fn parse_finite(key: Preference, value: &str) -> Result<f64, ConfigError> {
    let parsed = value
        .parse::<f64>()
        .map_err(|err| ConfigError::invalid(key, value, err.to_string()))?;

    if !parsed.is_finite() {
        return Err(ConfigError::invalid(key, value, "must be finite"));
    }

    Ok(parsed)
}
