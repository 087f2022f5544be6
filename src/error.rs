use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::impl_err;
use crate::session::LocationError;
use geodesy::GeoError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Geo(GeoError),
    Config(ConfigError),
    Location(LocationError),
}

impl_err!(GeoError, Geo);
impl_err!(ConfigError, Config);
impl_err!(LocationError, Location);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Config(err) => write!(f, "{err}"),
            Error::Location(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geo(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Location(err) => Some(err),
        }
    }
}
