use std::fmt::{Display, Formatter};

use crate::geo::GeoError;
use crate::impl_err;
use crate::locate::LocateError;
use crate::route::RouteError;

/// Which end of the route a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Side {
    #[strum(serialize = "Starting location")]
    Start,
    Destination,
}

#[derive(Debug)]
pub enum Error {
    /// A required text field was empty.
    MissingInput,
    /// The geocoder found no match for one side.
    NotFound(Side),
    Route(RouteError),
    Locate(LocateError),
    Geo(GeoError),
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl_err!(RouteError, Route);
impl_err!(LocateError, Locate);
impl_err!(GeoError, Geo);

impl Error {
    /// The text shown on the status line when a pipeline stops on this error.
    pub fn status_message(&self) -> String {
        match self {
            Error::MissingInput => "Please enter both locations.".to_string(),
            Error::NotFound(side) => format!("{side} not found."),
            other => format!("Error: {other}"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingInput => write!(f, "both locations are required"),
            Error::NotFound(side) => write!(f, "{side} not found"),
            Error::Route(err) => write!(f, "{err}"),
            Error::Locate(err) => write!(f, "{err}"),
            Error::Geo(err) => write!(f, "{err}"),
            Error::Config(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Route(err) => Some(err),
            Error::Locate(err) => Some(err),
            Error::Geo(err) => Some(err),
            _ => None,
        }
    }
}
