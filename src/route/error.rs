use std::fmt::{Display, Formatter};

use crate::geo::GeoError;
use crate::impl_err;

#[derive(Debug)]
pub enum RouteError {
    /// The backend answered with a non-success status code.
    Http(u16),
    /// The body was not JSON, missed a field, or carried an invalid value.
    Parse(String),
    /// The backend could not be reached or the body could not be read.
    Network(reqwest::Error),
}

impl_err!(reqwest::Error, RouteError, Network);

impl From<serde_json::Error> for RouteError {
    fn from(value: serde_json::Error) -> Self {
        RouteError::Parse(value.to_string())
    }
}

impl From<GeoError> for RouteError {
    fn from(value: GeoError) -> Self {
        RouteError::Parse(value.to_string())
    }
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::Http(code) => write!(f, "Server error {code}"),
            RouteError::Parse(reason) => write!(f, "Malformed route response: {reason}"),
            RouteError::Network(err) => write!(f, "Route service unreachable: {err}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Network(err) => Some(err),
            _ => None,
        }
    }
}
