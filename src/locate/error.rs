use std::fmt::{Display, Formatter};

use crate::geo::GeoError;
use crate::impl_err;

#[derive(Debug)]
pub enum LocateError {
    /// The user refused the location permission.
    Denied,
    /// The device could not determine its position.
    Unavailable(String),
    /// The device has no geolocation capability.
    Unsupported,
    /// No position arrived within the configured timeout.
    Timeout,
    /// The geocoder answered with a non-success status code.
    Http(u16),
    /// The geocoder could not be reached or the body could not be read.
    Request(reqwest::Error),
    /// The geocoder body was not the expected candidate list.
    Malformed(String),
}

impl_err!(reqwest::Error, LocateError, Request);

impl From<serde_json::Error> for LocateError {
    fn from(value: serde_json::Error) -> Self {
        LocateError::Malformed(value.to_string())
    }
}

impl From<GeoError> for LocateError {
    fn from(value: GeoError) -> Self {
        LocateError::Malformed(value.to_string())
    }
}

impl Display for LocateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::Denied => write!(f, "location permission denied"),
            LocateError::Unavailable(reason) => write!(f, "position unavailable: {reason}"),
            LocateError::Unsupported => write!(f, "geolocation is not supported"),
            LocateError::Timeout => write!(f, "timed out waiting for a position"),
            LocateError::Http(code) => write!(f, "Geocoder error {code}"),
            LocateError::Request(err) => write!(f, "Geocoder unreachable: {err}"),
            LocateError::Malformed(reason) => write!(f, "Malformed geocoder response: {reason}"),
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocateError::Request(err) => Some(err),
            _ => None,
        }
    }
}
