use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    InvalidCoordinate(String),
    Unparsable(String),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidCoordinate(reason) => write!(f, "invalid coordinate: {reason}"),
            GeoError::Unparsable(input) => write!(f, "could not parse coordinate from {input:?}"),
        }
    }
}

impl std::error::Error for GeoError {}
