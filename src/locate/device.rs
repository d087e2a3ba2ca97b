use async_trait::async_trait;

use crate::geo::Coordinate;
use crate::locate::error::LocateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
}

/// The device geolocation capability.
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    async fn current_position(&self, options: PositionOptions) -> Result<Coordinate, LocateError>;
}

/// Always reports the same position. Stands in for a device with a known location.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Coordinate);

#[async_trait]
impl DeviceLocator for FixedLocator {
    async fn current_position(&self, _: PositionOptions) -> Result<Coordinate, LocateError> {
        Ok(self.0)
    }
}

/// A device without geolocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

#[async_trait]
impl DeviceLocator for NoLocator {
    async fn current_position(&self, _: PositionOptions) -> Result<Coordinate, LocateError> {
        Err(LocateError::Unsupported)
    }
}

#[derive(Debug)]
pub enum FixSource {
    Device,
    Fallback(LocateError),
}

/// The outcome of a device location request. Always carries a coordinate.
#[derive(Debug)]
pub struct DeviceFix {
    pub coordinate: Coordinate,
    pub source: FixSource,
}

impl DeviceFix {
    pub fn device(coordinate: Coordinate) -> Self {
        DeviceFix {
            coordinate,
            source: FixSource::Device,
        }
    }

    pub fn fallback(coordinate: Coordinate, reason: LocateError) -> Self {
        DeviceFix {
            coordinate,
            source: FixSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, FixSource::Fallback(_))
    }

    pub fn status_message(&self) -> &'static str {
        match self.source {
            FixSource::Device => "Location acquired.",
            FixSource::Fallback(LocateError::Unsupported) => {
                "Geolocation not supported. Using default starting location."
            }
            FixSource::Fallback(_) => "Using default starting location.",
        }
    }
}
