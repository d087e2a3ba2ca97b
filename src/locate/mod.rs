//! Where the route starts and ends: the device position (with a fallback)
//! and free-text place names.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::geo::Coordinate;

#[doc(hidden)]
pub mod device;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod geocode;

#[doc(inline)]
pub use device::{DeviceFix, DeviceLocator, FixSource, FixedLocator, NoLocator, PositionOptions};
#[doc(inline)]
pub use error::LocateError;
#[doc(inline)]
pub use geocode::{Geocoder, Nominatim};

pub struct LocationResolver {
    locator: Arc<dyn DeviceLocator>,
    geocoder: Arc<dyn Geocoder>,
    fallback: Coordinate,
    timeout: Duration,
}

impl LocationResolver {
    pub fn new(
        locator: Arc<dyn DeviceLocator>,
        geocoder: Arc<dyn Geocoder>,
        fallback: Coordinate,
        timeout: Duration,
    ) -> Self {
        LocationResolver {
            locator,
            geocoder,
            fallback,
            timeout,
        }
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }

    /// Asks the device for a high-accuracy position. Denial, timeout and
    /// unsupported devices all resolve to the fallback coordinate.
    pub async fn resolve_device_location(&self) -> DeviceFix {
        let options = PositionOptions {
            high_accuracy: true,
        };

        let attempt = tokio::time::timeout(self.timeout, self.locator.current_position(options))
            .await
            .unwrap_or(Err(LocateError::Timeout));

        match attempt {
            Ok(coordinate) => {
                debug!("Device reported {coordinate:?}");
                DeviceFix::device(coordinate)
            }
            Err(reason) => {
                warn!("Geolocation failed ({reason}), using fallback {}", self.fallback);
                DeviceFix::fallback(self.fallback, reason)
            }
        }
    }

    /// Resolves `place` to the first match, or `None` when nothing matches.
    pub async fn geocode(&self, place: &str) -> Result<Option<Coordinate>, LocateError> {
        self.geocoder.geocode(place.trim()).await
    }
}
