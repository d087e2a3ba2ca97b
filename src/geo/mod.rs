//! Geographic primitives shared by the resolver, client and renderer.
//!
//! Every [`Coordinate`] in the crate is validated on construction, so
//! downstream code never needs to re-check ranges.

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[doc(hidden)]
pub mod bounds;
#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use bounds::Bounds;
#[doc(inline)]
pub use coord::Coordinate;
#[doc(inline)]
pub use error::GeoError;
