//! The map widget seam.
//!
//! A [`MapSurface`] draws markers and paths and hands back an opaque
//! [`LayerHandle`] for each one. Whoever holds a handle owns the layer and is
//! responsible for removing it before dropping or replacing it.

use std::fmt::{Display, Formatter};

use crate::geo::{Bounds, Coordinate};

#[doc(hidden)]
pub mod headless;

#[doc(inline)]
pub use headless::HeadlessMap;

/// Opaque token for a layer currently drawn on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerHandle(u64);

impl LayerHandle {
    pub fn new(raw: u64) -> Self {
        LayerHandle(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for LayerHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// The hover title shown on a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
pub enum MarkerRole {
    /// The device location, placed without a click.
    #[strum(serialize = "You")]
    Device,
    Start,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PathKind {
    /// Baseline route, kept on the map for hit-testing.
    Original,
    /// The highlighted, risk-weighted route.
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub kind: PathKind,
    pub weight: u32,
    pub opacity: f32,
}

/// Drawing operations the controller needs from a map widget.
pub trait MapSurface: Send {
    fn add_marker(&mut self, position: Coordinate, role: MarkerRole) -> LayerHandle;

    fn add_path(&mut self, points: &[Coordinate], style: PathStyle) -> LayerHandle;

    /// Removes a layer. Removing an unknown handle is a no-op.
    fn remove_layer(&mut self, handle: LayerHandle);

    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Pans and zooms so that `bounds` is visible with `padding` pixels on each side.
    fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
}
