use std::collections::BTreeMap;

use log::{debug, warn};

use crate::geo::{Bounds, Coordinate};
use crate::map::{LayerHandle, MapSurface, MarkerRole, PathKind, PathStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker {
        position: Coordinate,
        role: MarkerRole,
    },
    Path {
        points: Vec<Coordinate>,
        style: PathStyle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

/// An in-memory [`MapSurface`] which keeps a registry of live layers.
///
/// Used by the `saferoute` binary, where there is no widget to draw on, and
/// by tests to observe exactly which layers the controller leaves behind.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    next_handle: u64,
    layers: BTreeMap<LayerHandle, Layer>,
    viewport: Option<Viewport>,
    fitted: Option<(Bounds, u32)>,
    unknown_removals: usize,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(center: Coordinate, zoom: u8) -> Self {
        HeadlessMap {
            viewport: Some(Viewport { center, zoom }),
            ..Self::default()
        }
    }

    pub fn layer(&self, handle: LayerHandle) -> Option<&Layer> {
        self.layers.get(&handle)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn markers(&self) -> impl Iterator<Item = (Coordinate, MarkerRole)> + '_ {
        self.layers.values().filter_map(|layer| match layer {
            Layer::Marker { position, role } => Some((*position, *role)),
            Layer::Path { .. } => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&[Coordinate], PathStyle)> + '_ {
        self.layers.values().filter_map(|layer| match layer {
            Layer::Path { points, style } => Some((points.as_slice(), *style)),
            Layer::Marker { .. } => None,
        })
    }

    pub fn path(&self, kind: PathKind) -> Option<&[Coordinate]> {
        self.paths()
            .find(|(_, style)| style.kind == kind)
            .map(|(points, _)| points)
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn fitted(&self) -> Option<(Bounds, u32)> {
        self.fitted
    }

    /// Number of `remove_layer` calls naming a handle that was not live.
    pub fn unknown_removals(&self) -> usize {
        self.unknown_removals
    }

    fn issue(&mut self, layer: Layer) -> LayerHandle {
        self.next_handle += 1;
        let handle = LayerHandle::new(self.next_handle);
        self.layers.insert(handle, layer);
        handle
    }
}

impl MapSurface for HeadlessMap {
    fn add_marker(&mut self, position: Coordinate, role: MarkerRole) -> LayerHandle {
        let handle = self.issue(Layer::Marker { position, role });
        debug!("Added {role} marker {handle} at {position}");
        handle
    }

    fn add_path(&mut self, points: &[Coordinate], style: PathStyle) -> LayerHandle {
        let handle = self.issue(Layer::Path {
            points: points.to_vec(),
            style,
        });
        debug!("Added {} path {handle} with {} points", style.kind, points.len());
        handle
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        if self.layers.remove(&handle).is_none() {
            warn!("Attempted to remove {handle}, which is not on the map");
            self.unknown_removals += 1;
        }
    }

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.viewport = Some(Viewport { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        self.fitted = Some((bounds, padding));
        if let Some(center) = bounds.center() {
            let zoom = self.viewport.map_or(0, |viewport| viewport.zoom);
            self.viewport = Some(Viewport { center, zoom });
        }
    }
}
