//! The mutable selection state for one interaction cycle.
//!
//! A [`Session`] owns every marker and path it placed on the map. Handles are
//! released before they are replaced, so at most one start marker, one
//! destination marker, one original path and one safe path exist at a time.

use log::debug;

use crate::geo::Coordinate;
use crate::map::{LayerHandle, MapSurface, MarkerRole, PathKind, PathStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing selected yet.
    None,
    /// A start is placed, awaiting the destination.
    StartSet,
    /// Both endpoints are placed; the next click restarts the cycle.
    RouteShown,
}

impl From<u32> for SelectionState {
    fn from(click_count: u32) -> Self {
        match click_count {
            0 => SelectionState::None,
            1 => SelectionState::StartSet,
            _ => SelectionState::RouteShown,
        }
    }
}

/// Identifies one fetch-render pipeline. Only the most recently issued token
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Marker {
    position: Coordinate,
    handle: LayerHandle,
}

#[derive(Debug, Default)]
pub struct Session {
    click_count: u32,
    start: Option<Marker>,
    destination: Option<Marker>,
    original_layer: Option<LayerHandle>,
    safe_layer: Option<LayerHandle>,
    stats: Vec<String>,
    generation: u64,
}

/// Everything observable about a [`Session`], minus the handles and the
/// pipeline generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub click_count: u32,
    pub selection: SelectionState,
    pub start: Option<Coordinate>,
    pub destination: Option<Coordinate>,
    pub has_original_layer: bool,
    pub has_safe_layer: bool,
    pub stats: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState::from(self.click_count)
    }

    pub(crate) fn set_click_count(&mut self, click_count: u32) {
        self.click_count = click_count;
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start.map(|marker| marker.position)
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination.map(|marker| marker.position)
    }

    pub fn path(&self, kind: PathKind) -> Option<LayerHandle> {
        match kind {
            PathKind::Original => self.original_layer,
            PathKind::Safe => self.safe_layer,
        }
    }

    pub fn stats(&self) -> &[String] {
        &self.stats
    }

    pub(crate) fn set_stats(&mut self, stats: Vec<String>) {
        self.stats = stats;
    }

    /// Replaces the start marker, releasing any previous one.
    pub(crate) fn place_start(
        &mut self,
        map: &mut dyn MapSurface,
        position: Coordinate,
        role: MarkerRole,
    ) {
        release(map, self.start.take().map(|marker| marker.handle));
        let handle = map.add_marker(position, role);
        self.start = Some(Marker { position, handle });
    }

    /// Replaces the destination marker, releasing any previous one.
    pub(crate) fn place_destination(&mut self, map: &mut dyn MapSurface, position: Coordinate) {
        release(map, self.destination.take().map(|marker| marker.handle));
        let handle = map.add_marker(position, MarkerRole::Destination);
        self.destination = Some(Marker { position, handle });
    }

    /// Releases the current `kind` path, then draws `points` in its place.
    pub(crate) fn replace_path(
        &mut self,
        map: &mut dyn MapSurface,
        points: &[Coordinate],
        style: PathStyle,
    ) -> LayerHandle {
        let slot = match style.kind {
            PathKind::Original => &mut self.original_layer,
            PathKind::Safe => &mut self.safe_layer,
        };

        release(map, slot.take());
        let handle = map.add_path(points, style);
        *slot = Some(handle);
        handle
    }

    /// Issues the token for a new pipeline, superseding every earlier one.
    pub(crate) fn issue_token(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Releases every marker and path and returns to the initial empty state.
    /// Any pipeline still in flight is superseded.
    pub(crate) fn reset(&mut self, map: &mut dyn MapSurface) {
        release(map, self.start.take().map(|marker| marker.handle));
        release(map, self.destination.take().map(|marker| marker.handle));
        release(map, self.original_layer.take());
        release(map, self.safe_layer.take());

        self.click_count = 0;
        self.stats.clear();
        self.generation += 1;
        debug!("Session reset (generation {})", self.generation);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            click_count: self.click_count,
            selection: self.selection(),
            start: self.start(),
            destination: self.destination(),
            has_original_layer: self.original_layer.is_some(),
            has_safe_layer: self.safe_layer.is_some(),
            stats: self.stats.clone(),
        }
    }
}

fn release(map: &mut dyn MapSurface, handle: Option<LayerHandle>) {
    if let Some(handle) = handle {
        map.remove_layer(handle);
    }
}
