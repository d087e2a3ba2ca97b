//! Draws a [`RouteResult`] onto the map and rebuilds the statistics list.

use log::debug;

use crate::geo::Bounds;
use crate::map::{MapSurface, PathKind, PathStyle};
use crate::route::RouteResult;
use crate::session::Session;
use crate::status::StatusReporter;

#[doc(hidden)]
pub mod stats;

#[doc(inline)]
pub use stats::route_stats;

pub const RENDERED: &str = "Route rendered. Original = gray, safe = green.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub path_weight: u32,
    pub fit_padding: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            path_weight: 6,
            fit_padding: 40,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteRenderer {
    style: RenderStyle,
}

impl RouteRenderer {
    pub fn new(style: RenderStyle) -> Self {
        RouteRenderer { style }
    }

    pub fn path_style(&self, kind: PathKind) -> PathStyle {
        // The original route stays on the map, invisible, for hit-testing.
        let opacity = match kind {
            PathKind::Original => 0.0,
            PathKind::Safe => 1.0,
        };

        PathStyle {
            kind,
            weight: self.style.path_weight,
            opacity,
        }
    }

    /// Replaces both paths, fits the viewport around them and rebuilds the stats.
    pub fn render(
        &self,
        result: RouteResult,
        session: &mut Session,
        map: &mut dyn MapSurface,
        status: &dyn StatusReporter,
    ) {
        session.replace_path(
            map,
            result.original_route(),
            self.path_style(PathKind::Original),
        );
        session.replace_path(map, result.safe_path(), self.path_style(PathKind::Safe));

        match Bounds::covering(result.points()) {
            Some(bounds) => map.fit_bounds(bounds, self.style.fit_padding),
            None => debug!("Route has no points, leaving the viewport as is"),
        }

        session.set_stats(route_stats(&result));
        status.set_status(RENDERED);
    }
}
