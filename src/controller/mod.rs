//! The interaction controller: turns clicks and button presses into session
//! updates and fetch-render pipelines.
//!
//! | clicks so far | click does                                              |
//! |---------------|---------------------------------------------------------|
//! | 0             | places the start                                        |
//! | 1             | places the destination, then fetches and renders        |
//! | 2 or more     | releases everything, the click becomes the new start    |
//!
//! The device location counts as the first click when it arrives before any.

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::Side;
use crate::geo::Coordinate;
use crate::locate::{
    DeviceLocator, FixedLocator, Geocoder, LocationResolver, NoLocator, Nominatim,
};
use crate::map::{MapSurface, MarkerRole};
use crate::render::RouteRenderer;
use crate::route::{HttpRouteClient, RouteService};
use crate::session::{RequestToken, SelectionState, Session, SessionSnapshot};
use crate::status::StatusReporter;
use crate::{Error, Result};

#[doc(hidden)]
pub mod outcome;

#[doc(inline)]
pub use outcome::{ClickOutcome, LocateOutcome, PipelineOutcome};

pub const REQUESTING_LOCATION: &str = "Requesting location...";
pub const START_SELECTED: &str = "Start selected. Now click destination.";
pub const DESTINATION_SELECTED: &str = "Destination selected. Fetching safe route...";
pub const RESTARTED: &str = "Restarted. Start selected - click destination.";
pub const CLEARED: &str = "Cleared. Click map to choose start, then destination.";
pub const FINDING_LOCATIONS: &str = "Finding locations...";
pub const FETCHING_ROUTE: &str = "Fetching route...";
pub const FETCHING_ROUTES: &str = "Fetching routes...";

/// The external collaborators a controller drives.
pub struct Services {
    pub routes: Arc<dyn RouteService>,
    pub geocoder: Arc<dyn Geocoder>,
    pub locator: Arc<dyn DeviceLocator>,
    pub status: Arc<dyn StatusReporter>,
}

impl Services {
    /// HTTP route client and Nominatim geocoder at the configured endpoints.
    /// The device reports `config.device_location`, or has no geolocation.
    pub fn http(config: &Config, status: Arc<dyn StatusReporter>) -> Result<Services> {
        let locator: Arc<dyn DeviceLocator> = match config.device_location {
            Some(coordinate) => Arc::new(FixedLocator(coordinate)),
            None => Arc::new(NoLocator),
        };

        Ok(Services {
            routes: Arc::new(HttpRouteClient::new(&config.route_url)),
            geocoder: Arc::new(Nominatim::new(&config.geocoder_url, &config.user_agent)?),
            locator,
            status,
        })
    }
}

struct Scene<M> {
    session: Session,
    map: M,
}

pub struct InteractionController<M: MapSurface> {
    // Never held across a network call.
    scene: Mutex<Scene<M>>,
    resolver: LocationResolver,
    routes: Arc<dyn RouteService>,
    renderer: RouteRenderer,
    status: Arc<dyn StatusReporter>,
    focus_zoom: u8,
}

impl<M: MapSurface> InteractionController<M> {
    pub fn new(config: &Config, map: M, services: Services) -> Self {
        let resolver = LocationResolver::new(
            services.locator,
            services.geocoder,
            config.fallback_start,
            config.geolocation_timeout,
        );

        InteractionController {
            scene: Mutex::new(Scene {
                session: Session::new(),
                map,
            }),
            resolver,
            routes: services.routes,
            renderer: RouteRenderer::new(config.render),
            status: services.status,
            focus_zoom: config.focus_zoom,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.scene.lock().await.session.snapshot()
    }

    /// Runs `inspect` against the map while no pipeline can mutate it.
    pub async fn with_map<R>(&self, inspect: impl FnOnce(&M) -> R) -> R {
        inspect(&self.scene.lock().await.map)
    }

    /// Requests the device location and, if nothing has been selected yet,
    /// makes it the start of the session.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn locate_device(&self) -> LocateOutcome {
        // A fix can only apply to an empty session, so a request made after a
        // click leaves the status line to the click.
        if self.scene.lock().await.session.selection() == SelectionState::None {
            self.status.set_status(REQUESTING_LOCATION);
        }
        let fix = self.resolver.resolve_device_location().await;

        let mut scene = self.scene.lock().await;
        let Scene { session, map } = &mut *scene;

        if session.selection() != SelectionState::None {
            debug!("Selection already started, ignoring device fix {:?}", fix.coordinate);
            return LocateOutcome::Ignored(fix);
        }

        session.place_start(map, fix.coordinate, MarkerRole::Device);
        session.set_click_count(1);
        map.set_view(fix.coordinate, self.focus_zoom);
        self.status.set_status(fix.status_message());

        LocateOutcome::Applied(fix)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn click(&self, at: Coordinate) -> ClickOutcome {
        let (token, start) = {
            let mut scene = self.scene.lock().await;
            let Scene { session, map } = &mut *scene;

            match (session.selection(), session.start()) {
                (SelectionState::RouteShown, _) => {
                    session.reset(map);
                    session.place_start(map, at, MarkerRole::Start);
                    session.set_click_count(1);
                    self.status.set_status(RESTARTED);
                    return ClickOutcome::Restarted;
                }
                (SelectionState::StartSet, Some(start)) => {
                    session.place_destination(map, at);
                    session.set_click_count(2);
                    self.status.set_status(DESTINATION_SELECTED);
                    (session.issue_token(), start)
                }
                (SelectionState::None | SelectionState::StartSet, _) => {
                    session.place_start(map, at, MarkerRole::Start);
                    session.set_click_count(1);
                    self.status.set_status(START_SELECTED);
                    return ClickOutcome::StartSelected;
                }
            }
        };

        ClickOutcome::Route(self.fetch_and_render(token, start, at).await)
    }

    /// Geocodes both texts, replaces both markers and runs the pipeline,
    /// whatever the click count.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn directions(&self, from: &str, to: &str) -> PipelineOutcome {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return self.fail(Error::MissingInput);
        }

        self.status.set_status(FINDING_LOCATIONS);
        let (start, end) = match self.geocode_both(from, to).await {
            Ok(endpoints) => endpoints,
            Err(err) => return self.fail(err),
        };

        let token = {
            let mut scene = self.scene.lock().await;
            let Scene { session, map } = &mut *scene;

            session.place_start(map, start, MarkerRole::Start);
            session.place_destination(map, end);
            session.set_click_count(2);
            map.set_view(start, self.focus_zoom);
            session.issue_token()
        };

        self.status.set_status(FETCHING_ROUTE);
        self.fetch_and_render(token, start, end).await
    }

    /// A failed lookup stops before the second request. A miss does not, and
    /// the start miss is reported first.
    async fn geocode_both(&self, from: &str, to: &str) -> Result<(Coordinate, Coordinate)> {
        let start = self.resolver.geocode(from).await?;
        let end = self.resolver.geocode(to).await?;

        let start = start.ok_or(Error::NotFound(Side::Start))?;
        let end = end.ok_or(Error::NotFound(Side::Destination))?;
        Ok((start, end))
    }

    /// Releases every marker and path and returns to the initial state.
    pub async fn clear(&self) {
        let mut scene = self.scene.lock().await;
        let Scene { session, map } = &mut *scene;

        session.reset(map);
        self.status.set_status(CLEARED);
    }

    async fn fetch_and_render(
        &self,
        token: RequestToken,
        start: Coordinate,
        end: Coordinate,
    ) -> PipelineOutcome {
        self.status.set_status(FETCHING_ROUTES);
        let fetched = self.routes.fetch_route(start, end).await;

        let mut scene = self.scene.lock().await;
        let Scene { session, map } = &mut *scene;

        if !session.is_current(token) {
            debug!("Dropping result of superseded request {token:?}");
            return PipelineOutcome::Superseded;
        }

        match fetched {
            Ok(result) => {
                self.renderer
                    .render(result, session, map, self.status.as_ref());
                PipelineOutcome::Rendered
            }
            Err(err) => {
                error!("Route request {start:?} -> {end:?} failed: {err}");
                self.fail(err.into())
            }
        }
    }

    fn fail(&self, err: Error) -> PipelineOutcome {
        warn!("Pipeline stopped: {err}");
        self.status.set_status(&err.status_message());
        PipelineOutcome::Failed(err)
    }
}
