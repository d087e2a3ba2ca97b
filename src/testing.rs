//! Stand-in collaborators shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use saferoute_fixtures::EQUATOR_ROUTE;

use crate::geo::Coordinate;
use crate::locate::{Geocoder, LocateError};
use crate::route::{RouteError, RouteResult, RouteService};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server runs");
    });

    format!("http://{addr}")
}

/// What a [`StubRoutes`] answers with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Json(&'static str),
    Status(u16),
}

/// A [`RouteService`] answering from a script keyed on the destination.
pub(crate) struct StubRoutes {
    default: Reply,
    scripted: Vec<(Coordinate, Duration, Reply)>,
    calls: AtomicUsize,
}

impl Default for StubRoutes {
    fn default() -> Self {
        StubRoutes::replying(Reply::Json(EQUATOR_ROUTE))
    }
}

impl StubRoutes {
    pub(crate) fn replying(default: Reply) -> Self {
        StubRoutes {
            default,
            scripted: vec![],
            calls: AtomicUsize::new(0),
        }
    }

    /// Requests ending at `destination` wait `delay`, then answer `reply`.
    pub(crate) fn to(mut self, destination: Coordinate, delay: Duration, reply: Reply) -> Self {
        self.scripted.push((destination, delay, reply));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteService for StubRoutes {
    async fn fetch_route(
        &self,
        _: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (delay, reply) = self
            .scripted
            .iter()
            .find(|(destination, _, _)| *destination == end)
            .map_or((Duration::ZERO, self.default), |(_, delay, reply)| {
                (*delay, *reply)
            });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Reply::Json(body) => RouteResult::from_json(body),
            Reply::Status(code) => Err(RouteError::Http(code)),
        }
    }
}

/// A [`Geocoder`] over a fixed table of place names.
#[derive(Default)]
pub(crate) struct StubGeocoder {
    places: HashMap<String, Coordinate>,
    failing: HashMap<String, u16>,
    calls: AtomicUsize,
}

impl StubGeocoder {
    pub(crate) fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.places.insert(name.to_string(), coordinate);
        self
    }

    /// Looking up `name` fails with the given HTTP status.
    pub(crate) fn with_failure(mut self, name: &str, code: u16) -> Self {
        self.failing.insert(name.to_string(), code);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinate>, LocateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(code) = self.failing.get(place) {
            return Err(LocateError::Http(*code));
        }

        Ok(self.places.get(place).copied())
    }
}
