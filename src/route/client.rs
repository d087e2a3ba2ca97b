use async_trait::async_trait;
use log::debug;
use measure_time::debug_time;

use crate::geo::Coordinate;
use crate::route::error::RouteError;
use crate::route::result::RouteResult;

/// The backend which computes a safe route between two points.
#[async_trait]
pub trait RouteService: Send + Sync {
    /// Issues exactly one request. No retries.
    async fn fetch_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, RouteError>;
}

/// [`RouteService`] over HTTP: `GET <endpoint>?start_lat=..&start_lon=..&end_lat=..&end_lon=..`
#[derive(Debug, Clone)]
pub struct HttpRouteClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRouteClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        HttpRouteClient {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RouteService for HttpRouteClient {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn fetch_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, RouteError> {
        debug_time!("HttpRouteClient::fetch_route");
        debug!("Requesting route {start:?} -> {end:?} from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("start_lat", start.lat()),
                ("start_lon", start.lon()),
                ("end_lat", end.lat()),
                ("end_lon", end.lon()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        RouteResult::from_json(&body)
    }
}
