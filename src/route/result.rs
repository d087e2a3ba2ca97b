use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::route::error::RouteError;

/// The backend's JSON body, as sent on the wire.
/// Points are `[lat, lon]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub original_route: Vec<[f64; 2]>,
    pub safe_path: Vec<[f64; 2]>,
    pub segments: u64,
    pub nodes: u64,
    pub distance_meters: f64,
    pub avg_risk: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segment_risks: Vec<f64>,
}

/// A validated route, ready to be rendered once.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    original_route: Vec<Coordinate>,
    safe_path: Vec<Coordinate>,
    segments: u64,
    nodes: u64,
    distance_meters: f64,
    avg_risk: f64,
    segment_risks: Vec<f64>,
}

impl RouteResult {
    /// Parses and validates a backend body.
    pub fn from_json(body: &str) -> Result<Self, RouteError> {
        let response = serde_json::from_str::<RouteResponse>(body)?;
        RouteResult::try_from(response)
    }

    pub fn original_route(&self) -> &[Coordinate] {
        &self.original_route
    }

    pub fn safe_path(&self) -> &[Coordinate] {
        &self.safe_path
    }

    pub fn segments(&self) -> u64 {
        self.segments
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn avg_risk(&self) -> f64 {
        self.avg_risk
    }

    /// Risk of each original segment, empty if the backend omitted it.
    pub fn segment_risks(&self) -> &[f64] {
        &self.segment_risks
    }

    /// Every point of both paths, original route first.
    pub fn points(&self) -> impl Iterator<Item = &Coordinate> {
        self.original_route.iter().chain(self.safe_path.iter())
    }
}

impl TryFrom<RouteResponse> for RouteResult {
    type Error = RouteError;

    fn try_from(response: RouteResponse) -> Result<Self, Self::Error> {
        fn path(points: Vec<[f64; 2]>) -> Result<Vec<Coordinate>, RouteError> {
            points
                .into_iter()
                .map(|pair| Coordinate::try_from(pair).map_err(RouteError::from))
                .collect()
        }

        if !response.distance_meters.is_finite() || response.distance_meters < 0.0 {
            return Err(RouteError::Parse(format!(
                "distance_meters must be a non-negative number. Given: {}",
                response.distance_meters
            )));
        }

        if !response.avg_risk.is_finite() {
            return Err(RouteError::Parse(format!(
                "avg_risk must be finite. Given: {}",
                response.avg_risk
            )));
        }

        Ok(RouteResult {
            original_route: path(response.original_route)?,
            safe_path: path(response.safe_path)?,
            segments: response.segments,
            nodes: response.nodes,
            distance_meters: response.distance_meters,
            avg_risk: response.avg_risk,
            segment_risks: response.segment_risks,
        })
    }
}
