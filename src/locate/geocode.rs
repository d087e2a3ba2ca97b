use async_trait::async_trait;
use log::debug;
use measure_time::debug_time;
use serde::Deserialize;

use crate::geo::Coordinate;
use crate::locate::error::LocateError;

/// Resolves free text to a coordinate. `Ok(None)` means the service found no match.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinate>, LocateError>;
}

/// A search candidate. Nominatim encodes both values as strings.
#[derive(Debug, Deserialize)]
struct Candidate {
    lat: String,
    lon: String,
}

/// Picks the first candidate of a Nominatim-style search body.
pub(crate) fn first_match(body: &str) -> Result<Option<Coordinate>, LocateError> {
    let candidates = serde_json::from_str::<Vec<Candidate>>(body)?;

    let Some(first) = candidates.into_iter().next() else {
        return Ok(None);
    };

    let parse = |value: &str, name: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| LocateError::Malformed(format!("{name} is not a number: {value:?}")))
    };

    let coordinate = Coordinate::new(parse(&first.lat, "lat")?, parse(&first.lon, "lon")?)?;
    Ok(Some(coordinate))
}

/// [`Geocoder`] against a Nominatim-compatible `search` endpoint.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::Client,
    endpoint: String,
}

impl Nominatim {
    /// Nominatim's usage policy requires an identifying `User-Agent`.
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, LocateError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Nominatim {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn geocode(&self, place: &str) -> Result<Option<Coordinate>, LocateError> {
        debug_time!("Nominatim::geocode");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", place)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocateError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let found = first_match(&body)?;
        debug!("Geocoded {place:?} to {found:?}");

        Ok(found)
    }
}
