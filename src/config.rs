//! Runtime configuration, read from the environment (and `.env`).
//!
//! | Variable                           | Default                                   |
//! |------------------------------------|-------------------------------------------|
//! | `SAFEROUTE_ROUTE_URL`              | `http://127.0.0.1:8000/api/safe-route/`   |
//! | `SAFEROUTE_GEOCODER_URL`           | `https://nominatim.openstreetmap.org/search` |
//! | `SAFEROUTE_USER_AGENT`             | `saferoute/<version>`                     |
//! | `SAFEROUTE_FALLBACK_START`         | `28.474780644693578,77.47638190820159`    |
//! | `SAFEROUTE_DEVICE_LOCATION`        | unset (device has no geolocation)         |
//! | `SAFEROUTE_GEOLOCATION_TIMEOUT_MS` | `10000`                                   |
//! | `SAFEROUTE_FOCUS_ZOOM`             | `15`                                      |
//! | `SAFEROUTE_FIT_PADDING`            | `40`                                      |
//! | `SAFEROUTE_PATH_WEIGHT`            | `6`                                       |

use std::str::FromStr;
use std::time::Duration;

use crate::geo::Coordinate;
use crate::render::RenderStyle;
use crate::{Error, Result};

pub const DEFAULT_ROUTE_URL: &str = "http://127.0.0.1:8000/api/safe-route/";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

pub const FALLBACK_START: Coordinate =
    Coordinate::new_unchecked(28.474780644693578, 77.47638190820159);
pub const INITIAL_VIEW: Coordinate = Coordinate::new_unchecked(28.6139, 77.209);

/// Leaflet's maximum tile zoom.
pub const MAX_ZOOM: u8 = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub route_url: String,
    pub geocoder_url: String,
    pub user_agent: String,
    pub fallback_start: Coordinate,
    pub device_location: Option<Coordinate>,
    pub geolocation_timeout: Duration,
    pub initial_view: Coordinate,
    pub initial_zoom: u8,
    pub focus_zoom: u8,
    pub render: RenderStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            route_url: DEFAULT_ROUTE_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: concat!("saferoute/", env!("CARGO_PKG_VERSION")).to_string(),
            fallback_start: FALLBACK_START,
            device_location: None,
            geolocation_timeout: Duration::from_secs(10),
            initial_view: INITIAL_VIEW,
            initial_zoom: MAX_ZOOM,
            focus_zoom: 15,
            render: RenderStyle::default(),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        // A missing `.env` is fine, the process environment still applies.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to
    /// [`Config::default`] for every unset key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let focus_zoom = parse_or(&lookup, "SAFEROUTE_FOCUS_ZOOM", defaults.focus_zoom)?;
        if focus_zoom > MAX_ZOOM {
            return Err(Error::Config(format!(
                "SAFEROUTE_FOCUS_ZOOM must be at most {MAX_ZOOM}. Given: {focus_zoom}"
            )));
        }

        Ok(Config {
            route_url: lookup("SAFEROUTE_ROUTE_URL").unwrap_or(defaults.route_url),
            geocoder_url: lookup("SAFEROUTE_GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            user_agent: lookup("SAFEROUTE_USER_AGENT").unwrap_or(defaults.user_agent),
            fallback_start: parse_or(
                &lookup,
                "SAFEROUTE_FALLBACK_START",
                defaults.fallback_start,
            )?,
            device_location: lookup("SAFEROUTE_DEVICE_LOCATION")
                .map(|value| value.parse::<Coordinate>())
                .transpose()?,
            geolocation_timeout: Duration::from_millis(parse_or(
                &lookup,
                "SAFEROUTE_GEOLOCATION_TIMEOUT_MS",
                defaults.geolocation_timeout.as_millis() as u64,
            )?),
            focus_zoom,
            render: RenderStyle {
                path_weight: parse_or(
                    &lookup,
                    "SAFEROUTE_PATH_WEIGHT",
                    defaults.render.path_weight,
                )?,
                fit_padding: parse_or(
                    &lookup,
                    "SAFEROUTE_FIT_PADDING",
                    defaults.render.fit_padding,
                )?,
            },
            initial_view: defaults.initial_view,
            initial_zoom: defaults.initial_zoom,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|err| Error::Config(format!("{key}={value:?}: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.route_url, DEFAULT_ROUTE_URL);
        assert_eq!(config.render.fit_padding, 40);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SAFEROUTE_ROUTE_URL", "http://backend:9000/api/safe-route/"),
            ("SAFEROUTE_DEVICE_LOCATION", "28.6129, 77.2295"),
            ("SAFEROUTE_GEOLOCATION_TIMEOUT_MS", "2500"),
            ("SAFEROUTE_PATH_WEIGHT", "3"),
        ]))
        .unwrap();

        assert_eq!(config.route_url, "http://backend:9000/api/safe-route/");
        assert_eq!(config.device_location, Coordinate::new(28.6129, 77.2295).ok());
        assert_eq!(config.geolocation_timeout, Duration::from_millis(2500));
        assert_eq!(config.render.path_weight, 3);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[("SAFEROUTE_FIT_PADDING", "wide")]))
            .expect_err("padding must be numeric");
        assert!(matches!(err, Error::Config(ref reason) if reason.contains("SAFEROUTE_FIT_PADDING")));

        let err = Config::from_lookup(lookup(&[("SAFEROUTE_FALLBACK_START", "91,0")]))
            .expect_err("latitude out of range");
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("SAFEROUTE_DEVICE_LOCATION", "here")]))
            .expect_err("unparsable coordinate");
        assert!(matches!(err, Error::Geo(_)));

        let err = Config::from_lookup(lookup(&[("SAFEROUTE_FOCUS_ZOOM", "22")]))
            .expect_err("beyond max zoom");
        assert!(matches!(err, Error::Config(_)));
    }
}
