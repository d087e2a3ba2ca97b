use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use geo::{coord, Coord, Point};

use crate::geo::error::GeoError;
use crate::geo::{MAX_LATITUDE, MAX_LONGITUDE};

/// `Coordinate`
/// A validated latitude, longitude pair in decimal degrees.
///
/// ```rust
/// use saferoute::geo::Coordinate;
/// let gate = Coordinate::new(28.6129, 77.2295).unwrap();
/// assert_eq!(gate.lat(), 28.6129);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Constructs a new `Coordinate`, rejecting values outside
    /// `[-90, 90]` latitude and `[-180, 180]` longitude.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || lat.abs() > MAX_LATITUDE {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be within -90 and 90. Given: {lat}"
            )));
        }

        if !lon.is_finite() || lon.abs() > MAX_LONGITUDE {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be within -180 and 180. Given: {lon}"
            )));
        }

        Ok(Coordinate { lat, lon })
    }

    /// Constructs a `Coordinate` without range checks. Only for constants
    /// known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns a `[lat, lon]` pair, the order used on the wire.
    pub fn pair(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = GeoError;

    /// Format is: [Lat, Lon]
    fn try_from([lat, lon]: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lon)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GeoError;

    /// Format is: (Lat, Lon)
    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lon)
    }
}

impl From<Coordinate> for Coord {
    fn from(value: Coordinate) -> Self {
        coord! { x: value.lon, y: value.lat }
    }
}

impl From<Coordinate> for Point {
    fn from(value: Coordinate) -> Self {
        Point(value.into())
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses `"lat,lon"`, tolerating whitespace around either value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Unparsable(s.to_string()))?;

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoError::Unparsable(s.to_string()))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoError::Unparsable(s.to_string()))?;

        Coordinate::new(lat, lon)
    }
}

impl Debug for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lon, self.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
