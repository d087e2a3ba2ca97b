use geo::{BoundingRect, MultiPoint, Point, Rect};

use crate::geo::Coordinate;

/// The axis-aligned region covering a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    /// Computes the bounds of every coordinate yielded by `points`.
    /// Returns `None` when there are no points to cover.
    pub fn covering<'a, I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let points = points
            .into_iter()
            .map(|coordinate| Point::from(*coordinate))
            .collect::<MultiPoint>();

        points.bounding_rect().and_then(Bounds::from_rect)
    }

    pub fn center(&self) -> Option<Coordinate> {
        Coordinate::new(
            (self.south_west.lat() + self.north_east.lat()) / 2.0,
            (self.south_west.lon() + self.north_east.lon()) / 2.0,
        )
        .ok()
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.south_west.lat()..=self.north_east.lat()).contains(&coordinate.lat())
            && (self.south_west.lon()..=self.north_east.lon()).contains(&coordinate.lon())
    }

    // Rect corners built from validated coordinates are always in range.
    fn from_rect(rect: Rect) -> Option<Bounds> {
        Some(Bounds {
            south_west: Coordinate::new(rect.min().y, rect.min().x).ok()?,
            north_east: Coordinate::new(rect.max().y, rect.max().x).ok()?,
        })
    }
}
