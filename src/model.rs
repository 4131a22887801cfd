use serde::{Deserialize, Serialize};

/// A 2D point. The surrounding system maps geographic coordinates as
/// x = longitude, y = latitude; every routine in this crate assumes that
/// axis order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A directed segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// An implicitly closed vertex ring (last vertex connects back to the first).
/// At least 3 vertices are required for containment testing; nothing guards
/// against self-intersection or duplicate vertices.
pub type Polygon = Vec<Point>;

/// A geographic location as callers express it. Converted to a planar point
/// with [`GeoLocation::to_point`] before any geometry runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// Planar point for containment testing: x = longitude, y = latitude.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}
