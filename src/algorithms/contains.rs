//! Tolerance-aware point-in-polygon testing.
//!
//! Composes the bounding-box fast reject, polygon inflation, and a parity
//! ray cast: count how many edges a horizontal ray from the point crosses;
//! odd means inside. The tolerance (same linear units as the coordinates)
//! treats points within that distance of the boundary as inside, absorbing
//! floating-point and source-data rounding near edges.

use super::bounds::point_in_bounding_box;
use super::inflate::inflate_polygon;
use crate::geometry::limits::POLYGON_MINIMUM_POINTS;
use crate::model::Point;

/// Outcome of a containment test. The two rejections that fire before any
/// ray casting keep their own variants so callers can log or branch on
/// them; geometrically they mean the same thing as [`Containment::Outside`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    /// Fewer than 3 vertices; no geometry was computed.
    NotAPolygon,
    /// Rejected by the padded bounding box before the exact test.
    OutsideBoundingBox,
}

impl Containment {
    #[inline]
    pub fn is_inside(self) -> bool {
        matches!(self, Containment::Inside)
    }

    /// Diagnostic for the pre-geometry rejections; `None` for results
    /// decided by the ray cast.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            Containment::NotAPolygon => Some("not a polygon"),
            Containment::OutsideBoundingBox => Some("outside bounding box"),
            Containment::Inside | Containment::Outside => None,
        }
    }
}

/// Does a leftward horizontal ray from `point` cross the edge `a` -> `b`?
///
/// The point's y must lie strictly between the endpoint ys (an edge level
/// with the point never counts); the crossing x comes from linear
/// interpolation along y. Strictness means y1 != y2 here, so the slope
/// division is safe.
#[inline]
fn ray_crosses_edge(point: Point, a: Point, b: Point) -> bool {
    let within_y_bounds = (point.y < a.y) != (point.y < b.y);
    if !within_y_bounds {
        return false;
    }

    let slope = (b.x - a.x) / (b.y - a.y);
    let crossing_x = slope * (point.y - a.y) + a.x;
    point.x < crossing_x
}

/// Test whether `point` is inside `polygon`, treating points within
/// `tolerance` of the boundary as inside.
///
/// Ties (point exactly on a vertex or on a horizontal edge) follow from
/// the strict inequalities of the ray cast and are not specially resolved;
/// pass a small positive tolerance when boundary points must count.
pub fn point_in_polygon(polygon: &[Point], point: Point, tolerance: f64) -> Containment {
    if polygon.len() < POLYGON_MINIMUM_POINTS {
        return Containment::NotAPolygon;
    }

    if !point_in_bounding_box(polygon, point, tolerance) {
        return Containment::OutsideBoundingBox;
    }

    // Zero tolerance skips inflation entirely; the hot path allocates nothing.
    let inflated;
    let ring: &[Point] = if tolerance == 0.0 {
        polygon
    } else {
        inflated = inflate_polygon(polygon, tolerance);
        &inflated
    };

    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let vertex = ring[i];
        let previous = ring[(i + n - 1) % n];
        if ray_crosses_edge(point, vertex, previous) {
            inside = !inside;
        }
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}
