use super::tolerance::norm2;
use crate::model::{Line, Point};

/// Exact coordinate equality. Used for topological matching
/// (`polygons_equal`), never for geometric containment.
#[inline]
pub fn points_equal(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Direction cosines of a segment. A zero-length segment yields (0, 0)
/// instead of NaN components; downstream offsets then leave the vertex
/// where it is.
#[inline]
pub fn unit_vector(line: Line) -> (f64, f64) {
    let dx = line.end.x - line.start.x;
    let dy = line.end.y - line.start.y;
    let ((ux, uy), _) = norm2(dx, dy);
    (ux, uy)
}

/// Unit vector rotated 90 degrees: (dy, -dx). The rotation direction is
/// fixed so that inflation stays coherent with a ring's winding order
/// (outward for counter-clockwise rings).
#[inline]
pub fn normal_vector(line: Line) -> Point {
    let (dx, dy) = unit_vector(line);
    Point::new(dy, -dx)
}

/// Offset a point along a normal by a signed distance.
#[inline]
pub fn offset_point(point: Point, normal: Point, distance: f64) -> Point {
    Point::new(point.x + normal.x * distance, point.y + normal.y * distance)
}
