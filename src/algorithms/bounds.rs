//! Axis-aligned bounding boxes with optional tolerance padding.
//!
//! Used standalone and as the fast-reject filter in front of the exact
//! point-in-polygon test: a point outside the padded box can never pass
//! the ray cast, so the box check is a necessary (not sufficient)
//! condition for containment.

use crate::model::{Point, Polygon};

/// Min/max per axis over all vertices, then padded by `tolerance` on all
/// four sides (positive grows the box, negative shrinks it). A negative
/// tolerance larger than half the box's smaller dimension inverts the box;
/// this is not checked.
pub fn min_max_xy(polygon: &[Point], tolerance: f64) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in polygon {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }

    (
        min_x - tolerance,
        min_y - tolerance,
        max_x + tolerance,
        max_y + tolerance,
    )
}

/// The 4-corner rectangle covering the polygon, wound
/// (min,min) -> (max,min) -> (max,max) -> (min,max).
pub fn bounding_box(polygon: &[Point], tolerance: f64) -> Polygon {
    let (min_x, min_y, max_x, max_y) = min_max_xy(polygon, tolerance);

    vec![
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ]
}

/// Inclusive range test against the padded bounds.
pub fn point_in_bounding_box(polygon: &[Point], point: Point, tolerance: f64) -> bool {
    let (min_x, min_y, max_x, max_y) = min_max_xy(polygon, tolerance);

    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}
