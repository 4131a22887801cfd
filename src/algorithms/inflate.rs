//! Uniform polygon offsetting via averaged per-vertex edge normals.
//!
//! Each vertex moves along the re-normalized average of its two adjacent
//! edge normals. This is not mitered CAD offsetting: sharp concave vertices
//! can self-intersect after inflation, which containment testing tolerates.

use crate::geometry::math::{normal_vector, offset_point};
use crate::geometry::tolerance::norm2;
use crate::model::{Line, Point, Polygon};

/// Offset every vertex of `polygon` outward (positive, for counter-clockwise
/// rings) or inward (negative) by `distance`.
///
/// A distance of exactly 0 copies the input without touching any geometry.
/// Vertices whose averaged normal degenerates (zero-length adjacent edges,
/// or opposing normals cancelling out) stay where they are rather than
/// turning into NaN.
pub fn inflate_polygon(polygon: &[Point], distance: f64) -> Polygon {
    if distance == 0.0 {
        return polygon.to_vec();
    }

    let n = polygon.len();
    let mut inflated = Vec::with_capacity(n);

    for (i, &point) in polygon.iter().enumerate() {
        let previous = polygon[(i + n - 1) % n];
        let next = polygon[(i + 1) % n];

        let normal_prev = normal_vector(Line::new(previous, point));
        let normal_next = normal_vector(Line::new(point, next));

        // Average the two edge normals, then re-normalize: two unit normals
        // pointing in different directions average to a shorter vector.
        let avg_x = (normal_prev.x + normal_next.x) / 2.0;
        let avg_y = (normal_prev.y + normal_next.y) / 2.0;
        let ((nx, ny), len) = norm2(avg_x, avg_y);

        if len == 0.0 {
            inflated.push(point);
        } else {
            inflated.push(offset_point(point, Point::new(nx, ny), distance));
        }
    }

    inflated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tolerance::approx_eq;

    // Counter-clockwise unit square scaled by 10
    fn square() -> Polygon {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn zero_distance_is_identity() {
        let sq = square();
        assert_eq!(inflate_polygon(&sq, 0.0), sq);
    }

    #[test]
    fn positive_distance_grows_ccw_square() {
        // Corner normals average to the diagonal, so each corner moves
        // distance * (1/sqrt(2)) on each axis.
        let inflated = inflate_polygon(&square(), 2.0_f64.sqrt());
        assert!(approx_eq(inflated[0].x, -1.0, 1e-9));
        assert!(approx_eq(inflated[0].y, -1.0, 1e-9));
        assert!(approx_eq(inflated[2].x, 11.0, 1e-9));
        assert!(approx_eq(inflated[2].y, 11.0, 1e-9));
    }

    #[test]
    fn negative_distance_shrinks_ccw_square() {
        let deflated = inflate_polygon(&square(), -(2.0_f64.sqrt()));
        assert!(approx_eq(deflated[0].x, 1.0, 1e-9));
        assert!(approx_eq(deflated[0].y, 1.0, 1e-9));
        assert!(approx_eq(deflated[2].x, 9.0, 1e-9));
        assert!(approx_eq(deflated[2].y, 9.0, 1e-9));
    }

    #[test]
    fn duplicate_adjacent_vertices_stay_finite() {
        let poly = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ];
        let inflated = inflate_polygon(&poly, 0.5);
        assert_eq!(inflated.len(), poly.len());
        for p in &inflated {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn vertex_count_is_preserved() {
        let sq = square();
        assert_eq!(inflate_polygon(&sq, 3.0).len(), sq.len());
    }
}
