//! Rotation/reflection-invariant polygon equality.
//!
//! Two rings are equal when they list the same cyclic vertex sequence,
//! possibly starting at a different offset and possibly traversed in the
//! opposite direction. Comparison is exact per vertex; tolerance never
//! applies here.

use crate::geometry::math::points_equal;
use crate::model::Point;

/// Compare two vertex rings under rotation and reflection.
///
/// The anchor `p1[0]` is located in `p2` by linear scan and only the first
/// occurrence is tried, so rings carrying duplicates of the anchor vertex
/// can compare unequal even when a later occurrence would line up.
pub fn polygons_equal(p1: &[Point], p2: &[Point]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }

    let n = p1.len();
    if n == 0 {
        return false;
    }

    let Some(offset) = p2.iter().position(|&p| points_equal(p, p1[0])) else {
        return false;
    };

    // Walk forward from the located offset unless the next vertex already
    // disagrees, in which case walk backward.
    let try_reverse = n > 1 && !points_equal(p1[1], p2[(offset + 1) % n]);
    let step: isize = if try_reverse {
        -(offset as isize)
    } else {
        offset as isize
    };

    // |(i + step) % n| may see a negative remainder before the abs; this is
    // only sound because |step| < n keeps intermediates within one cycle.
    p1.iter().enumerate().all(|(i, &point)| {
        let j = ((i as isize + step) % n as isize).unsigned_abs();
        points_equal(point, p2[j])
    })
}
