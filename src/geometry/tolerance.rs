// Centralized tolerances and helpers for robust geometry

pub const EPS_LEN: f64 = 1e-12; // zero-length vector threshold

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Normalize (x, y), returning the unit vector and the original length.
/// Degenerate inputs (length <= EPS_LEN) yield ((0, 0), 0) rather than NaN.
#[inline]
pub fn norm2(mut x: f64, mut y: f64) -> ((f64, f64), f64) {
    let len = (x * x + y * y).sqrt();
    if len > EPS_LEN {
        x /= len;
        y /= len;
        ((x, y), len)
    } else {
        ((0.0, 0.0), 0.0)
    }
}
