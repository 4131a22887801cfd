// Centralized ingestion limits to harden against untrusted input (GeoJSON)

/// Minimum vertex count for a ring to count as a polygon.
pub const POLYGON_MINIMUM_POINTS: usize = 3;

/// Ring size cap. Outlook polygons carry at most a few hundred vertices;
/// anything near this cap is not forecast data.
pub const MAX_POLYGON_POINTS: usize = 100_000;

// Numeric bounds. Far wider than any lon/lat, tight enough to reject junk.
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool {
    x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x)
}
