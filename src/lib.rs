//! Planar geometry for SPC convective outlook maps.
//!
//! Answers "is this geographic point inside this risk polygon?" while
//! tolerating floating-point imprecision near edges. Inputs are lon/lat
//! pairs treated as planar (x = longitude, y = latitude); outlook polygons
//! are small enough that spherical effects do not matter for this use.
//!
//! The core is pure, synchronous, and stateless: deterministic functions
//! of their arguments with no I/O and no shared state, safe to call from
//! any number of threads. Fetching forecast products is the caller's job.

pub mod model;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod bounds;
    pub mod contains;
    pub mod equality;
    pub mod inflate;
}
pub mod json;
pub mod outlook;

pub use algorithms::bounds::{bounding_box, min_max_xy, point_in_bounding_box};
pub use algorithms::contains::{point_in_polygon, Containment};
pub use algorithms::equality::polygons_equal;
pub use algorithms::inflate::inflate_polygon;
pub use json::{is_valid_point, is_valid_polygon, parse_point, parse_polygon};
pub use model::{GeoLocation, Line, Point, Polygon};
