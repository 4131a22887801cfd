//! JSON ingestion for untrusted input.
//!
//! Everything arriving from outside the process comes through here: loose
//! point/polygon values (fallible parsers that the rest of the core can
//! trust) and SPC outlook GeoJSON documents. Structural problems surface
//! as typed errors, never panics.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::geometry::limits;
use crate::model::{Point, Polygon};
use crate::outlook::{Forecast, OutlookFeature, OutlookGeometry, OutlookProperties};

/// Why a value failed to parse as a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointError {
    NotAnArray,
    /// An array, but not of exactly two elements.
    WrongArity(usize),
    /// Component at `index` is not a finite number.
    InvalidCoordinate { index: usize },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::NotAnArray => write!(f, "point is not an array"),
            PointError::WrongArity(len) => {
                write!(f, "point has {len} elements, expected 2")
            }
            PointError::InvalidCoordinate { index } => {
                write!(f, "point component {index} is not a finite number")
            }
        }
    }
}

impl std::error::Error for PointError {}

/// Why a value failed to parse as a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    NotAnArray,
    TooFewVertices(usize),
    TooManyVertices(usize),
    InvalidVertex { index: usize, source: PointError },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::NotAnArray => write!(f, "polygon is not an array"),
            PolygonError::TooFewVertices(len) => write!(
                f,
                "polygon has {len} vertices, expected at least {}",
                limits::POLYGON_MINIMUM_POINTS
            ),
            PolygonError::TooManyVertices(len) => write!(
                f,
                "polygon has {len} vertices, cap is {}",
                limits::MAX_POLYGON_POINTS
            ),
            PolygonError::InvalidVertex { index, source } => {
                write!(f, "polygon vertex {index}: {source}")
            }
        }
    }
}

impl std::error::Error for PolygonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolygonError::InvalidVertex { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parse an untyped value as a point: a 2-element array of finite numbers.
/// Any finite magnitude is accepted; magnitude caps apply only on the
/// GeoJSON ingest path ([`parse_forecast`]).
///
/// A successful parse is the contract the geometry core relies on; nothing
/// downstream re-validates.
pub fn parse_point(value: &Value) -> Result<Point, PointError> {
    let items = value.as_array().ok_or(PointError::NotAnArray)?;
    if items.len() != 2 {
        return Err(PointError::WrongArity(items.len()));
    }

    let mut coords = [0.0f64; 2];
    for (index, item) in items.iter().enumerate() {
        let c = item
            .as_f64()
            .filter(|c| c.is_finite())
            .ok_or(PointError::InvalidCoordinate { index })?;
        coords[index] = c;
    }

    Ok(Point::new(coords[0], coords[1]))
}

/// Parse an untyped value as a polygon: an array of at least 3 valid
/// points, capped at [`limits::MAX_POLYGON_POINTS`].
pub fn parse_polygon(value: &Value) -> Result<Polygon, PolygonError> {
    let items = value.as_array().ok_or(PolygonError::NotAnArray)?;
    if items.len() < limits::POLYGON_MINIMUM_POINTS {
        return Err(PolygonError::TooFewVertices(items.len()));
    }
    if items.len() > limits::MAX_POLYGON_POINTS {
        return Err(PolygonError::TooManyVertices(items.len()));
    }

    let mut polygon = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let point =
            parse_point(item).map_err(|source| PolygonError::InvalidVertex { index, source })?;
        polygon.push(point);
    }

    Ok(polygon)
}

/// Predicate form of [`parse_point`].
#[inline]
pub fn is_valid_point(value: &Value) -> bool {
    parse_point(value).is_ok()
}

/// Predicate form of [`parse_polygon`].
#[inline]
pub fn is_valid_polygon(value: &Value) -> bool {
    parse_polygon(value).is_ok()
}

/// Why an SPC outlook document failed to parse.
#[derive(Clone, Debug)]
pub enum ForecastError {
    /// The document does not match the `.lyr.geojson` layout.
    Decode(String),
    RingTooLarge { feature: usize, len: usize },
    BadCoordinate { feature: usize },
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::Decode(detail) => write!(f, "forecast decode failed: {detail}"),
            ForecastError::RingTooLarge { feature, len } => write!(
                f,
                "feature {feature} carries a ring of {len} points, cap is {}",
                limits::MAX_POLYGON_POINTS
            ),
            ForecastError::BadCoordinate { feature } => {
                write!(f, "feature {feature} carries an out-of-bounds coordinate")
            }
        }
    }
}

impl std::error::Error for ForecastError {}

/// Decode an SPC outlook GeoJSON document into a [`Forecast`].
///
/// Features whose geometry is neither Polygon nor MultiPolygon fail the
/// decode; missing properties default to empty so a sparse layer still
/// loads.
pub fn parse_forecast(value: Value) -> Result<Forecast, ForecastError> {
    #[derive(Deserialize)]
    struct CollectionDe {
        features: Vec<FeatureDe>,
    }
    #[derive(Deserialize)]
    struct FeatureDe {
        geometry: GeometryDe,
        properties: PropertiesDe,
    }
    #[derive(Deserialize)]
    #[serde(tag = "type")]
    enum GeometryDe {
        Polygon { coordinates: Vec<Vec<[f64; 2]>> },
        MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
    }
    #[derive(Deserialize)]
    struct PropertiesDe {
        #[serde(rename = "DN", default)]
        dn: i64,
        #[serde(rename = "VALID", default)]
        valid: String,
        #[serde(rename = "EXPIRE", default)]
        expire: String,
        #[serde(rename = "ISSUE", default)]
        issue: String,
        #[serde(rename = "LABEL", default)]
        label: String,
        #[serde(rename = "LABEL2", default)]
        label2: String,
        #[serde(default)]
        stroke: String,
        #[serde(default)]
        fill: String,
    }

    fn ring_to_polygon(
        ring: Vec<[f64; 2]>,
        feature: usize,
    ) -> Result<Polygon, ForecastError> {
        if ring.len() > limits::MAX_POLYGON_POINTS {
            return Err(ForecastError::RingTooLarge {
                feature,
                len: ring.len(),
            });
        }
        let mut polygon = Vec::with_capacity(ring.len());
        for [x, y] in ring {
            if !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y) {
                return Err(ForecastError::BadCoordinate { feature });
            }
            polygon.push(Point::new(x, y));
        }
        Ok(polygon)
    }

    let doc: CollectionDe =
        serde_json::from_value(value).map_err(|e| ForecastError::Decode(e.to_string()))?;

    let mut features = Vec::with_capacity(doc.features.len());
    for (index, feature) in doc.features.into_iter().enumerate() {
        let geometry = match feature.geometry {
            GeometryDe::Polygon { coordinates } => {
                let mut rings = Vec::with_capacity(coordinates.len());
                for ring in coordinates {
                    rings.push(ring_to_polygon(ring, index)?);
                }
                OutlookGeometry::Polygon(rings)
            }
            GeometryDe::MultiPolygon { coordinates } => {
                let mut polygons = Vec::with_capacity(coordinates.len());
                for polygon in coordinates {
                    let mut rings = Vec::with_capacity(polygon.len());
                    for ring in polygon {
                        rings.push(ring_to_polygon(ring, index)?);
                    }
                    polygons.push(rings);
                }
                OutlookGeometry::MultiPolygon(polygons)
            }
        };

        let p = feature.properties;
        features.push(OutlookFeature {
            geometry,
            properties: OutlookProperties {
                dn: p.dn,
                valid: p.valid,
                expire: p.expire,
                issue: p.issue,
                label: p.label,
                label2: p.label2,
                stroke: p.stroke,
                fill: p.fill,
            },
        });
    }

    Ok(Forecast { features })
}

/// Decode a forecast from raw text (an HTTP response body).
pub fn parse_forecast_str(body: &str) -> Result<Forecast, ForecastError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ForecastError::Decode(e.to_string()))?;
    parse_forecast(value)
}
