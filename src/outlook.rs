//! SPC convective outlook domain layer.
//!
//! Maps Storm Prediction Center forecast products onto the geometry core:
//! product URLs, the closed risk-category table, and point lookup against
//! a parsed forecast document. Fetching the product over HTTP is the
//! caller's job; hand the response body to [`crate::json::parse_forecast`].

use serde::{Deserialize, Serialize};

use crate::algorithms::contains::point_in_polygon;
use crate::model::{GeoLocation, Polygon};

pub const PRODUCT_BASE_URL: &str = "https://www.spc.noaa.gov";

/// The seven outlook products published per forecast day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvectiveForecastType {
    Categorical,
    Tornado,
    SignificantTornado,
    Hail,
    SignificantHail,
    Wind,
    SignificantWind,
}

impl ConvectiveForecastType {
    /// Product code as it appears in SPC file names.
    pub fn product_code(self) -> &'static str {
        match self {
            ConvectiveForecastType::Categorical => "cat",
            ConvectiveForecastType::Tornado => "torn",
            ConvectiveForecastType::SignificantTornado => "sigtorn",
            ConvectiveForecastType::Hail => "hail",
            ConvectiveForecastType::SignificantHail => "sighail",
            ConvectiveForecastType::Wind => "wind",
            ConvectiveForecastType::SignificantWind => "sigwind",
        }
    }

    /// Significant-severe products mark their areas with LABEL == "SIGN".
    pub fn is_significant(self) -> bool {
        matches!(
            self,
            ConvectiveForecastType::SignificantTornado
                | ConvectiveForecastType::SignificantHail
                | ConvectiveForecastType::SignificantWind
        )
    }
}

/// Forecast day: 1 is today, 2 tomorrow, 3 the day after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    Day1,
    Day2,
    Day3,
}

impl Day {
    pub fn number(self) -> u8 {
        match self {
            Day::Day1 => 1,
            Day::Day2 => 2,
            Day::Day3 => 3,
        }
    }
}

/// URL of the `.lyr.geojson` outlook product for a day and type.
pub fn product_url(day: Day, kind: ConvectiveForecastType) -> String {
    format!(
        "{}/products/outlook/day{}otlk_{}.lyr.geojson",
        PRODUCT_BASE_URL,
        day.number(),
        kind.product_code()
    )
}

/// Categorical outlook identifiers, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryId {
    None,
    Tstm,
    Mrgl,
    Slgt,
    Enh,
    Mdt,
    High,
}

impl CategoryId {
    /// Parse an SPC LABEL, falling back to `None` for anything unknown.
    pub fn from_label(label: Option<&str>) -> CategoryId {
        match label {
            Some("NONE") => CategoryId::None,
            Some("TSTM") => CategoryId::Tstm,
            Some("MRGL") => CategoryId::Mrgl,
            Some("SLGT") => CategoryId::Slgt,
            Some("ENH") => CategoryId::Enh,
            Some("MDT") => CategoryId::Mdt,
            Some("HIGH") => CategoryId::High,
            _ => CategoryId::None,
        }
    }

    pub fn details(self) -> &'static CategoryDetails {
        &CATEGORY_OUTLOOK[self as usize]
    }

    /// Risk level from -1 (no risk) through 5 (high risk).
    pub fn risk_level(self) -> i8 {
        self.details().risk_level
    }
}

/// Static lookup record for a categorical risk level. Built once, never
/// mutated.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CategoryDetails {
    pub id: CategoryId,
    pub risk_level: i8,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

// Indexed by CategoryId discriminant.
static CATEGORY_OUTLOOK: [CategoryDetails; 7] = [
    CategoryDetails {
        id: CategoryId::None,
        risk_level: -1,
        name: "None",
        description: "No severe weather expected.",
        color: "#f0f0f0",
    },
    CategoryDetails {
        id: CategoryId::Tstm,
        risk_level: 0,
        name: "general thunderstorms",
        description: "General thunderstorms. <10% probability of severe.",
        color: "#c1e9c1",
    },
    CategoryDetails {
        id: CategoryId::Mrgl,
        risk_level: 1,
        name: "marginal risk",
        description: "An area of severe storms of either limited organization and longevity, \
                      or very low coverage and marginal intensity.",
        color: "#66a366",
    },
    CategoryDetails {
        id: CategoryId::Slgt,
        risk_level: 2,
        name: "slight risk",
        description: "An area of severe storms expected to be more scattered in coverage \
                      and/or not as organized.",
        color: "#ffe066",
    },
    CategoryDetails {
        id: CategoryId::Enh,
        risk_level: 3,
        name: "enhanced risk",
        description: "An area of severe storms with numerous severe storms possible with \
                      varying levels of intensity.",
        color: "#ffa366",
    },
    CategoryDetails {
        id: CategoryId::Mdt,
        risk_level: 4,
        name: "moderate risk",
        description: "An area where widespread severe weather with several tornadoes and/or \
                      numerous severe thunderstorms is likely, some of which should be intense. \
                      This risk is usually reserved for days with several supercells producing \
                      intense tornadoes and/or very large hail, or an intense squall line with \
                      widespread damaging winds.",
        color: "#e06666",
    },
    CategoryDetails {
        id: CategoryId::High,
        risk_level: 5,
        name: "high risk",
        description: "An area where a severe weather outbreak is expected from either numerous \
                      intense and long-tracked tornadoes or a long-lived derecho-producing \
                      thunderstorm complex that produces hurricane-force wind gusts and \
                      widespread damage. This risk is reserved for when high confidence exists \
                      in widespread coverage of severe weather with embedded instances of \
                      extreme severe (i.e., violent tornadoes or very damaging convective wind \
                      events).",
        color: "#ee99ee",
    },
];

/// Category record for an SPC LABEL; unknown or missing labels map to NONE.
pub fn risk_category(label: Option<&str>) -> &'static CategoryDetails {
    CategoryId::from_label(label).details()
}

/// Feature properties carried by SPC outlook GeoJSON.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlookProperties {
    pub dn: i64,
    pub valid: String,
    pub expire: String,
    pub issue: String,
    pub label: String,
    pub label2: String,
    pub stroke: String,
    pub fill: String,
}

/// Outlook area geometry. Only the outer ring of each polygon is tested
/// for containment; holes are not part of the product.
#[derive(Clone, Debug, PartialEq)]
pub enum OutlookGeometry {
    /// Rings of a single polygon; index 0 is the outer boundary.
    Polygon(Vec<Polygon>),
    MultiPolygon(Vec<Vec<Polygon>>),
}

impl OutlookGeometry {
    /// Outer boundary ring(s) of the geometry.
    pub fn outer_rings(&self) -> Vec<&Polygon> {
        match self {
            OutlookGeometry::Polygon(rings) => rings.first().into_iter().collect(),
            OutlookGeometry::MultiPolygon(polygons) => {
                polygons.iter().filter_map(|rings| rings.first()).collect()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlookFeature {
    pub geometry: OutlookGeometry,
    pub properties: OutlookProperties,
}

/// A parsed outlook product: the features of one day/type layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forecast {
    pub features: Vec<OutlookFeature>,
}

/// Find the outlook area containing `location`, if any.
///
/// Features are drawn lowest category first, so scanning in reverse returns
/// the most severe matching area. `significant` selects between the
/// LABEL == "SIGN" areas and the ordinary ones.
pub fn find_outlook_for_location<'a>(
    forecast: &'a Forecast,
    location: GeoLocation,
    significant: bool,
) -> Option<&'a OutlookProperties> {
    let point = location.to_point();

    for feature in forecast
        .features
        .iter()
        .rev()
        .filter(|f| (f.properties.label == "SIGN") == significant)
    {
        for ring in feature.geometry.outer_rings() {
            if point_in_polygon(ring, point, 0.0).is_inside() {
                return Some(&feature.properties);
            }
        }
    }

    None
}

/// LABEL of the matching outlook area for a product type, or `None` when
/// the location is in no area.
pub fn forecast_label_for_location<'a>(
    forecast: &'a Forecast,
    kind: ConvectiveForecastType,
    location: GeoLocation,
) -> Option<&'a str> {
    find_outlook_for_location(forecast, location, kind.is_significant())
        .map(|properties| properties.label.as_str())
}
