use serde_json::json;
use spc_outlook::outlook::{
    find_outlook_for_location, forecast_label_for_location, risk_category, CategoryId,
    ConvectiveForecastType,
};
use spc_outlook::json::parse_forecast;
use spc_outlook::GeoLocation;

// A cut-down day-1 categorical layer: TSTM drawn first, MRGL nested inside,
// plus a significant-severe area sharing the layer.
fn sample_layer() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-100.0, 30.0], [-90.0, 30.0], [-90.0, 40.0], [-100.0, 40.0]
                    ]]
                },
                "properties": {
                    "DN": 2, "VALID": "202608281200", "EXPIRE": "202608291200",
                    "ISSUE": "202608280545", "LABEL": "TSTM",
                    "LABEL2": "General Thunderstorms Risk",
                    "stroke": "#55BB55", "fill": "#C1E9C1"
                }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-97.0, 33.0], [-94.0, 33.0], [-94.0, 36.0], [-97.0, 36.0]]],
                        [[[-93.0, 31.0], [-92.0, 31.0], [-92.0, 32.0], [-93.0, 32.0]]]
                    ]
                },
                "properties": {
                    "DN": 3, "VALID": "202608281200", "EXPIRE": "202608291200",
                    "ISSUE": "202608280545", "LABEL": "MRGL",
                    "LABEL2": "Marginal Risk",
                    "stroke": "#005500", "fill": "#66A366"
                }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-96.0, 34.0], [-95.0, 34.0], [-95.0, 35.0], [-96.0, 35.0]
                    ]]
                },
                "properties": {
                    "DN": 10, "VALID": "202608281200", "EXPIRE": "202608291200",
                    "ISSUE": "202608280545", "LABEL": "SIGN",
                    "LABEL2": "Significant Severe",
                    "stroke": "#000000", "fill": "#888888"
                }
            }
        ]
    })
}

#[test]
fn layer_parses_with_all_features() {
    let forecast = parse_forecast(sample_layer()).expect("layer parses");
    assert_eq!(forecast.features.len(), 3);
    assert_eq!(forecast.features[0].properties.label, "TSTM");
    assert_eq!(forecast.features[1].properties.dn, 3);
    assert_eq!(forecast.features[1].geometry.outer_rings().len(), 2);
}

#[test]
fn nested_areas_resolve_to_the_most_severe() {
    let forecast = parse_forecast(sample_layer()).unwrap();

    let in_mrgl = GeoLocation { latitude: 34.5, longitude: -96.5 };
    let in_tstm_only = GeoLocation { latitude: 38.0, longitude: -95.0 };
    let nowhere = GeoLocation { latitude: 45.0, longitude: -80.0 };

    assert_eq!(
        find_outlook_for_location(&forecast, in_mrgl, false).map(|p| p.label.as_str()),
        Some("MRGL")
    );
    assert_eq!(
        find_outlook_for_location(&forecast, in_tstm_only, false).map(|p| p.label.as_str()),
        Some("TSTM")
    );
    assert!(find_outlook_for_location(&forecast, nowhere, false).is_none());
}

#[test]
fn detached_multipolygon_areas_match() {
    let forecast = parse_forecast(sample_layer()).unwrap();
    let in_detached = GeoLocation { latitude: 31.5, longitude: -92.5 };
    assert_eq!(
        find_outlook_for_location(&forecast, in_detached, false).map(|p| p.label.as_str()),
        Some("MRGL")
    );
}

#[test]
fn significant_products_only_see_sign_areas() {
    let forecast = parse_forecast(sample_layer()).unwrap();
    let in_sign = GeoLocation { latitude: 34.5, longitude: -95.5 };

    let label =
        forecast_label_for_location(&forecast, ConvectiveForecastType::SignificantTornado, in_sign);
    assert_eq!(label, Some("SIGN"));

    // The same point resolved categorically skips the SIGN area.
    let label =
        forecast_label_for_location(&forecast, ConvectiveForecastType::Categorical, in_sign);
    assert_eq!(label, Some("MRGL"));
}

#[test]
fn labels_map_to_category_records() {
    let forecast = parse_forecast(sample_layer()).unwrap();
    let in_mrgl = GeoLocation { latitude: 34.5, longitude: -96.5 };

    let label = forecast_label_for_location(&forecast, ConvectiveForecastType::Categorical, in_mrgl);
    let category = risk_category(label);
    assert_eq!(category.id, CategoryId::Mrgl);
    assert_eq!(category.risk_level, 1);

    let nowhere = GeoLocation { latitude: 45.0, longitude: -80.0 };
    let label = forecast_label_for_location(&forecast, ConvectiveForecastType::Categorical, nowhere);
    assert_eq!(risk_category(label).id, CategoryId::None);
    assert_eq!(risk_category(label).risk_level, -1);
}
