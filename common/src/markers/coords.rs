use serde::Serialize;
use serde_json::Value;

use crate::model::sample::Sample;

/// A WGS84 position in the `[lat, lon]` order the map widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Resolves where a sample goes on the map.
///
/// Explicit `lat`/`lon` fields win when both are finite numbers (numeric
/// strings are accepted too). Otherwise `geometry.coordinates` is read as a
/// GeoJSON `[lon, lat]` pair and swapped. Anything else yields `None`.
pub fn resolve(sample: &Sample) -> Option<LatLon> {
    if let (Some(lat), Some(lon)) = (as_coordinate(&sample.lat), as_coordinate(&sample.lon)) {
        return Some(LatLon { lat, lon });
    }

    let pair = sample.geometry.get("coordinates")?.as_array()?;
    if pair.len() < 2 {
        return None;
    }
    Some(LatLon {
        lat: as_coordinate(&pair[1])?,
        lon: as_coordinate(&pair[0])?,
    })
}

fn as_coordinate(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn explicit_lat_lon_is_used_as_is() {
        let s = sample(json!({"lat": -33.9249, "lon": 18.4241}));
        assert_eq!(resolve(&s), Some(LatLon { lat: -33.9249, lon: 18.4241 }));
    }

    #[test]
    fn geometry_coordinates_are_swapped() {
        let s = sample(json!({"geometry": {"type": "Point", "coordinates": [4.89, 52.37]}}));
        assert_eq!(resolve(&s), Some(LatLon { lat: 52.37, lon: 4.89 }));
    }

    #[test]
    fn explicit_fields_take_precedence_over_geometry() {
        let s = sample(json!({"lat": 1.0, "lon": 2.0, "geometry": {"coordinates": [30.0, 40.0]}}));
        assert_eq!(resolve(&s), Some(LatLon { lat: 1.0, lon: 2.0 }));
    }

    #[test]
    fn half_explicit_location_falls_back_to_geometry() {
        let s = sample(json!({"lat": 1.0, "lon": null, "geometry": {"coordinates": [30.0, 40.0]}}));
        assert_eq!(resolve(&s), Some(LatLon { lat: 40.0, lon: 30.0 }));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let s = sample(json!({"lat": " 12.5", "lon": "-7"}));
        assert_eq!(resolve(&s), Some(LatLon { lat: 12.5, lon: -7.0 }));
    }

    #[test]
    fn unusable_locations_resolve_to_none() {
        for value in [
            json!({}),
            json!({"lat": null, "lon": null}),
            json!({"lat": "north", "lon": "west"}),
            json!({"lat": "", "lon": ""}),
            json!({"geometry": {"coordinates": [1.0]}}),
            json!({"geometry": {"coordinates": "1,2"}}),
            json!({"geometry": {"coordinates": [null, 2.0]}}),
            json!({"geometry": null}),
        ] {
            assert_eq!(resolve(&sample(value.clone())), None, "{}", value);
        }
    }

    #[test]
    fn extra_geometry_dimensions_are_ignored() {
        let s = sample(json!({"geometry": {"coordinates": [4.0, 50.0, 12.0]}}));
        assert_eq!(resolve(&s), Some(LatLon { lat: 50.0, lon: 4.0 }));
    }
}
