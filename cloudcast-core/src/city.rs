//! Fixed city markers providing extra click targets on the map.

use serde_json::{json, Value};

/// A clickable city marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityMarker {
    pub id: &'static str,
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

/// The six built-in city markers.
pub const CITIES: [CityMarker; 6] = [
    CityMarker {
        id: "nyc",
        name: "New York City",
        lng: -74.0060,
        lat: 40.7128,
    },
    CityMarker {
        id: "chicago",
        name: "Chicago",
        lng: -87.6298,
        lat: 41.8781,
    },
    CityMarker {
        id: "sf",
        name: "San Francisco",
        lng: -122.4194,
        lat: 37.7749,
    },
    CityMarker {
        id: "denver",
        name: "Denver",
        lng: -104.9903,
        lat: 39.7392,
    },
    CityMarker {
        id: "houston",
        name: "Houston",
        lng: -95.3698,
        lat: 29.7604,
    },
    CityMarker {
        id: "atlanta",
        name: "Atlanta",
        lng: -84.3880,
        lat: 33.7490,
    },
];

/// JSON array handed to the map bridge for marker creation.
pub fn markers_json() -> Value {
    json!(CITIES
        .iter()
        .map(|city| {
            json!({
                "id": city.id,
                "name": city.name,
                "lng": city.lng,
                "lat": city.lat,
            })
        })
        .collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_ids_are_unique() {
        let ids: HashSet<&str> = CITIES.iter().map(|city| city.id).collect();
        assert_eq!(ids.len(), CITIES.len());
    }

    #[test]
    fn test_markers_json_shape() {
        let value = markers_json();
        let markers = value.as_array().unwrap();
        assert_eq!(markers.len(), 6);
        assert_eq!(markers[0]["id"], "nyc");
        assert_eq!(markers[0]["name"], "New York City");
    }
}
