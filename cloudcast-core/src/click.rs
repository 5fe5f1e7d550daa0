//! Click resolution: raw map clicks to location events.
//!
//! Hit-testing lives in the map library; the bridge reports one payload per
//! click with whatever was under the cursor. This module owns the policy
//! that turns that payload into exactly one [`LocationEvent`].

use serde::Deserialize;

use crate::error::CloudcastError;
use crate::event::{LngLat, LocationEvent};

/// A cloud polygon hit reported by the map's rendered-feature query.
#[derive(Clone, Debug, Deserialize)]
pub struct FeatureHit {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A city marker hit.
#[derive(Clone, Debug, Deserialize)]
pub struct MarkerHit {
    pub id: String,
    pub name: String,
    pub lng: f64,
    pub lat: f64,
}

/// Raw click report from the map bridge: click coordinates plus at most
/// one feature hit and at most one marker hit.
#[derive(Clone, Debug, Deserialize)]
pub struct MapClick {
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub feature: Option<FeatureHit>,
    #[serde(default)]
    pub marker: Option<MarkerHit>,
}

impl MapClick {
    /// Decode the JSON payload handed over by the map bridge.
    pub fn from_json(payload: &str) -> Result<Self, CloudcastError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Resolve a raw click into exactly one location event.
///
/// Priority: polygon feature first, then marker, then a position id
/// synthesized from the rounded click coordinates. Overlapping hits never
/// produce more than one event.
pub fn resolve_click(click: &MapClick) -> LocationEvent {
    if let Some(feature) = &click.feature {
        return LocationEvent {
            id: feature.id.clone(),
            name: feature.name.clone(),
            coordinates: LngLat::new(click.lng, click.lat),
        };
    }

    if let Some(marker) = &click.marker {
        return LocationEvent {
            id: marker.id.clone(),
            name: Some(marker.name.clone()),
            coordinates: LngLat::new(marker.lng, marker.lat),
        };
    }

    LocationEvent {
        id: format!("pos-{:.2}-{:.2}", click.lng, click.lat),
        name: Some(format!("Location ({:.1}, {:.1})", click.lng, click.lat)),
        coordinates: LngLat::new(click.lng, click.lat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_click(lng: f64, lat: f64) -> MapClick {
        MapClick {
            lng,
            lat,
            feature: None,
            marker: None,
        }
    }

    #[test]
    fn test_feature_hit_wins_over_marker() {
        let click = MapClick {
            lng: -95.0,
            lat: 40.0,
            feature: Some(FeatureHit {
                id: "cloud1".to_string(),
                name: Some("Midwest Region".to_string()),
            }),
            marker: Some(MarkerHit {
                id: "chicago".to_string(),
                name: "Chicago".to_string(),
                lng: -87.6298,
                lat: 41.8781,
            }),
        };

        let event = resolve_click(&click);
        assert_eq!(event.id, "cloud1");
        assert_eq!(event.name.as_deref(), Some("Midwest Region"));
        assert_eq!(event.coordinates.lng, -95.0);
    }

    #[test]
    fn test_marker_hit_uses_marker_coordinates() {
        let click = MapClick {
            lng: -87.63,
            lat: 41.88,
            feature: None,
            marker: Some(MarkerHit {
                id: "chicago".to_string(),
                name: "Chicago".to_string(),
                lng: -87.6298,
                lat: 41.8781,
            }),
        };

        let event = resolve_click(&click);
        assert_eq!(event.id, "chicago");
        assert_eq!(event.coordinates.lng, -87.6298);
        assert_eq!(event.coordinates.lat, 41.8781);
    }

    #[test]
    fn test_empty_click_synthesizes_position_id() {
        let event = resolve_click(&bare_click(-101.2345, 38.9876));
        assert_eq!(event.id, "pos--101.23-38.99");
        assert_eq!(event.name.as_deref(), Some("Location (-101.2, 39.0)"));
    }

    #[test]
    fn test_click_payload_decoding() {
        let payload = r#"{
            "lng": -74.0,
            "lat": 40.7,
            "feature": null,
            "marker": {"id": "nyc", "name": "New York City",
                       "lng": -74.0060, "lat": 40.7128}
        }"#;

        let click = MapClick::from_json(payload).unwrap();
        let event = resolve_click(&click);
        assert_eq!(event.id, "nyc");
        assert_eq!(event.display_label(), "New York City");
    }

    #[test]
    fn test_click_payload_decode_failure() {
        assert!(MapClick::from_json("not json").is_err());
    }
}
