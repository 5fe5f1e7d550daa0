//! Location events published on map interaction.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair in floating-point degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Message describing a user-selected map location.
///
/// Created by the map widget on every click and consumed synchronously by
/// all current bus subscribers. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationEvent {
    /// Stable identifier of the clicked feature, marker, or position.
    pub id: String,
    /// Human-readable name, when the clicked thing has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Where the click landed.
    pub coordinates: LngLat,
}

impl LocationEvent {
    /// Label shown to the user: the display name, or `Location {id}`.
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Location {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_prefers_name() {
        let event = LocationEvent {
            id: "nyc".to_string(),
            name: Some("New York City".to_string()),
            coordinates: LngLat::new(-74.0060, 40.7128),
        };
        assert_eq!(event.display_label(), "New York City");
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let event = LocationEvent {
            id: "pos-1.00-2.00".to_string(),
            name: None,
            coordinates: LngLat::new(1.0, 2.0),
        };
        assert_eq!(event.display_label(), "Location pos-1.00-2.00");
    }
}
