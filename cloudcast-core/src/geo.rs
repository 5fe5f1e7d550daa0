//! Cloud polygon model and GeoJSON serialization.

use serde_json::{json, Value};

/// A cloud polygon: a closed ring of `[lng, lat]` vertices, a density
/// scalar in `[0, 1]` driving fill opacity, and an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudFeature {
    pub id: String,
    pub name: Option<String>,
    pub density: f64,
    /// Outer ring, first vertex repeated as the last.
    pub ring: Vec<[f64; 2]>,
}

impl CloudFeature {
    /// Build a feature, closing the ring if the input leaves it open.
    pub fn new(
        id: impl Into<String>,
        name: Option<&str>,
        density: f64,
        mut ring: Vec<[f64; 2]>,
    ) -> Self {
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            density,
            ring,
        }
    }

    pub fn is_closed(&self) -> bool {
        match (self.ring.first(), self.ring.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// GeoJSON `Feature` value with `id`/`density`/`name` properties.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "Feature",
            "properties": {
                "id": self.id,
                "density": self.density,
                "name": self.name,
            },
            "geometry": {
                "type": "Polygon",
                "coordinates": [self.ring],
            },
        })
    }
}

/// The fixed set of cloud features rendered as one GeoJSON source.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CloudCollection {
    pub features: Vec<CloudFeature>,
}

impl CloudCollection {
    /// GeoJSON `FeatureCollection` value.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features.iter().map(CloudFeature::to_geojson).collect::<Vec<_>>(),
        })
    }

    /// Serialized form handed to the map source.
    pub fn to_json_string(&self) -> String {
        self.to_geojson().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ring_is_closed_on_construction() {
        let feature = CloudFeature::new(
            "c",
            None,
            0.5,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        );
        assert!(feature.is_closed());
        assert_eq!(feature.ring.len(), 4);
    }

    #[test]
    fn test_closed_ring_is_left_alone() {
        let ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
        let feature = CloudFeature::new("c", None, 0.5, ring.clone());
        assert_eq!(feature.ring, ring);
    }

    #[test]
    fn test_geojson_shape() {
        let feature = CloudFeature::new(
            "cloud9",
            Some("Somewhere"),
            0.7,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
        );
        let collection = CloudCollection {
            features: vec![feature],
        };

        let value = collection.to_geojson();
        assert_eq!(value["type"], "FeatureCollection");
        let feature = &value["features"][0];
        assert_eq!(feature["properties"]["id"], "cloud9");
        assert_eq!(feature["properties"]["density"], 0.7);
        assert_eq!(feature["geometry"]["type"], "Polygon");
        // One outer ring, four vertices.
        assert_eq!(
            feature["geometry"]["coordinates"][0]
                .as_array()
                .unwrap()
                .len(),
            4
        );
    }
}
