//! The fixed demo cloud regions.

use crate::geo::{CloudCollection, CloudFeature};

/// Hard-coded cloud cover over the continental US: three named regions
/// with decreasing density. Features are never created or destroyed at
/// runtime; the animated variant only recomputes vertices and densities.
pub fn cloud_cover() -> CloudCollection {
    CloudCollection {
        features: vec![
            CloudFeature::new(
                "cloud1",
                Some("Midwest Region"),
                0.7,
                vec![
                    [-100.0, 40.0],
                    [-95.0, 37.0],
                    [-90.0, 35.0],
                    [-85.0, 37.0],
                    [-82.0, 42.0],
                    [-85.0, 45.0],
                    [-90.0, 47.0],
                    [-95.0, 45.0],
                    [-100.0, 40.0],
                ],
            ),
            CloudFeature::new(
                "cloud2",
                Some("Western Region"),
                0.5,
                vec![
                    [-120.0, 35.0],
                    [-115.0, 32.0],
                    [-110.0, 33.0],
                    [-108.0, 38.0],
                    [-110.0, 40.0],
                    [-115.0, 42.0],
                    [-120.0, 38.0],
                    [-120.0, 35.0],
                ],
            ),
            CloudFeature::new(
                "cloud3",
                Some("Eastern Region"),
                0.3,
                vec![
                    [-80.0, 38.0],
                    [-75.0, 36.0],
                    [-70.0, 39.0],
                    [-72.0, 43.0],
                    [-78.0, 44.0],
                    [-80.0, 38.0],
                ],
            ),
        ],
    }
}
