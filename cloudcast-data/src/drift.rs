//! Cosmetic cloud drift for the animated map variant.
//!
//! Each frame recomputes every feature's vertices and density from the
//! fixed base collection and the elapsed time. The base collection is the
//! reference the animation always returns to; nothing is mutated in place.

use std::f64::consts::TAU;

use cloudcast_core::geo::CloudCollection;

use crate::seed::identifier_seed;

/// Tuning for the drift animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftParams {
    /// Seconds per full wobble cycle.
    pub period_secs: f64,
    /// Peak vertex displacement in degrees of longitude.
    pub lng_amplitude: f64,
    /// Peak vertex displacement in degrees of latitude.
    pub lat_amplitude: f64,
    /// Peak density deviation from the base value.
    pub density_wobble: f64,
}

impl Default for DriftParams {
    fn default() -> Self {
        Self {
            period_secs: 60.0,
            lng_amplitude: 1.5,
            lat_amplitude: 0.6,
            density_wobble: 0.15,
        }
    }
}

/// Recompute the collection for elapsed time `elapsed_secs`.
///
/// Vertices are offset rigidly per feature by bounded sin/cos terms with a
/// per-feature phase derived from the feature id, so ring closure and
/// vertex counts are preserved. Densities wobble sinusoidally and are
/// clamped to `[0, 1]`.
pub fn drift_collection(
    base: &CloudCollection,
    elapsed_secs: f64,
    params: &DriftParams,
) -> CloudCollection {
    let omega = TAU / params.period_secs;
    let mut features = Vec::with_capacity(base.features.len());

    for feature in &base.features {
        let phase = f64::from(identifier_seed(&feature.id) % 360) * TAU / 360.0;
        let theta = omega * elapsed_secs + phase;

        let mut drifted = feature.clone();
        let lng_offset = params.lng_amplitude * theta.sin();
        let lat_offset = params.lat_amplitude * (theta * 0.5).cos();
        for vertex in &mut drifted.ring {
            vertex[0] += lng_offset;
            vertex[1] += lat_offset;
        }
        drifted.density =
            (feature.density + params.density_wobble * (theta * 0.8).sin()).clamp(0.0, 1.0);

        features.push(drifted);
    }

    CloudCollection { features }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudcast_core::clouds::cloud_cover;

    #[test]
    fn test_drift_preserves_geometry_shape() {
        let base = cloud_cover();
        let drifted = drift_collection(&base, 12.34, &DriftParams::default());

        assert_eq!(drifted.features.len(), base.features.len());
        for (before, after) in base.features.iter().zip(&drifted.features) {
            assert_eq!(before.ring.len(), after.ring.len());
            assert_eq!(before.id, after.id);
            assert!(after.is_closed());
        }
    }

    #[test]
    fn test_drift_displacement_is_bounded() {
        let base = cloud_cover();
        let params = DriftParams::default();

        for tenth in 0..600 {
            let drifted = drift_collection(&base, f64::from(tenth) / 10.0, &params);
            for (before, after) in base.features.iter().zip(&drifted.features) {
                for (v0, v1) in before.ring.iter().zip(&after.ring) {
                    assert!((v1[0] - v0[0]).abs() <= params.lng_amplitude + 1e-9);
                    assert!((v1[1] - v0[1]).abs() <= params.lat_amplitude + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_density_stays_in_unit_interval() {
        let base = cloud_cover();
        let params = DriftParams {
            density_wobble: 5.0,
            ..DriftParams::default()
        };

        for tenth in 0..600 {
            let drifted = drift_collection(&base, f64::from(tenth) / 10.0, &params);
            for feature in &drifted.features {
                assert!((0.0..=1.0).contains(&feature.density));
            }
        }
    }

    #[test]
    fn test_drift_is_deterministic_in_elapsed_time() {
        let base = cloud_cover();
        let params = DriftParams::default();
        let a = drift_collection(&base, 42.0, &params);
        let b = drift_collection(&base, 42.0, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_base_collection_is_untouched() {
        let base = cloud_cover();
        let snapshot = base.clone();
        let _ = drift_collection(&base, 99.9, &DriftParams::default());
        assert_eq!(base, snapshot);
    }
}
