//! Mock solar forecast series.
//!
//! A series covers a fixed multi-day window at hourly granularity. The
//! "actual" curve is a daylight-gated sine wave whose shape depends only on
//! the location identifier's seed; the "forecast" curve perturbs it with
//! bounded multiplicative jitter; "cloud" is a probability-gated random
//! magnitude. The whole window is regenerated (and re-randomized) on every
//! location event, previously seen identifiers included.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use crate::seed::identifier_seed;

/// Shape of the generated forecast window.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesConfig {
    /// Ordered day labels; each contributes `hours_per_day` samples.
    pub day_labels: Vec<String>,
    pub hours_per_day: usize,
    /// Hours (inclusive at both ends) treated as daylight.
    pub daylight: RangeInclusive<usize>,
    /// Base amplitude of the clear-sky curve.
    pub amplitude: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            day_labels: ["Sat 22", "Sun 23", "Today", "Tue 25"]
                .map(str::to_string)
                .to_vec(),
            hours_per_day: 24,
            daylight: 6..=18,
            amplitude: 7.0,
        }
    }
}

impl SeriesConfig {
    /// Default window with the given day labels.
    pub fn with_day_labels(day_labels: Vec<String>) -> Self {
        Self {
            day_labels,
            ..Self::default()
        }
    }

    pub fn total_samples(&self) -> usize {
        self.day_labels.len() * self.hours_per_day
    }

    pub fn is_daylight(&self, hour: usize) -> bool {
        self.daylight.contains(&hour)
    }
}

/// One hour of the mock forecast window.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    /// Formatted hour, `"HH:00"`.
    pub time: String,
    /// Day label this hour belongs to.
    pub day: String,
    /// Running index across the whole window.
    pub hour_index: usize,
    /// Mock measured output.
    pub actual: f64,
    /// Mock forecast output (actual plus bounded jitter).
    pub forecast: f64,
    /// Mock cloud cover magnitude.
    pub cloud: f64,
    /// X-axis tick label; empty for unlabeled hours.
    pub label: String,
}

/// Deterministic clear-sky component of the series.
///
/// Pure in the identifier seed: no randomness enters here.
pub fn clear_sky_actual(seed: u32, index: usize, hour: usize, config: &SeriesConfig) -> f64 {
    let seed_factor = f64::from(seed % 10) / 10.0;
    let base = (((index as f64 / 12.0) + seed_factor) * PI).sin()
        * (config.amplitude + seed_factor * 2.0);
    if config.is_daylight(hour) {
        base.max(0.0)
    } else {
        0.0
    }
}

/// Regenerate the full window for `location_id`.
///
/// The clear-sky curve is a pure function of the identifier; forecast
/// jitter and cloud gating draw from `rng` on every call.
pub fn generate_series<R: Rng>(
    location_id: &str,
    config: &SeriesConfig,
    rng: &mut R,
) -> Vec<ForecastSample> {
    let seed = identifier_seed(location_id);
    let seed_factor = f64::from(seed % 10) / 10.0;
    let total = config.total_samples();
    let mut samples = Vec::with_capacity(total);

    for index in 0..total {
        let hour = index % config.hours_per_day;
        let day_index = index / config.hours_per_day;
        let time = format!("{hour:02}:00");
        let day = config.day_labels[day_index].clone();

        let actual = clear_sky_actual(seed, index, hour, config);
        let forecast = actual * (1.0 + rng.gen_range(-0.05..0.05));

        let cloud = if config.is_daylight(hour) {
            let magnitude = rng.gen_range(0.0..5.0);
            if rng.gen_range(0.0..1.0) > (0.7 - seed_factor * 0.2) {
                magnitude
            } else {
                0.0
            }
        } else {
            0.0
        };

        let label = if hour == 12 {
            format!("{time}\n{day}")
        } else if hour % 6 == 0 {
            time.clone()
        } else {
            String::new()
        };

        samples.push(ForecastSample {
            time,
            day,
            hour_index: index,
            actual,
            forecast,
            cloud,
            label,
        });
    }

    log::debug!(
        "regenerated {} samples for location '{}'",
        samples.len(),
        location_id
    );
    samples
}

/// Serialized form handed to the chart bridge.
pub fn series_json(samples: &[ForecastSample]) -> String {
    serde_json::to_string(samples).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_series_length_is_fixed_regardless_of_identifier() {
        let config = SeriesConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for id in ["nyc", "cloud1", "pos--101.23-38.99", "", "a-very-long-id"] {
            let series = generate_series(id, &config, &mut rng);
            assert_eq!(series.len(), 96);
        }
    }

    #[test]
    fn test_night_hours_are_zero() {
        let config = SeriesConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let series = generate_series("denver", &config, &mut rng);

        for sample in &series {
            let hour = sample.hour_index % 24;
            if !(6..=18).contains(&hour) {
                assert_eq!(sample.actual, 0.0, "hour {hour}");
                assert_eq!(sample.cloud, 0.0, "hour {hour}");
            }
            assert!(sample.actual >= 0.0);
            assert!((0.0..5.0).contains(&sample.cloud) || sample.cloud == 0.0);
        }
    }

    #[test]
    fn test_daylight_boundary_hours_can_be_nonzero() {
        let config = SeriesConfig::default();
        // Both boundary hours are inside the window, so the clear-sky term
        // is evaluated rather than forced to zero.
        let seed = identifier_seed("sf");
        let any_boundary_nonzero = (0..config.total_samples())
            .filter(|index| {
                let hour = index % config.hours_per_day;
                hour == 6 || hour == 18
            })
            .any(|index| clear_sky_actual(seed, index, index % 24, &config) > 0.0);
        assert!(any_boundary_nonzero);
    }

    #[test]
    fn test_clear_sky_curve_ignores_rng() {
        let config = SeriesConfig::default();
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(999);

        let series_a = generate_series("chicago", &config, &mut rng_a);
        let series_b = generate_series("chicago", &config, &mut rng_b);

        for (a, b) in series_a.iter().zip(&series_b) {
            assert_eq!(a.actual, b.actual);
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_whole_series() {
        let config = SeriesConfig::default();
        let series_a = generate_series("houston", &config, &mut StdRng::seed_from_u64(42));
        let series_b = generate_series("houston", &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(series_a, series_b);
    }

    #[test]
    fn test_forecast_jitter_is_bounded() {
        let config = SeriesConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_series("atlanta", &config, &mut rng);

        for sample in &series {
            let bound = sample.actual * 0.05 + 1e-9;
            assert!(
                (sample.forecast - sample.actual).abs() <= bound,
                "forecast {} too far from actual {}",
                sample.forecast,
                sample.actual
            );
        }
    }

    #[test]
    fn test_equal_seed_identifiers_share_clear_sky_curve() {
        let config = SeriesConfig::default();
        // "ab" and "ba" have equal code-point sums.
        let series_a = generate_series("ab", &config, &mut StdRng::seed_from_u64(5));
        let series_b = generate_series("ba", &config, &mut StdRng::seed_from_u64(6));

        for (a, b) in series_a.iter().zip(&series_b) {
            assert_eq!(a.actual, b.actual);
        }
    }

    #[test]
    fn test_axis_labels() {
        let config = SeriesConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let series = generate_series("nyc", &config, &mut rng);

        assert_eq!(series[0].label, "00:00");
        assert_eq!(series[6].label, "06:00");
        assert_eq!(series[12].label, "12:00\nSat 22");
        assert_eq!(series[1].label, "");
        // Second day's noon carries its own day label.
        assert_eq!(series[36].label, "12:00\nSun 23");
    }

    #[test]
    fn test_custom_day_labels_scale_the_window() {
        let config = SeriesConfig::with_day_labels(vec![
            "Mon 1".to_string(),
            "Tue 2".to_string(),
        ]);
        let mut rng = StdRng::seed_from_u64(2);
        let series = generate_series("sf", &config, &mut rng);
        assert_eq!(series.len(), 48);
        assert_eq!(series[47].day, "Tue 2");
    }

    #[test]
    fn test_location_event_regenerates_series_through_bus() {
        use cloudcast_core::bus::EventBus;
        use cloudcast_core::event::{LngLat, LocationEvent};
        use std::cell::RefCell;
        use std::rc::Rc;

        let bus = EventBus::new();
        let chart: Rc<RefCell<(Vec<ForecastSample>, String)>> =
            Rc::new(RefCell::new((Vec::new(), String::new())));

        let chart_cb = Rc::clone(&chart);
        let sub = bus.subscribe("forecast-chart", move |event: &LocationEvent| {
            let config = SeriesConfig::default();
            let mut rng = StdRng::seed_from_u64(u64::from(identifier_seed(&event.id)));
            let series = generate_series(&event.id, &config, &mut rng);
            *chart_cb.borrow_mut() = (series, event.display_label());
        });

        bus.publish(&LocationEvent {
            id: "nyc".to_string(),
            name: Some("New York City".to_string()),
            coordinates: LngLat::new(-74.0060, 40.7128),
        });

        {
            let state = chart.borrow();
            assert_eq!(state.0.len(), 96);
            assert_eq!(state.1, "New York City");
        }

        sub.unsubscribe();
        bus.publish(&LocationEvent {
            id: "sf".to_string(),
            name: Some("San Francisco".to_string()),
            coordinates: LngLat::new(-122.4194, 37.7749),
        });
        // Unsubscribed: the chart still shows New York City's window.
        assert_eq!(chart.borrow().1, "New York City");
    }
}
