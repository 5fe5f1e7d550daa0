//! Solar forecast dashboard page.
//!
//! Layout variant 2: brand header, region summary strip, cloud map, and
//! the forecast chart. Clicking anywhere on the map publishes a location
//! event; the chart regenerates its 4-day hourly window in response.

use chrono::{Duration, Local};
use cloudcast_core::bus::EventBus;
use cloudcast_ui::components::{ErrorDisplay, ForecastChart, MapView, RegionHeader, SolarHeader};
use cloudcast_ui::js_bridge;
use cloudcast_ui::state::AppState;
use dioxus::prelude::*;

/// DOM id for the map container div.
const MAP_CONTAINER_ID: &str = "solar-forecast-map";
/// DOM id for the chart container div.
const CHART_CONTAINER_ID: &str = "solar-forecast-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("solar-forecast-root"))
        .launch(App);
}

/// Day labels for the charted window: two days back through one day
/// ahead, with the current day rendered as "Today".
fn window_day_labels() -> Vec<String> {
    let today = Local::now().date_naive();
    (-2..=1)
        .map(|offset| {
            if offset == 0 {
                "Today".to_string()
            } else {
                (today + Duration::days(offset)).format("%a %-d").to_string()
            }
        })
        .collect()
}

#[component]
fn App() -> Element {
    use_context_provider(EventBus::new);
    let state = use_context_provider(AppState::new);

    // Evaluate the bridge scripts once on mount.
    use_effect(|| js_bridge::init_scripts());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100vh; background: #111827; font-family: system-ui, -apple-system, sans-serif;",

            SolarHeader {}
            RegionHeader {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            main {
                style: "flex-grow: 1; display: flex; flex-direction: column;",
                MapView {
                    id: MAP_CONTAINER_ID.to_string(),
                }
                ForecastChart {
                    id: CHART_CONTAINER_ID.to_string(),
                    day_labels: window_day_labels(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_day_labels_shape() {
        let labels = window_day_labels();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[2], "Today");
        for (index, label) in labels.iter().enumerate() {
            if index != 2 {
                // e.g. "Sat 22"
                assert!(label.contains(' '), "unexpected label {label:?}");
            }
        }
    }
}
