//! Solar forecast chart widget.
//!
//! Subscribes to the event bus once at mount and regenerates its whole
//! window on every location event. Nothing is cached per identifier: a
//! repeat click on the same location redraws the jitter and cloud terms.

use std::cell::RefCell;
use std::rc::Rc;

use cloudcast_core::bus::{EventBus, Subscription};
use cloudcast_data::series::{generate_series, series_json, SeriesConfig};
use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::js_bridge;
use crate::state::AppState;

/// Bus subscriber identifier for this widget.
const SUBSCRIBER_ID: &str = "forecast-chart";

/// Props for ForecastChart
#[derive(Props, Clone, PartialEq)]
pub struct ForecastChartProps {
    /// The DOM id for the chart container (D3 renders into this)
    pub id: String,
    /// Day labels for the window; empty means the built-in default four
    #[props(default)]
    pub day_labels: Vec<String>,
}

#[component]
pub fn ForecastChart(props: ForecastChartProps) -> Element {
    let mut state = use_context::<AppState>();
    let bus = use_context::<EventBus>();

    let config = if props.day_labels.is_empty() {
        SeriesConfig::default()
    } else {
        SeriesConfig::with_day_labels(props.day_labels.clone())
    };

    // Subscribe once at mount; the holder keeps the de-registration handle
    // alive until unmount.
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));
    let hook_subscription = Rc::clone(&subscription);
    use_effect(move || {
        if hook_subscription.borrow().is_some() {
            return;
        }

        // Initial window, before any map interaction.
        let mut rng = StdRng::from_entropy();
        state
            .series
            .set(generate_series("default", &config, &mut rng));

        let callback_config = config.clone();
        let sub = bus.subscribe(SUBSCRIBER_ID, move |event| {
            // Signals are Copy handles; grab mutable copies inside the
            // shared-callback context.
            let mut series = state.series;
            let mut location_label = state.location_label;
            let mut rng = StdRng::from_entropy();
            series.set(generate_series(&event.id, &callback_config, &mut rng));
            location_label.set(event.display_label());
        });
        hook_subscription.borrow_mut().replace(sub);
    });

    let drop_subscription = Rc::clone(&subscription);
    let drop_id = props.id.clone();
    use_drop(move || {
        if let Some(sub) = drop_subscription.borrow_mut().take() {
            sub.unsubscribe();
        }
        js_bridge::destroy_chart(&drop_id);
    });

    // Redraw whenever the window changes.
    let render_id = props.id.clone();
    use_effect(move || {
        let series = state.series.read().clone();
        if series.is_empty() {
            return;
        }

        let config_json = json!({
            "height": 350,
            "seriesColor": "#F59E0B",
            "cloudColor": "#93C5FD",
        })
        .to_string();
        js_bridge::render_forecast_chart(&render_id, &series_json(&series), &config_json);
    });

    let location = (state.location_label)();

    rsx! {
        div {
            style: "position: relative; background: #374151; color: white;",

            // Location badge
            div {
                style: "position: absolute; left: 16px; top: 12px; z-index: 10; background: rgba(31,41,55,0.8); padding: 4px 12px; border-radius: 4px; font-size: 13px;",
                "{location}"
            }

            div {
                id: "{props.id}",
                style: "width: 100%; min-height: 350px;",
            }

            div {
                style: "margin-top: 8px; padding: 12px 16px 0; border-top: 1px solid #4B5563;",
                p {
                    style: "text-align: center; color: #9CA3AF; font-size: 13px; margin: 0;",
                    "[ Delta values not available until PV Live output available ]"
                }
            }

            // Series legend
            div {
                style: "display: flex; justify-content: space-between; padding: 16px; border-top: 1px solid #4B5563; margin-top: 16px;",
                div {
                    style: "display: flex; gap: 32px;",
                    div {
                        style: "display: flex; align-items: center;",
                        div { style: "width: 16px; height: 8px; background: #F59E0B; border-radius: 4px; margin-right: 8px;" }
                        span { style: "font-size: 13px; color: #D1D5DB;", "PV LIVE INITIAL ESTIMATE" }
                    }
                    div {
                        style: "display: flex; align-items: center;",
                        div { style: "width: 16px; height: 0; border: 1px dashed #F59E0B; margin-right: 8px;" }
                        span { style: "font-size: 13px; color: #D1D5DB;", "OCF LATEST FORECAST" }
                    }
                }
            }
        }
    }
}
