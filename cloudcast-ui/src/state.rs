//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cloudcast_data::series::ForecastSample;
use dioxus::prelude::*;

use crate::DEFAULT_MAPBOX_TOKEN;

/// Shared application state for the Cloudcast page apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the map view finished loading
    pub map_loaded: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Access token typed into the manual override input
    pub token_input: Signal<String>,
    /// Access token currently applied to the map view
    pub active_token: Signal<String>,
    /// Identifier of the most recently clicked feature/marker/position
    pub selected_feature: Signal<Option<String>>,
    /// Label describing the charted location
    pub location_label: Signal<String>,
    /// Current forecast window
    pub series: Signal<Vec<ForecastSample>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            map_loaded: Signal::new(false),
            error_msg: Signal::new(None),
            token_input: Signal::new(DEFAULT_MAPBOX_TOKEN.to_string()),
            active_token: Signal::new(DEFAULT_MAPBOX_TOKEN.to_string()),
            selected_feature: Signal::new(None),
            location_label: Signal::new("Default Location".to_string()),
            series: Signal::new(Vec::new()),
        }
    }
}
