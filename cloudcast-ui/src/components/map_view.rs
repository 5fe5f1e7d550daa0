//! Interactive cloud map widget.
//!
//! Owns the whole map lifecycle: bridge initialization, the click pipeline
//! feeding the event bus, the animated drift variant, and the only failure
//! path in the app (initialization errors leave the widget in its loading
//! state with a manual token override).

use std::cell::RefCell;
use std::rc::Rc;

use cloudcast_core::bus::EventBus;
use cloudcast_core::city;
use cloudcast_core::click::{resolve_click, MapClick};
use cloudcast_core::clouds;
use cloudcast_core::error::CloudcastError;
use cloudcast_data::drift::{drift_collection, DriftParams};
use dioxus::prelude::*;
use serde_json::json;

use crate::js_bridge::{self, MapCallbacks};
use crate::state::AppState;

use super::{LoadingOverlay, MapLegend};

/// View configuration handed to the map bridge.
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// Style URL understood by the map library.
    pub style: String,
    /// Initial center as (lng, lat).
    pub center: (f64, f64),
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: "mapbox://styles/mapbox/dark-v11".to_string(),
            // Centered on the continental US
            center: (-95.0, 40.0),
            zoom: 3.0,
        }
    }
}

impl MapConfig {
    fn to_json(&self) -> String {
        json!({
            "style": self.style,
            "center": [self.center.0, self.center.1],
            "zoom": self.zoom,
        })
        .to_string()
    }
}

/// Props for MapView
#[derive(Props, Clone, PartialEq)]
pub struct MapViewProps {
    /// The DOM id for the map container
    pub id: String,
    /// Recompute cloud vertices/densities per animation frame
    #[props(default = false)]
    pub animated: bool,
    #[props(default)]
    pub config: MapConfig,
}

/// The map widget: base map, cloud polygons, city markers, click-to-event
/// wiring. Publishes exactly one location event per click.
#[component]
pub fn MapView(props: MapViewProps) -> Element {
    let mut state = use_context::<AppState>();
    let bus = use_context::<EventBus>();

    // The window callbacks must outlive every bridge call for this
    // component; dropping the holder on unmount uninstalls them.
    let callbacks = use_hook(|| Rc::new(RefCell::new(None::<MapCallbacks>)));

    let container_id = props.id.clone();
    let animated = props.animated;
    let config_json = props.config.to_json();

    use_effect(move || {
        // Re-runs when a new token is applied through the loading overlay.
        let token = (state.active_token)();

        let click_bus = bus.clone();
        let on_click = move |payload: String| match MapClick::from_json(&payload) {
            Ok(click) => {
                let event = resolve_click(&click);
                state.selected_feature.set(Some(event.id.clone()));
                click_bus.publish(&event);
            }
            Err(err) => log::warn!("map: ignoring undecodable click payload: {err}"),
        };

        let on_error = move |message: String| {
            let err = CloudcastError::MapInit(message);
            log::error!("{err}");
            // No retry: the widget stays in its loading state until a
            // working token is applied manually.
            state.error_msg.set(Some(err.to_string()));
        };

        let on_ready = move || {
            state.map_loaded.set(true);
            state.error_msg.set(None);
        };

        let frame = if animated {
            let base = clouds::cloud_cover();
            let params = DriftParams::default();
            let frame_container = container_id.clone();
            Some(Box::new(move |elapsed: f64| {
                let drifted = drift_collection(&base, elapsed, &params);
                js_bridge::set_cloud_data(&frame_container, &drifted.to_json_string());
            }) as Box<dyn FnMut(f64)>)
        } else {
            None
        };

        {
            let mut slot = callbacks.borrow_mut();
            // Drop the previous generation first: its teardown clears the
            // window properties the new install is about to set.
            slot.take();
            slot.replace(MapCallbacks::install(on_click, on_error, on_ready, frame));
        }

        state.map_loaded.set(false);
        js_bridge::destroy_map(&container_id);
        js_bridge::init_map(
            &container_id,
            &token,
            &clouds::cloud_cover().to_json_string(),
            &city::markers_json().to_string(),
            &config_json,
        );
    });

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_map(&drop_id));

    let zoom_in_id = props.id.clone();
    let zoom_out_id = props.id.clone();
    let loaded = (state.map_loaded)();

    rsx! {
        div {
            style: "position: relative; flex-grow: 1; min-height: 420px; overflow: hidden;",

            div {
                id: "{props.id}",
                style: "position: absolute; inset: 0;",
            }

            // Instructions overlay
            div {
                style: "position: absolute; top: 16px; left: 16px; z-index: 10; background: rgba(30,41,59,0.8); padding: 6px 8px; border-radius: 6px; border: 1px solid #334155; font-size: 12px; color: white;",
                "Click on the map to update the forecast chart"
            }

            // Zoom controls
            div {
                style: "position: absolute; bottom: 16px; right: 16px; z-index: 10; display: flex; flex-direction: column; gap: 8px;",
                button {
                    style: "background: rgba(30,41,59,0.8); border: 1px solid #334155; color: white; border-radius: 6px; width: 32px; height: 32px; cursor: pointer;",
                    onclick: move |_| js_bridge::zoom_map(&zoom_in_id, 1),
                    "+"
                }
                button {
                    style: "background: rgba(30,41,59,0.8); border: 1px solid #334155; color: white; border-radius: 6px; width: 32px; height: 32px; cursor: pointer;",
                    onclick: move |_| js_bridge::zoom_map(&zoom_out_id, -1),
                    "\u{2212}"
                }
            }

            MapLegend {}

            if !loaded {
                LoadingOverlay {}
            }
        }
    }
}
