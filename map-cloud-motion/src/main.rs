//! Cloud movement visualization page.
//!
//! Layout variant 1: cloudcasting header, the animated cloud map, footer.
//! The map is the animated variant: cloud vertices and densities are
//! recomputed from the fixed base collection every animation frame.

use chrono::Datelike;
use cloudcast_core::bus::EventBus;
use cloudcast_ui::components::{CloudcastingHeader, MapConfig, MapView};
use cloudcast_ui::js_bridge;
use cloudcast_ui::state::AppState;
use dioxus::prelude::*;

/// DOM id for the map container div.
const MAP_CONTAINER_ID: &str = "cloud-motion-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("cloud-motion-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(EventBus::new);
    use_context_provider(AppState::new);

    // Evaluate the bridge scripts once on mount.
    use_effect(|| js_bridge::init_scripts());

    let year = chrono::Local::now().year();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; background: #E0F2FE; font-family: system-ui, -apple-system, sans-serif;",

            CloudcastingHeader {}

            main {
                style: "flex-grow: 1; display: flex; flex-direction: column;",
                MapView {
                    id: MAP_CONTAINER_ID.to_string(),
                    animated: true,
                    config: MapConfig::default(),
                }
            }

            footer {
                style: "background: white; padding: 8px 0; text-align: center; font-size: 11px; color: #6B7280; border-top: 1px solid #E5E7EB;",
                p {
                    style: "margin: 0;",
                    "Cloudcasting UI Prototype \u{2022} {year}"
                }
            }
        }
    }
}
