//! Cloud brightness-temperature legend panel.

use dioxus::prelude::*;

const STOPS: [(&str, &str); 5] = [
    ("#1D4ED8", "-100"),
    ("#3B82F6", "-75"),
    ("#60A5FA", "-50"),
    ("#93C5FD", "-25"),
    ("#9CA3AF", "0"),
];

/// Static legend shown in the map's bottom-left corner.
#[component]
pub fn MapLegend() -> Element {
    rsx! {
        div {
            style: "position: absolute; bottom: 16px; left: 16px; z-index: 10;",
            div {
                style: "background: rgba(30,41,59,0.8); padding: 10px 12px; border-radius: 6px; border: 1px solid #334155; display: flex; gap: 20px;",
                for (color, label) in STOPS.iter() {
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        div {
                            style: "width: 20px; height: 8px; border-radius: 2px; background: {color};",
                        }
                        span {
                            style: "font-size: 11px; color: #D1D5DB;",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
