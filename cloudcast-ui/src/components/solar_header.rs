//! Brand header for the solar forecast page.

use dioxus::prelude::*;

#[component]
pub fn SolarHeader() -> Element {
    rsx! {
        header {
            style: "background: #0F172A; color: white; padding: 16px;",
            div {
                style: "max-width: 1280px; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 28px; color: #FACC15;", "\u{2600}" }
                    h1 {
                        style: "font-size: 20px; font-weight: bold; text-transform: uppercase; letter-spacing: 0.05em; margin: 0;",
                        "Quartz Solar"
                    }
                }
                div {
                    style: "display: flex; align-items: center; gap: 24px;",
                    nav {
                        ul {
                            style: "display: flex; gap: 24px; list-style: none; margin: 0; padding: 0;",
                            li { style: "color: #FACC15; font-weight: 500;", "PV Forecast" }
                            li { style: "color: #9CA3AF;", "Solar Sites" }
                            li { style: "color: #9CA3AF;", "Deltas" }
                        }
                    }
                    div { style: "background: #374151; border-radius: 50%; height: 32px; width: 32px;" }
                }
            }
        }
    }
}
