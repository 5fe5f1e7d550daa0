//! Header for the cloud-motion page.

use dioxus::prelude::*;

#[component]
pub fn CloudcastingHeader() -> Element {
    rsx! {
        header {
            style: "background: linear-gradient(to right, #0C4A6E, #082F49); color: white; padding: 16px; box-shadow: 0 2px 6px rgba(0,0,0,0.2);",
            div {
                style: "max-width: 1024px; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 28px;", "\u{2601}" }
                    div {
                        h1 {
                            style: "font-size: 22px; font-weight: bold; margin: 0;",
                            "Cloudcasting"
                        }
                        p {
                            style: "font-size: 13px; margin: 0; color: rgba(224,242,254,0.8);",
                            "Cloud Movement Visualization Prototype"
                        }
                    }
                }
                div {
                    style: "text-align: right;",
                    p {
                        style: "font-size: 13px; margin: 0; color: rgba(224,242,254,0.7);",
                        "Visualizing satellite-derived cloud movement"
                    }
                }
            }
        }
    }
}
