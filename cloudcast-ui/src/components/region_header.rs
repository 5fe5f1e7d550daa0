//! Region summary strip with the live timestamp.

use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn RegionHeader() -> Element {
    let formatted_date = Local::now()
        .format("%A, %-d %B %Y, %H:%M")
        .to_string();

    rsx! {
        div {
            style: "background: #1E293B; color: white; padding: 16px;",
            div {
                style: "max-width: 1280px; margin: 0 auto; display: flex; align-items: center; justify-content: space-between;",
                div {
                    style: "font-size: 22px; font-weight: bold;",
                    "National"
                }
                div {
                    style: "display: flex; align-items: center; gap: 32px;",
                    div {
                        style: "display: flex; align-items: center; gap: 12px;",
                        div {
                            style: "font-size: 18px; font-weight: 600;",
                            span { style: "color: #FACC15;", "5.4" }
                            "/"
                            span { style: "color: #60A5FA;", "5.3" }
                            span { style: "font-size: 11px; color: #9CA3AF; margin-left: 4px;", "21:30" }
                        }
                        div {
                            style: "font-size: 18px; font-weight: 600;",
                            span { style: "color: #FACC15;", "4.1" }
                            span { style: "font-size: 11px; color: #9CA3AF; margin-left: 4px;", "21:30" }
                        }
                        div {
                            style: "background: #EAB308; border-radius: 50%; height: 40px; width: 40px; display: flex; align-items: center; justify-content: center; color: black; font-size: 20px;",
                            "\u{2600}"
                        }
                    }
                    div {
                        style: "text-align: right; font-size: 16px;",
                        "{formatted_date}"
                    }
                }
            }
        }
    }
}
