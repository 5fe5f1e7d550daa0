//! Loading overlay with manual access-token override.

use dioxus::prelude::*;

use crate::state::AppState;

/// Covers the map while it loads. If initialization failed, this is also
/// the manual recovery path: paste a token and apply it. There is no
/// automatic retry.
#[component]
pub fn LoadingOverlay() -> Element {
    let mut state = use_context::<AppState>();
    let token = (state.token_input)();
    let error = state.error_msg.read().clone();

    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(15,23,42,0.8); z-index: 50;",
            div {
                style: "text-align: center; color: white; max-width: 420px; padding: 0 16px;",
                div {
                    style: "margin: 0 auto 12px; height: 32px; width: 32px; border: 4px solid #3B82F6; border-top-color: transparent; border-radius: 50%; animation: cloudcast-spin 1s linear infinite;",
                }
                p {
                    style: "font-size: 18px; font-weight: 500; margin: 0 0 12px 0;",
                    "Loading Map..."
                }

                if let Some(message) = error {
                    p {
                        style: "font-size: 12px; color: #FCA5A5; margin: 0 0 8px 0;",
                        "{message}"
                    }
                }

                p {
                    style: "font-size: 13px; color: #D1D5DB; margin: 0 0 8px 0;",
                    "If the map doesn't load, you might need to provide a Mapbox token:"
                }
                div {
                    style: "display: flex; gap: 8px;",
                    input {
                        r#type: "text",
                        value: "{token}",
                        placeholder: "Enter Mapbox token",
                        style: "flex: 1; height: 36px; border-radius: 6px; border: 1px solid #334155; background: #1E293B; color: white; padding: 0 12px; font-size: 13px;",
                        onchange: move |evt| state.token_input.set(evt.value()),
                    }
                    button {
                        style: "border: 1px solid #3B82F6; color: #3B82F6; background: transparent; border-radius: 6px; padding: 0 14px; cursor: pointer;",
                        onclick: move |_| {
                            let token = (state.token_input)();
                            state.active_token.set(token);
                        },
                        "Apply"
                    }
                }
                p {
                    style: "font-size: 11px; color: #9CA3AF; margin-top: 6px;",
                    "Get a token at mapbox.com"
                }
            }
        }
    }
}
