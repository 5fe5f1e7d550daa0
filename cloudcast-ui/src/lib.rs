//! Shared Dioxus components and browser-library bridge for the Cloudcast apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Mapbox GL and D3.js functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (map, chart, headers)

pub mod components;
pub mod js_bridge;
pub mod state;

/// Fallback Mapbox access token. Purely client-side; there is no
/// server-side validation in this prototype. A custom token can be applied
/// through the loading overlay if this one stops working.
pub const DEFAULT_MAPBOX_TOKEN: &str =
    "pk.eyJ1IjoiZmxvd2lydHoiLCJhIjoiY2tlcGhtMnFnMWRzajJ2bzhmdGs5ZXVveSJ9.Dq5iSpi54SaajfdMyM_8fQ";
