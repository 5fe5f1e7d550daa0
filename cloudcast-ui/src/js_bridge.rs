//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Mapbox GL and D3 are loaded from `index.html`; the glue in
//! `assets/js/*.js` is embedded here at compile time, evaluated as globals
//! (no ES modules) and exposed via `window.*`. This module provides safe
//! Rust wrappers that serialize data and call those globals, plus the
//! installation of the Rust closures the map calls back into.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the bridge JS files at compile time
static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");
static FORECAST_CHART_JS: &str = include_str!("../assets/js/forecast-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Cloudcast JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize bridge scripts with a wait-for-libraries polling loop.
///
/// The bridge JS files define functions like `initCloudMap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once Mapbox GL and D3
/// are ready, and then explicitly promote each function to `window.*`.
pub fn init_scripts() {
    let all_js = [MAP_BRIDGE_JS, FORECAST_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__cloudcastScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof mapboxgl !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__cloudcastScripts);
                    delete window.__cloudcastScripts;
                    // Promote function declarations to window explicitly
                    if (typeof initCloudMap !== 'undefined') window.initCloudMap = initCloudMap;
                    if (typeof setCloudData !== 'undefined') window.setCloudData = setCloudData;
                    if (typeof zoomCloudMap !== 'undefined') window.zoomCloudMap = zoomCloudMap;
                    if (typeof destroyCloudMap !== 'undefined') window.destroyCloudMap = destroyCloudMap;
                    if (typeof renderForecastChart !== 'undefined') window.renderForecastChart = renderForecastChart;
                    if (typeof destroyForecastChart !== 'undefined') window.destroyForecastChart = destroyForecastChart;
                    window.__cloudcastReady = true;
                    console.log('Cloudcast bridge initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape_single_quoted(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Create the map view inside `container_id`.
///
/// Uses a polling loop to wait for the libraries, the bridge scripts and
/// the container DOM element before initializing. Initialization failures
/// are routed to the installed map-error callback.
pub fn init_map(
    container_id: &str,
    token: &str,
    clouds_json: &str,
    markers_json: &str,
    config_json: &str,
) {
    let escaped_token = escape_single_quoted(token);
    let escaped_clouds = escape_single_quoted(clouds_json);
    let escaped_markers = escape_single_quoted(markers_json);
    let escaped_config = escape_single_quoted(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cloudcastReady &&
                    typeof window.initCloudMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initCloudMap('{container_id}', '{escaped_token}', '{escaped_clouds}', '{escaped_markers}', '{escaped_config}');
                    }} catch(e) {{
                        console.error('[Cloudcast] initCloudMap error:', e);
                        if (window.__cloudcastOnMapError) window.__cloudcastOnMapError(String(e));
                    }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the contents of the map's cloud GeoJSON source.
pub fn set_cloud_data(container_id: &str, data_json: &str) {
    let escaped_data = escape_single_quoted(data_json);
    call_js(&format!(
        "if (window.setCloudData) window.setCloudData('{container_id}', '{escaped_data}');",
    ));
}

/// Zoom the map one step in (`delta > 0`) or out.
pub fn zoom_map(container_id: &str, delta: i32) {
    call_js(&format!(
        "if (window.zoomCloudMap) window.zoomCloudMap('{container_id}', {delta});",
    ));
}

/// Tear down the map view for the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyCloudMap) window.destroyCloudMap('{container_id}');",
    ));
}

/// Render the forecast chart.
///
/// Uses a polling loop to wait for the libraries, the bridge scripts and
/// the container DOM element to exist before rendering.
pub fn render_forecast_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_single_quoted(data_json);
    let escaped_config = escape_single_quoted(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cloudcastReady &&
                    typeof window.renderForecastChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderForecastChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Cloudcast] renderForecastChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

const ON_CLICK: &str = "__cloudcastOnMapClick";
const ON_ERROR: &str = "__cloudcastOnMapError";
const ON_READY: &str = "__cloudcastOnMapReady";
const ON_FRAME: &str = "__cloudcastOnFrame";

fn set_window_property(name: &str, value: &JsValue) {
    if let Some(window) = web_sys::window() {
        if js_sys::Reflect::set(&window, &JsValue::from_str(name), value).is_err() {
            log::warn!("failed to set window.{name}");
        }
    }
}

/// Rust closures the map bridge calls back into, installed on `window`.
///
/// Dropping the value uninstalls every callback; the bridge checks for
/// their presence before each call, so teardown is race-free.
pub struct MapCallbacks {
    _click: Closure<dyn FnMut(JsValue)>,
    _error: Closure<dyn FnMut(JsValue)>,
    _ready: Closure<dyn FnMut()>,
    _frame: Option<Closure<dyn FnMut(f64)>>,
}

impl MapCallbacks {
    /// Install the callbacks. `on_frame` is only used by the animated map
    /// variant; passing `None` leaves the frame loop disabled.
    pub fn install(
        mut on_click: impl FnMut(String) + 'static,
        mut on_error: impl FnMut(String) + 'static,
        mut on_ready: impl FnMut() + 'static,
        on_frame: Option<Box<dyn FnMut(f64)>>,
    ) -> Self {
        let click = Closure::wrap(Box::new(move |payload: JsValue| {
            if let Some(payload) = payload.as_string() {
                on_click(payload);
            }
        }) as Box<dyn FnMut(JsValue)>);
        let error = Closure::wrap(Box::new(move |message: JsValue| {
            on_error(
                message
                    .as_string()
                    .unwrap_or_else(|| "unknown map error".to_string()),
            );
        }) as Box<dyn FnMut(JsValue)>);
        let ready = Closure::wrap(Box::new(move || on_ready()) as Box<dyn FnMut()>);
        let frame = on_frame.map(|mut callback| {
            Closure::wrap(Box::new(move |elapsed: f64| callback(elapsed)) as Box<dyn FnMut(f64)>)
        });

        set_window_property(ON_CLICK, click.as_ref());
        set_window_property(ON_ERROR, error.as_ref());
        set_window_property(ON_READY, ready.as_ref());
        if let Some(frame) = &frame {
            set_window_property(ON_FRAME, frame.as_ref());
        }

        Self {
            _click: click,
            _error: error,
            _ready: ready,
            _frame: frame,
        }
    }
}

impl Drop for MapCallbacks {
    fn drop(&mut self) {
        // The closures die with the struct; clear the window properties
        // first so the bridge stops calling them.
        for name in [ON_CLICK, ON_ERROR, ON_READY, ON_FRAME] {
            set_window_property(name, &JsValue::UNDEFINED);
        }
    }
}
