//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/leaflet-layers.js` and is evaluated as
//! globals (no ES modules) once Leaflet itself has loaded. This module
//! serializes map config and layers and calls those globals.
//!
//! Layers drawn before the map is ready are parked in `window.__taxiPending`,
//! one slot per group, so a later draw replaces an earlier one. `init_map`
//! flushes the slots once the map exists.

use log::warn;
use taxi_grid::config::{MapConfig, LEAFLET_CSS_URL, LEAFLET_JS_URL};
use taxi_grid::render::Layer;

/// Leaflet glue evaluated by [`init_map`]. The CLI export embeds the same file.
pub static LEAFLET_LAYERS_JS: &str = include_str!("../assets/js/leaflet-layers.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Taxi map JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Load Leaflet, evaluate the glue and create the map. Call once at startup.
///
/// Leaflet is injected from the CDN when the page does not already provide
/// it. A polling loop waits for `L` and the container element, then evaluates
/// the glue at global scope via indirect eval so its function declarations
/// land on `window`.
pub fn init_map(container_id: &str, config: &MapConfig) {
    let scripts = serde_json::to_string(LEAFLET_LAYERS_JS).unwrap_or_default();
    let config_json = match serde_json::to_string(config) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialize map config: {}", e);
            return;
        }
    };

    call_js(&format!(
        r#"
        (function() {{
            window.__taxiMapScripts = {scripts};
            if (typeof L === 'undefined' && !document.getElementById('taxi-leaflet-js')) {{
                var css = document.createElement('link');
                css.rel = 'stylesheet';
                css.href = '{LEAFLET_CSS_URL}';
                document.head.appendChild(css);
                var js = document.createElement('script');
                js.id = 'taxi-leaflet-js';
                js.src = '{LEAFLET_JS_URL}';
                document.head.appendChild(js);
            }}
            var poll = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        (0, eval)(window.__taxiMapScripts);
                        delete window.__taxiMapScripts;
                        window.taxiMapInit('{container_id}', {config_json});
                        window.__taxiMapReady = true;
                        var pending = window.__taxiPending || {{}};
                        delete window.__taxiPending;
                        for (var name in pending) {{
                            window.taxiMapSetLayer(name, pending[name]);
                        }}
                        console.log('Taxi map initialized');
                    }} catch(e) {{ console.error('[taxi] taxiMapInit error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Replace the contents of a layer group on the map.
///
/// Before [`init_map`] has finished, only the most recent call per group is
/// kept and drawn once the map is ready.
pub fn draw_layer(layer: &Layer) {
    let drawables = match serde_json::to_string(layer.drawables()) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialize {} layer: {}", layer.kind().group_name(), e);
            return;
        }
    };
    call_js(&draw_layer_script(layer.kind().group_name(), &drawables));
}

fn draw_layer_script(name: &str, drawables: &str) -> String {
    format!(
        r#"
        (function() {{
            var drawables = {drawables};
            if (window.__taxiMapReady) {{
                window.taxiMapSetLayer('{name}', drawables);
            }} else {{
                window.__taxiPending = window.__taxiPending || {{}};
                window.__taxiPending['{name}'] = drawables;
            }}
        }})();
        "#,
    )
}

/// Show a blocking notice to the user.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
        None => warn!("No window to show notice: {}", message),
    }
}
