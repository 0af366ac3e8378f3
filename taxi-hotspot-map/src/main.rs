//! NYC taxi hotspots and anomalies on a Leaflet map.
//!
//! Data flow:
//! 1. On mount: create the Leaflet map, fetch `/api/anomalies` once and draw
//!    it, then fetch `/api/hotspots?hour=0`.
//! 2. On "Load hotspots": validate the hour, fetch that hour and redraw the
//!    hotspot layer. Requests may overlap; only the latest one is drawn.
//!
//! The `Controller` in `AppState` owns both layers. Signal writes happen
//! before and after each fetch, never across an await.

use dioxus::prelude::*;
use log::debug;
use taxi_grid::config::MapConfig;
use taxi_grid::controller::{HotspotOutcome, HotspotRequest};
use taxi_grid::fetch::CellSource;
use taxi_grid::hour::Hour;
use taxi_grid::render::Notice;
use taxi_map_ui::browser::BrowserCellSource;
use taxi_map_ui::components::{HourPicker, LayerStatus, MapContainer};
use taxi_map_ui::js_bridge;
use taxi_map_ui::state::AppState;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "hotspot-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hotspot-map-root"))
        .launch(App);
}

fn source() -> BrowserCellSource {
    BrowserCellSource::new(MapConfig::default().api_base)
}

/// Anomalies once, then the midnight hotspots.
async fn startup(mut state: AppState) {
    let result = source().fetch_anomalies().await;
    let outcome = state.controller.write().settle_anomalies(result);
    debug!("Anomaly load: {:?}", outcome);
    js_bridge::draw_layer(state.controller.read().anomaly_layer());

    let request = state.controller.write().request(Hour::MIDNIGHT);
    refresh(state, request).await;
}

/// Fetch one issued hotspot request and put the result on the map.
async fn refresh(mut state: AppState, request: HotspotRequest) {
    let result = source().fetch_hotspots(request.hour()).await;
    let outcome = state.controller.write().settle_hotspots(request, result);
    match outcome {
        HotspotOutcome::Drawn { .. } => {
            js_bridge::draw_layer(state.controller.read().hotspot_layer());
        }
        HotspotOutcome::Empty(notice) => {
            js_bridge::draw_layer(state.controller.read().hotspot_layer());
            js_bridge::alert(notice.message());
        }
        HotspotOutcome::Failed | HotspotOutcome::Stale => {}
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: create the map and run the startup loads (once) ───
    use_effect(move || {
        js_bridge::init_map(MAP_CONTAINER_ID, &MapConfig::default());
        spawn(startup(state));
    });

    let on_load = move |input: String| {
        let request = state.controller.write().request_hour(&input);
        match request {
            Ok(request) => {
                spawn(refresh(state, request));
            }
            Err(_) => js_bridge::alert(Notice::InvalidHour.message()),
        }
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "NYC Taxi Hotspots"
            }

            HourPicker { on_load: on_load }
            LayerStatus {}

            MapContainer {
                id: MAP_CONTAINER_ID.to_string(),
                height: 600,
            }

            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                "Orange circles scale with trip count for the selected hour. Red markers are statistical anomalies."
            }
        }
    }
}
