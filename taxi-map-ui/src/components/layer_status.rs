//! One-line summary of what is on the map.

use crate::state::AppState;
use dioxus::prelude::*;
use taxi_grid::controller::Phase;

/// Shows drawable counts for both layers and whether a fetch is running.
#[component]
pub fn LayerStatus() -> Element {
    let state = use_context::<AppState>();
    let controller = state.controller.read();
    let hotspots = controller.hotspot_layer().len();
    let anomalies = controller.anomaly_layer().len();
    let loading = controller.phase() == Phase::Loading;

    rsx! {
        p {
            style: "font-size: 12px; color: #666; margin: 4px 0;",
            "{hotspots} hotspots, {anomalies} anomalies"
            if loading {
                span { style: "margin-left: 8px;", "Loading..." }
            }
        }
    }
}
