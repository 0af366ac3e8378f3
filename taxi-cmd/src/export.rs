//! Standalone HTML export of both map layers.
//!
//! The page loads Leaflet from a CDN and replays the rendered drawables
//! through the same glue script the browser app uses.

use std::path::Path;

use log::{info, warn};
use taxi_grid::config::{MapConfig, LEAFLET_CSS_URL, LEAFLET_JS_URL};
use taxi_grid::fetch::CellSource;
use taxi_grid::hour::Hour;
use taxi_grid::render::{redraw_anomalies, redraw_hotspots, Layer, LayerKind};

/// The browser app's glue, embedded from its source file.
static LEAFLET_LAYERS_JS: &str = include_str!("../../taxi-map-ui/assets/js/leaflet-layers.js");

/// Fetch both layers, render them and write the page to `out`.
pub async fn run_export<S: CellSource>(
    source: &S,
    hour: Hour,
    out: &Path,
    config: &MapConfig,
) -> anyhow::Result<()> {
    let anomalies = source.fetch_anomalies().await?;
    let anomaly_redraw = redraw_anomalies(Layer::new(LayerKind::Anomalies), &anomalies);
    if anomaly_redraw.skipped > 0 {
        warn!("{} anomaly rows had unusable grid keys", anomaly_redraw.skipped);
    }

    let hotspots = source.fetch_hotspots(hour).await?;
    let hotspot_redraw = redraw_hotspots(Layer::new(LayerKind::Hotspots), &hotspots);
    if let Some(notice) = hotspot_redraw.notice {
        warn!("{}", notice.message());
    }

    let page = render_page(config, hour, &[&hotspot_redraw.layer, &anomaly_redraw.layer])?;
    std::fs::write(out, page)?;
    info!(
        "Wrote {} hotspots and {} anomalies to {}",
        hotspot_redraw.layer.len(),
        anomaly_redraw.layer.len(),
        out.display()
    );
    Ok(())
}

/// Build the HTML page for the given layers.
pub fn render_page(config: &MapConfig, hour: Hour, layers: &[&Layer]) -> anyhow::Result<String> {
    let config_json = script_json(&serde_json::to_string(config)?);
    let mut draw_calls = String::new();
    for layer in layers {
        draw_calls.push_str(&format!(
            "taxiMapSetLayer('{}', {});\n",
            layer.kind().group_name(),
            script_json(&serde_json::to_string(layer.drawables())?)
        ));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>NYC Taxi Hotspots, hour {hour}</title>
<link rel="stylesheet" href="{LEAFLET_CSS_URL}">
<script src="{LEAFLET_JS_URL}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
{LEAFLET_LAYERS_JS}
taxiMapInit('map', {config_json});
{draw_calls}</script>
</body>
</html>
"#
    ))
}

/// Keep `</b>` and friends inside JSON strings from ending the script block.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
