//! Console reports of a rendered layer.

use log::info;
use taxi_grid::fetch::CellSource;
use taxi_grid::hour::Hour;
use taxi_grid::render::{redraw_anomalies, redraw_hotspots, Drawable, Layer, LayerKind};

/// Fetch one hour of hotspots and describe the resulting circles.
///
/// An empty hour yields the same notice the map shows.
pub async fn hotspot_report<S: CellSource>(
    source: &S,
    hour: Hour,
    json: bool,
) -> anyhow::Result<String> {
    let cells = source.fetch_hotspots(hour).await?;
    let redraw = redraw_hotspots(Layer::new(LayerKind::Hotspots), &cells);
    if let Some(notice) = redraw.notice {
        return Ok(format!("{}\n", notice.message()));
    }
    info!("{} hotspots for hour {}", redraw.layer.len(), hour);
    format_layer(&redraw.layer, json)
}

/// Fetch the anomalies and describe the resulting markers.
pub async fn anomaly_report<S: CellSource>(source: &S, json: bool) -> anyhow::Result<String> {
    let cells = source.fetch_anomalies().await?;
    let redraw = redraw_anomalies(Layer::new(LayerKind::Anomalies), &cells);
    info!(
        "{} anomalies ({} skipped)",
        redraw.layer.len(),
        redraw.skipped
    );
    format_layer(&redraw.layer, json)
}

/// One line per drawable, or the drawables as pretty JSON.
pub fn format_layer(layer: &Layer, json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(layer.drawables())?;
        out.push('\n');
        return Ok(out);
    }
    Ok(layer
        .drawables()
        .iter()
        .map(|d| format!("{}\n", describe(d)))
        .collect())
}

fn describe(drawable: &Drawable) -> String {
    let kind = match drawable {
        Drawable::Circle { .. } => "circle",
        Drawable::CircleMarker { .. } => "marker",
    };
    let center = drawable.center();
    format!(
        "{:<6} ({:.4}, {:.4}) r={:<6.1} {}",
        kind,
        center.latitude,
        center.longitude,
        drawable.radius(),
        plain_text(drawable.popup())
    )
}

/// Popup HTML flattened to one line.
fn plain_text(popup: &str) -> String {
    popup
        .replace("<br>", " | ")
        .replace("<b>", "")
        .replace("</b>", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxi_grid::error::FetchError;
    use taxi_grid::model::{AnomalyCell, GridCell};

    struct StaticSource {
        hotspots: Vec<GridCell>,
    }

    impl CellSource for StaticSource {
        async fn fetch_hotspots(&self, _hour: Hour) -> Result<Vec<GridCell>, FetchError> {
            Ok(self.hotspots.clone())
        }

        async fn fetch_anomalies(&self) -> Result<Vec<AnomalyCell>, FetchError> {
            Ok(vec![AnomalyCell {
                grid_key: "50_75".to_string(),
                count: 3,
                z: None,
                zscore: Some(2.345),
                hour: None,
            }])
        }
    }

    fn one_hotspot() -> StaticSource {
        StaticSource {
            hotspots: vec![GridCell {
                grid_key: "100_200".to_string(),
                grid_x: 100,
                grid_y: 200,
                count: 10,
                avg_fare: Some(12.5),
                avg_distance: None,
                hour: Some(5),
            }],
        }
    }

    #[tokio::test]
    async fn test_hotspot_report() {
        let hour = Hour::new(5).unwrap();
        let report = hotspot_report(&one_hotspot(), hour, false).await.unwrap();
        assert_eq!(
            report,
            "circle (2.0000, 1.0000) r=480.0  Grid: 100_200 | Trips: 10 | Avg Fare: $12.50 | Lat: 2.0000, Lon: 1.0000\n"
        );
    }

    #[tokio::test]
    async fn test_empty_hotspot_report_shows_notice() {
        let source = StaticSource {
            hotspots: Vec::new(),
        };
        let report = hotspot_report(&source, Hour::MIDNIGHT, false).await.unwrap();
        assert_eq!(report, "No hotspots found for this hour.\n");
    }

    #[tokio::test]
    async fn test_anomaly_report_json() {
        let report = anomaly_report(&one_hotspot(), true).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value[0]["shape"], "circle_marker");
        assert_eq!(value[0]["radius"], 8.0);
        assert!(value[0]["popup"].as_str().unwrap().contains("Z-Score: 2.34"));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text("<b>Grid: a&amp;b &lt;x&gt;</b><br>Trips: 1"),
            "Grid: a&b <x> | Trips: 1"
        );
    }
}
