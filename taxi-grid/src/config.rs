//! Map view defaults.

use serde::Serialize;

use crate::model::GeoPoint;

/// Leaflet release loaded by the browser map and the static export.
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Initial view, background tiles and backend location for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: GeoPoint,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Prefix for API requests; empty means same origin
    #[serde(skip)]
    pub api_base: String,
}

impl Default for MapConfig {
    /// Midtown Manhattan at city zoom, OpenStreetMap tiles.
    fn default() -> Self {
        Self {
            center: GeoPoint {
                latitude: 40.73,
                longitude: -73.93,
            },
            zoom: 11,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            api_base: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_omits_api_base() {
        let config = MapConfig {
            api_base: "http://127.0.0.1:5000".to_string(),
            ..MapConfig::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["center"]["latitude"], 40.73);
        assert_eq!(json["zoom"], 11);
        assert_eq!(json["tileUrl"], "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png");
        assert!(json.get("apiBase").is_none());
    }
}
