//! Row types decoded from the `/api/hotspots` and `/api/anomalies` endpoints.
//!
//! Rows are transient: they are decoded from a response, handed to the
//! renderer and dropped once the drawables exist.

use serde::{Deserialize, Deserializer, Serialize};

/// A geographic position in decimal degrees.
///
/// Never transported; always derived from grid coordinates via
/// [`crate::codec::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One hotspot row: trip aggregates for a grid cell at a given hour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridCell {
    /// Human-readable cell identifier. Not guaranteed to be `"{grid_x}_{grid_y}"`.
    pub grid_key: String,
    /// Longitude scaled by 100
    pub grid_x: i64,
    /// Latitude scaled by 100
    pub grid_y: i64,
    /// Number of trips
    #[serde(default)]
    pub count: i64,
    /// Average fare in dollars
    #[serde(default)]
    pub avg_fare: Option<f64>,
    /// Average trip distance in miles
    #[serde(default)]
    pub avg_distance: Option<f64>,
    #[serde(default)]
    pub hour: Option<u8>,
}

/// One anomaly row: a cell whose trip count is a statistical outlier.
///
/// The coordinates only exist inside `grid_key`; see
/// [`crate::codec::parse_composite_key`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnomalyCell {
    /// `"{x}_{y}"` with both parts scaled by 100
    pub grid_key: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub z: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub zscore: Option<f64>,
    #[serde(default)]
    pub hour: Option<u8>,
}

impl AnomalyCell {
    /// The significance score: `z` when it is a number, else `zscore`.
    ///
    /// A score of `0.0` is a real score and is returned as such.
    pub fn score(&self) -> Option<f64> {
        self.z.or(self.zscore)
    }
}

/// Accept any JSON value, keeping it only when it is a number.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
