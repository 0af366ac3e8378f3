//! The two read-only backend queries and their response handling.
//!
//! Transports (browser `fetch`, native `reqwest`) implement [`CellSource`]
//! and share [`decode_rows`] so status and body checks are identical.

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::hour::Hour;
use crate::model::{AnomalyCell, GridCell};

pub const HOTSPOTS_PATH: &str = "/api/hotspots";
pub const ANOMALIES_PATH: &str = "/api/anomalies";

/// `GET {base}/api/hotspots?hour={hour}`
pub fn hotspots_url(base_url: &str, hour: Hour) -> String {
    format!(
        "{}{}?hour={}",
        base_url.trim_end_matches('/'),
        HOTSPOTS_PATH,
        hour
    )
}

/// `GET {base}/api/anomalies`
pub fn anomalies_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANOMALIES_PATH)
}

/// Check the HTTP status and decode a JSON array of rows.
///
/// A `null` body is treated as an empty array.
pub fn decode_rows<T: DeserializeOwned>(
    url: &str,
    status: u16,
    body: &str,
) -> Result<Vec<T>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Transport {
            url: url.to_string(),
            status,
        });
    }
    let rows: Option<Vec<T>> = serde_json::from_str(body)?;
    Ok(rows.unwrap_or_default())
}

/// Where hotspot and anomaly rows come from.
///
/// Callers validate the hour before calling `fetch_hotspots`. Futures are
/// not required to be `Send`; the browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait CellSource {
    async fn fetch_hotspots(&self, hour: Hour) -> Result<Vec<GridCell>, FetchError>;

    async fn fetch_anomalies(&self) -> Result<Vec<AnomalyCell>, FetchError>;
}
