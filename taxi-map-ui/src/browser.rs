//! `CellSource` over the browser's `fetch`.

use log::debug;
use serde::de::DeserializeOwned;
use taxi_grid::error::FetchError;
use taxi_grid::fetch::{anomalies_url, decode_rows, hotspots_url, CellSource};
use taxi_grid::hour::Hour;
use taxi_grid::model::{AnomalyCell, GridCell};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Queries the backend with `window.fetch`. An empty base URL means the page's
/// own origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserCellSource {
    base_url: String,
}

impl BrowserCellSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, FetchError> {
        debug!("GET {}", url);
        let network = |e: JsValue| FetchError::Network {
            url: url.clone(),
            reason: format!("{:?}", e),
        };

        let window = web_sys::window().ok_or_else(|| network(JsValue::from_str("no window")))?;
        let response: Response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?;
        let body = text.as_string().unwrap_or_default();

        decode_rows(&url, status, &body)
    }
}

impl CellSource for BrowserCellSource {
    async fn fetch_hotspots(&self, hour: Hour) -> Result<Vec<GridCell>, FetchError> {
        self.get_rows(hotspots_url(&self.base_url, hour)).await
    }

    async fn fetch_anomalies(&self) -> Result<Vec<AnomalyCell>, FetchError> {
        self.get_rows(anomalies_url(&self.base_url)).await
    }
}
