//! Native HTTP client for the hotspot backend.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::fetch::{anomalies_url, decode_rows, hotspots_url, CellSource};
use crate::hour::Hour;
use crate::model::{AnomalyCell, GridCell};

/// [`CellSource`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpCellSource {
    client: Client,
    base_url: String,
}

impl HttpCellSource {
    /// Use a preconfigured client (timeouts, proxies, ...).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_rows<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, FetchError> {
        debug!("GET {}", url);
        let network = |e: reqwest::Error| FetchError::Network {
            url: url.clone(),
            reason: e.to_string(),
        };
        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        decode_rows(&url, status, &body)
    }
}

impl CellSource for HttpCellSource {
    async fn fetch_hotspots(&self, hour: Hour) -> Result<Vec<GridCell>, FetchError> {
        self.get_rows(hotspots_url(&self.base_url, hour)).await
    }

    async fn fetch_anomalies(&self) -> Result<Vec<AnomalyCell>, FetchError> {
        self.get_rows(anomalies_url(&self.base_url)).await
    }
}
