//! Ownership of the two map layers and the hotspot refresh protocol.
//!
//! The controller never awaits while holding its own state: a refresh is
//! split into [`Controller::request_hour`] (validate, issue a sequence number)
//! and [`Controller::settle_hotspots`] (apply the response). The caller runs
//! the fetch in between, so several requests may be in flight at once. Only
//! the response to the most recently issued request is drawn.

use log::{debug, error, info};

use crate::error::{FetchError, HourError};
use crate::hour::Hour;
use crate::model::{AnomalyCell, GridCell};
use crate::render::{redraw_anomalies, redraw_hotspots, Layer, LayerKind, Notice};

/// Whether any hotspot fetch is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// A hotspot fetch that has been issued but not settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotspotRequest {
    seq: u64,
    hour: Hour,
}

impl HotspotRequest {
    pub fn hour(&self) -> Hour {
        self.hour
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What settling a hotspot response did to the hotspot layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotOutcome {
    /// The layer now holds this many circles
    Drawn { drawables: usize },
    /// The layer was cleared and the user should see the notice
    Empty(Notice),
    /// The fetch failed; the layer is untouched
    Failed,
    /// A newer request was issued after this one; the response was dropped
    Stale,
}

/// What settling the anomaly response did to the anomaly layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyOutcome {
    Drawn { drawables: usize, skipped: usize },
    Empty,
    Failed,
}

/// Owns the hotspot and anomaly layers for the lifetime of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    hotspots: Layer,
    anomalies: Layer,
    last_issued: u64,
    in_flight: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            hotspots: Layer::new(LayerKind::Hotspots),
            anomalies: Layer::new(LayerKind::Anomalies),
            last_issued: 0,
            in_flight: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight == 0 {
            Phase::Idle
        } else {
            Phase::Loading
        }
    }

    pub fn hotspot_layer(&self) -> &Layer {
        &self.hotspots
    }

    pub fn anomaly_layer(&self) -> &Layer {
        &self.anomalies
    }

    /// Validate raw hour input and issue a request for it.
    ///
    /// On error no request is issued and the phase is unchanged; show
    /// [`Notice::InvalidHour`] to the user.
    pub fn request_hour(&mut self, input: &str) -> Result<HotspotRequest, HourError> {
        let hour = input.parse::<Hour>().inspect_err(|e| {
            info!("Rejected hour input: {}", e);
        })?;
        Ok(self.request(hour))
    }

    /// Issue a request for an already validated hour.
    pub fn request(&mut self, hour: Hour) -> HotspotRequest {
        self.last_issued += 1;
        self.in_flight += 1;
        debug!("Hotspot request #{} for hour {}", self.last_issued, hour);
        HotspotRequest {
            seq: self.last_issued,
            hour,
        }
    }

    /// Apply the response to `request`.
    ///
    /// Failures are logged and leave the layer as it was. Responses to
    /// anything but the latest request are dropped.
    pub fn settle_hotspots(
        &mut self,
        request: HotspotRequest,
        result: Result<Vec<GridCell>, FetchError>,
    ) -> HotspotOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        if request.seq != self.last_issued {
            debug!(
                "Dropping hotspot response #{} (hour {}); #{} is newer",
                request.seq, request.hour, self.last_issued
            );
            return HotspotOutcome::Stale;
        }

        let cells = match result {
            Ok(cells) => cells,
            Err(e) => {
                error!("Failed to load hotspots for hour {}: {}", request.hour, e);
                return HotspotOutcome::Failed;
            }
        };

        let previous = std::mem::replace(&mut self.hotspots, Layer::new(LayerKind::Hotspots));
        let redraw = redraw_hotspots(previous, &cells);
        self.hotspots = redraw.layer;

        match redraw.notice {
            Some(notice) => {
                info!("No hotspots for hour {}", request.hour);
                HotspotOutcome::Empty(notice)
            }
            None => {
                info!(
                    "Drew {} hotspots for hour {}",
                    self.hotspots.len(),
                    request.hour
                );
                HotspotOutcome::Drawn {
                    drawables: self.hotspots.len(),
                }
            }
        }
    }

    /// Apply the one-time anomaly response. Failures are logged only.
    pub fn settle_anomalies(
        &mut self,
        result: Result<Vec<AnomalyCell>, FetchError>,
    ) -> AnomalyOutcome {
        let cells = match result {
            Ok(cells) => cells,
            Err(e) => {
                error!("Failed to load anomalies: {}", e);
                return AnomalyOutcome::Failed;
            }
        };

        let previous = std::mem::replace(&mut self.anomalies, Layer::new(LayerKind::Anomalies));
        let redraw = redraw_anomalies(previous, &cells);
        self.anomalies = redraw.layer;

        if self.anomalies.is_empty() && redraw.skipped == 0 {
            return AnomalyOutcome::Empty;
        }
        info!(
            "Drew {} anomalies ({} skipped)",
            self.anomalies.len(),
            redraw.skipped
        );
        AnomalyOutcome::Drawn {
            drawables: self.anomalies.len(),
            skipped: redraw.skipped,
        }
    }
}
