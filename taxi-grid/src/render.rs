//! Layer rendering.
//!
//! Each redraw takes ownership of the previous layer, clears it and fills it
//! from the new rows. Nothing survives from one redraw to the next, so
//! rendering the same rows twice yields the same layer.

use log::warn;
use serde::Serialize;

use crate::codec::{decode, parse_composite_key};
use crate::model::{AnomalyCell, GeoPoint, GridCell};
use crate::popup::{anomaly_popup, hotspot_popup};

/// Hotspot circle radius for a zero-count cell, in metres.
pub const HOTSPOT_BASE_RADIUS: f64 = 80.0;
/// Extra radius given to the busiest cell, in metres.
pub const HOTSPOT_RADIUS_SPAN: f64 = 400.0;
/// Anomaly marker radius, in screen pixels.
pub const ANOMALY_MARKER_RADIUS: f64 = 8.0;

/// Translucent orange for hotspot circles.
pub const HOTSPOT_STYLE: Style = Style {
    color: "orange",
    fill_color: "orange",
    fill_opacity: 0.4,
    weight: 1.0,
};

/// Near-opaque red for anomaly markers.
pub const ANOMALY_STYLE: Style = Style {
    color: "red",
    fill_color: "red",
    fill_opacity: 0.9,
    weight: 2.0,
};

/// Which semantic dataset a layer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Hotspots,
    Anomalies,
}

impl LayerKind {
    /// Name of the map layer group this kind is drawn into.
    pub fn group_name(self) -> &'static str {
        match self {
            LayerKind::Hotspots => "hotspots",
            LayerKind::Anomalies => "anomalies",
        }
    }
}

/// Stroke and fill options, serialized with Leaflet's option names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: f64,
}

/// A shape on the map with its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Drawable {
    /// Radius in metres; scales with zoom
    Circle {
        center: GeoPoint,
        radius: f64,
        style: Style,
        popup: String,
    },
    /// Radius in screen pixels
    CircleMarker {
        center: GeoPoint,
        radius: f64,
        style: Style,
        popup: String,
    },
}

impl Drawable {
    pub fn center(&self) -> GeoPoint {
        match self {
            Drawable::Circle { center, .. } | Drawable::CircleMarker { center, .. } => *center,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Drawable::Circle { radius, .. } | Drawable::CircleMarker { radius, .. } => *radius,
        }
    }

    pub fn popup(&self) -> &str {
        match self {
            Drawable::Circle { popup, .. } | Drawable::CircleMarker { popup, .. } => popup,
        }
    }
}

/// The drawables owned by one map layer group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    kind: LayerKind,
    drawables: Vec<Drawable>,
}

impl Layer {
    /// An empty layer.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            drawables: Vec::new(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    fn cleared(mut self) -> Self {
        self.drawables.clear();
        self
    }
}

/// A blocking message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The hour input was rejected before any request was made
    InvalidHour,
    /// A hotspot query returned no rows
    NoHotspots,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::InvalidHour => "Please enter a valid hour (0–23).",
            Notice::NoHotspots => "No hotspots found for this hour.",
        }
    }
}

/// Result of a redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Redraw {
    pub layer: Layer,
    pub notice: Option<Notice>,
    /// Rows that could not be placed on the map
    pub skipped: usize,
}

/// Circle radius for a cell, scaled linearly against the busiest cell.
pub fn hotspot_radius(count: i64, max_count: i64) -> f64 {
    HOTSPOT_BASE_RADIUS + (count as f64 / max_count.max(1) as f64) * HOTSPOT_RADIUS_SPAN
}

/// Replace the hotspot layer with one circle per row.
///
/// No rows clears the layer and raises [`Notice::NoHotspots`].
pub fn redraw_hotspots(previous: Layer, cells: &[GridCell]) -> Redraw {
    debug_assert_eq!(previous.kind, LayerKind::Hotspots);
    let mut layer = previous.cleared();

    if cells.is_empty() {
        return Redraw {
            layer,
            notice: Some(Notice::NoHotspots),
            skipped: 0,
        };
    }

    let max_count = cells.iter().map(|c| c.count).max().unwrap_or(0);
    layer.drawables.extend(cells.iter().map(|cell| {
        let center = decode(cell.grid_x, cell.grid_y);
        Drawable::Circle {
            center,
            radius: hotspot_radius(cell.count, max_count),
            style: HOTSPOT_STYLE,
            popup: hotspot_popup(cell, center),
        }
    }));

    Redraw {
        layer,
        notice: None,
        skipped: 0,
    }
}

/// Replace the anomaly layer with one marker per row.
///
/// No rows silently clears the layer. Rows whose key does not parse are
/// skipped; the rest of the batch is still drawn.
pub fn redraw_anomalies(previous: Layer, cells: &[AnomalyCell]) -> Redraw {
    debug_assert_eq!(previous.kind, LayerKind::Anomalies);
    let mut layer = previous.cleared();
    let mut skipped = 0;

    for cell in cells {
        let (gx, gy) = match parse_composite_key(&cell.grid_key) {
            Ok(xy) => xy,
            Err(e) => {
                warn!("Skipping anomaly row: {}", e);
                skipped += 1;
                continue;
            }
        };
        let center = decode(gx, gy);
        layer.drawables.push(Drawable::CircleMarker {
            center,
            radius: ANOMALY_MARKER_RADIUS,
            style: ANOMALY_STYLE,
            popup: anomaly_popup(cell, center),
        });
    }

    Redraw {
        layer,
        notice: None,
        skipped,
    }
}
