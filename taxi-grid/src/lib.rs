//! Core types and rendering pipeline for the NYC taxi hotspot map.
//!
//! This crate provides:
//! - `codec`: integer grid coordinates to latitude/longitude and back
//! - `model`: hotspot and anomaly rows as served by the backend
//! - `render`: pure clear-and-redraw of the hotspot and anomaly layers
//! - `fetch`: the `CellSource` contract and response decoding
//! - `controller`: hour validation, request sequencing and layer ownership
//! - `api` (feature `api`): a native `reqwest` implementation of `CellSource`

pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod hour;
pub mod model;
pub mod popup;
pub mod render;

#[cfg(feature = "api")]
pub mod api;
