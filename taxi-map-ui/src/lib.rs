//! Shared Dioxus components, browser fetch and Leaflet bridge for the taxi
//! hotspot map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue functions via `js_sys::eval()`
//! - `browser`: a `CellSource` over the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (hour picker, map container, status)

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod state;
