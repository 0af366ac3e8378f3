//! Reusable Dioxus RSX components for the hotspot map page.

mod hour_picker;
mod layer_status;
mod map_container;

pub use hour_picker::HourPicker;
pub use layer_status::LayerStatus;
pub use map_container::MapContainer;
