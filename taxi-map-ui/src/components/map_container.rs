//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    /// Height in pixels
    #[props(default = 600)]
    pub height: u32,
}

/// A fixed-height div for the Leaflet map.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
