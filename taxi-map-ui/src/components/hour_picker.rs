//! Hour input with a load button.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HourPickerProps {
    /// Called with the raw input text when the button is pressed
    pub on_load: EventHandler<String>,
}

/// Numeric hour input (0-23) and the button that triggers a hotspot refresh.
///
/// The input is passed on unvalidated; the controller decides whether it is
/// a usable hour.
#[component]
pub fn HourPicker(props: HourPickerProps) -> Element {
    let mut state = use_context::<AppState>();
    let hour = (state.hour_input)();

    let on_input = move |evt: Event<FormData>| {
        state.hour_input.set(evt.value());
    };

    let on_click = move |_| {
        props.on_load.call(state.hour_input.read().clone());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Hour (0-23): "
                input {
                    r#type: "number",
                    min: "0",
                    max: "23",
                    value: "{hour}",
                    oninput: on_input,
                }
            }
            button {
                onclick: on_click,
                "Load hotspots"
            }
        }
    }
}
