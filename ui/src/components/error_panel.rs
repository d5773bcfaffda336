#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::NoTitleModal;
use crate::hooks::use_error_list::ErrorList;

/// Blocking panel listing every current error. Renders nothing while the
/// list is empty.
#[component]
pub fn ErrorPanel(errors: ErrorList) -> Element {
    let mut errors = errors;
    if errors.is_empty() {
        return rsx! {};
    }

    rsx! {
        NoTitleModal {
            on_dismiss: move |_| errors.clear(),
            h4 { "Please check the following" }
            ul {
                for message in errors.messages() {
                    li { "{message}" }
                }
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| errors.clear(),
                    "Dismiss"
                }
            }
        }
    }
}
