#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;

/// Shown once the wizard completes.
#[component]
pub fn FinishedScreen(on_restart: EventHandler<()>) -> Element {
    rsx! {
        Card {
            h3 { "You're All Set" }
            p { "The test transfer is on its way and the recipient has everything needed to send it back. We'll e-mail you once it returns." }
            Button {
                on_click: move |_| on_restart.call(()),
                "Start Another Test Transfer"
            }
        }
    }
}
