#![allow(non_snake_case)]

use api::guide::Typewriter;
use api::guide::TypingCadence;
use api::wizard::TransferStep;
use dioxus::prelude::*;

use crate::compat;
use crate::compat::interval::Interval;

/// The assistant's speech bubble for `step`.
///
/// Typing starts over when `step` changes; the previous run is cancelled.
#[component]
pub fn StepGuide(step: TransferStep) -> Element {
    let mut text = use_signal(|| "");
    let mut cursor_visible = use_signal(|| true);

    let _typing = use_resource(use_reactive((&step,), move |(step,)| async move {
        let mut typewriter = Typewriter::for_step(step);
        text.set(typewriter.text());
        while let Some(delay) = typewriter.next_delay() {
            compat::sleep(delay).await;
            typewriter.advance();
            text.set(typewriter.text());
        }
    }));

    use_future(move || async move {
        let mut interval = Interval::new(TypingCadence::default().cursor_blink);
        loop {
            interval.tick().await;
            cursor_visible.toggle();
        }
    });

    let cursor_style = if cursor_visible() {
        "visibility: visible;"
    } else {
        "visibility: hidden;"
    };

    rsx! {
        div {
            class: "step-guide",
            "aria-live": "polite",
            span { style: "white-space: pre-line;", "{text}" }
            span { style: "{cursor_style}", "▌" }
        }
    }
}
