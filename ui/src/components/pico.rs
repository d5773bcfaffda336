//! Thin Dioxus wrappers around Pico.css elements.
//! Expects the Pico stylesheet to be linked by the app root.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// Lays its children out side by side, wrapping on narrow screens.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// A determinate progress bar. `fraction` is clamped to `[0, 1]`.
#[component]
pub fn Progress(fraction: f64) -> Element {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0).round();
    rsx! {
        progress { value: "{percent}", max: "100" }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (Self::Primary, false) => "",
            (Self::Primary, true) => "outline",
            (Self::Secondary, false) => "secondary",
            (Self::Secondary, true) => "secondary outline",
            (Self::Contrast, false) => "contrast",
            (Self::Contrast, true) => "contrast outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Shows Pico's busy spinner and blocks clicks.
    #[props(default = false)]
    busy: bool,
}

pub fn Button(props: ButtonProps) -> Element {
    let class_str = props.button_type.to_class(props.outline);
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled || props.busy,
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// One of a set of mutually exclusive choices, drawn filled when `selected`.
#[component]
pub fn ChoiceButton(
    selected: bool,
    on_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        Button {
            outline: !selected,
            on_click: move |evt| on_click.call(evt),
            {children}
        }
    }
}

// A modal with no title bar that dismisses on backdrop click or Escape key.
#[derive(Props, PartialEq, Clone)]
pub struct NoTitleModalProps {
    on_dismiss: EventHandler<()>,
    children: Element,
}

pub fn NoTitleModal(props: NoTitleModalProps) -> Element {
    let on_dismiss = props.on_dismiss;
    rsx! {
        dialog {
            open: true,
            autofocus: true,
            onclick: move |_| on_dismiss.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(());
                }
            },
            // Clicks inside the article must not reach the backdrop.
            article {
                onclick: |evt| evt.stop_propagation(),
                {props.children}
            }
        }
    }
}
