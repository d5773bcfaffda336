//! A dropdown that filters its options as the user types.
#![allow(non_snake_case)]

use std::rc::Rc;

use api::selection::DisplayVariant;
use api::selection::NavKey;
use api::selection::OptionMarker;
use api::selection::PanelEvent;
use api::selection::SelectionOption;
use api::selection::SelectionPanel;
use api::selection::NO_MATCHES_MESSAGE;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

fn nav_key(key: &Key) -> NavKey {
    match key {
        Key::ArrowDown => NavKey::ArrowDown,
        Key::ArrowUp => NavKey::ArrowUp,
        Key::Enter => NavKey::Enter,
        Key::Escape => NavKey::Escape,
        Key::Tab => NavKey::Tab,
        Key::Character(c) if c == " " => NavKey::Space,
        _ => NavKey::Other,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SearchableSelectProps<T: Clone + PartialEq + 'static> {
    #[props(into)]
    pub label: String,
    pub options: Vec<SelectionOption<T>>,
    /// The committed value, if any.
    #[props(!optional)]
    pub value: Option<T>,
    pub on_change: EventHandler<T>,
    #[props(default)]
    pub variant: DisplayVariant,
    #[props(into, default = "Select an option".to_string())]
    pub placeholder: String,
}

/// Searchable single-choice selector.
///
/// Typing filters by label and description. Arrow keys move the highlight,
/// Enter commits it, Escape and Tab close the panel. A click anywhere outside
/// closes it too.
pub fn SearchableSelect<T: Clone + PartialEq + 'static>(
    props: SearchableSelectProps<T>,
) -> Element {
    let mut panel = use_signal(SelectionPanel::new);
    let mut input_handle: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let on_change = props.on_change;
    let options = Rc::new(props.options.clone());
    let state = panel.read().clone();

    let selected = props
        .value
        .as_ref()
        .and_then(|value| options.iter().find(|o| &o.value == value));
    let input_placeholder = selected
        .map(|o| o.label.clone())
        .unwrap_or_else(|| props.placeholder.clone());
    let selected_marker = selected.and_then(|o| props.variant.marker(o));

    let focus_input = move || {
        if let Some(handle) = input_handle.peek().clone() {
            spawn(async move {
                handle.set_focus(true).await.ok();
            });
        }
    };

    let keydown_options = options.clone();
    let groups = state.groups(options.as_slice());

    rsx! {
        label {
            "{props.label}"
            div {
                style: "position: relative;",
                if state.is_open() {
                    // Backdrop to catch clicks outside the panel
                    div {
                        style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                        onclick: move |_| panel.write().dismiss(),
                    }
                }
                div {
                    style: "position: relative; z-index: 10; display: flex; align-items: center; gap: 0.5rem;",
                    onclick: move |e| {
                        e.stop_propagation();
                        panel.write().open();
                        focus_input();
                    },
                    if !state.is_open() {
                        {render_marker(selected_marker)}
                    }
                    input {
                        r#type: "text",
                        role: "combobox",
                        "aria-expanded": if state.is_open() { "true" } else { "false" },
                        autocomplete: "off",
                        style: "margin-bottom: 0;",
                        placeholder: "{input_placeholder}",
                        value: "{state.query()}",
                        onmounted: move |mounted| input_handle.set(Some(mounted.data())),
                        oninput: move |evt| panel.write().set_query(evt.value()),
                        onkeydown: move |evt| {
                            let event = panel
                                .write()
                                .handle_key(nav_key(&evt.key()), keydown_options.as_slice());
                            if event.prevents_default() {
                                evt.prevent_default();
                            }
                            if let PanelEvent::Committed(value) = event {
                                on_change.call(value);
                            }
                        },
                    }
                    span {
                        "aria-hidden": "true",
                        if state.is_open() { "▴" } else { "▾" }
                    }
                }
                if state.is_open() {
                    div {
                        onclick: |e| e.stop_propagation(),
                        style: "
                            position: absolute;
                            min-width: 100%;
                            z-index: 10;
                            background-color: var(--pico-card-background-color);
                            border: 1px solid var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                            padding: 0.5rem;
                            margin-top: 0.25rem;
                        ",
                        if groups.is_empty() {
                            p {
                                style: "margin: 0; padding: 0.3rem; color: var(--pico-muted-color);",
                                "{NO_MATCHES_MESSAGE}"
                            }
                        }
                        ul {
                            role: "listbox",
                            style: "list-style: none; margin: 0; padding: 0; max-height: 300px; overflow-y: auto;",
                            for group in groups {
                                if group.show_header {
                                    li {
                                        key: "{group.category.header()}",
                                        role: "presentation",
                                        style: "padding: 0.3rem; font-size: 0.75rem; text-transform: uppercase; color: var(--pico-muted-color);",
                                        "{group.category.header()}"
                                    }
                                }
                                {
                                    group.entries.into_iter().map(|(index, option)| {
                                        let is_highlighted = index == state.highlighted();
                                        let is_selected = props.value.as_ref() == Some(&option.value);
                                        let background = if is_highlighted {
                                            "var(--pico-primary-focus)"
                                        } else {
                                            "transparent"
                                        };
                                        let click_options = options.clone();
                                        let hover_options = options.clone();
                                        rsx! {
                                            li {
                                                key: "{index}",
                                                role: "option",
                                                "aria-selected": if is_selected { "true" } else { "false" },
                                                style: "display: flex; align-items: center; gap: 0.5rem; cursor: pointer; padding: 0.3rem; background: {background};",
                                                onmouseenter: move |_| panel.write().highlight(index, hover_options.as_slice()),
                                                onclick: move |_| {
                                                    let committed = panel.write().commit_at(index, click_options.as_slice());
                                                    if let Some(value) = committed {
                                                        on_change.call(value);
                                                    }
                                                },
                                                {render_marker(props.variant.marker(option))}
                                                span {
                                                    style: "flex-grow: 1;",
                                                    strong { "{option.label}" }
                                                    if let Some(description) = &option.description {
                                                        small {
                                                            style: "display: block; color: var(--pico-muted-color);",
                                                            "{description}"
                                                        }
                                                    }
                                                }
                                                span {
                                                    style: if is_selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                                    "✓"
                                                }
                                            }
                                        }
                                    })
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_marker(marker: Option<OptionMarker>) -> Element {
    match marker {
        Some(OptionMarker::Icon(src)) => rsx! {
            img {
                src: "{src}",
                alt: "",
                style: "width: 1.5rem; height: 1.5rem;",
            }
        },
        Some(OptionMarker::Color(color)) => rsx! {
            span {
                style: "display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: {color};",
            }
        },
        None => rsx! {},
    }
}
