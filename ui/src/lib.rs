// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use api::selection::RecentSelections;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use dioxus_logger::tracing::info;
use screens::finished::FinishedScreen;
use screens::transfer::TransferScreen;

/// The screens of the application.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
enum Screen {
    #[default]
    Transfer,
    Finished,
}

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .wizard header nav ul {
        flex-wrap: wrap;
        font-size: 0.8rem;
    }

    .step-guide {
        font-family: var(--pico-font-family-monospace);
        font-size: 0.85rem;
        min-height: 4.5rem;
        padding: 0.75rem 1rem;
        margin-bottom: 1rem;
        border-left: 3px solid var(--pico-primary);
        background-color: var(--pico-card-sectioning-background-color);
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        style { "{app_css}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let user_prefs = use_hook(|| {
        let prefs = UserPrefs::from_env();
        info!("prefs: {:#?}", prefs);
        prefs
    });

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(user_prefs.clone()));

    // Create signals for mutable state at the top level of the component.
    let recent_assets = use_signal(|| user_prefs.seeded_recent_assets());
    let recent_chains = use_signal(RecentSelections::new);
    let wallet = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        recent_assets,
        recent_chains,
        wallet,
    });

    let mut active_screen = use_signal(Screen::default);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li { strong { "Dexter" } }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Transfer => rsx! {
                            TransferScreen {
                                on_complete: move |_| active_screen.set(Screen::Finished),
                            }
                        },
                        Screen::Finished => rsx! {
                            FinishedScreen {
                                on_restart: move |_| active_screen.set(Screen::Transfer),
                            }
                        },
                    }
                }
            }
        }
    }
}
