//! Hosts the five-step test transfer wizard.
#![allow(non_snake_case)]

use api::wizard::StepOutput;
use api::wizard::Transition;
use api::wizard::TransferStep;
use api::wizard::WizardState;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Progress;
use crate::components::step_guide::StepGuide;
use crate::screens::asset_selection::AssetSelectionStep;
use crate::screens::email_verification::EmailVerificationStep;
use crate::screens::link_sharing::LinkSharingStep;
use crate::screens::safety_scan::SafetyScanStep;
use crate::screens::test_transfer::TestTransferStep;

/// Hands a step's output to the controller. Leaves the wizard on completion.
fn advance_wizard(
    mut wizard: Signal<WizardState>,
    on_complete: EventHandler<()>,
    output: StepOutput,
) {
    let result = wizard.write().advance(output);
    match result {
        Ok(Transition::Completed) => on_complete.call(()),
        Ok(_) => {}
        Err(e) => warn!("step output rejected: {e}"),
    }
}

#[component]
fn StepIndicator(active: TransferStep) -> Element {
    rsx! {
        nav {
            ul {
                for step in TransferStep::iter() {
                    li {
                        key: "{step}",
                        style: if step == active { "font-weight: bold;" } else { "color: var(--pico-muted-color);" },
                        "aria-current": if step == active { "step" } else { "false" },
                        "{step.index() + 1}. {step.title()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TransferScreen(on_complete: EventHandler<()>) -> Element {
    let app_state = use_context::<AppState>();
    let mut wizard = use_signal(WizardState::new);

    // A step rendered without its inputs sends the user back to the step
    // that produces them.
    use_effect(move || {
        if wizard.read().missing_prerequisite().is_some() {
            wizard.write().restore_prerequisites();
        }
    });

    let state = wizard.read().clone();
    let step = state.step();
    let on_next = move |output: StepOutput| advance_wizard(wizard, on_complete, output);

    let body = match step {
        TransferStep::AssetSelection => rsx! {
            AssetSelectionStep {
                initial: state.route().cloned(),
                on_next,
            }
        },
        TransferStep::SafetyScan => match state.route().cloned() {
            Some(route) => rsx! {
                SafetyScanStep { route, on_next }
            },
            None => rsx! {},
        },
        TransferStep::TestTransfer => match state.route().cloned() {
            Some(route) => rsx! {
                TestTransferStep {
                    route,
                    initial: state.details().map(|d| d.test_amount()),
                    on_next,
                }
            },
            None => rsx! {},
        },
        TransferStep::EmailVerification => match state.details().cloned() {
            Some(details) => rsx! {
                EmailVerificationStep {
                    details,
                    initial_email: state.verified_email().map(str::to_string),
                    on_next,
                }
            },
            None => rsx! {},
        },
        TransferStep::LinkSharing => match state.details().cloned() {
            Some(details) => rsx! {
                LinkSharingStep {
                    details,
                    default_expiry: app_state.prefs.default_expiry(),
                    on_next,
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div {
            class: "wizard",
            header {
                h2 { style: "margin-bottom: 0.5rem;", "Test Transfer" }
                Progress { fraction: state.progress_fraction() }
                StepIndicator { active: step }
            }
            StepGuide { step }
            {body}
            if step.previous().is_some() {
                footer {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            wizard.write().retreat();
                        },
                        "Back"
                    }
                }
            }
        }
    }
}
