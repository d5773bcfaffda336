#![allow(non_snake_case)]

use api::address_rules::abbreviate_address;
use api::backend::TransferBackend;
use api::route::RouteSelection;
use api::safety_scan::RiskAssessment;
use api::wizard::StepOutput;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::error_panel::ErrorPanel;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Progress;
use crate::hooks::use_error_list::use_error_list;

#[component]
fn AssessmentView(assessment: RiskAssessment) -> Element {
    rsx! {
        hgroup {
            h2 { "Grade {assessment.grade()}" }
            p { "Score {assessment.score()} / {assessment.max_score()}" }
        }
        for component in assessment.components().iter() {
            div {
                key: "{component.name}",
                style: "margin-bottom: 1rem;",
                div {
                    style: "display: flex; justify-content: space-between;",
                    strong { "{component.name}" }
                    span { "{component.score}/10" }
                }
                Progress { fraction: f64::from(component.percentage()) / 100.0 }
                small { "{component.description}" }
            }
        }
    }
}

/// Step 2: show the risk assessment of the recipient address.
#[component]
pub fn SafetyScanStep(route: RouteSelection, on_next: EventHandler<StepOutput>) -> Element {
    let app_state = use_context::<AppState>();
    let mut errors = use_error_list();
    let address = abbreviate_address(route.address());

    let mut scan = use_resource(move || {
        let app_state = app_state.clone();
        let route = route.clone();
        async move { app_state.backend.scan_address(&route).await }
    });

    use_effect(move || {
        if let Some(Err(e)) = &*scan.read() {
            errors.report([e]);
        }
    });

    let body = match &*scan.read() {
        Some(Ok(assessment)) => rsx! {
            AssessmentView { assessment: assessment.clone() }
            footer {
                Button {
                    on_click: move |_| on_next.call(StepOutput::ScanAcknowledged),
                    "Continue to Test Transfer"
                }
            }
        },
        Some(Err(_)) => rsx! {
            p { "The scan could not be completed." }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| scan.restart(),
                    "Retry Scan"
                }
            }
        },
        None => rsx! {
            p { "aria-busy": "true", "Scanning {address}..." }
        },
    };

    rsx! {
        Card {
            h3 { "Safety Scan" }
            p {
                "Recipient: "
                code { "{address}" }
            }
            {body}
        }
        ErrorPanel { errors }
    }
}
