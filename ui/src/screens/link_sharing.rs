#![allow(non_snake_case)]

use std::time::Duration;

use api::address_rules::abbreviate_address;
use api::backend::TransferBackend;
use api::share_link::LinkExpiry;
use api::share_link::LinkStatus;
use api::share_link::ShareLink;
use api::transfer_details::TransferDetails;
use api::wizard::StepOutput;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::compat;
use crate::components::error_panel::ErrorPanel;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::ChoiceButton;
use crate::components::pico::Grid;
use crate::hooks::use_error_list::use_error_list;
use crate::hooks::use_transient_flag::use_transient_flag;

const COPIED_NOTICE: Duration = Duration::from_secs(2);

/// What the recipient will see when opening the link.
#[component]
fn RecipientPreview(transfer: TransferDetails) -> Element {
    rsx! {
        details {
            summary { "Recipient preview" }
            ol {
                li { "Open the link and review the incoming test of {transfer.test_amount().usd().to_string_with_symbol()} in {transfer.asset()} on {transfer.chain()}." }
                li { "Confirm the funds arrived at " code { "{abbreviate_address(transfer.recipient_address())}" } "." }
                li { "Send the test amount back. The return gas fee of {transfer.return_gas_fee().to_string_with_symbol()} is already covered." }
            }
        }
    }
}

/// Step 5: hand the recipient a link for returning the test amount.
#[component]
pub fn LinkSharingStep(
    details: TransferDetails,
    #[props(!optional)] default_expiry: Option<LinkExpiry>,
    on_next: EventHandler<StepOutput>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut errors = use_error_list();
    let mut copied = use_transient_flag(COPIED_NOTICE);
    let mut link = use_signal(|| None::<ShareLink>);

    let link_details = details.clone();
    let mut created = use_resource(move || {
        let app_state = app_state.clone();
        let details = link_details.clone();
        async move { app_state.backend.create_share_link(&details, default_expiry).await }
    });

    use_effect(move || match &*created.read() {
        Some(Ok(new_link)) => link.set(Some(new_link.clone())),
        Some(Err(e)) => errors.report([e]),
        None => {}
    });

    let current = link();
    let status = LinkStatus::of((*created.read()).as_ref());
    let body = match (&current, status) {
        (Some(share_link), _) => {
            let url = share_link.url().to_string();
            let expires = share_link
                .expires_at()
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string());
            let active_expiry = share_link.expiry();
            let copy_url = url.clone();
            rsx! {
                div {
                    role: "group",
                    input {
                        r#type: "text",
                        readonly: true,
                        value: "{url}",
                    }
                    Button {
                        on_click: move |_| {
                            let url = copy_url.clone();
                            spawn(async move {
                                if compat::clipboard_set(url).await {
                                    copied.trigger();
                                } else {
                                    warn!("clipboard write failed");
                                }
                            });
                        },
                        if copied.is_set() { "Copied!" } else { "Copy" }
                    }
                }
                h5 { "Link Expiry" }
                Grid {
                    for expiry in LinkExpiry::iter() {
                        ChoiceButton {
                            key: "{expiry.hours()}",
                            selected: active_expiry == Some(expiry),
                            on_click: move |_| {
                                if let Some(share_link) = link.write().as_mut() {
                                    share_link.set_expiry(Some(expiry));
                                }
                            },
                            "{expiry.label()}"
                        }
                    }
                }
                match expires {
                    Some(at) => rsx! { p { small { "Expires {at}" } } },
                    None => rsx! { p { small { "Choose how long the link stays valid." } } },
                }
            }
        }
        (None, LinkStatus::Failed) => rsx! {
            Button {
                button_type: ButtonType::Secondary,
                on_click: move |_| created.restart(),
                "Retry"
            }
        },
        (None, _) => rsx! {
            p { "aria-busy": "true", "Creating link..." }
        },
    };

    rsx! {
        Card {
            h3 { "Share With the Recipient" }
            {body}
            RecipientPreview { transfer: details }
            footer {
                Button {
                    on_click: move |_| on_next.call(StepOutput::LinkShared),
                    "Return to Dashboard"
                }
            }
        }
        ErrorPanel { errors }
    }
}
