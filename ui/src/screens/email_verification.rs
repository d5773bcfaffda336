#![allow(non_snake_case)]

use std::rc::Rc;

use api::address_rules::abbreviate_address;
use api::backend::TransferBackend;
use api::transfer_details::TransferDetails;
use api::verification::validate_email;
use api::verification::OtpCode;
use api::verification::OtpInput;
use api::verification::OTP_LENGTH;
use api::wizard::StepOutput;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::error_panel::ErrorPanel;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_error_list::use_error_list;

/// Receipt of the submitted test transfer.
#[component]
fn TransferReceipt(details: TransferDetails) -> Element {
    rsx! {
        table {
            tbody {
                tr {
                    td { "Amount" }
                    td { "{details.test_amount().usd().to_string_with_symbol()} {details.asset()}" }
                }
                tr {
                    td { "Network" }
                    td { "{details.chain()}" }
                }
                tr {
                    td { "Recipient" }
                    td { code { "{abbreviate_address(details.recipient_address())}" } }
                }
                if let Some(tx_ref) = details.transaction_ref() {
                    tr {
                        td { "Transaction" }
                        td { code { "{abbreviate_address(tx_ref)}" } }
                    }
                }
                tr {
                    td { strong { "Total Charged" } }
                    td { strong { "{details.total_charge().to_string_with_symbol()}" } }
                }
            }
        }
    }
}

/// Step 4: confirm an e-mail address with a six-digit code.
#[component]
pub fn EmailVerificationStep(
    details: TransferDetails,
    #[props(!optional)] initial_email: Option<String>,
    on_next: EventHandler<StepOutput>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut email = use_signal(|| initial_email.unwrap_or_default());
    let mut code_sent = use_signal(|| false);
    let mut otp = use_signal(OtpCode::new);
    let mut slots: Signal<Vec<Option<Rc<MountedData>>>> = use_signal(|| vec![None; OTP_LENGTH]);
    let mut is_busy = use_signal(|| false);
    let mut errors = use_error_list();

    let send_state = app_state.clone();
    let verify_state = app_state.clone();

    let form = if code_sent() {
        rsx! {
            p { "Enter the 6-digit code sent to " strong { "{email}" } }
            div {
                style: "display: flex; gap: 0.5rem; justify-content: center;",
                for index in 0..OTP_LENGTH {
                    input {
                        key: "{index}",
                        r#type: "text",
                        inputmode: "numeric",
                        maxlength: "1",
                        autocomplete: "one-time-code",
                        "aria-label": "Digit {index + 1}",
                        style: "width: 3rem; text-align: center;",
                        value: otp.read().slot(index).map(|d| d.to_string()).unwrap_or_default(),
                        onmounted: move |mounted| {
                            if let Some(slot) = slots.write().get_mut(index) {
                                *slot = Some(mounted.data());
                            }
                        },
                        oninput: move |evt| {
                            let outcome = otp.write().enter(index, &evt.value());
                            errors.clear();
                            if let OtpInput::Filled { next_focus: Some(next) } = outcome {
                                if let Some(Some(handle)) = slots.peek().get(next).cloned() {
                                    spawn(async move {
                                        handle.set_focus(true).await.ok();
                                    });
                                }
                            }
                        },
                    }
                }
            }
            footer {
                style: "display: flex; justify-content: space-between;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        code_sent.set(false);
                        otp.set(OtpCode::new());
                        errors.clear();
                    },
                    "Use a Different Email"
                }
                Button {
                    busy: is_busy(),
                    on_click: move |_| {
                        let code = otp();
                        if errors.check(code.code()).is_none() {
                            return;
                        }
                        let app_state = verify_state.clone();
                        let address = email();
                        spawn(async move {
                            is_busy.set(true);
                            let result = app_state.backend.verify_code(&address, &code).await;
                            is_busy.set(false);
                            if errors.check(result).is_some() {
                                on_next.call(StepOutput::EmailVerified { email: address });
                            }
                        });
                    },
                    "Verify Email"
                }
            }
        }
    } else {
        rsx! {
            label {
                "Email Address"
                input {
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| {
                        email.set(evt.value());
                        errors.clear();
                    },
                }
            }
            footer {
                Button {
                    busy: is_busy(),
                    on_click: move |_| {
                        let address = email();
                        if errors.check(validate_email(&address)).is_none() {
                            return;
                        }
                        let app_state = send_state.clone();
                        spawn(async move {
                            is_busy.set(true);
                            let result = app_state.backend.send_verification_code(&address).await;
                            is_busy.set(false);
                            if errors.check(result).is_some() {
                                code_sent.set(true);
                            }
                        });
                    },
                    "Send Verification Code"
                }
            }
        }
    };

    rsx! {
        Card {
            h3 { "Test Transfer Sent" }
            TransferReceipt { details }
        }
        Card {
            h3 { "Verify Your Email" }
            {form}
        }
        ErrorPanel { errors }
    }
}
