#![allow(non_snake_case)]

use api::backend::TransferBackend;
use api::crypto_amount::CryptoAmount;
use api::route::RouteSelection;
use api::transfer_details::TestAmount;
use api::transfer_details::TransferDetails;
use api::usd_amount::UsdAmount;
use api::wizard::StepOutput;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::error_panel::ErrorPanel;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::ChoiceButton;
use crate::components::pico::Grid;
use crate::hooks::use_error_list::use_error_list;

#[component]
fn FeeRow(
    label: &'static str,
    usd: UsdAmount,
    #[props(!optional)] crypto: Option<CryptoAmount>,
    #[props(default)] total: bool,
) -> Element {
    let usd_text = usd.to_string_with_symbol();
    rsx! {
        tr {
            td {
                if total { strong { "{label}" } } else { "{label}" }
            }
            td {
                style: "text-align: right;",
                if total { strong { "{usd_text}" } } else { "{usd_text}" }
                if let Some(crypto) = crypto {
                    small {
                        style: "display: block; color: var(--pico-muted-color);",
                        "{crypto.to_string_with_symbol()}"
                    }
                }
            }
        }
    }
}

/// Step 3: choose a test amount, review fees and send.
#[component]
pub fn TestTransferStep(
    route: RouteSelection,
    #[props(!optional)] initial: Option<TestAmount>,
    on_next: EventHandler<StepOutput>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut selected = use_signal(|| initial);
    let mut is_sending = use_signal(|| false);
    let mut errors = use_error_list();

    let details = selected().map(|amount| TransferDetails::calculate(amount, &route));
    let crypto = details
        .as_ref()
        .and_then(|d| d.in_crypto(&app_state.price_map));
    let wallet = app_state_mut.wallet.read().clone();

    let connect_state = app_state.clone();
    let send_state = app_state.clone();
    let send_route = route.clone();

    rsx! {
        Card {
            h3 { "Send a Test Amount" }
            p { "Choose how much to send. The recipient returns it to confirm the address works." }
            Grid {
                for amount in TestAmount::iter() {
                    ChoiceButton {
                        key: "{amount}",
                        selected: selected() == Some(amount),
                        on_click: move |_| {
                            selected.set(Some(amount));
                            errors.clear();
                        },
                        "{amount.usd().to_string_with_symbol()}"
                    }
                }
            }
            if let Some(details) = &details {
                table {
                    tbody {
                        FeeRow {
                            label: "Test Amount",
                            usd: details.test_amount().usd(),
                            crypto: crypto.map(|c| c.test_amount),
                        }
                        FeeRow {
                            label: "Send Gas Fee",
                            usd: details.send_gas_fee(),
                            crypto: crypto.map(|c| c.send_gas_fee),
                        }
                        FeeRow {
                            label: "Return Gas Fee",
                            usd: details.return_gas_fee(),
                            crypto: crypto.map(|c| c.return_gas_fee),
                        }
                        FeeRow {
                            label: "Total Charge",
                            usd: details.total_charge(),
                            crypto: crypto.map(|c| c.total_charge),
                            total: true,
                        }
                    }
                }
            }
            footer {
                match wallet {
                    None => rsx! {
                        Button {
                            busy: is_sending(),
                            on_click: move |_| {
                                let app_state = connect_state.clone();
                                spawn(async move {
                                    is_sending.set(true);
                                    let result = app_state.backend.connect_wallet().await;
                                    if let Some(wallet) = errors.check(result) {
                                        app_state_mut.wallet.set(Some(wallet));
                                    }
                                    is_sending.set(false);
                                });
                            },
                            "Connect Wallet"
                        }
                    },
                    Some(_) => rsx! {
                        Button {
                            busy: is_sending(),
                            on_click: move |_| {
                                let Some(amount) = errors.check(TestAmount::required(selected())) else {
                                    return;
                                };
                                let details = TransferDetails::calculate(amount, &send_route);
                                let app_state = send_state.clone();
                                spawn(async move {
                                    is_sending.set(true);
                                    let result = app_state.backend.submit_test_transfer(details).await;
                                    is_sending.set(false);
                                    if let Some(sent) = errors.check(result) {
                                        on_next.call(StepOutput::TransferSent(sent));
                                    }
                                });
                            },
                            "Send Test Transfer"
                        }
                    },
                }
            }
        }
        ErrorPanel { errors }
    }
}
