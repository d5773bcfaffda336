#![allow(non_snake_case)]

use api::asset::Asset;
use api::chain::Chain;
use api::route;
use api::route::RouteForm;
use api::route::RouteSelection;
use api::selection::DisplayVariant;
use api::wizard::StepOutput;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::components::error_panel::ErrorPanel;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::searchable_select::SearchableSelect;
use crate::hooks::use_error_list::use_error_list;

/// Step 1: pick what to send, where, and to whom.
#[component]
pub fn AssetSelectionStep(
    #[props(!optional)] initial: Option<RouteSelection>,
    on_next: EventHandler<StepOutput>,
) -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut form = use_signal(|| {
        initial
            .as_ref()
            .map(RouteForm::from_selection)
            .unwrap_or_default()
    });
    let mut errors = use_error_list();

    let current = form.read().clone();
    let asset_options = route::asset_options(&app_state_mut.recent_assets.read());
    let chain_options = current
        .asset()
        .filter(|_| current.needs_chain_choice())
        .map(|asset| route::chain_options(asset, &app_state_mut.recent_chains.read()));
    let address_placeholder = current
        .asset()
        .map_or("Enter wallet address", |asset| asset.address_placeholder());

    rsx! {
        Card {
            h3 { "Select Asset & Enter Address" }
            SearchableSelect::<Asset> {
                label: "Asset",
                options: asset_options,
                value: current.asset(),
                placeholder: "Type to search assets...",
                on_change: move |asset: Asset| {
                    form.write().select_asset(asset);
                    app_state_mut.recent_assets.write().record(asset);
                    errors.clear();
                },
            }
            if let Some(chain_options) = chain_options {
                SearchableSelect::<Chain> {
                    label: "Chain",
                    options: chain_options,
                    value: current.chain(),
                    variant: DisplayVariant::Chain,
                    placeholder: "Type to search chains...",
                    on_change: move |chain: Chain| {
                        let result = form.write().select_chain(chain);
                        if errors.check(result).is_some() {
                            app_state_mut.recent_chains.write().record(chain);
                            errors.clear();
                        }
                    },
                }
            } else if let Some(chain) = current.chain() {
                p {
                    small { "Network: {chain}" }
                }
            }
            label {
                "Recipient Address"
                input {
                    r#type: "text",
                    spellcheck: "false",
                    autocomplete: "off",
                    placeholder: "{address_placeholder}",
                    value: "{current.address()}",
                    oninput: move |evt| {
                        form.write().set_address(evt.value());
                        errors.clear();
                    },
                }
            }
            footer {
                Button {
                    on_click: move |_| {
                        let result = form.read().validate();
                        match result {
                            Ok(route) => on_next.call(StepOutput::RouteConfirmed(route)),
                            Err(problems) => errors.report(problems),
                        }
                    },
                    "SAFETY SCAN"
                }
            }
        }
        ErrorPanel { errors }
    }
}
