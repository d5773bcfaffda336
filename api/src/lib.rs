//! Domain logic of the test transfer wizard.
//!
//! Everything here is independent of rendering: the asset and chain
//! registry, address validation, fee calculation, the searchable selection
//! state machine and the wizard controller. The `ui` crate drives these types
//! from its components.

pub mod address_rules;
pub mod asset;
pub mod backend;
pub mod chain;
pub mod crypto_amount;
pub mod guide;
pub mod prefs;
pub mod price_map;
pub mod route;
pub mod safety_scan;
pub mod selection;
pub mod share_link;
pub mod transfer_details;
pub mod usd_amount;
pub mod verification;
pub mod wizard;

pub type ApiError = anyhow::Error;
