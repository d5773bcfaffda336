//! Defines the mutable, reactive state for the application's UI.

use api::asset::Asset;
use api::backend::WalletConnection;
use api::chain::Chain;
use api::selection::RecentSelections;
use dioxus::prelude::*;

/// Signals that outlive a single wizard session.
///
/// Provided as a context next to the immutable `AppState`, so that
/// restarting the wizard keeps recent picks and the wallet connection.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub recent_assets: Signal<RecentSelections<Asset>>,
    pub recent_chains: Signal<RecentSelections<Chain>>,
    /// `None` until the user connects a wallet.
    pub wallet: Signal<Option<WalletConnection>>,
}
