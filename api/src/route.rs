//! The asset, chain and recipient address that make up a transfer route,
//! and the form that collects them.

use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::address_rules::abbreviate_address;
use crate::address_rules::AddressError;
use crate::asset::Asset;
use crate::chain::Chain;
use crate::selection::RecentSelections;
use crate::selection::SelectionOption;

/// Why a route form cannot be confirmed yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Please select an asset")]
    MissingAsset,
    #[error("Please select a chain")]
    MissingChain,
    #[error("{asset} is not available on {chain}")]
    UnsupportedChain { asset: Asset, chain: Chain },
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// A confirmed route. The chain is always one the asset supports and the
/// address has passed the asset's rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteSelection {
    asset: Asset,
    chain: Chain,
    address: String,
}

impl RouteSelection {
    pub fn new(
        asset: Asset,
        chain: Chain,
        address: impl Into<String>,
    ) -> Result<Self, Vec<RouteError>> {
        let address = address.into();
        let mut errors = Vec::new();
        if !asset.supports(chain) {
            errors.push(RouteError::UnsupportedChain { asset, chain });
        }
        errors.extend(
            asset
                .address_rules()
                .validate(&address)
                .into_iter()
                .map(RouteError::from),
        );
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            asset,
            chain,
            address,
        })
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// In-progress input of the asset selection step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteForm {
    asset: Option<Asset>,
    chain: Option<Chain>,
    address: String,
}

impl RouteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form from a previously confirmed route.
    pub fn from_selection(route: &RouteSelection) -> Self {
        Self {
            asset: Some(route.asset),
            chain: Some(route.chain),
            address: route.address.clone(),
        }
    }

    pub fn asset(&self) -> Option<Asset> {
        self.asset
    }

    pub fn chain(&self) -> Option<Chain> {
        self.chain
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Picking an asset always resets the chain, since the old one may not
    /// be supported. Single-chain assets fill it in again immediately.
    pub fn select_asset(&mut self, asset: Asset) {
        self.asset = Some(asset);
        self.chain = asset.sole_chain();
    }

    pub fn select_chain(&mut self, chain: Chain) -> Result<(), RouteError> {
        let asset = self.asset.ok_or(RouteError::MissingAsset)?;
        if !asset.supports(chain) {
            return Err(RouteError::UnsupportedChain { asset, chain });
        }
        self.chain = Some(chain);
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Only assets spanning several networks ask for a chain.
    pub fn needs_chain_choice(&self) -> bool {
        self.asset.is_some_and(|a| a.chains().len() > 1)
    }

    /// Returns the confirmed route, or every problem in display order.
    pub fn validate(&self) -> Result<RouteSelection, Vec<RouteError>> {
        let Some(asset) = self.asset else {
            let mut errors = vec![RouteError::MissingAsset];
            if self.address.trim().is_empty() {
                errors.push(AddressError::Empty.into());
            }
            return Err(errors);
        };

        let mut errors = Vec::new();
        if self.chain.is_none() {
            errors.push(RouteError::MissingChain);
        }
        errors.extend(
            asset
                .address_rules()
                .validate(&self.address)
                .into_iter()
                .map(RouteError::from),
        );

        match self.chain {
            Some(chain) if errors.is_empty() => {
                debug!(
                    "route confirmed: {} on {} to {}",
                    asset,
                    chain,
                    abbreviate_address(&self.address)
                );
                RouteSelection::new(asset, chain, self.address.clone())
            }
            _ => {
                debug!("route rejected with {} error(s)", errors.len());
                Err(errors)
            }
        }
    }
}

/// Builds the asset selector's options from the registry.
pub fn asset_options(recent: &RecentSelections<Asset>) -> Vec<SelectionOption<Asset>> {
    crate::asset::assets()
        .map(|config| {
            SelectionOption::new(config.symbol, config.symbol.symbol())
                .with_description(config.name)
                .with_icon(config.icon)
                .popular(config.is_popular)
                .recent(recent.contains(&config.symbol))
        })
        .collect()
}

/// Builds the chain selector's options for `asset`, in the asset's order.
pub fn chain_options(
    asset: Asset,
    recent: &RecentSelections<Chain>,
) -> Vec<SelectionOption<Chain>> {
    asset
        .chains()
        .iter()
        .map(|chain| {
            let config = chain.config();
            SelectionOption::new(*chain, chain.name())
                .with_color(config.color)
                .popular(config.is_popular)
                .recent(recent.contains(chain))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETH_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    fn messages(errors: &[RouteError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_form_reports_asset_then_address() {
        let errors = RouteForm::new().validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            ["Please select an asset", "Please enter a recipient address"]
        );
    }

    #[test]
    fn address_rules_need_an_asset() {
        let mut form = RouteForm::new();
        form.set_address("not-an-address");
        assert_eq!(form.validate().unwrap_err(), vec![RouteError::MissingAsset]);
    }

    #[test]
    fn single_chain_asset_confirms_without_chain_choice() {
        let mut form = RouteForm::new();
        form.select_asset(Asset::ETH);
        form.set_address(ETH_ADDRESS);
        assert!(!form.needs_chain_choice());

        let route = form.validate().unwrap();
        assert_eq!(route.chain(), Chain::Ethereum);
        assert_eq!(route.address(), ETH_ADDRESS);
    }

    #[test]
    fn multi_chain_asset_requires_a_chain() {
        let mut form = RouteForm::new();
        form.select_asset(Asset::USDC);
        form.set_address("0xabc");
        assert!(form.needs_chain_choice());
        assert_eq!(
            messages(&form.validate().unwrap_err()),
            [
                "Please select a chain",
                "Address must be exactly 42 characters",
                "Invalid address format",
            ]
        );
    }

    #[test]
    fn switching_asset_clears_the_chain() {
        let mut form = RouteForm::new();
        form.select_asset(Asset::USDC);
        form.select_chain(Chain::Base).unwrap();
        form.select_asset(Asset::USDT);
        assert_eq!(form.chain(), None);
        assert_eq!(
            form.select_chain(Chain::Base),
            Err(RouteError::UnsupportedChain {
                asset: Asset::USDT,
                chain: Chain::Base
            })
        );
    }

    #[test]
    fn btc_rejects_evm_style_address() {
        let mut form = RouteForm::new();
        form.select_asset(Asset::BTC);
        form.set_address("0xabc");
        let errors = form.validate().unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors.contains(&RouteError::Address(AddressError::TooShort(26))));
        assert!(errors.contains(&RouteError::Address(AddressError::InvalidFormat)));
        assert!(!errors
            .iter()
            .any(|e| matches!(e, RouteError::Address(AddressError::MissingPrefix(_)))));
    }

    #[test]
    fn options_mark_recent_and_popular_entries() {
        let recent = RecentSelections::from_values([Asset::USDT]);
        let options = asset_options(&recent);
        assert_eq!(options.len(), 4);
        let usdt = options.iter().find(|o| o.value == Asset::USDT).unwrap();
        assert!(usdt.is_recent);
        assert_eq!(usdt.description.as_deref(), Some("Tether"));

        let chains = chain_options(Asset::USDT, &RecentSelections::new());
        let names: Vec<_> = chains.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(names, ["Ethereum", "Polygon", "Arbitrum", "Optimism"]);
        assert!(chains.iter().all(|o| o.color.is_some()));
    }
}
