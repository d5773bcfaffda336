//! Defines the assets that can be sent as a test transfer, along with the
//! static registry describing where each one can travel and how its
//! recipient addresses look.

use std::sync::LazyLock;

use serde::Deserialize;
use serde::Serialize;

use crate::address_rules::AddressRuleSet;
use crate::chain::Chain;

static EVM_RULES: LazyLock<AddressRuleSet> = LazyLock::new(|| {
    AddressRuleSet::new(r"^0x[a-fA-F0-9]{40}$")
        .expect("EVM address pattern is valid")
        .with_prefix("0x")
        .with_length(42)
});

static BTC_RULES: LazyLock<AddressRuleSet> = LazyLock::new(|| {
    AddressRuleSet::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$")
        .expect("bitcoin address pattern is valid")
        .with_length_range(26, 35)
});

/// A transferable asset, keyed by its ticker symbol.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Asset {
    ETH,  // Ether
    BTC,  // Bitcoin
    USDC, // USD Coin
    USDT, // Tether
}

/// Everything the selection step needs to know about an asset.
#[derive(Debug, Clone, Copy)]
pub struct AssetConfig {
    pub symbol: Asset,
    pub name: &'static str,
    /// Supported chains, in display order.
    pub chains: &'static [Chain],
    pub is_popular: bool,
    pub icon: Option<&'static str>,
    pub address_rules: &'static AddressRuleSet,
}

impl Asset {
    /// Returns the ticker symbol (e.g., "USDC").
    pub fn symbol(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the asset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ETH => "Ethereum",
            Self::BTC => "Bitcoin",
            Self::USDC => "USD Coin",
            Self::USDT => "Tether",
        }
    }

    pub fn chains(&self) -> &'static [Chain] {
        match self {
            Self::ETH => &[Chain::Ethereum],
            Self::BTC => &[Chain::Bitcoin],
            Self::USDC => &[
                Chain::Ethereum,
                Chain::Polygon,
                Chain::Arbitrum,
                Chain::Optimism,
                Chain::Base,
            ],
            Self::USDT => &[
                Chain::Ethereum,
                Chain::Polygon,
                Chain::Arbitrum,
                Chain::Optimism,
            ],
        }
    }

    pub fn supports(&self, chain: Chain) -> bool {
        self.chains().contains(&chain)
    }

    /// The chain implied by the asset when it only lives on one network.
    pub fn sole_chain(&self) -> Option<Chain> {
        match self.chains() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn is_popular(&self) -> bool {
        !self.is_usdt()
    }

    pub fn icon(&self) -> Option<&'static str> {
        let url = match self {
            Self::ETH => {
                "https://ethereum.org/static/4f10d2777b2d14759feb01c65b2765f7/69ce7/eth-glyph-colored.png"
            }
            Self::BTC => "https://bitcoin.org/img/icons/opengraph.png",
            Self::USDC => "https://cryptologos.cc/logos/usd-coin-usdc-logo.png",
            Self::USDT => "https://cryptologos.cc/logos/tether-usdt-logo.png",
        };
        Some(url)
    }

    pub fn address_rules(&self) -> &'static AddressRuleSet {
        match self {
            Self::BTC => &BTC_RULES,
            Self::ETH | Self::USDC | Self::USDT => &EVM_RULES,
        }
    }

    /// Placeholder text for the recipient address field.
    pub fn address_placeholder(&self) -> &'static str {
        match self {
            Self::BTC => "Enter Bitcoin address",
            _ => "Enter wallet address (0x...)",
        }
    }

    pub fn config(&self) -> AssetConfig {
        AssetConfig {
            symbol: *self,
            name: self.name(),
            chains: self.chains(),
            is_popular: self.is_popular(),
            icon: self.icon(),
            address_rules: self.address_rules(),
        }
    }
}

/// The full registry, in display order.
pub fn assets() -> impl Iterator<Item = AssetConfig> {
    <Asset as strum::IntoEnumIterator>::iter().map(|a| a.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn registry_lists_every_asset_once() {
        let symbols: Vec<_> = assets().map(|c| c.symbol).collect();
        assert_eq!(symbols, vec![Asset::ETH, Asset::BTC, Asset::USDC, Asset::USDT]);
    }

    #[test]
    fn single_chain_assets_imply_their_chain() {
        assert_eq!(Asset::ETH.sole_chain(), Some(Chain::Ethereum));
        assert_eq!(Asset::BTC.sole_chain(), Some(Chain::Bitcoin));
        assert_eq!(Asset::USDC.sole_chain(), None);
    }

    #[test]
    fn usdt_is_not_offered_on_base() {
        assert!(Asset::USDC.supports(Chain::Base));
        assert!(!Asset::USDT.supports(Chain::Base));
        assert!(!Asset::USDT.is_popular());
    }

    #[test]
    fn evm_assets_share_address_rules() {
        let eth = Asset::ETH.address_rules();
        let usdc = Asset::USDC.address_rules();
        assert!(std::ptr::eq(eth, usdc));
        assert_eq!(eth.prefix(), Some("0x"));
        assert_eq!(Asset::BTC.address_rules().min_length(), Some(26));
    }

    #[test]
    fn parses_symbols_case_insensitively() {
        assert_eq!(Asset::from_str("usdc").unwrap(), Asset::USDC);
        assert!(Asset::from_str("DOGE").is_err());
    }
}
