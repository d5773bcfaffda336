//! Defines the networks a test transfer can travel on.

use serde::Deserialize;
use serde::Serialize;

use crate::usd_amount::UsdAmount;

/// A network an asset can move across.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Chain {
    Bitcoin,
    Ethereum,
    Polygon,
    Arbitrum,
    Optimism,
    Base,
}

/// Static description of a chain as shown in the chain selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain: Chain,
    /// CSS color used for the swatch next to the chain name.
    pub color: &'static str,
    pub is_popular: bool,
}

/// Gas cost in dollars for both legs of a test transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasFees {
    /// Paid when sending the test amount to the recipient.
    pub send: UsdAmount,
    /// Paid when the recipient sends the test amount back.
    pub return_trip: UsdAmount,
}

impl Chain {
    /// Returns the display name of the chain (e.g., "Ethereum").
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Bitcoin => "#F7931A",
            Self::Ethereum => "#627EEA",
            Self::Polygon => "#8247E5",
            Self::Arbitrum => "#28A0F0",
            Self::Optimism => "#FF0420",
            Self::Base => "#0052FF",
        }
    }

    pub fn is_popular(&self) -> bool {
        matches!(self, Self::Bitcoin | Self::Ethereum | Self::Polygon)
    }

    /// Fixed gas table. Every chain has an entry, so the lookup cannot fail.
    pub fn gas_fees(&self) -> GasFees {
        let cents = match self {
            Self::Ethereum => 25,
            Self::Bitcoin => 15,
            Self::Polygon => 5,
            Self::Arbitrum => 10,
            Self::Optimism => 8,
            Self::Base => 7,
        };
        GasFees {
            send: UsdAmount::from_cents(cents),
            return_trip: UsdAmount::from_cents(cents),
        }
    }

    pub fn config(&self) -> ChainConfig {
        ChainConfig {
            chain: *self,
            color: self.color(),
            is_popular: self.is_popular(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn ethereum_gas_is_a_quarter_each_way() {
        let fees = Chain::Ethereum.gas_fees();
        assert_eq!(fees.send, UsdAmount::from_cents(25));
        assert_eq!(fees.return_trip, UsdAmount::from_cents(25));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Chain::from_str("optimism").unwrap(), Chain::Optimism);
        assert_eq!(Chain::Base.name(), "Base");
    }

    #[test]
    fn every_chain_has_a_color() {
        for chain in Chain::iter() {
            assert!(chain.color().starts_with('#'), "{chain} has no color");
        }
    }
}
