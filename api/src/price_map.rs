//! Provides a specialized map for storing the dollar price of each asset.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::asset::Asset;
use crate::crypto_amount::CryptoAmount;
use crate::usd_amount::UsdAmount;

/// A map holding the price of one unit of each asset in US dollars.
///
/// Only the raw cent values are stored. Prices are a fixed table, not live
/// market data; see [`PriceMap::fixed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMap(HashMap<Asset, i64>);

impl PriceMap {
    /// Creates a new, empty `PriceMap`.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// The reference prices used for all fee conversions.
    pub fn fixed() -> Self {
        let mut map = Self::new();
        map.insert(Asset::ETH, UsdAmount::from_dollars(2_000));
        map.insert(Asset::BTC, UsdAmount::from_dollars(40_000));
        map.insert(Asset::USDC, UsdAmount::from_dollars(1));
        map.insert(Asset::USDT, UsdAmount::from_dollars(1));
        map
    }

    /// Inserts or updates the price for an asset, returning the old price.
    pub fn insert(&mut self, asset: Asset, price: UsdAmount) -> Option<UsdAmount> {
        self.0
            .insert(asset, price.as_cents())
            .map(UsdAmount::from_cents)
    }

    /// Retrieves the price of one unit of `asset`.
    pub fn get(&self, asset: Asset) -> Option<UsdAmount> {
        self.0.get(&asset).map(|&cents| UsdAmount::from_cents(cents))
    }

    /// Converts `usd` into the equivalent amount of `asset`.
    ///
    /// Returns `None` when no usable price is known for the asset.
    pub fn to_crypto(&self, usd: UsdAmount, asset: Asset) -> Option<CryptoAmount> {
        self.get(asset)
            .and_then(|price| CryptoAmount::from_usd(usd, price, asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fixed_table_prices_every_asset() {
        let prices = PriceMap::fixed();
        for asset in Asset::iter() {
            assert!(prices.get(asset).is_some(), "{asset} has no price");
        }
    }

    #[test]
    fn insert_returns_previous_price() {
        let mut prices = PriceMap::fixed();
        let old = prices.insert(Asset::ETH, UsdAmount::from_dollars(2_500));
        assert_eq!(old, Some(UsdAmount::from_dollars(2_000)));
        let eth = prices.to_crypto(UsdAmount::from_dollars(10), Asset::ETH).unwrap();
        assert_eq!(eth.to_string_with_symbol(), "0.004000 ETH");
    }

    #[test]
    fn converts_through_the_table() {
        let eth = PriceMap::fixed()
            .to_crypto(UsdAmount::from_dollars(10), Asset::ETH)
            .unwrap();
        assert_eq!(eth.to_string_with_symbol(), "0.005000 ETH");
    }
}
