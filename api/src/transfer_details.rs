//! The fee breakdown for a test transfer and the record that carries it
//! through the rest of the wizard.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::asset::Asset;
use crate::chain::Chain;
use crate::crypto_amount::CryptoAmount;
use crate::price_map::PriceMap;
use crate::route::RouteSelection;
use crate::usd_amount::UsdAmount;

/// The fixed set of dollar amounts a test transfer may use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
pub enum TestAmount {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "5")]
    Five,
    #[strum(serialize = "10")]
    Ten,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("Please select an amount")]
    NotSelected,
}

impl TestAmount {
    /// The chosen amount, or the error shown while none is picked.
    pub fn required(selected: Option<Self>) -> Result<Self, AmountError> {
        selected.ok_or(AmountError::NotSelected)
    }

    pub fn usd(&self) -> UsdAmount {
        UsdAmount::from_dollars(match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
            Self::Ten => 10,
        })
    }
}

/// Dollar figures of a transfer converted into the transferred asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoBreakdown {
    pub test_amount: CryptoAmount,
    pub send_gas_fee: CryptoAmount,
    pub return_gas_fee: CryptoAmount,
    pub total_charge: CryptoAmount,
}

/// Immutable record produced by the test transfer step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDetails {
    test_amount: TestAmount,
    send_gas_fee: UsdAmount,
    return_gas_fee: UsdAmount,
    total_charge: UsdAmount,
    route: RouteSelection,
    transaction_ref: Option<String>,
}

impl TransferDetails {
    /// Computes fees and total for `amount` on `route`.
    ///
    /// Pure: the same inputs always give an identical result, without a
    /// transaction reference.
    ///
    /// # Example
    /// ```
    /// use api::asset::Asset;
    /// use api::chain::Chain;
    /// use api::route::RouteSelection;
    /// use api::transfer_details::{TestAmount, TransferDetails};
    ///
    /// let route = RouteSelection::new(
    ///     Asset::ETH,
    ///     Chain::Ethereum,
    ///     "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
    /// )
    /// .unwrap();
    /// let details = TransferDetails::calculate(TestAmount::Five, &route);
    /// assert_eq!(details.total_charge().to_string_with_symbol(), "$5.50");
    /// ```
    pub fn calculate(amount: TestAmount, route: &RouteSelection) -> Self {
        let fees = route.chain().gas_fees();
        Self {
            test_amount: amount,
            send_gas_fee: fees.send,
            return_gas_fee: fees.return_trip,
            total_charge: [amount.usd(), fees.send, fees.return_trip].into_iter().sum(),
            route: route.clone(),
            transaction_ref: None,
        }
    }

    /// Returns a copy carrying the reference of the submitted transaction.
    pub fn with_transaction_ref(mut self, transaction_ref: impl Into<String>) -> Self {
        self.transaction_ref = Some(transaction_ref.into());
        self
    }

    pub fn test_amount(&self) -> TestAmount {
        self.test_amount
    }

    pub fn send_gas_fee(&self) -> UsdAmount {
        self.send_gas_fee
    }

    pub fn return_gas_fee(&self) -> UsdAmount {
        self.return_gas_fee
    }

    pub fn total_charge(&self) -> UsdAmount {
        self.total_charge
    }

    pub fn route(&self) -> &RouteSelection {
        &self.route
    }

    pub fn asset(&self) -> Asset {
        self.route.asset()
    }

    pub fn chain(&self) -> Chain {
        self.route.chain()
    }

    pub fn recipient_address(&self) -> &str {
        self.route.address()
    }

    pub fn transaction_ref(&self) -> Option<&str> {
        self.transaction_ref.as_deref()
    }

    /// Converts every figure into the route's asset. `None` if the asset
    /// has no price.
    pub fn in_crypto(&self, prices: &PriceMap) -> Option<CryptoBreakdown> {
        let asset = self.asset();
        Some(CryptoBreakdown {
            test_amount: prices.to_crypto(self.test_amount.usd(), asset)?,
            send_gas_fee: prices.to_crypto(self.send_gas_fee, asset)?,
            return_gas_fee: prices.to_crypto(self.return_gas_fee, asset)?,
            total_charge: prices.to_crypto(self.total_charge, asset)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn eth_route() -> RouteSelection {
        RouteSelection::new(
            Asset::ETH,
            Chain::Ethereum,
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
        )
        .unwrap()
    }

    #[test]
    fn five_dollars_on_ethereum_totals_five_fifty() {
        let details = TransferDetails::calculate(TestAmount::Five, &eth_route());
        assert_eq!(details.send_gas_fee(), UsdAmount::from_cents(25));
        assert_eq!(details.return_gas_fee(), UsdAmount::from_cents(25));
        assert_eq!(details.total_charge(), UsdAmount::from_cents(550));
    }

    #[test]
    fn an_amount_must_be_chosen() {
        assert_eq!(TestAmount::required(None), Err(AmountError::NotSelected));
        assert_eq!(AmountError::NotSelected.to_string(), "Please select an amount");
        assert_eq!(TestAmount::required(Some(TestAmount::Two)), Ok(TestAmount::Two));
    }

    #[test]
    fn calculation_is_repeatable() {
        let route = eth_route();
        for amount in TestAmount::iter() {
            assert_eq!(
                TransferDetails::calculate(amount, &route),
                TransferDetails::calculate(amount, &route)
            );
        }
    }

    #[test]
    fn polygon_usdc_uses_polygon_gas() {
        let route = RouteSelection::new(
            Asset::USDC,
            Chain::Polygon,
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
        )
        .unwrap();
        let details = TransferDetails::calculate(TestAmount::One, &route);
        assert_eq!(details.total_charge().to_string_with_symbol(), "$1.10");

        let crypto = details.in_crypto(&PriceMap::fixed()).unwrap();
        assert_eq!(crypto.total_charge.to_string_with_symbol(), "1.100000 USDC");
    }

    #[test]
    fn transaction_ref_is_only_set_explicitly() {
        let details = TransferDetails::calculate(TestAmount::Two, &eth_route());
        assert_eq!(details.transaction_ref(), None);
        let sent = details.clone().with_transaction_ref("0xfeed");
        assert_eq!(sent.transaction_ref(), Some("0xfeed"));
        assert_eq!(sent.total_charge(), details.total_charge());
    }

    #[test]
    fn eth_breakdown_uses_six_decimals() {
        let details = TransferDetails::calculate(TestAmount::Five, &eth_route());
        let crypto = details.in_crypto(&PriceMap::fixed()).unwrap();
        assert_eq!(crypto.test_amount.to_string(), "0.002500");
        assert_eq!(crypto.send_gas_fee.to_string(), "0.000125");
        assert_eq!(crypto.total_charge.to_string(), "0.002750");
    }

    #[test]
    fn amounts_parse_from_their_dollar_value() {
        use std::str::FromStr;
        assert_eq!(TestAmount::from_str("10").unwrap(), TestAmount::Ten);
        assert_eq!(TestAmount::Five.to_string(), "5");
    }
}
