//! Provides a fixed-point amount of a crypto asset, used to show the
//! asset-denominated equivalent of a dollar figure.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::asset::Asset;
use crate::usd_amount::UsdAmount;

/// Number of decimal digits shown for crypto equivalents.
pub const CRYPTO_DECIMALS: u32 = 6;

const MICRO_PER_UNIT: i128 = 10_i128.pow(CRYPTO_DECIMALS);

/// An amount of `asset`, stored in millionths of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CryptoAmount {
    micro_units: i64,
    asset: Asset,
}

impl CryptoAmount {
    pub fn new_from_micro(micro_units: i64, asset: Asset) -> Self {
        Self { micro_units, asset }
    }

    pub fn as_micro_units(&self) -> i64 {
        self.micro_units
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }

    /// Converts a dollar amount at `unit_price` dollars per unit of `asset`.
    ///
    /// Rounds half away from zero at the sixth decimal. Returns `None` for a
    /// non-positive price or if the result does not fit.
    ///
    /// # Example
    /// ```
    /// use api::asset::Asset;
    /// use api::crypto_amount::CryptoAmount;
    /// use api::usd_amount::UsdAmount;
    ///
    /// let amount = CryptoAmount::from_usd(
    ///     UsdAmount::from_cents(550),
    ///     UsdAmount::from_dollars(2000),
    ///     Asset::ETH,
    /// )
    /// .unwrap();
    /// assert_eq!(amount.to_string(), "0.002750");
    /// ```
    pub fn from_usd(usd: UsdAmount, unit_price: UsdAmount, asset: Asset) -> Option<Self> {
        let price = unit_price.as_cents() as i128;
        if price <= 0 {
            return None;
        }
        let numerator = usd.as_cents() as i128 * MICRO_PER_UNIT;
        let half = price / 2;
        let rounded = if numerator >= 0 {
            (numerator + half) / price
        } else {
            (numerator - half) / price
        };
        i64::try_from(rounded)
            .ok()
            .map(|micro_units| Self::new_from_micro(micro_units, asset))
    }

    /// Formats the amount with its ticker (e.g., "0.002750 ETH").
    pub fn to_string_with_symbol(&self) -> String {
        format!("{} {}", self, self.asset.symbol())
    }
}

impl fmt::Display for CryptoAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = MICRO_PER_UNIT as i64;
        let sign = if self.micro_units < 0 { "-" } else { "" };
        let whole = (self.micro_units / divisor).abs();
        let fraction = (self.micro_units % divisor).abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            whole,
            fraction,
            width = CRYPTO_DECIMALS as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_btc_fees_to_six_decimals() {
        let fee = CryptoAmount::from_usd(
            UsdAmount::from_cents(15),
            UsdAmount::from_dollars(40_000),
            Asset::BTC,
        )
        .unwrap();
        // 0.15 / 40000 = 0.00000375, rounds up at the sixth place
        assert_eq!(fee.as_micro_units(), 4);
        assert_eq!(fee.to_string_with_symbol(), "0.000004 BTC");
    }

    #[test]
    fn stablecoins_convert_one_to_one() {
        let amount = CryptoAmount::from_usd(
            UsdAmount::from_cents(1050),
            UsdAmount::from_dollars(1),
            Asset::USDC,
        )
        .unwrap();
        assert_eq!(amount.to_string(), "10.500000");
    }

    #[test]
    fn zero_price_has_no_equivalent() {
        assert_eq!(
            CryptoAmount::from_usd(UsdAmount::from_dollars(1), UsdAmount::ZERO, Asset::ETH),
            None
        );
    }
}
