//! Provides a safe, self-contained type for representing US dollar amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;

use serde::Deserialize;
use serde::Serialize;

/// Number of decimal digits used for dollar amounts (cents).
pub const USD_DECIMALS: u32 = 2;

/// Represents a monetary value in US dollars.
///
/// Internally, the amount is stored as a signed 64-bit integer in cents so
/// that fee sums stay exact. The default `Display` implementation formats
/// this as a plain numeric string with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct UsdAmount {
    cents: i64,
}

impl UsdAmount {
    pub const ZERO: Self = Self { cents: 0 };

    // --- Getters ---

    /// Returns the raw amount in cents.
    pub fn as_cents(&self) -> i64 {
        self.cents
    }

    // --- Constructors ---

    /// Creates a new `UsdAmount` directly from cents.
    ///
    /// # Example
    /// ```
    /// use api::usd_amount::UsdAmount;
    /// // 550 cents represents $5.50
    /// let amount = UsdAmount::from_cents(550);
    /// assert_eq!(amount.to_string(), "5.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new `UsdAmount` from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    // --- Display Methods ---

    /// Formats the amount with a dollar sign (e.g., "$5.50").
    pub fn to_string_with_symbol(&self) -> String {
        if self.cents < 0 {
            format!("-${}", Self::from_cents(-self.cents))
        } else {
            format!("${}", self)
        }
    }
}

/// Formats the amount as a numeric string with two decimals (e.g., "5.50").
impl fmt::Display for UsdAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_i64.pow(USD_DECIMALS);
        let sign = if self.cents < 0 { "-" } else { "" };
        let major_units = (self.cents / divisor).abs();
        let minor_units = (self.cents % divisor).abs();

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            major_units,
            minor_units,
            width = USD_DECIMALS as usize
        )
    }
}

impl Add for UsdAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cents: self.cents + rhs.cents,
        }
    }
}

impl AddAssign for UsdAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl Sum for UsdAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, amount| acc + amount)
    }
}
