//! Offline, syntactic validation of recipient addresses.
//!
//! Each asset carries an [`AddressRuleSet`]. Validation never short-circuits
//! after the empty check: every violated rule is reported, in a fixed order,
//! so a single bad address can produce several errors at once.

use regex::Regex;
use thiserror::Error;

/// A single reason why an address was rejected.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Please enter a recipient address")]
    Empty,
    #[error("Address must start with {0}")]
    MissingPrefix(&'static str),
    #[error("Address must be exactly {0} characters")]
    WrongLength(usize),
    #[error("Address must be at least {0} characters")]
    TooShort(usize),
    #[error("Address must be no more than {0} characters")]
    TooLong(usize),
    #[error("Invalid address format")]
    InvalidFormat,
}

/// Validation contract for an asset's recipient address.
///
/// The format pattern is always applied; the other rules only when set.
#[derive(Debug, Clone)]
pub struct AddressRuleSet {
    prefix: Option<&'static str>,
    length: Option<usize>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Regex,
}

impl AddressRuleSet {
    /// Creates a rule set that only checks the format pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            prefix: None,
            length: None,
            min_length: None,
            max_length: None,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_length_range(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn prefix(&self) -> Option<&'static str> {
        self.prefix
    }

    pub fn length(&self) -> Option<usize> {
        self.length
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns every rule the address violates, in evaluation order.
    ///
    /// An empty (or whitespace-only) address yields only [`AddressError::Empty`].
    /// Length is counted in characters.
    pub fn validate(&self, address: &str) -> Vec<AddressError> {
        if address.trim().is_empty() {
            return vec![AddressError::Empty];
        }

        let mut errors = Vec::new();
        let char_count = address.chars().count();

        if let Some(prefix) = self.prefix {
            if !address.starts_with(prefix) {
                errors.push(AddressError::MissingPrefix(prefix));
            }
        }

        if let Some(length) = self.length {
            if char_count != length {
                errors.push(AddressError::WrongLength(length));
            }
        }

        if let Some(min) = self.min_length {
            if char_count < min {
                errors.push(AddressError::TooShort(min));
            }
        }

        if let Some(max) = self.max_length {
            if char_count > max {
                errors.push(AddressError::TooLong(max));
            }
        }

        if !self.pattern.is_match(address) {
            errors.push(AddressError::InvalidFormat);
        }

        errors
    }
}

/// Shortens an address for display and logs, e.g. `0x742d…f44e`.
pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evm_rules() -> AddressRuleSet {
        AddressRuleSet::new(r"^0x[a-fA-F0-9]{40}$")
            .unwrap()
            .with_prefix("0x")
            .with_length(42)
    }

    fn btc_rules() -> AddressRuleSet {
        AddressRuleSet::new(r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$")
            .unwrap()
            .with_length_range(26, 35)
    }

    #[test]
    fn valid_evm_address_has_no_errors() {
        let errors = evm_rules().validate("0x742d35Cc6634C0532925a3b844Bc454e4438f44e");
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn empty_and_blank_input_short_circuit() {
        assert_eq!(evm_rules().validate(""), vec![AddressError::Empty]);
        assert_eq!(btc_rules().validate("   \t"), vec![AddressError::Empty]);
    }

    #[test]
    fn reports_every_violated_rule_in_order() {
        let errors = evm_rules().validate("1abc");
        assert_eq!(
            errors,
            vec![
                AddressError::MissingPrefix("0x"),
                AddressError::WrongLength(42),
                AddressError::InvalidFormat,
            ]
        );
    }

    #[test]
    fn wrong_length_is_reported_even_when_prefix_matches() {
        let errors = evm_rules().validate("0x742d35Cc6634C0532925a3b844Bc454e4438f44");
        assert_eq!(
            errors,
            vec![AddressError::WrongLength(42), AddressError::InvalidFormat]
        );
    }

    #[test]
    fn btc_rules_use_range_not_prefix() {
        let errors = btc_rules().validate("0xabc");
        assert_eq!(
            errors,
            vec![AddressError::TooShort(26), AddressError::InvalidFormat]
        );

        let too_long = format!("1{}", "A".repeat(40));
        assert_eq!(
            btc_rules().validate(&too_long),
            vec![AddressError::TooLong(35), AddressError::InvalidFormat]
        );
    }

    #[test]
    fn format_error_is_always_present_for_pattern_failures() {
        let rules = evm_rules();
        for candidate in ["0xZZ", "xx742d35Cc6634C0532925a3b844Bc454e4438f44e", "0x!"] {
            let errors = rules.validate(candidate);
            assert_eq!(errors.last(), Some(&AddressError::InvalidFormat), "{candidate}");
        }
    }

    #[test]
    fn messages_name_the_violated_limit() {
        assert_eq!(
            AddressError::MissingPrefix("0x").to_string(),
            "Address must start with 0x"
        );
        assert_eq!(
            AddressError::WrongLength(42).to_string(),
            "Address must be exactly 42 characters"
        );
        assert_eq!(
            AddressError::TooShort(26).to_string(),
            "Address must be at least 26 characters"
        );
        assert_eq!(
            AddressError::TooLong(35).to_string(),
            "Address must be no more than 35 characters"
        );
    }

    #[test]
    fn abbreviates_long_addresses_only() {
        assert_eq!(
            abbreviate_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
            "0x742d…f44e"
        );
        assert_eq!(abbreviate_address("0xabc"), "0xabc");
    }
}
