//! E-mail address checks and the six-slot verification code.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Number of digits in a verification code.
pub const OTP_LENGTH: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Invalid,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Please enter the complete verification code")]
    Incomplete,
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

/// How a slot reacted to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpInput {
    /// More than one character, a non-digit, or a slot out of range.
    Ignored,
    Cleared,
    /// `next_focus` is the slot that should receive focus, if any.
    Filled { next_focus: Option<usize> },
}

/// A partially entered verification code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OtpCode {
    slots: [Option<u8>; OTP_LENGTH],
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the raw value of slot `index`.
    pub fn enter(&mut self, index: usize, value: &str) -> OtpInput {
        if index >= OTP_LENGTH {
            return OtpInput::Ignored;
        }
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.slots[index] = None;
                OtpInput::Cleared
            }
            (Some(c), None) => match c.to_digit(10) {
                Some(digit) => {
                    self.slots[index] = Some(digit as u8);
                    OtpInput::Filled {
                        next_focus: (index + 1 < OTP_LENGTH).then_some(index + 1),
                    }
                }
                None => OtpInput::Ignored,
            },
            _ => OtpInput::Ignored,
        }
    }

    pub fn slot(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The entered digits as a string, once every slot is filled.
    pub fn code(&self) -> Result<String, OtpError> {
        self.slots
            .iter()
            .map(|slot| slot.map(|d| char::from(b'0' + d)))
            .collect::<Option<String>>()
            .ok_or(OtpError::Incomplete)
    }
}
