//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision, which
//! backs `NUMERIC(19, 4)` columns exactly: 4 fractional digits, up to 19
//! total digits, no silent rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The exact decimal amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

/// A 3-letter ISO 4217 currency code, stored uppercase.
///
/// The ledger never converts between currencies — it only ever checks
/// equality between the currency on an entry and the currency on the
/// account it targets. Any 3-letter alphabetic code is accepted; there is
/// no fixed enumeration to keep in sync with ISO 4217.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

/// Error returned when a string is not a valid 3-letter currency code.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid currency code: {0:?}")]
pub struct InvalidCurrencyCode(String);

impl CurrencyCode {
    /// US Dollar, used as the default currency when none is specified.
    pub const USD: Self = Self([b'U', b'S', b'D']);

    /// Validates and builds a currency code from a string slice.
    ///
    /// # Errors
    ///
    /// Returns an error unless `s` is exactly 3 ASCII alphabetic characters.
    pub fn parse(s: &str) -> Result<Self, InvalidCurrencyCode> {
        let upper = s.to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() == 3 && bytes.iter().all(u8::is_ascii_alphabetic) {
            Ok(Self([bytes[0], bytes[1], bytes[2]]))
        } else {
            Err(InvalidCurrencyCode(s.to_string()))
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("currency code is always valid ASCII")
    }
}

impl Default for CurrencyCode {
    /// Defaults to USD, used when a request omits a currency field.
    fn default() -> Self {
        Self::USD
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }
}
