//! Ledger engine error taxonomy.
//!
//! Each variant is one of the distinct error kinds the ledger engine can
//! surface; callers in the adapter switch on kind to choose a status code
//! rather than pattern-matching a message string.

use ledgerbank_shared::error::AppError;
use ledgerbank_shared::types::LedgerAccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// `CreateLedgerAccount` was called with a code that already exists.
    #[error("ledger account code already exists: {0}")]
    Conflict(String),

    /// A referenced account does not exist.
    #[error("ledger account not found: {0}")]
    NotFound(LedgerAccountId),

    /// A referenced account's active flag is false.
    #[error("ledger account {0} is inactive")]
    AccountInactive(LedgerAccountId),

    /// A referenced account's currency does not match the posting currency.
    #[error("ledger account {account_id} currency is {account_currency}, posting currency is {posting_currency}")]
    CurrencyMismatch {
        /// The account whose currency disagreed.
        account_id: LedgerAccountId,
        /// The account's own currency.
        account_currency: String,
        /// The currency the posting was made in.
        posting_currency: String,
    },

    /// A posting has fewer than two entries, or no debit/credit pair.
    #[error("a posting requires at least one debit and one credit entry")]
    InsufficientEntries,

    /// Sum of debits does not equal sum of credits.
    #[error("posting does not balance: debit={debit}, credit={credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// An entry's amount was zero or negative.
    #[error("entry amount must be strictly positive")]
    InvalidAmount,

    /// Underlying database error.
    #[error("database error: {0}")]
    Database(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Returns a stable SCREAMING_SNAKE error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InsufficientEntries => "INSUFFICIENT_ENTRIES",
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code the adapter should respond with.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Conflict(_) => 409,
            Self::NotFound(_) => 404,
            Self::AccountInactive(_)
            | Self::CurrencyMismatch { .. }
            | Self::InsufficientEntries
            | Self::Unbalanced { .. }
            | Self::InvalidAmount => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::from_domain(err.http_status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::Conflict("X".into()).error_code(), "CONFLICT");
        assert_eq!(
            LedgerError::NotFound(LedgerAccountId::new(1)).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            LedgerError::Unbalanced {
                debit: Decimal::new(100, 2),
                credit: Decimal::new(50, 2),
            }
            .error_code(),
            "UNBALANCED"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::Conflict("X".into()).http_status_code(), 409);
        assert_eq!(
            LedgerError::NotFound(LedgerAccountId::new(1)).http_status_code(),
            404
        );
        assert_eq!(LedgerError::InsufficientEntries.http_status_code(), 400);
        assert_eq!(
            LedgerError::Database("x".to_string()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Unbalanced {
            debit: Decimal::new(10000, 2),
            credit: Decimal::new(5000, 2),
        };
        assert_eq!(
            err.to_string(),
            "posting does not balance: debit=100.00, credit=50.00"
        );
    }
}
