//! Transaction orchestrator error taxonomy.

use ledgerbank_shared::error::AppError;
use ledgerbank_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during transaction orchestration.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Referenced account does not exist.
    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    /// Referenced account is not ACTIVE.
    #[error("account {0} is not active")]
    AccountInactive(AccountId),

    /// Referenced transaction does not exist.
    #[error("transaction not found: {0}")]
    NotFound(TransactionId),

    /// Withdrawal or transfer requested more than the source account holds.
    #[error("insufficient funds: available={available}, requested={requested}")]
    InsufficientFunds {
        /// Current available balance.
        available: Decimal,
        /// Requested amount.
        requested: Decimal,
    },

    /// A transfer named the same account as both source and destination.
    #[error("source and destination accounts must differ")]
    SameAccount,

    /// A reversal was requested against a transaction not in COMPLETED status.
    #[error("transaction {0} is not reversible")]
    NotReversible(TransactionId),

    /// The ledger engine rejected the posting for a client-fixable reason
    /// (currency mismatch, unbalanced entries, an inactive or missing
    /// account on the posting side).
    #[error("posting rejected: {0}")]
    PostingRejected(String),

    /// Underlying database error.
    #[error("database error: {0}")]
    Database(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TransactionError {
    /// Returns a stable SCREAMING_SNAKE error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) | Self::NotFound(_) => "NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::SameAccount => "SAME_ACCOUNT",
            Self::NotReversible(_) => "NOT_REVERSIBLE",
            Self::PostingRejected(_) => "POSTING_REJECTED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code the adapter should respond with.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::AccountNotFound(_) | Self::NotFound(_) => 404,
            Self::AccountInactive(_)
            | Self::InsufficientFunds { .. }
            | Self::SameAccount
            | Self::NotReversible(_)
            | Self::PostingRejected(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        Self::from_domain(err.http_status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransactionError::NotFound(TransactionId::new(1)).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(TransactionError::SameAccount.error_code(), "SAME_ACCOUNT");
        assert_eq!(
            TransactionError::NotReversible(TransactionId::new(1)).error_code(),
            "NOT_REVERSIBLE"
        );
        assert_eq!(
            TransactionError::PostingRejected("x".into()).error_code(),
            "POSTING_REJECTED"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            TransactionError::InsufficientFunds {
                available: dec!(10),
                requested: dec!(50),
            }
            .http_status_code(),
            400
        );
        assert_eq!(
            TransactionError::AccountNotFound(AccountId::new(1)).http_status_code(),
            404
        );
        assert_eq!(TransactionError::Internal("x".into()).http_status_code(), 500);
        assert_eq!(
            TransactionError::PostingRejected("x".into()).http_status_code(),
            400
        );
    }
}
