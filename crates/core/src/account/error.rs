//! Account manager error taxonomy.

use ledgerbank_shared::error::AppError;
use ledgerbank_shared::types::{AccountId, CustomerId};
use thiserror::Error;

use super::types::AccountStatus;

/// Errors that can occur during account-manager operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Referenced customer does not exist.
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Referenced customer is not active.
    #[error("customer {0} is not active")]
    CustomerInactive(CustomerId),

    /// `CreateCustomer` was called with an email already on file.
    #[error("customer email already registered: {0}")]
    DuplicateEmail(String),

    /// Referenced account does not exist.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Requested status transition is not in the state table.
    #[error("cannot transition account from {from:?} to {to:?}")]
    IllegalTransition {
        /// Current status.
        from: AccountStatus,
        /// Requested status.
        to: AccountStatus,
    },

    /// `ChangeStatus` was called without a reason.
    #[error("a reason is required to change account status")]
    MissingReason,

    /// Underlying database error.
    #[error("database error: {0}")]
    Database(String),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Returns a stable SCREAMING_SNAKE error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CustomerNotFound(_) | Self::NotFound(_) => "NOT_FOUND",
            Self::CustomerInactive(_) => "ACCOUNT_INACTIVE",
            Self::DuplicateEmail(_) => "CONFLICT",
            Self::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            Self::MissingReason => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status code the adapter should respond with.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::CustomerNotFound(_) | Self::NotFound(_) => 404,
            Self::DuplicateEmail(_) => 409,
            Self::CustomerInactive(_) | Self::IllegalTransition { .. } | Self::MissingReason => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        Self::from_domain(err.http_status_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AccountError::NotFound(AccountId::new(1)).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AccountError::DuplicateEmail("a@b.com".into()).error_code(),
            "CONFLICT"
        );
        assert_eq!(
            AccountError::IllegalTransition {
                from: AccountStatus::Closed,
                to: AccountStatus::Active,
            }
            .error_code(),
            "ILLEGAL_TRANSITION"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(
            AccountError::CustomerNotFound(CustomerId::new(1)).http_status_code(),
            404
        );
        assert_eq!(
            AccountError::DuplicateEmail("a@b.com".into()).http_status_code(),
            409
        );
        assert_eq!(AccountError::MissingReason.http_status_code(), 400);
        assert_eq!(AccountError::Database("x".into()).http_status_code(), 500);
    }
}
