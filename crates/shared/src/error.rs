//! Application-wide error types.
//!
//! This is the *adapter*-level error: it exists to unify the domain error
//! taxonomies (`LedgerError`, `AccountError`, `TransactionError` in the
//! `ledgerbank-core` crate) into a single type the HTTP layer can convert
//! to a response with `?`. It is not a replacement for the domain
//! taxonomies — each of those still carries its own structured variants
//! and is mapped into one of the cases below at the boundary.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types, one per HTTP status family the adapter returns.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (duplicate email, code, idempotency key).
    #[error("{0}")]
    Conflict(String),

    /// Client-fixable validation or business-rule failure.
    #[error("{0}")]
    Validation(String),

    /// Database error.
    #[error("{0}")]
    Database(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Human-readable detail string for the `{ "detail": ... }` error body.
    #[must_use]
    pub fn detail(&self) -> String {
        self.to_string()
    }

    /// Buckets a domain error's own `http_status_code()` into one of the
    /// cases above, carrying its message through unchanged. Domain 500s
    /// land in `Internal`, reserving `Database` for a `DbErr` bubbling up
    /// directly at the boundary.
    #[must_use]
    pub fn from_domain(http_status: u16, message: String) -> Self {
        match http_status {
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            400 => Self::Validation(message),
            _ => Self::Internal(message),
        }
    }
}
