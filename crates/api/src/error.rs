//! Adapter-level error: unifies the domain error taxonomies into one
//! `IntoResponse` implementation so handlers can use `?` against a single
//! type. Error bodies are `{ "error": "<CODE>", "detail": "<message>" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ledgerbank_core::account::AccountError;
use ledgerbank_core::ledger::LedgerError;
use ledgerbank_core::workflow::TransactionError;
use ledgerbank_shared::error::AppError;
use serde_json::json;

/// Wraps [`AppError`] to implement [`IntoResponse`] at this crate's boundary.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<TransactionError> for ApiError {
    fn from(err: TransactionError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "internal error");
        }
        (status, Json(json!({ "error": self.0.error_code(), "detail": self.0.detail() }))).into_response()
    }
}
