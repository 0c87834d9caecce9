//! Deposit, withdrawal, transfer, and reversal routes — the orchestrator's
//! HTTP surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use ledgerbank_core::workflow::{DepositInput, ReversalInput, TransferInput, WithdrawalInput};
use ledgerbank_db::entities::transactions;
use ledgerbank_shared::types::{AccountId, CurrencyCode, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions/deposit", post(deposit))
        .route("/transactions/withdraw", post(withdraw))
        .route("/transactions/transfer", post(transfer))
        .route("/transactions/{id}/reverse", post(reverse))
        .route("/transactions/{id}", get(get_transaction))
}

/// Request body for `POST /transactions/deposit`.
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub idempotency_key: String,
    pub account_id: i64,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub description: String,
}

/// Request body for `POST /transactions/withdraw`.
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub idempotency_key: String,
    pub account_id: i64,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub description: String,
}

/// Request body for `POST /transactions/transfer`.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub idempotency_key: String,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: Decimal,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub description: String,
}

/// Request body for `POST /transactions/{id}/reverse`.
#[derive(Debug, Deserialize)]
pub struct ReverseRequest {
    pub idempotency_key: String,
}

/// Response body for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub external_id: Uuid,
    pub idempotency_key: String,
    pub transaction_type: String,
    pub status: String,
    pub source_account_id: Option<i64>,
    pub destination_account_id: Option<i64>,
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub reference_transaction_id: Option<i64>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            idempotency_key: model.idempotency_key,
            transaction_type: format!("{:?}", model.transaction_type).to_uppercase(),
            status: format!("{:?}", model.status).to_uppercase(),
            source_account_id: model.source_account_id,
            destination_account_id: model.destination_account_id,
            amount: model.amount,
            currency: model.currency,
            description: model.description,
            reference_transaction_id: model.reference_transaction_id,
            error_message: model.error_message,
            created_at: model.created_at.with_timezone(&Utc),
            completed_at: model.completed_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// POST `/transactions/deposit`.
async fn deposit(
    State(state): State<AppState>,
    Json(payload): Json<DepositRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let txn = state
        .transactions
        .deposit(DepositInput {
            idempotency_key: payload.idempotency_key,
            account_id: AccountId::new(payload.account_id),
            amount: payload.amount,
            currency: payload.currency,
            description: payload.description,
        })
        .await?;
    info!(transaction_id = txn.id, "deposit posted");
    Ok((StatusCode::CREATED, Json(txn.into())))
}

/// POST `/transactions/withdraw`.
async fn withdraw(
    State(state): State<AppState>,
    Json(payload): Json<WithdrawRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let txn = state
        .transactions
        .withdraw(WithdrawalInput {
            idempotency_key: payload.idempotency_key,
            account_id: AccountId::new(payload.account_id),
            amount: payload.amount,
            currency: payload.currency,
            description: payload.description,
        })
        .await?;
    info!(transaction_id = txn.id, "withdrawal posted");
    Ok((StatusCode::CREATED, Json(txn.into())))
}

/// POST `/transactions/transfer`.
async fn transfer(
    State(state): State<AppState>,
    Json(payload): Json<TransferRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let txn = state
        .transactions
        .transfer(TransferInput {
            idempotency_key: payload.idempotency_key,
            source_account_id: AccountId::new(payload.source_account_id),
            destination_account_id: AccountId::new(payload.destination_account_id),
            amount: payload.amount,
            currency: payload.currency,
            description: payload.description,
        })
        .await?;
    info!(transaction_id = txn.id, "transfer posted");
    Ok((StatusCode::CREATED, Json(txn.into())))
}

/// POST `/transactions/{id}/reverse`.
async fn reverse(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReverseRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let txn = state
        .transactions
        .reverse(ReversalInput {
            idempotency_key: payload.idempotency_key,
            original_transaction_id: TransactionId::new(id),
        })
        .await?;
    info!(transaction_id = txn.id, "reversal posted");
    Ok((StatusCode::CREATED, Json(txn.into())))
}

/// GET `/transactions/{id}`.
async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let txn = state.transactions.get_transaction(TransactionId::new(id)).await?;
    Ok(Json(txn.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_request_defaults_description_to_empty() {
        let body = r#"{"idempotency_key":"k1","account_id":1,"amount":"10.00","currency":"USD"}"#;
        let req: DepositRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.description, "");
        assert_eq!(req.amount, Decimal::new(1000, 2));
    }

    #[test]
    fn transfer_request_requires_both_accounts() {
        let body = r#"{"idempotency_key":"k1","source_account_id":1,"amount":"10.00","currency":"USD"}"#;
        assert!(serde_json::from_str::<TransferRequest>(body).is_err());
    }
}
