//! Customer-facing account routes: opening, status transitions, balance,
//! and per-customer listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use ledgerbank_core::account::types::{AccountStatus, ProductType};
use ledgerbank_db::entities::accounts;
use ledgerbank_shared::types::{AccountId, CurrencyCode, CustomerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(open_account))
        .route("/accounts/{id}", get(get_account))
        .route("/accounts/{id}/status", patch(change_status))
        .route("/accounts/{id}/balance", get(get_balance))
        .route("/customers/{id}/accounts", get(get_customer_accounts))
}

/// Request body for `POST /accounts`.
#[derive(Debug, Deserialize)]
pub struct OpenAccountRequest {
    /// The customer to open the account for.
    pub customer_id: i64,
    /// Product type: `CHECKING`, `SAVINGS`, `CREDIT`, or `PREPAID`.
    pub product_type: ProductType,
    /// Account currency.
    pub currency: CurrencyCode,
}

/// Request body for `PATCH /accounts/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    /// Target status.
    pub status: AccountStatus,
    /// Reason for the change, mandatory and retained on the audit log.
    pub reason: String,
}

/// Response body for an account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Internal id.
    pub id: i64,
    /// Stable external id.
    pub external_id: Uuid,
    /// Owning customer's internal id.
    pub customer_id: i64,
    /// Paired chart-of-accounts entry.
    pub ledger_account_id: i64,
    /// Product type.
    pub product_type: String,
    /// Account currency.
    pub currency: String,
    /// Lifecycle status.
    pub status: String,
    /// When the account first became ACTIVE.
    pub opened_at: Option<DateTime<Utc>>,
    /// When the account became CLOSED.
    pub closed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<accounts::Model> for AccountResponse {
    fn from(model: accounts::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            customer_id: model.customer_id,
            ledger_account_id: model.ledger_account_id,
            product_type: format!("{:?}", model.product_type).to_uppercase(),
            currency: model.currency,
            status: format!("{:?}", model.status).to_uppercase(),
            opened_at: model.opened_at.map(|t| t.with_timezone(&Utc)),
            closed_at: model.closed_at.map(|t| t.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Balance response shape shared by the account and ledger balance routes.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Current balance, derived from the ledger entry log.
    pub balance: Decimal,
}

/// POST `/accounts` - open a customer-facing account.
async fn open_account(
    State(state): State<AppState>,
    Json(payload): Json<OpenAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .accounts
        .open_account(CustomerId::new(payload.customer_id), payload.product_type, payload.currency)
        .await?;
    info!(account_id = account.id, "account opened");
    Ok((StatusCode::CREATED, Json(account.into())))
}

/// GET `/accounts/{id}` - fetch an account.
async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.accounts.get_account(AccountId::new(id)).await?;
    Ok(Json(account.into()))
}

/// PATCH `/accounts/{id}/status` - apply a lifecycle transition.
async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ChangeStatusRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .accounts
        .change_status(AccountId::new(id), payload.status, &payload.reason)
        .await?;
    info!(account_id = account.id, status = ?payload.status, "account status changed");
    Ok(Json(account.into()))
}

/// GET `/accounts/{id}/balance` - current balance via the paired ledger account.
async fn get_balance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.accounts.get_balance(AccountId::new(id)).await?;
    Ok(Json(BalanceResponse { balance }))
}

/// GET `/customers/{id}/accounts` - list a customer's accounts.
async fn get_customer_accounts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.accounts.get_customer_accounts(CustomerId::new(id)).await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_account_request_deserializes_uppercase_enums() {
        let body = r#"{"customer_id":1,"product_type":"CHECKING","currency":"USD"}"#;
        let req: OpenAccountRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.product_type, ProductType::Checking);
        assert_eq!(req.currency, CurrencyCode::USD);
    }

    #[test]
    fn change_status_request_rejects_unknown_status() {
        let body = r#"{"status":"DORMANT","reason":"test"}"#;
        assert!(serde_json::from_str::<ChangeStatusRequest>(body).is_err());
    }
}
