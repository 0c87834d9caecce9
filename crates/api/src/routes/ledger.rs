//! Chart-of-accounts and entry-log routes: the low-level ledger surface
//! beneath the transaction orchestrator, used for bank-internal accounts
//! and operational reporting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use ledgerbank_core::ledger::types::{AccountCategory, IntegrityReport, LedgerEntry, PostEntriesInput, PostEntryInput};
use ledgerbank_shared::types::{CurrencyCode, LedgerAccountId, LedgerTxnId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ledger/accounts", post(create_ledger_account))
        .route("/ledger/entries", post(post_entries))
        .route("/ledger/accounts/{id}/balance", get(get_account_balance))
        .route("/ledger/accounts/{id}/entries", get(get_account_entries))
        .route("/ledger/integrity", get(check_integrity))
}

/// Request body for `POST /ledger/accounts`.
#[derive(Debug, Deserialize)]
pub struct CreateLedgerAccountRequest {
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

/// Response body for a chart-of-accounts entry.
#[derive(Debug, Serialize)]
pub struct LedgerAccountResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub currency: String,
    pub is_active: bool,
}

/// Request body for one entry in `POST /ledger/entries`.
#[derive(Debug, Deserialize)]
pub struct PostEntryRequest {
    pub account_id: i64,
    pub direction: ledgerbank_core::ledger::types::EntryDirection,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

/// Request body for `POST /ledger/entries`.
#[derive(Debug, Deserialize)]
pub struct PostEntriesRequest {
    /// Client-supplied id for this posting. Reusing one returns the
    /// original entries unchanged.
    pub txn_id: Uuid,
    pub currency: CurrencyCode,
    pub entries: Vec<PostEntryRequest>,
}

/// Response body for a posted ledger entry.
#[derive(Debug, Serialize)]
pub struct LedgerEntryResponse {
    pub id: i64,
    pub transaction_id: Uuid,
    pub account_id: i64,
    pub direction: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntry> for LedgerEntryResponse {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            transaction_id: entry.transaction_id.into_inner(),
            account_id: entry.account_id.into_inner(),
            direction: format!("{:?}", entry.direction).to_uppercase(),
            amount: entry.amount,
            currency: entry.currency.as_str().to_string(),
            description: entry.description,
            created_at: entry.created_at,
        }
    }
}

/// Response body for `GET /ledger/accounts/{id}/balance`.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
}

/// Response body for `GET /ledger/integrity`.
#[derive(Debug, Serialize)]
pub struct IntegrityResponse {
    pub total_debits: Decimal,
    pub total_credits: Decimal,
    pub difference: Decimal,
    pub is_balanced: bool,
}

impl From<IntegrityReport> for IntegrityResponse {
    fn from(report: IntegrityReport) -> Self {
        Self {
            total_debits: report.total_debits,
            total_credits: report.total_credits,
            difference: report.difference,
            is_balanced: report.is_balanced,
        }
    }
}

/// POST `/ledger/accounts` - add a chart-of-accounts entry.
async fn create_ledger_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateLedgerAccountRequest>,
) -> Result<(StatusCode, Json<LedgerAccountResponse>), ApiError> {
    let account = state
        .ledger
        .create_ledger_account(&payload.code, &payload.name, payload.category, payload.currency, payload.is_active)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(LedgerAccountResponse {
            id: account.id,
            code: account.code,
            name: account.name,
            category: format!("{:?}", account.category).to_uppercase(),
            currency: account.currency,
            is_active: account.is_active,
        }),
    ))
}

/// POST `/ledger/entries` - post a balanced group of entries.
async fn post_entries(
    State(state): State<AppState>,
    Json(payload): Json<PostEntriesRequest>,
) -> Result<(StatusCode, Json<Vec<LedgerEntryResponse>>), ApiError> {
    let entries = payload
        .entries
        .into_iter()
        .map(|e| PostEntryInput {
            account_id: LedgerAccountId::new(e.account_id),
            direction: e.direction,
            amount: e.amount,
            description: e.description,
        })
        .collect();
    let posted = state
        .ledger
        .post_entries(PostEntriesInput {
            txn_id: LedgerTxnId::from_uuid(payload.txn_id),
            currency: payload.currency,
            entries,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(posted.into_iter().map(LedgerEntryResponse::from).collect()),
    ))
}

/// GET `/ledger/accounts/{id}/balance`.
async fn get_account_balance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.ledger.get_balance(LedgerAccountId::new(id)).await?;
    Ok(Json(BalanceResponse { balance }))
}

/// GET `/ledger/accounts/{id}/entries`.
async fn get_account_entries(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<LedgerEntryResponse>>, ApiError> {
    let entries = state.ledger.get_entries_by_account(LedgerAccountId::new(id)).await?;
    Ok(Json(entries.into_iter().map(LedgerEntryResponse::from).collect()))
}

/// GET `/ledger/integrity` - global debit/credit balance check.
async fn check_integrity(State(state): State<AppState>) -> Result<Json<IntegrityResponse>, ApiError> {
    let report = state.ledger.check_integrity().await?;
    Ok(Json(report.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbank_core::ledger::types::EntryDirection;

    #[test]
    fn create_ledger_account_request_defaults_is_active_true() {
        let body = r#"{"code":"BANK-CASH-USD","name":"Cash","category":"ASSET","currency":"USD"}"#;
        let req: CreateLedgerAccountRequest = serde_json::from_str(body).unwrap();
        assert!(req.is_active);
        assert_eq!(req.category, AccountCategory::Asset);
    }

    #[test]
    fn post_entry_request_parses_direction() {
        let body = r#"{"account_id":1,"direction":"DEBIT","amount":"5.00"}"#;
        let req: PostEntryRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.direction, EntryDirection::Debit);
    }

    #[test]
    fn integrity_response_carries_balance_flag() {
        let report = IntegrityReport::new(Decimal::new(100_00, 2), Decimal::new(100_00, 2));
        let response: IntegrityResponse = report.into();
        assert!(response.is_balanced);
    }
}
