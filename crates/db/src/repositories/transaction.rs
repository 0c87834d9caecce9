//! Transaction repository: the orchestrator for deposit, withdrawal,
//! transfer, and reversal.
//!
//! Every operation opens one SERIALIZABLE database transaction spanning the
//! idempotency probe, the PROCESSING row, the ledger posting, and the final
//! status update plus audit write — so a concurrent retry of the same
//! idempotency key either waits behind this one or aborts with a
//! serialization failure the caller retries, never observing a half-applied
//! posting.

use chrono::Utc;
use ledgerbank_core::ledger::error::LedgerError;
use ledgerbank_core::ledger::types::PostEntriesInput;
use ledgerbank_core::ledger::AccountCategory;
use ledgerbank_core::workflow::error::TransactionError;
use ledgerbank_core::workflow::service as core_service;
use ledgerbank_core::workflow::{
    DepositInput, ReversalInput, TransactionType as CoreTransactionType, TransferInput, WithdrawalInput,
};
use ledgerbank_shared::types::{AccountId, CurrencyCode, LedgerAccountId, LedgerTxnId, TransactionId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IsolationLevel, QueryFilter, Set, TransactionTrait,
};
use serde_json::json;

use super::audit;
use super::conv;
use super::ledger;
use crate::entities::{accounts, transactions};

fn db_err(err: sea_orm::DbErr) -> TransactionError {
    TransactionError::Database(err.to_string())
}

/// Maps a posting rejection from the ledger engine onto the orchestrator's
/// own error taxonomy, preserving whether it was client-fixable rather than
/// collapsing every posting failure to [`TransactionError::Internal`].
fn posting_error_to_transaction_error(err: &LedgerError, message: String) -> TransactionError {
    match err {
        LedgerError::CurrencyMismatch { .. }
        | LedgerError::Unbalanced { .. }
        | LedgerError::InsufficientEntries
        | LedgerError::InvalidAmount
        | LedgerError::AccountInactive(_)
        | LedgerError::NotFound(_) => TransactionError::PostingRejected(message),
        LedgerError::Conflict(_) | LedgerError::Database(_) | LedgerError::Internal(_) => {
            TransactionError::Internal(message)
        }
    }
}

async fn begin_serializable(db: &DatabaseConnection) -> Result<DatabaseTransaction, TransactionError> {
    db.begin_with_config(Some(IsolationLevel::Serializable), None)
        .await
        .map_err(db_err)
}

async fn find_by_idempotency_key<C: ConnectionTrait>(
    conn: &C,
    key: &str,
) -> Result<Option<transactions::Model>, TransactionError> {
    transactions::Entity::find()
        .filter(transactions::Column::IdempotencyKey.eq(key))
        .one(conn)
        .await
        .map_err(db_err)
}

async fn fetch_active_account<C: ConnectionTrait>(
    conn: &C,
    account_id: AccountId,
) -> Result<accounts::Model, TransactionError> {
    let account = accounts::Entity::find_by_id(account_id.into_inner())
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or(TransactionError::AccountNotFound(account_id))?;
    if !conv::account_status_to_core(account.status).is_active() {
        return Err(TransactionError::AccountInactive(account_id));
    }
    Ok(account)
}

/// Finds the bank's internal cash account for a currency, creating it as an
/// ASSET ledger account on first use.
async fn get_or_create_cash_account<C: ConnectionTrait>(
    conn: &C,
    currency: CurrencyCode,
) -> Result<LedgerAccountId, TransactionError> {
    let code = core_service::cash_account_code(currency);
    if let Some(existing) = ledger::find_ledger_account_by_code_impl(conn, &code)
        .await
        .map_err(|e| TransactionError::Internal(e.to_string()))?
    {
        return Ok(LedgerAccountId::new(existing.id));
    }
    let name = format!("Bank Cash ({})", currency.as_str());
    let created = ledger::create_ledger_account_impl(conn, &code, &name, AccountCategory::Asset, currency, true)
        .await
        .map_err(|e| TransactionError::Internal(e.to_string()))?;
    Ok(LedgerAccountId::new(created.id))
}

#[allow(clippy::too_many_arguments)]
async fn insert_processing_row<C: ConnectionTrait>(
    conn: &C,
    idempotency_key: &str,
    transaction_type: CoreTransactionType,
    source_account_id: Option<AccountId>,
    destination_account_id: Option<AccountId>,
    amount: rust_decimal::Decimal,
    currency: CurrencyCode,
    description: &str,
    ledger_txn_id: LedgerTxnId,
    reference_transaction_id: Option<TransactionId>,
) -> Result<transactions::Model, TransactionError> {
    let now = Utc::now();
    let active = transactions::ActiveModel {
        external_id: Set(uuid::Uuid::now_v7()),
        idempotency_key: Set(idempotency_key.to_string()),
        transaction_type: Set(conv::transaction_type_to_db(transaction_type)),
        status: Set(conv::transaction_status_to_db(
            ledgerbank_core::workflow::TransactionStatus::Processing,
        )),
        source_account_id: Set(source_account_id.map(AccountId::into_inner)),
        destination_account_id: Set(destination_account_id.map(AccountId::into_inner)),
        amount: Set(amount),
        currency: Set(currency.as_str().to_string()),
        description: Set(Some(description.to_string())),
        ledger_transaction_id: Set(ledger_txn_id.into_inner()),
        reference_transaction_id: Set(reference_transaction_id.map(TransactionId::into_inner)),
        created_at: Set(now.into()),
        ..Default::default()
    };
    active.insert(conn).await.map_err(db_err)
}

async fn complete_row<C: ConnectionTrait>(
    conn: &C,
    row: transactions::Model,
) -> Result<transactions::Model, TransactionError> {
    let id = row.id;
    let mut active: transactions::ActiveModel = row.into();
    active.status = Set(conv::transaction_status_to_db(
        ledgerbank_core::workflow::TransactionStatus::Completed,
    ));
    active.completed_at = Set(Some(Utc::now().into()));
    let updated = active.update(conn).await.map_err(db_err)?;
    audit::record_impl(conn, "transaction", &id.to_string(), "completed", json!({}))
        .await
        .map_err(db_err)?;
    Ok(updated)
}

async fn fail_row<C: ConnectionTrait>(
    conn: &C,
    row: transactions::Model,
    error: &str,
) -> Result<(), TransactionError> {
    let id = row.id;
    let mut active: transactions::ActiveModel = row.into();
    active.status = Set(conv::transaction_status_to_db(
        ledgerbank_core::workflow::TransactionStatus::Failed,
    ));
    active.error_message = Set(Some(error.to_string()));
    active.completed_at = Set(Some(Utc::now().into()));
    active.update(conn).await.map_err(db_err)?;
    audit::record_impl(conn, "transaction", &id.to_string(), "failed", json!({ "error": error }))
        .await
        .map_err(db_err)?;
    Ok(())
}

/// Repository orchestrating deposits, withdrawals, transfers, and
/// reversals.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deposits funds into a customer account from the bank's cash account.
    ///
    /// Idempotent on `input.idempotency_key`: replaying the same key returns
    /// the original row rather than posting again.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::AccountNotFound`] or
    /// [`TransactionError::AccountInactive`] if the account cannot receive
    /// funds, or a database/internal error if posting fails.
    pub async fn deposit(&self, input: DepositInput) -> Result<transactions::Model, TransactionError> {
        let txn = begin_serializable(&self.db).await?;

        if let Some(existing) = find_by_idempotency_key(&txn, &input.idempotency_key).await? {
            txn.commit().await.map_err(db_err)?;
            return Ok(existing);
        }

        let account = fetch_active_account(&txn, input.account_id).await?;
        let cash_account_id = get_or_create_cash_account(&txn, input.currency).await?;
        let customer_ledger_id = LedgerAccountId::new(account.ledger_account_id);

        let ledger_txn_id = LedgerTxnId::new();
        let row = insert_processing_row(
            &txn,
            &input.idempotency_key,
            CoreTransactionType::Deposit,
            None,
            Some(input.account_id),
            input.amount,
            input.currency,
            &input.description,
            ledger_txn_id,
            None,
        )
        .await?;

        let entries = core_service::deposit_entries(cash_account_id, customer_ledger_id, input.amount, &input.description);
        let post_result = ledger::post_entries_impl(
            &txn,
            PostEntriesInput {
                txn_id: ledger_txn_id,
                currency: input.currency,
                entries,
            },
        )
        .await;

        let result = self.finish(&txn, row, post_result).await;
        txn.commit().await.map_err(db_err)?;
        result
    }

    /// Withdraws funds from a customer account into the bank's cash account.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::AccountNotFound`],
    /// [`TransactionError::AccountInactive`], or
    /// [`TransactionError::InsufficientFunds`] if the withdrawal cannot be
    /// performed, or a database/internal error if posting fails.
    pub async fn withdraw(&self, input: WithdrawalInput) -> Result<transactions::Model, TransactionError> {
        let txn = begin_serializable(&self.db).await?;

        if let Some(existing) = find_by_idempotency_key(&txn, &input.idempotency_key).await? {
            txn.commit().await.map_err(db_err)?;
            return Ok(existing);
        }

        let account = fetch_active_account(&txn, input.account_id).await?;
        let customer_ledger_id = LedgerAccountId::new(account.ledger_account_id);
        let cash_account_id = get_or_create_cash_account(&txn, input.currency).await?;

        let available = ledger::get_balance_impl(&txn, customer_ledger_id)
            .await
            .map_err(|e| TransactionError::Internal(e.to_string()))?;
        core_service::check_sufficient_balance(available, input.amount)?;

        let ledger_txn_id = LedgerTxnId::new();
        let row = insert_processing_row(
            &txn,
            &input.idempotency_key,
            CoreTransactionType::Withdrawal,
            Some(input.account_id),
            None,
            input.amount,
            input.currency,
            &input.description,
            ledger_txn_id,
            None,
        )
        .await?;

        let entries =
            core_service::withdrawal_entries(customer_ledger_id, cash_account_id, input.amount, &input.description);
        let post_result = ledger::post_entries_impl(
            &txn,
            PostEntriesInput {
                txn_id: ledger_txn_id,
                currency: input.currency,
                entries,
            },
        )
        .await;

        let result = self.finish(&txn, row, post_result).await;
        txn.commit().await.map_err(db_err)?;
        result
    }

    /// Transfers funds between two customer accounts.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::SameAccount`],
    /// [`TransactionError::AccountNotFound`],
    /// [`TransactionError::AccountInactive`], or
    /// [`TransactionError::InsufficientFunds`] per the precondition chain,
    /// or a database/internal error if posting fails.
    pub async fn transfer(&self, input: TransferInput) -> Result<transactions::Model, TransactionError> {
        core_service::validate_distinct_accounts(input.source_account_id, input.destination_account_id)?;

        let txn = begin_serializable(&self.db).await?;

        if let Some(existing) = find_by_idempotency_key(&txn, &input.idempotency_key).await? {
            txn.commit().await.map_err(db_err)?;
            return Ok(existing);
        }

        let source = fetch_active_account(&txn, input.source_account_id).await?;
        let destination = fetch_active_account(&txn, input.destination_account_id).await?;
        let source_ledger_id = LedgerAccountId::new(source.ledger_account_id);
        let destination_ledger_id = LedgerAccountId::new(destination.ledger_account_id);

        let available = ledger::get_balance_impl(&txn, source_ledger_id)
            .await
            .map_err(|e| TransactionError::Internal(e.to_string()))?;
        core_service::check_sufficient_balance(available, input.amount)?;

        let ledger_txn_id = LedgerTxnId::new();
        let row = insert_processing_row(
            &txn,
            &input.idempotency_key,
            CoreTransactionType::Transfer,
            Some(input.source_account_id),
            Some(input.destination_account_id),
            input.amount,
            input.currency,
            &input.description,
            ledger_txn_id,
            None,
        )
        .await?;

        let entries =
            core_service::transfer_entries(source_ledger_id, destination_ledger_id, input.amount, &input.description);
        let post_result = ledger::post_entries_impl(
            &txn,
            PostEntriesInput {
                txn_id: ledger_txn_id,
                currency: input.currency,
                entries,
            },
        )
        .await;

        let result = self.finish(&txn, row, post_result).await;
        txn.commit().await.map_err(db_err)?;
        result
    }

    /// Reverses a previously completed transaction, mirroring its original
    /// ledger entries with direction flipped and marking the original
    /// REVERSED.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotFound`] if the original transaction
    /// does not exist, [`TransactionError::NotReversible`] if it is not in
    /// COMPLETED status, or a database/internal error if posting fails.
    pub async fn reverse(&self, input: ReversalInput) -> Result<transactions::Model, TransactionError> {
        let txn = begin_serializable(&self.db).await?;

        if let Some(existing) = find_by_idempotency_key(&txn, &input.idempotency_key).await? {
            txn.commit().await.map_err(db_err)?;
            return Ok(existing);
        }

        let original = transactions::Entity::find_by_id(input.original_transaction_id.into_inner())
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(TransactionError::NotFound(input.original_transaction_id))?;
        let original_status = conv::transaction_status_to_core(original.status);
        if !original_status.is_reversible() {
            return Err(TransactionError::NotReversible(input.original_transaction_id));
        }

        let original_entries =
            ledger::get_entries_by_transaction_impl(&txn, LedgerTxnId::from_uuid(original.ledger_transaction_id))
                .await
                .map_err(|e| TransactionError::Internal(e.to_string()))?;
        let reversal_entries = ledgerbank_core::workflow::build_reversal_entries(&original_entries);

        let currency = CurrencyCode::parse(&original.currency).map_err(|e| TransactionError::Internal(e.to_string()))?;
        let description = format!("Reversal of transaction {}", original.id);
        let ledger_txn_id = LedgerTxnId::new();

        let row = insert_processing_row(
            &txn,
            &input.idempotency_key,
            CoreTransactionType::Reversal,
            original.source_account_id.map(AccountId::new),
            original.destination_account_id.map(AccountId::new),
            original.amount,
            currency,
            &description,
            ledger_txn_id,
            Some(input.original_transaction_id),
        )
        .await?;

        let post_result = ledger::post_entries_impl(
            &txn,
            PostEntriesInput {
                txn_id: ledger_txn_id,
                currency,
                entries: reversal_entries,
            },
        )
        .await;

        let result = self.finish(&txn, row, post_result).await;

        if result.is_ok() {
            let mut original_active: transactions::ActiveModel = original.clone().into();
            original_active.status = Set(conv::transaction_status_to_db(
                ledgerbank_core::workflow::TransactionStatus::Reversed,
            ));
            original_active.update(&txn).await.map_err(db_err)?;
            audit::record_impl(
                &txn,
                "transaction",
                &original.id.to_string(),
                "reversed",
                json!({ "reversed_by": input.original_transaction_id.to_string() }),
            )
            .await
            .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        result
    }

    /// Completes or fails the PROCESSING row based on the posting result,
    /// writing the matching audit entry either way.
    async fn finish(
        &self,
        txn: &DatabaseTransaction,
        row: transactions::Model,
        post_result: Result<Vec<ledgerbank_core::ledger::types::LedgerEntry>, ledgerbank_core::ledger::error::LedgerError>,
    ) -> Result<transactions::Model, TransactionError> {
        match post_result {
            Ok(_) => complete_row(txn, row).await,
            Err(err) => {
                let message = err.to_string();
                fail_row(txn, row, &message).await?;
                Err(posting_error_to_transaction_error(&err, message))
            }
        }
    }

    /// Fetches a transaction by its internal id.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::NotFound`] if it does not exist.
    pub async fn get_transaction(&self, transaction_id: TransactionId) -> Result<transactions::Model, TransactionError> {
        transactions::Entity::find_by_id(transaction_id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(TransactionError::NotFound(transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_account_code_matches_core_convention() {
        assert_eq!(core_service::cash_account_code(CurrencyCode::USD), "BANK-CASH-USD");
    }

    #[test]
    fn client_fixable_posting_errors_stay_4xx() {
        let currency_mismatch = LedgerError::CurrencyMismatch {
            account_id: LedgerAccountId::new(1),
            account_currency: "EUR".into(),
            posting_currency: "USD".into(),
        };
        let mapped = posting_error_to_transaction_error(&currency_mismatch, currency_mismatch.to_string());
        assert!(matches!(mapped, TransactionError::PostingRejected(_)));
        assert_eq!(mapped.http_status_code(), 400);

        let unbalanced = LedgerError::Unbalanced {
            debit: rust_decimal::Decimal::new(100, 2),
            credit: rust_decimal::Decimal::new(50, 2),
        };
        let mapped = posting_error_to_transaction_error(&unbalanced, unbalanced.to_string());
        assert!(matches!(mapped, TransactionError::PostingRejected(_)));
        assert_eq!(mapped.http_status_code(), 400);
    }

    #[test]
    fn genuinely_internal_posting_errors_stay_5xx() {
        let db_error = LedgerError::Database("connection reset".into());
        let mapped = posting_error_to_transaction_error(&db_error, db_error.to_string());
        assert!(matches!(mapped, TransactionError::Internal(_)));
        assert_eq!(mapped.http_status_code(), 500);
    }
}
