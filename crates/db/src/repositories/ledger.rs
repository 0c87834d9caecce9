//! Ledger repository: the chart of accounts and the append-only entry log.
//!
//! The precondition chain (idempotency probe, account validation, balance
//! check) is the same one exercised without a database by
//! `ledgerbank_core::ledger::service` — this module fetches the rows that
//! chain needs and persists the result. Every `*_impl` function is generic
//! over `ConnectionTrait` so the transaction repository can run it inside
//! the same database transaction as the rest of an orchestration step.

use chrono::Utc;
use ledgerbank_core::ledger::error::LedgerError;
use ledgerbank_core::ledger::service as core_service;
use ledgerbank_core::ledger::types::{
    AccountCategory, IntegrityReport, LedgerAccountInfo, LedgerEntry, PostEntriesInput,
};
use ledgerbank_shared::types::{CurrencyCode, LedgerAccountId, LedgerEntryId, LedgerTxnId};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, Set, Statement,
};

use super::conv;
use crate::entities::ledger_accounts;
use crate::entities::ledger_entries;

fn db_err(err: sea_orm::DbErr) -> LedgerError {
    LedgerError::Database(err.to_string())
}

fn to_account_info(model: &ledger_accounts::Model) -> Result<LedgerAccountInfo, LedgerError> {
    let currency =
        CurrencyCode::parse(&model.currency).map_err(|e| LedgerError::Internal(e.to_string()))?;
    Ok(LedgerAccountInfo {
        id: LedgerAccountId::new(model.id),
        code: model.code.clone(),
        category: conv::category_to_core(model.category),
        currency,
        is_active: model.is_active,
    })
}

fn to_core_entry(model: ledger_entries::Model) -> Result<LedgerEntry, LedgerError> {
    let currency =
        CurrencyCode::parse(&model.currency).map_err(|e| LedgerError::Internal(e.to_string()))?;
    Ok(LedgerEntry {
        id: LedgerEntryId::new(model.id),
        transaction_id: LedgerTxnId::from_uuid(model.transaction_id),
        account_id: LedgerAccountId::new(model.account_id),
        direction: conv::direction_to_core(model.direction),
        amount: model.amount,
        currency,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

/// Creates a new chart-of-accounts entry.
///
/// # Errors
///
/// Returns [`LedgerError::Conflict`] if `code` is already in use.
pub async fn create_ledger_account_impl<C: ConnectionTrait>(
    conn: &C,
    code: &str,
    name: &str,
    category: AccountCategory,
    currency: CurrencyCode,
    is_active: bool,
) -> Result<ledger_accounts::Model, LedgerError> {
    let existing = ledger_accounts::Entity::find()
        .filter(ledger_accounts::Column::Code.eq(code))
        .one(conn)
        .await
        .map_err(db_err)?;
    if existing.is_some() {
        return Err(LedgerError::Conflict(code.to_string()));
    }

    let now = Utc::now();
    let active = ledger_accounts::ActiveModel {
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        category: Set(conv::category_to_db(category)),
        currency: Set(currency.as_str().to_string()),
        is_active: Set(is_active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    active.insert(conn).await.map_err(db_err)
}

/// Looks up a chart-of-accounts entry by its code, without creating it.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn find_ledger_account_by_code_impl<C: ConnectionTrait>(
    conn: &C,
    code: &str,
) -> Result<Option<ledger_accounts::Model>, LedgerError> {
    ledger_accounts::Entity::find()
        .filter(ledger_accounts::Column::Code.eq(code))
        .one(conn)
        .await
        .map_err(db_err)
}

/// Posts a balanced group of entries sharing one ledger-transaction id.
///
/// Idempotent on `input.txn_id`: if entries already exist for that id, they
/// are returned unchanged and no new rows are written.
///
/// # Errors
///
/// Returns [`LedgerError::InsufficientEntries`], [`LedgerError::InvalidAmount`],
/// [`LedgerError::NotFound`], [`LedgerError::AccountInactive`],
/// [`LedgerError::CurrencyMismatch`], or [`LedgerError::Unbalanced`] per the
/// precondition chain in `ledgerbank_core::ledger::service`.
pub async fn post_entries_impl<C: ConnectionTrait>(
    conn: &C,
    input: PostEntriesInput,
) -> Result<Vec<LedgerEntry>, LedgerError> {
    let txn_uuid = input.txn_id.into_inner();

    let existing = ledger_entries::Entity::find()
        .filter(ledger_entries::Column::TransactionId.eq(txn_uuid))
        .order_by_asc(ledger_entries::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    if !existing.is_empty() {
        return existing.into_iter().map(to_core_entry).collect();
    }

    core_service::validate_shape(&input.entries)?;

    let mut seen = std::collections::HashSet::new();
    for entry in &input.entries {
        let account_id = entry.account_id.into_inner();
        if !seen.insert(account_id) {
            continue;
        }
        let model = ledger_accounts::Entity::find_by_id(account_id)
            .one(conn)
            .await
            .map_err(db_err)?
            .ok_or(LedgerError::NotFound(entry.account_id))?;
        let info = to_account_info(&model)?;
        core_service::validate_account(&info, input.currency.as_str())?;
    }

    let (total_debit, total_credit) = core_service::calculate_totals(&input.entries);
    core_service::check_balance(total_debit, total_credit)?;

    let now = Utc::now();
    let mut inserted = Vec::with_capacity(input.entries.len());
    for entry in &input.entries {
        let active = ledger_entries::ActiveModel {
            transaction_id: Set(txn_uuid),
            account_id: Set(entry.account_id.into_inner()),
            direction: Set(conv::direction_to_db(entry.direction)),
            amount: Set(entry.amount),
            currency: Set(input.currency.as_str().to_string()),
            description: Set(entry.description.clone()),
            created_at: Set(now.into()),
            ..Default::default()
        };
        let model = active.insert(conn).await.map_err(db_err)?;
        inserted.push(to_core_entry(model)?);
    }
    Ok(inserted)
}

async fn aggregate_sums<C: ConnectionTrait>(
    conn: &C,
    account_id: i64,
) -> Result<(Decimal, Decimal), LedgerError> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        r"SELECT
            COALESCE(SUM(amount) FILTER (WHERE direction = 'DEBIT'), 0) AS total_debits,
            COALESCE(SUM(amount) FILTER (WHERE direction = 'CREDIT'), 0) AS total_credits
          FROM ledger_entries
          WHERE account_id = $1",
        [account_id.into()],
    );
    let row = conn
        .query_one(stmt)
        .await
        .map_err(db_err)?
        .ok_or_else(|| LedgerError::Internal("balance aggregate query returned no row".into()))?;
    let total_debits: Decimal = row.try_get("", "total_debits").map_err(db_err)?;
    let total_credits: Decimal = row.try_get("", "total_credits").map_err(db_err)?;
    Ok((total_debits, total_credits))
}

/// Computes the current balance of a ledger account by SQL-side aggregation.
/// The balance is never stored — every call recomputes it from
/// `ledger_entries`.
///
/// # Errors
///
/// Returns [`LedgerError::NotFound`] if the account does not exist.
pub async fn get_balance_impl<C: ConnectionTrait>(
    conn: &C,
    account_id: LedgerAccountId,
) -> Result<Decimal, LedgerError> {
    let account = ledger_accounts::Entity::find_by_id(account_id.into_inner())
        .one(conn)
        .await
        .map_err(db_err)?
        .ok_or(LedgerError::NotFound(account_id))?;
    let (total_debits, total_credits) = aggregate_sums(conn, account_id.into_inner()).await?;
    Ok(core_service::balance_sign(
        conv::category_to_core(account.category),
        total_debits,
        total_credits,
    ))
}

/// Lists every entry ever posted against one account, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_entries_by_account_impl<C: ConnectionTrait>(
    conn: &C,
    account_id: LedgerAccountId,
) -> Result<Vec<LedgerEntry>, LedgerError> {
    let rows = ledger_entries::Entity::find()
        .filter(ledger_entries::Column::AccountId.eq(account_id.into_inner()))
        .order_by_desc(ledger_entries::Column::CreatedAt)
        .order_by_desc(ledger_entries::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    rows.into_iter().map(to_core_entry).collect()
}

/// Lists every entry belonging to one posting.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn get_entries_by_transaction_impl<C: ConnectionTrait>(
    conn: &C,
    txn_id: LedgerTxnId,
) -> Result<Vec<LedgerEntry>, LedgerError> {
    let rows = ledger_entries::Entity::find()
        .filter(ledger_entries::Column::TransactionId.eq(txn_id.into_inner()))
        .order_by_asc(ledger_entries::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    rows.into_iter().map(to_core_entry).collect()
}

/// Computes the global debit/credit balance across the entire ledger.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn check_integrity_impl<C: ConnectionTrait>(conn: &C) -> Result<IntegrityReport, LedgerError> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        r"SELECT
            COALESCE(SUM(amount) FILTER (WHERE direction = 'DEBIT'), 0) AS total_debits,
            COALESCE(SUM(amount) FILTER (WHERE direction = 'CREDIT'), 0) AS total_credits
          FROM ledger_entries",
        [],
    );
    let row = conn
        .query_one(stmt)
        .await
        .map_err(db_err)?
        .ok_or_else(|| LedgerError::Internal("integrity aggregate query returned no row".into()))?;
    let total_debits: Decimal = row.try_get("", "total_debits").map_err(db_err)?;
    let total_credits: Decimal = row.try_get("", "total_credits").map_err(db_err)?;
    Ok(core_service::check_integrity(total_debits, total_credits))
}

/// Repository facade over the chart of accounts and the entry log, for
/// callers that aren't already inside a shared database transaction.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// See [`create_ledger_account_impl`].
    ///
    /// # Errors
    ///
    /// See [`create_ledger_account_impl`].
    pub async fn create_ledger_account(
        &self,
        code: &str,
        name: &str,
        category: AccountCategory,
        currency: CurrencyCode,
        is_active: bool,
    ) -> Result<ledger_accounts::Model, LedgerError> {
        create_ledger_account_impl(&self.db, code, name, category, currency, is_active).await
    }

    /// See [`post_entries_impl`].
    ///
    /// # Errors
    ///
    /// See [`post_entries_impl`].
    pub async fn post_entries(&self, input: PostEntriesInput) -> Result<Vec<LedgerEntry>, LedgerError> {
        post_entries_impl(&self.db, input).await
    }

    /// See [`get_balance_impl`].
    ///
    /// # Errors
    ///
    /// See [`get_balance_impl`].
    pub async fn get_balance(&self, account_id: LedgerAccountId) -> Result<Decimal, LedgerError> {
        get_balance_impl(&self.db, account_id).await
    }

    /// See [`get_entries_by_account_impl`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_entries_by_account(
        &self,
        account_id: LedgerAccountId,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        get_entries_by_account_impl(&self.db, account_id).await
    }

    /// See [`get_entries_by_transaction_impl`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_entries_by_transaction(
        &self,
        txn_id: LedgerTxnId,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        get_entries_by_transaction_impl(&self.db, txn_id).await
    }

    /// See [`check_integrity_impl`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn check_integrity(&self) -> Result<IntegrityReport, LedgerError> {
        check_integrity_impl(&self.db).await
    }
}
