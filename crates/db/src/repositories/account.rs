//! Account manager repository: customers and their paired ledger accounts.
//!
//! `open_account` and `change_status` each open their own database
//! transaction spanning the `accounts`/`ledger_accounts` write and its
//! `audit_log` row, so a failed ledger-account insert or a failed audit
//! write rolls back the whole step.

use chrono::Utc;
use ledgerbank_core::account::error::AccountError;
use ledgerbank_core::account::service as core_service;
use ledgerbank_core::account::types::{AccountStatus, ProductType};
use ledgerbank_core::ledger::types::AccountCategory;
use ledgerbank_shared::types::{AccountId, CurrencyCode, CustomerId, LedgerAccountId};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde_json::json;

use super::audit;
use super::conv;
use super::ledger;
use crate::entities::{accounts, customers, ledger_accounts};

fn db_err(err: sea_orm::DbErr) -> AccountError {
    AccountError::Database(err.to_string())
}

/// Repository for customers and their customer-facing accounts.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer in PENDING KYC status.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::DuplicateEmail`] if `email` is already on file.
    pub async fn create_customer(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<customers::Model, AccountError> {
        let existing = customers::Entity::find()
            .filter(customers::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(AccountError::DuplicateEmail(email.to_string()));
        }

        let now = Utc::now();
        let active = customers::ActiveModel {
            external_id: Set(uuid::Uuid::now_v7()),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };
        active.insert(&self.db).await.map_err(db_err)
    }

    /// Opens a new customer-facing account: creates the paired chart-of-accounts
    /// entry (category LIABILITY — the bank's obligation to the customer),
    /// then the account row itself, in PENDING status.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::CustomerNotFound`] or
    /// [`AccountError::CustomerInactive`] if the customer cannot hold an
    /// account, or a database error if either insert fails.
    pub async fn open_account(
        &self,
        customer_id: CustomerId,
        product_type: ProductType,
        currency: CurrencyCode,
    ) -> Result<accounts::Model, AccountError> {
        let customer = customers::Entity::find_by_id(customer_id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(AccountError::CustomerNotFound(customer_id))?;
        if !customer.is_active {
            return Err(AccountError::CustomerInactive(customer_id));
        }

        let code = core_service::derive_ledger_code(product_type, customer_id);
        let name = core_service::derive_ledger_name(&customer.first_name, &customer.last_name, product_type);

        let txn = self.db.begin().await.map_err(db_err)?;

        let ledger_account =
            ledger::create_ledger_account_impl(&txn, &code, &name, AccountCategory::Liability, currency, true)
                .await
                .map_err(|e| AccountError::Internal(e.to_string()))?;

        let now = Utc::now();
        let active = accounts::ActiveModel {
            external_id: Set(uuid::Uuid::now_v7()),
            customer_id: Set(customer_id.into_inner()),
            ledger_account_id: Set(ledger_account.id),
            product_type: Set(conv::product_type_to_db(product_type)),
            currency: Set(currency.as_str().to_string()),
            status: Set(conv::account_status_to_db(AccountStatus::Pending)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };
        let account = active.insert(&txn).await.map_err(db_err)?;

        audit::record_impl(
            &txn,
            "account",
            &account.id.to_string(),
            "opened",
            json!({ "product_type": product_type.code(), "currency": currency.as_str() }),
        )
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(account)
    }

    /// Applies a status transition to an account, stamping `opened_at`/`closed_at`
    /// where the state machine requires it and deactivating the paired ledger
    /// account on entry to CLOSED.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] if the account does not exist,
    /// [`AccountError::MissingReason`] if `reason` is empty, or
    /// [`AccountError::IllegalTransition`] if the transition is not legal.
    pub async fn change_status(
        &self,
        account_id: AccountId,
        target: AccountStatus,
        reason: &str,
    ) -> Result<accounts::Model, AccountError> {
        if reason.is_empty() {
            return Err(AccountError::MissingReason);
        }

        let account = accounts::Entity::find_by_id(account_id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(AccountError::NotFound(account_id))?;

        let current = conv::account_status_to_core(account.status);
        core_service::validate_transition(current, target)?;

        let txn = self.db.begin().await.map_err(db_err)?;

        let mut active: accounts::ActiveModel = account.clone().into();
        active.status = Set(conv::account_status_to_db(target));
        active.updated_at = Set(Utc::now().into());

        if core_service::should_set_opened_at(target, account.opened_at.is_some()) {
            active.opened_at = Set(Some(Utc::now().into()));
        }
        if core_service::should_set_closed_at(target) {
            active.closed_at = Set(Some(Utc::now().into()));

            let mut ledger_active: ledger_accounts::ActiveModel = ledger_accounts::Entity::find_by_id(account.ledger_account_id)
                .one(&txn)
                .await
                .map_err(db_err)?
                .ok_or(AccountError::Internal("paired ledger account missing".to_string()))?
                .into();
            ledger_active.is_active = Set(false);
            ledger_active.updated_at = Set(Utc::now().into());
            ledger_active.update(&txn).await.map_err(db_err)?;
        }

        let updated = active.update(&txn).await.map_err(db_err)?;

        audit::record_impl(
            &txn,
            "account",
            &account_id.to_string(),
            "status_changed",
            json!({ "from": format!("{current:?}"), "to": format!("{target:?}"), "reason": reason }),
        )
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(updated)
    }

    /// Fetches an account by its internal id.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] if it does not exist.
    pub async fn get_account(&self, account_id: AccountId) -> Result<accounts::Model, AccountError> {
        accounts::Entity::find_by_id(account_id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or(AccountError::NotFound(account_id))
    }

    /// Computes an account's current balance via its paired ledger account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] if the account does not exist.
    pub async fn get_balance(&self, account_id: AccountId) -> Result<Decimal, AccountError> {
        let account = self.get_account(account_id).await?;
        ledger::get_balance_impl(&self.db, LedgerAccountId::new(account.ledger_account_id))
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))
    }

    /// Lists every account belonging to one customer, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_customer_accounts(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<accounts::Model>, AccountError> {
        accounts::Entity::find()
            .filter(accounts::Column::CustomerId.eq(customer_id.into_inner()))
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }
}
