//! Conversions between the Postgres-backed `SeaORM` active enums and the
//! pure domain enums in `ledgerbank_core`. Kept in one place so every
//! repository maps the wire representation the same way.

use ledgerbank_core::account::{AccountStatus as CoreAccountStatus, ProductType as CoreProductType};
use ledgerbank_core::ledger::{AccountCategory as CoreAccountCategory, EntryDirection as CoreEntryDirection};
use ledgerbank_core::workflow::{TransactionStatus as CoreTransactionStatus, TransactionType as CoreTransactionType};

use crate::entities::sea_orm_active_enums as db;

#[must_use]
pub fn category_to_core(value: db::AccountCategory) -> CoreAccountCategory {
    match value {
        db::AccountCategory::Asset => CoreAccountCategory::Asset,
        db::AccountCategory::Liability => CoreAccountCategory::Liability,
        db::AccountCategory::Equity => CoreAccountCategory::Equity,
        db::AccountCategory::Revenue => CoreAccountCategory::Revenue,
        db::AccountCategory::Expense => CoreAccountCategory::Expense,
    }
}

#[must_use]
pub fn category_to_db(value: CoreAccountCategory) -> db::AccountCategory {
    match value {
        CoreAccountCategory::Asset => db::AccountCategory::Asset,
        CoreAccountCategory::Liability => db::AccountCategory::Liability,
        CoreAccountCategory::Equity => db::AccountCategory::Equity,
        CoreAccountCategory::Revenue => db::AccountCategory::Revenue,
        CoreAccountCategory::Expense => db::AccountCategory::Expense,
    }
}

#[must_use]
pub fn direction_to_core(value: db::EntryDirection) -> CoreEntryDirection {
    match value {
        db::EntryDirection::Debit => CoreEntryDirection::Debit,
        db::EntryDirection::Credit => CoreEntryDirection::Credit,
    }
}

#[must_use]
pub fn direction_to_db(value: CoreEntryDirection) -> db::EntryDirection {
    match value {
        CoreEntryDirection::Debit => db::EntryDirection::Debit,
        CoreEntryDirection::Credit => db::EntryDirection::Credit,
    }
}

#[must_use]
pub fn product_type_to_core(value: db::ProductType) -> CoreProductType {
    match value {
        db::ProductType::Checking => CoreProductType::Checking,
        db::ProductType::Savings => CoreProductType::Savings,
        db::ProductType::Credit => CoreProductType::Credit,
        db::ProductType::Prepaid => CoreProductType::Prepaid,
    }
}

#[must_use]
pub fn product_type_to_db(value: CoreProductType) -> db::ProductType {
    match value {
        CoreProductType::Checking => db::ProductType::Checking,
        CoreProductType::Savings => db::ProductType::Savings,
        CoreProductType::Credit => db::ProductType::Credit,
        CoreProductType::Prepaid => db::ProductType::Prepaid,
    }
}

#[must_use]
pub fn account_status_to_core(value: db::AccountStatus) -> CoreAccountStatus {
    match value {
        db::AccountStatus::Pending => CoreAccountStatus::Pending,
        db::AccountStatus::Active => CoreAccountStatus::Active,
        db::AccountStatus::Frozen => CoreAccountStatus::Frozen,
        db::AccountStatus::Blocked => CoreAccountStatus::Blocked,
        db::AccountStatus::Closed => CoreAccountStatus::Closed,
    }
}

#[must_use]
pub fn account_status_to_db(value: CoreAccountStatus) -> db::AccountStatus {
    match value {
        CoreAccountStatus::Pending => db::AccountStatus::Pending,
        CoreAccountStatus::Active => db::AccountStatus::Active,
        CoreAccountStatus::Frozen => db::AccountStatus::Frozen,
        CoreAccountStatus::Blocked => db::AccountStatus::Blocked,
        CoreAccountStatus::Closed => db::AccountStatus::Closed,
    }
}

#[must_use]
pub fn transaction_type_to_db(value: CoreTransactionType) -> db::TransactionType {
    match value {
        CoreTransactionType::Deposit => db::TransactionType::Deposit,
        CoreTransactionType::Withdrawal => db::TransactionType::Withdrawal,
        CoreTransactionType::Transfer => db::TransactionType::Transfer,
        CoreTransactionType::Reversal => db::TransactionType::Reversal,
    }
}

#[must_use]
pub fn transaction_type_to_core(value: db::TransactionType) -> CoreTransactionType {
    match value {
        db::TransactionType::Deposit => CoreTransactionType::Deposit,
        db::TransactionType::Withdrawal => CoreTransactionType::Withdrawal,
        db::TransactionType::Transfer => CoreTransactionType::Transfer,
        db::TransactionType::Reversal => CoreTransactionType::Reversal,
    }
}

#[must_use]
pub fn transaction_status_to_db(value: CoreTransactionStatus) -> db::TransactionStatus {
    match value {
        CoreTransactionStatus::Pending => db::TransactionStatus::Pending,
        CoreTransactionStatus::Processing => db::TransactionStatus::Processing,
        CoreTransactionStatus::Completed => db::TransactionStatus::Completed,
        CoreTransactionStatus::Failed => db::TransactionStatus::Failed,
        CoreTransactionStatus::Reversed => db::TransactionStatus::Reversed,
    }
}

#[must_use]
pub fn transaction_status_to_core(value: db::TransactionStatus) -> CoreTransactionStatus {
    match value {
        db::TransactionStatus::Pending => CoreTransactionStatus::Pending,
        db::TransactionStatus::Processing => CoreTransactionStatus::Processing,
        db::TransactionStatus::Completed => CoreTransactionStatus::Completed,
        db::TransactionStatus::Failed => CoreTransactionStatus::Failed,
        db::TransactionStatus::Reversed => CoreTransactionStatus::Reversed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips() {
        for c in [
            CoreAccountCategory::Asset,
            CoreAccountCategory::Liability,
            CoreAccountCategory::Equity,
            CoreAccountCategory::Revenue,
            CoreAccountCategory::Expense,
        ] {
            assert_eq!(category_to_core(category_to_db(c)), c);
        }
    }

    #[test]
    fn direction_round_trips() {
        assert_eq!(
            direction_to_core(direction_to_db(CoreEntryDirection::Debit)),
            CoreEntryDirection::Debit
        );
        assert_eq!(
            direction_to_core(direction_to_db(CoreEntryDirection::Credit)),
            CoreEntryDirection::Credit
        );
    }

    #[test]
    fn transaction_status_round_trips() {
        for s in [
            CoreTransactionStatus::Pending,
            CoreTransactionStatus::Processing,
            CoreTransactionStatus::Completed,
            CoreTransactionStatus::Failed,
            CoreTransactionStatus::Reversed,
        ] {
            assert_eq!(transaction_status_to_core(transaction_status_to_db(s)), s);
        }
    }
}
