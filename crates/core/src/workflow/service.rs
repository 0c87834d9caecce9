//! Pure transaction orchestration logic shared by deposit, withdrawal, and
//! transfer: the cash-account code, the same-account and balance guards,
//! and the two-entry postings each operation reduces to.
//!
//! Idempotency, account lookup, and the PROCESSING row live in
//! `ledgerbank_db::repositories::transaction`, which calls into these
//! functions to build the `PostEntriesInput` it hands to the ledger
//! repository.

use ledgerbank_shared::types::{AccountId, CurrencyCode, LedgerAccountId};
use rust_decimal::Decimal;

use super::error::TransactionError;
use crate::ledger::types::{EntryDirection, PostEntryInput};

/// Derives the chart-of-accounts code for the bank's internal cash account
/// for a given currency: the counterparty for every deposit and withdrawal.
#[must_use]
pub fn cash_account_code(currency: CurrencyCode) -> String {
    format!("BANK-CASH-{}", currency.as_str())
}

/// Rejects a transfer where source and destination name the same account.
///
/// # Errors
///
/// Returns [`TransactionError::SameAccount`] if they match.
pub fn validate_distinct_accounts(source: AccountId, destination: AccountId) -> Result<(), TransactionError> {
    if source == destination {
        Err(TransactionError::SameAccount)
    } else {
        Ok(())
    }
}

/// Enforces that a withdrawal or transfer does not exceed the source
/// account's current balance.
///
/// # Errors
///
/// Returns [`TransactionError::InsufficientFunds`] otherwise.
pub fn check_sufficient_balance(available: Decimal, requested: Decimal) -> Result<(), TransactionError> {
    if available >= requested {
        Ok(())
    } else {
        Err(TransactionError::InsufficientFunds {
            available,
            requested,
        })
    }
}

/// Builds the two-entry posting for a deposit: the bank's cash account is
/// debited (its asset balance increases) and the customer's paired ledger
/// account is credited (the bank's liability to the customer increases).
#[must_use]
pub fn deposit_entries(
    cash_account_id: LedgerAccountId,
    customer_ledger_account_id: LedgerAccountId,
    amount: Decimal,
    description: &str,
) -> Vec<PostEntryInput> {
    vec![
        PostEntryInput {
            account_id: cash_account_id,
            direction: EntryDirection::Debit,
            amount,
            description: description.to_string(),
        },
        PostEntryInput {
            account_id: customer_ledger_account_id,
            direction: EntryDirection::Credit,
            amount,
            description: description.to_string(),
        },
    ]
}

/// Builds the two-entry posting for a withdrawal: the customer's paired
/// ledger account is debited (the bank's liability decreases) and the
/// bank's cash account is credited (its asset balance decreases).
#[must_use]
pub fn withdrawal_entries(
    customer_ledger_account_id: LedgerAccountId,
    cash_account_id: LedgerAccountId,
    amount: Decimal,
    description: &str,
) -> Vec<PostEntryInput> {
    vec![
        PostEntryInput {
            account_id: customer_ledger_account_id,
            direction: EntryDirection::Debit,
            amount,
            description: description.to_string(),
        },
        PostEntryInput {
            account_id: cash_account_id,
            direction: EntryDirection::Credit,
            amount,
            description: description.to_string(),
        },
    ]
}

/// Builds the two-entry posting for a transfer: the source account's
/// paired ledger account is debited, the destination account's is
/// credited.
#[must_use]
pub fn transfer_entries(
    source_ledger_account_id: LedgerAccountId,
    destination_ledger_account_id: LedgerAccountId,
    amount: Decimal,
    description: &str,
) -> Vec<PostEntryInput> {
    vec![
        PostEntryInput {
            account_id: source_ledger_account_id,
            direction: EntryDirection::Debit,
            amount,
            description: description.to_string(),
        },
        PostEntryInput {
            account_id: destination_ledger_account_id,
            direction: EntryDirection::Credit,
            amount,
            description: description.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cash_code_is_parameterized_by_currency() {
        assert_eq!(cash_account_code(CurrencyCode::USD), "BANK-CASH-USD");
        assert_eq!(
            cash_account_code(CurrencyCode::parse("eur").unwrap()),
            "BANK-CASH-EUR"
        );
    }

    #[test]
    fn distinct_accounts_check_rejects_same_id() {
        let id = AccountId::new(1);
        assert!(matches!(
            validate_distinct_accounts(id, id),
            Err(TransactionError::SameAccount)
        ));
        assert!(validate_distinct_accounts(id, AccountId::new(2)).is_ok());
    }

    #[test]
    fn balance_check_rejects_shortfall() {
        assert!(matches!(
            check_sufficient_balance(dec!(50), dec!(100)),
            Err(TransactionError::InsufficientFunds { .. })
        ));
        assert!(check_sufficient_balance(dec!(100), dec!(100)).is_ok());
        assert!(check_sufficient_balance(dec!(150), dec!(100)).is_ok());
    }

    #[test]
    fn deposit_entries_debit_cash_credit_customer() {
        let entries = deposit_entries(
            LedgerAccountId::new(1),
            LedgerAccountId::new(2),
            dec!(100),
            "deposit",
        );
        assert_eq!(entries[0].direction, EntryDirection::Debit);
        assert_eq!(entries[0].account_id, LedgerAccountId::new(1));
        assert_eq!(entries[1].direction, EntryDirection::Credit);
        assert_eq!(entries[1].account_id, LedgerAccountId::new(2));
    }

    #[test]
    fn withdrawal_entries_debit_customer_credit_cash() {
        let entries = withdrawal_entries(
            LedgerAccountId::new(2),
            LedgerAccountId::new(1),
            dec!(100),
            "withdrawal",
        );
        assert_eq!(entries[0].direction, EntryDirection::Debit);
        assert_eq!(entries[0].account_id, LedgerAccountId::new(2));
        assert_eq!(entries[1].direction, EntryDirection::Credit);
        assert_eq!(entries[1].account_id, LedgerAccountId::new(1));
    }

    #[test]
    fn transfer_entries_debit_source_credit_destination() {
        let entries = transfer_entries(
            LedgerAccountId::new(3),
            LedgerAccountId::new(4),
            dec!(25),
            "transfer",
        );
        assert_eq!(entries[0].direction, EntryDirection::Debit);
        assert_eq!(entries[0].account_id, LedgerAccountId::new(3));
        assert_eq!(entries[1].direction, EntryDirection::Credit);
        assert_eq!(entries[1].account_id, LedgerAccountId::new(4));
    }
}
