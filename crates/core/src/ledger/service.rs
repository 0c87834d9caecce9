//! Pure ledger engine logic: posting validation and balance arithmetic.
//!
//! Nothing here touches a database. The idempotency probe, account lookup,
//! and insert all happen in the `db` crate's repository, which calls into
//! these functions to run the precondition chain and compute sums. Keeping
//! the chain here means it is exercised directly by property tests without
//! a database in the loop.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{AccountCategory, EntryDirection, IntegrityReport, LedgerAccountInfo, PostEntryInput};

/// Validates the shape of a posting: at least two entries, at least one
/// debit and one credit, every amount strictly positive.
///
/// # Errors
///
/// Returns [`LedgerError::InsufficientEntries`] if there are fewer than two
/// entries or no debit/credit pair, or [`LedgerError::InvalidAmount`] if any
/// entry's amount is zero or negative.
pub fn validate_shape(entries: &[PostEntryInput]) -> Result<(), LedgerError> {
    if entries.len() < 2 {
        return Err(LedgerError::InsufficientEntries);
    }
    let has_debit = entries.iter().any(|e| e.direction == EntryDirection::Debit);
    let has_credit = entries.iter().any(|e| e.direction == EntryDirection::Credit);
    if !has_debit || !has_credit {
        return Err(LedgerError::InsufficientEntries);
    }
    for entry in entries {
        if entry.amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
    }
    Ok(())
}

/// Validates a single referenced account against the posting currency:
/// must be active, must match currency.
///
/// # Errors
///
/// Returns [`LedgerError::AccountInactive`] or [`LedgerError::CurrencyMismatch`].
pub fn validate_account(
    account: &LedgerAccountInfo,
    posting_currency: &str,
) -> Result<(), LedgerError> {
    if !account.is_active {
        return Err(LedgerError::AccountInactive(account.id));
    }
    if account.currency.as_str() != posting_currency {
        return Err(LedgerError::CurrencyMismatch {
            account_id: account.id,
            account_currency: account.currency.to_string(),
            posting_currency: posting_currency.to_string(),
        });
    }
    Ok(())
}

/// Sums debit and credit amounts across a set of entries.
#[must_use]
pub fn calculate_totals(entries: &[PostEntryInput]) -> (Decimal, Decimal) {
    let mut debit = Decimal::ZERO;
    let mut credit = Decimal::ZERO;
    for entry in entries {
        match entry.direction {
            EntryDirection::Debit => debit += entry.amount,
            EntryDirection::Credit => credit += entry.amount,
        }
    }
    (debit, credit)
}

/// Enforces the balance rule: total debits must exactly equal total credits.
///
/// # Errors
///
/// Returns [`LedgerError::Unbalanced`] otherwise.
pub fn check_balance(debit: Decimal, credit: Decimal) -> Result<(), LedgerError> {
    if debit == credit {
        Ok(())
    } else {
        Err(LedgerError::Unbalanced { debit, credit })
    }
}

/// Applies the sign convention for deriving a balance from aggregate sums.
///
/// ASSET and EXPENSE accounts are debit-normal (`debits - credits`);
/// LIABILITY, EQUITY, and REVENUE accounts are credit-normal
/// (`credits - debits`).
#[must_use]
pub fn balance_sign(category: AccountCategory, total_debits: Decimal, total_credits: Decimal) -> Decimal {
    if category.is_debit_normal() {
        total_debits - total_credits
    } else {
        total_credits - total_debits
    }
}

/// Builds a global integrity report from the entire ledger's debit/credit sums.
#[must_use]
pub fn check_integrity(total_debits: Decimal, total_credits: Decimal) -> IntegrityReport {
    IntegrityReport::new(total_debits, total_credits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbank_shared::types::{CurrencyCode, LedgerAccountId};
    use rust_decimal_macros::dec;

    fn entry(direction: EntryDirection, amount: Decimal) -> PostEntryInput {
        PostEntryInput {
            account_id: LedgerAccountId::new(1),
            direction,
            amount,
            description: "test".into(),
        }
    }

    fn account(is_active: bool, currency: &str) -> LedgerAccountInfo {
        LedgerAccountInfo {
            id: LedgerAccountId::new(1),
            code: "TEST".into(),
            category: AccountCategory::Asset,
            currency: CurrencyCode::parse(currency).unwrap(),
            is_active,
        }
    }

    #[test]
    fn shape_rejects_single_entry() {
        let entries = vec![entry(EntryDirection::Debit, dec!(10))];
        assert!(matches!(
            validate_shape(&entries),
            Err(LedgerError::InsufficientEntries)
        ));
    }

    #[test]
    fn shape_rejects_all_debits() {
        let entries = vec![
            entry(EntryDirection::Debit, dec!(10)),
            entry(EntryDirection::Debit, dec!(10)),
        ];
        assert!(matches!(
            validate_shape(&entries),
            Err(LedgerError::InsufficientEntries)
        ));
    }

    #[test]
    fn shape_rejects_zero_amount() {
        let entries = vec![
            entry(EntryDirection::Debit, dec!(0)),
            entry(EntryDirection::Credit, dec!(10)),
        ];
        assert!(matches!(
            validate_shape(&entries),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn shape_accepts_minimal_balanced_pair() {
        let entries = vec![
            entry(EntryDirection::Debit, dec!(10)),
            entry(EntryDirection::Credit, dec!(10)),
        ];
        assert!(validate_shape(&entries).is_ok());
    }

    #[test]
    fn account_inactive_is_rejected() {
        let acc = account(false, "USD");
        assert!(matches!(
            validate_account(&acc, "USD"),
            Err(LedgerError::AccountInactive(_))
        ));
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let acc = account(true, "EUR");
        assert!(matches!(
            validate_account(&acc, "USD"),
            Err(LedgerError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn totals_sum_each_direction() {
        let entries = vec![
            entry(EntryDirection::Debit, dec!(30)),
            entry(EntryDirection::Credit, dec!(10)),
            entry(EntryDirection::Credit, dec!(20)),
        ];
        assert_eq!(calculate_totals(&entries), (dec!(30), dec!(30)));
    }

    #[test]
    fn balance_check_rejects_mismatch() {
        assert!(matches!(
            check_balance(dec!(30), dec!(20)),
            Err(LedgerError::Unbalanced { .. })
        ));
        assert!(check_balance(dec!(30), dec!(30)).is_ok());
    }

    #[test]
    fn sign_convention_matches_category() {
        assert_eq!(
            balance_sign(AccountCategory::Asset, dec!(100), dec!(40)),
            dec!(60)
        );
        assert_eq!(
            balance_sign(AccountCategory::Liability, dec!(40), dec!(100)),
            dec!(60)
        );
    }

    #[test]
    fn empty_ledger_balance_is_exact_zero() {
        assert_eq!(
            balance_sign(AccountCategory::Asset, Decimal::ZERO, Decimal::ZERO),
            Decimal::ZERO
        );
    }
}
