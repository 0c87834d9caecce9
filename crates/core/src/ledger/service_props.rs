//! Property-based tests for the ledger engine's pure precondition chain.
//!
//! - balance sign conventions hold for every account category
//! - `validate_shape`/`check_balance` accept exactly the balanced, well-formed postings

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{balance_sign, calculate_totals, check_balance, validate_shape};
use super::types::{AccountCategory, EntryDirection, PostEntryInput};
use ledgerbank_shared::types::LedgerAccountId;

fn category_strategy() -> impl Strategy<Value = AccountCategory> {
    prop_oneof![
        Just(AccountCategory::Asset),
        Just(AccountCategory::Liability),
        Just(AccountCategory::Equity),
        Just(AccountCategory::Revenue),
        Just(AccountCategory::Expense),
    ]
}

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|c| Decimal::new(c, 2))
}

fn entry(direction: EntryDirection, amount: Decimal) -> PostEntryInput {
    PostEntryInput {
        account_id: LedgerAccountId::new(1),
        direction,
        amount,
        description: "prop".into(),
    }
}

proptest! {
    /// For any category and any non-negative debit/credit pair, a debit-normal
    /// category's balance is `debits - credits` and a credit-normal category's
    /// balance is the exact negation of that.
    #[test]
    fn sign_convention_is_debit_minus_credit_or_its_negation(
        category in category_strategy(),
        debits in cents(0..1_000_000),
        credits in cents(0..1_000_000),
    ) {
        let balance = balance_sign(category, debits, credits);
        if category.is_debit_normal() {
            prop_assert_eq!(balance, debits - credits);
        } else {
            prop_assert_eq!(balance, credits - debits);
            prop_assert_eq!(balance, -(debits - credits));
        }
    }

    /// Swapping which side is "debit-normal" for the same raw sums always
    /// negates the resulting balance, for every pair of totals.
    #[test]
    fn debit_normal_and_credit_normal_balances_are_negations(
        debits in cents(0..1_000_000),
        credits in cents(0..1_000_000),
    ) {
        let debit_normal = balance_sign(AccountCategory::Asset, debits, credits);
        let credit_normal = balance_sign(AccountCategory::Liability, debits, credits);
        prop_assert_eq!(debit_normal, -credit_normal);
    }

    /// Any pair of equal, strictly positive debit and credit amounts forms a
    /// balanced two-entry posting that `validate_shape`/`check_balance` accept.
    #[test]
    fn equal_debit_credit_pair_is_always_balanced(
        amount in cents(1..1_000_000),
    ) {
        let entries = vec![
            entry(EntryDirection::Debit, amount),
            entry(EntryDirection::Credit, amount),
        ];
        prop_assert!(validate_shape(&entries).is_ok());
        let (debit, credit) = calculate_totals(&entries);
        prop_assert!(check_balance(debit, credit).is_ok());
    }

    /// Any pair of distinct, strictly positive debit and credit amounts is
    /// shape-valid but never balances.
    #[test]
    fn unequal_debit_credit_pair_is_never_balanced(
        debit_amount in cents(1..1_000_000),
        credit_amount in cents(1..1_000_000),
    ) {
        prop_assume!(debit_amount != credit_amount);
        let entries = vec![
            entry(EntryDirection::Debit, debit_amount),
            entry(EntryDirection::Credit, credit_amount),
        ];
        prop_assert!(validate_shape(&entries).is_ok());
        let (debit, credit) = calculate_totals(&entries);
        prop_assert!(check_balance(debit, credit).is_err());
    }
}
