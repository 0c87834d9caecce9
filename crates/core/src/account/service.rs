//! Pure account-manager logic: the status state machine and the ledger
//! code/name derivation used when an account is opened.
//!
//! Like `ledger::service`, nothing here touches a database. Customer and
//! account lookups happen in `ledgerbank_db::repositories::account`, which
//! calls into these functions to gate the transition and derive the paired
//! ledger account's identity.

use ledgerbank_shared::types::CustomerId;

use super::error::AccountError;
use super::types::{AccountStatus, ProductType};

/// Validates a requested status transition against the state machine.
///
/// # Errors
///
/// Returns [`AccountError::IllegalTransition`] if `current -> target` is not
/// one of the legal edges.
pub fn validate_transition(current: AccountStatus, target: AccountStatus) -> Result<(), AccountError> {
    if current.can_transition_to(target) {
        Ok(())
    } else {
        Err(AccountError::IllegalTransition {
            from: current,
            to: target,
        })
    }
}

/// Derives the chart-of-accounts code for a customer's paired ledger
/// account: `CUST-<PRODUCT>-<customer id, zero-padded to 5 digits>`.
#[must_use]
pub fn derive_ledger_code(product_type: ProductType, customer_id: CustomerId) -> String {
    format!("CUST-{}-{:05}", product_type.code(), customer_id.into_inner())
}

/// Derives the display name for a customer's paired ledger account:
/// `"<first> <last> <PRODUCT>"`.
#[must_use]
pub fn derive_ledger_name(first_name: &str, last_name: &str, product_type: ProductType) -> String {
    format!("{first_name} {last_name} {}", product_type.code())
}

/// Decides whether entering `new_status` from `previous_status` should stamp
/// `opened_at`. True only the first time an account becomes ACTIVE — a
/// FROZEN -> ACTIVE re-entry must not overwrite the original timestamp.
#[must_use]
pub const fn should_set_opened_at(new_status: AccountStatus, opened_at_already_set: bool) -> bool {
    matches!(new_status, AccountStatus::Active) && !opened_at_already_set
}

/// Decides whether entering `new_status` should stamp `closed_at`. True
/// exactly on entry to CLOSED.
#[must_use]
pub const fn should_set_closed_at(new_status: AccountStatus) -> bool {
    matches!(new_status, AccountStatus::Closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_matches_state_machine() {
        let legal = [
            (AccountStatus::Pending, AccountStatus::Active),
            (AccountStatus::Pending, AccountStatus::Closed),
            (AccountStatus::Active, AccountStatus::Frozen),
            (AccountStatus::Active, AccountStatus::Blocked),
            (AccountStatus::Active, AccountStatus::Closed),
            (AccountStatus::Frozen, AccountStatus::Active),
            (AccountStatus::Frozen, AccountStatus::Blocked),
            (AccountStatus::Blocked, AccountStatus::Closed),
        ];
        for (from, to) in legal {
            assert!(validate_transition(from, to).is_ok(), "{from:?} -> {to:?}");
        }
    }

    #[test]
    fn every_other_pair_is_illegal() {
        let all = [
            AccountStatus::Pending,
            AccountStatus::Active,
            AccountStatus::Frozen,
            AccountStatus::Blocked,
            AccountStatus::Closed,
        ];
        let legal = [
            (AccountStatus::Pending, AccountStatus::Active),
            (AccountStatus::Pending, AccountStatus::Closed),
            (AccountStatus::Active, AccountStatus::Frozen),
            (AccountStatus::Active, AccountStatus::Blocked),
            (AccountStatus::Active, AccountStatus::Closed),
            (AccountStatus::Frozen, AccountStatus::Active),
            (AccountStatus::Frozen, AccountStatus::Blocked),
            (AccountStatus::Blocked, AccountStatus::Closed),
        ];
        for from in all {
            for to in all {
                let expect_ok = legal.contains(&(from, to));
                assert_eq!(validate_transition(from, to).is_ok(), expect_ok, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn ledger_code_is_zero_padded() {
        assert_eq!(
            derive_ledger_code(ProductType::Checking, CustomerId::new(7)),
            "CUST-CHECKING-00007"
        );
        assert_eq!(
            derive_ledger_code(ProductType::Savings, CustomerId::new(123_456)),
            "CUST-SAVINGS-123456"
        );
    }

    #[test]
    fn ledger_name_joins_parts() {
        assert_eq!(
            derive_ledger_name("Ada", "Lovelace", ProductType::Prepaid),
            "Ada Lovelace PREPAID"
        );
    }

    #[test]
    fn opened_at_set_only_on_first_activation() {
        assert!(should_set_opened_at(AccountStatus::Active, false));
        assert!(!should_set_opened_at(AccountStatus::Active, true));
        assert!(!should_set_opened_at(AccountStatus::Frozen, false));
    }

    #[test]
    fn closed_at_set_only_on_closure() {
        assert!(should_set_closed_at(AccountStatus::Closed));
        assert!(!should_set_closed_at(AccountStatus::Blocked));
    }
}
