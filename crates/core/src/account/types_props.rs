//! Property-based tests for the account status state machine.
//!
//! Checks the transition table's shape holds for every pair of statuses,
//! not just the handful of pairs the example-based tests in `types.rs`
//! exercise by hand.

use proptest::prelude::*;

use super::types::AccountStatus;

fn status_strategy() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::Pending),
        Just(AccountStatus::Active),
        Just(AccountStatus::Frozen),
        Just(AccountStatus::Blocked),
        Just(AccountStatus::Closed),
    ]
}

proptest! {
    /// No status transitions to itself.
    #[test]
    fn no_status_can_transition_to_itself(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    /// CLOSED has no outgoing transitions, to any status.
    #[test]
    fn closed_has_no_outgoing_transitions(target in status_strategy()) {
        prop_assert!(!AccountStatus::Closed.can_transition_to(target));
    }

    /// The only status that can reach CLOSED other than PENDING/ACTIVE is
    /// BLOCKED; every legal transition into CLOSED originates from PENDING,
    /// ACTIVE, or BLOCKED, and FROZEN can never close directly.
    #[test]
    fn frozen_never_transitions_directly_to_closed(status in status_strategy()) {
        if status == AccountStatus::Frozen {
            prop_assert!(!status.can_transition_to(AccountStatus::Closed));
        }
    }

    /// `is_active` holds for exactly one status (ACTIVE) among all five.
    #[test]
    fn is_active_holds_for_active_only(status in status_strategy()) {
        prop_assert_eq!(status.is_active(), status == AccountStatus::Active);
    }

    /// `is_terminal` holds for exactly one status (CLOSED) among all five.
    #[test]
    fn is_terminal_holds_for_closed_only(status in status_strategy()) {
        prop_assert_eq!(status.is_terminal(), status == AccountStatus::Closed);
    }

    /// Every legal transition's destination is itself a reachable, distinct
    /// status from the table — i.e. `can_transition_to` never reports true
    /// for a pair the written table (in the `types.rs` doc comment) excludes.
    #[test]
    fn transition_table_matches_documented_adjacency(
        from in status_strategy(),
        to in status_strategy(),
    ) {
        let expected = matches!(
            (from, to),
            (AccountStatus::Pending, AccountStatus::Active | AccountStatus::Closed)
                | (AccountStatus::Active, AccountStatus::Frozen | AccountStatus::Blocked | AccountStatus::Closed)
                | (AccountStatus::Frozen, AccountStatus::Active | AccountStatus::Blocked)
                | (AccountStatus::Blocked, AccountStatus::Closed)
        );
        prop_assert_eq!(from.can_transition_to(to), expected);
    }
}
