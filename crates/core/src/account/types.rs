//! Account manager domain types: products, the customer-facing account
//! status state machine, and KYC status.

use serde::{Deserialize, Serialize};

/// Customer-facing product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
    /// Credit account.
    Credit,
    /// Prepaid account.
    Prepaid,
}

impl ProductType {
    /// The short code used in derived ledger-account codes
    /// (`CUST-<PRODUCT>-<id>`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Savings => "SAVINGS",
            Self::Credit => "CREDIT",
            Self::Prepaid => "PREPAID",
        }
    }
}

/// KYC verification status of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KycStatus {
    /// Not yet reviewed. Default on creation.
    Pending,
    /// Identity verified.
    Verified,
    /// Verification rejected.
    Rejected,
}

/// Lifecycle status of a customer-facing account.
///
/// Legal transitions:
///
/// ```text
/// PENDING  -> { ACTIVE, CLOSED }
/// ACTIVE   -> { FROZEN, BLOCKED, CLOSED }
/// FROZEN   -> { ACTIVE, BLOCKED }
/// BLOCKED  -> { CLOSED }
/// CLOSED   -> {}   (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    /// Opened but not yet activated. Default on creation.
    Pending,
    /// Can transact.
    Active,
    /// Temporarily suspended, reversible.
    Frozen,
    /// Suspended pending investigation, only closable from here.
    Blocked,
    /// Terminal. No further transitions, no further postings.
    Closed,
}

impl AccountStatus {
    /// Returns true if transitioning from `self` to `target` is legal.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Active | Self::Closed)
                | (Self::Active, Self::Frozen | Self::Blocked | Self::Closed)
                | (Self::Frozen, Self::Active | Self::Blocked)
                | (Self::Blocked, Self::Closed)
        )
    }

    /// Returns true if this status accepts ledger postings against the
    /// account's paired ledger account.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true for the terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_reach_active_or_closed() {
        assert!(AccountStatus::Pending.can_transition_to(AccountStatus::Active));
        assert!(AccountStatus::Pending.can_transition_to(AccountStatus::Closed));
        assert!(!AccountStatus::Pending.can_transition_to(AccountStatus::Frozen));
        assert!(!AccountStatus::Pending.can_transition_to(AccountStatus::Blocked));
    }

    #[test]
    fn active_can_reach_frozen_blocked_or_closed() {
        for target in [AccountStatus::Frozen, AccountStatus::Blocked, AccountStatus::Closed] {
            assert!(AccountStatus::Active.can_transition_to(target));
        }
        assert!(!AccountStatus::Active.can_transition_to(AccountStatus::Pending));
    }

    #[test]
    fn frozen_can_return_to_active_or_go_blocked() {
        assert!(AccountStatus::Frozen.can_transition_to(AccountStatus::Active));
        assert!(AccountStatus::Frozen.can_transition_to(AccountStatus::Blocked));
        assert!(!AccountStatus::Frozen.can_transition_to(AccountStatus::Closed));
    }

    #[test]
    fn blocked_can_only_close() {
        assert!(AccountStatus::Blocked.can_transition_to(AccountStatus::Closed));
        assert!(!AccountStatus::Blocked.can_transition_to(AccountStatus::Active));
        assert!(!AccountStatus::Blocked.can_transition_to(AccountStatus::Frozen));
    }

    #[test]
    fn closed_is_terminal() {
        for target in [
            AccountStatus::Pending,
            AccountStatus::Active,
            AccountStatus::Frozen,
            AccountStatus::Blocked,
            AccountStatus::Closed,
        ] {
            assert!(!AccountStatus::Closed.can_transition_to(target));
        }
        assert!(AccountStatus::Closed.is_terminal());
    }

    #[test]
    fn no_self_transitions_are_legal() {
        for status in [
            AccountStatus::Pending,
            AccountStatus::Active,
            AccountStatus::Frozen,
            AccountStatus::Blocked,
            AccountStatus::Closed,
        ] {
            assert!(!status.can_transition_to(status));
        }
    }
}
