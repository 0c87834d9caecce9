//! Transaction orchestrator domain types: the transaction kinds, their
//! lifecycle status, and the per-operation input shapes.

use ledgerbank_shared::types::{AccountId, CurrencyCode, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of business transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Cash deposit into a customer account.
    Deposit,
    /// Cash withdrawal from a customer account.
    Withdrawal,
    /// Transfer between two customer accounts.
    Transfer,
    /// Reversal of a previously completed transaction.
    Reversal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer => "TRANSFER",
            Self::Reversal => "REVERSAL",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle status of a business transaction.
///
/// A transaction is created in PROCESSING, then moves to exactly one of
/// COMPLETED or FAILED once its ledger postings are attempted. A COMPLETED
/// transaction may later move to REVERSED once a reversal against it
/// completes; this is the only transition out of COMPLETED. PENDING exists
/// ahead of PROCESSING for orchestration paths that must queue a request
/// before a posting attempt is made; the repository's own deposit/withdraw/
/// transfer/reverse operations insert directly into PROCESSING and never
/// produce a PENDING row today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Accepted but not yet taken up for processing.
    Pending,
    /// Row created, ledger posting not yet attempted or in flight.
    Processing,
    /// Ledger posting succeeded.
    Completed,
    /// Ledger posting failed; the transaction carries no ledger entries.
    Failed,
    /// A reversal against this transaction has completed.
    Reversed,
}

impl TransactionStatus {
    /// Returns true if a transaction in this status may be reversed.
    #[must_use]
    pub const fn is_reversible(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Reversed => "REVERSED",
        };
        write!(f, "{s}")
    }
}

/// Input for a deposit: credits a customer account from the bank's cash
/// account.
#[derive(Debug, Clone)]
pub struct DepositInput {
    /// Client-supplied idempotency key.
    pub idempotency_key: String,
    /// The account to credit.
    pub account_id: AccountId,
    /// The amount to deposit, strictly positive.
    pub amount: Decimal,
    /// The transaction currency.
    pub currency: CurrencyCode,
    /// Free-form description.
    pub description: String,
}

/// Input for a withdrawal: debits a customer account into the bank's cash
/// account.
#[derive(Debug, Clone)]
pub struct WithdrawalInput {
    /// Client-supplied idempotency key.
    pub idempotency_key: String,
    /// The account to debit.
    pub account_id: AccountId,
    /// The amount to withdraw, strictly positive.
    pub amount: Decimal,
    /// The transaction currency.
    pub currency: CurrencyCode,
    /// Free-form description.
    pub description: String,
}

/// Input for a transfer between two customer accounts.
#[derive(Debug, Clone)]
pub struct TransferInput {
    /// Client-supplied idempotency key.
    pub idempotency_key: String,
    /// The account to debit.
    pub source_account_id: AccountId,
    /// The account to credit.
    pub destination_account_id: AccountId,
    /// The amount to transfer, strictly positive.
    pub amount: Decimal,
    /// The transaction currency.
    pub currency: CurrencyCode,
    /// Free-form description.
    pub description: String,
}

/// Input for reversing a previously completed transaction.
#[derive(Debug, Clone)]
pub struct ReversalInput {
    /// Client-supplied idempotency key.
    pub idempotency_key: String,
    /// The transaction being reversed.
    pub original_transaction_id: TransactionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_is_reversible() {
        assert!(TransactionStatus::Completed.is_reversible());
        assert!(!TransactionStatus::Pending.is_reversible());
        assert!(!TransactionStatus::Processing.is_reversible());
        assert!(!TransactionStatus::Failed.is_reversible());
        assert!(!TransactionStatus::Reversed.is_reversible());
    }

    #[test]
    fn type_display_is_uppercase() {
        assert_eq!(TransactionType::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TransactionType::Reversal.to_string(), "REVERSAL");
    }

    #[test]
    fn status_display_is_uppercase() {
        assert_eq!(TransactionStatus::Pending.to_string(), "PENDING");
        assert_eq!(TransactionStatus::Processing.to_string(), "PROCESSING");
        assert_eq!(TransactionStatus::Reversed.to_string(), "REVERSED");
    }
}
