//! Ledger domain types: the chart of accounts, postings, and balances.
//!
//! These are pure value types — no database or HTTP dependency lives here.
//! Wire form for the two enums is the exact uppercase string named by the
//! spec (`DEBIT`, `ASSET`, ...); internal representation is a tagged Rust
//! enum.

use chrono::{DateTime, Utc};
use ledgerbank_shared::types::{CurrencyCode, LedgerAccountId, LedgerEntryId, LedgerTxnId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
///
/// Debits increase ASSET/EXPENSE accounts and decrease
/// LIABILITY/EQUITY/REVENUE accounts; credits do the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryDirection {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

impl EntryDirection {
    /// Returns the opposite direction, used when mirroring entries for a reversal.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

/// Accounting category of a chart-of-accounts entry.
///
/// Determines the sign convention used by [`crate::ledger::service::balance_sign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountCategory {
    /// Asset account — debit-normal.
    Asset,
    /// Liability account — credit-normal.
    Liability,
    /// Equity account — credit-normal.
    Equity,
    /// Revenue account — credit-normal.
    Revenue,
    /// Expense account — debit-normal.
    Expense,
}

impl AccountCategory {
    /// Returns true for categories whose balance increases with a debit.
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }
}

/// The minimal view of a ledger account the ledger engine needs to validate
/// a posting against. Supplied by the caller (the `db` crate), never
/// fetched by the core itself.
#[derive(Debug, Clone)]
pub struct LedgerAccountInfo {
    /// Primary key of the account.
    pub id: LedgerAccountId,
    /// Unique chart-of-accounts code.
    pub code: String,
    /// Accounting category, fixed at creation.
    pub category: AccountCategory,
    /// Currency, fixed at creation.
    pub currency: CurrencyCode,
    /// Whether the account currently accepts postings.
    pub is_active: bool,
}

/// One entry in an as-yet-unposted group.
#[derive(Debug, Clone)]
pub struct PostEntryInput {
    /// The ledger account to post to.
    pub account_id: LedgerAccountId,
    /// Debit or credit.
    pub direction: EntryDirection,
    /// The amount, always positive.
    pub amount: Decimal,
    /// Free-form description, at most 255 characters.
    pub description: String,
}

/// A full posting request: a balanced group of entries sharing one
/// ledger-transaction id.
#[derive(Debug, Clone)]
pub struct PostEntriesInput {
    /// The ledger-transaction id. Shared by every entry; not unique per entry.
    pub txn_id: LedgerTxnId,
    /// Currency for the posting; every participating account must match it.
    pub currency: CurrencyCode,
    /// The entries to post. Must contain at least one debit and one credit.
    pub entries: Vec<PostEntryInput>,
}

/// A persisted, immutable ledger entry.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Primary key.
    pub id: LedgerEntryId,
    /// The posting this entry belongs to.
    pub transaction_id: LedgerTxnId,
    /// The account this entry targets.
    pub account_id: LedgerAccountId,
    /// Debit or credit.
    pub direction: EntryDirection,
    /// The amount, always positive.
    pub amount: Decimal,
    /// Currency stamped from the posting, not client-supplied.
    pub currency: CurrencyCode,
    /// Free-form description.
    pub description: String,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Returns the entry's amount signed so that debits are positive and
    /// credits negative, independent of account category. Summing this
    /// across a posting must be zero for a balanced group.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            EntryDirection::Debit => self.amount,
            EntryDirection::Credit => -self.amount,
        }
    }
}

/// Result of [`crate::ledger::service::check_integrity`]: the global
/// debit/credit balance across the entire ledger.
#[derive(Debug, Clone, Copy)]
pub struct IntegrityReport {
    /// Sum of every debit entry in the ledger.
    pub total_debits: Decimal,
    /// Sum of every credit entry in the ledger.
    pub total_credits: Decimal,
    /// Signed gap between debits and credits.
    pub difference: Decimal,
    /// Whether the ledger is balanced (`difference == 0`).
    pub is_balanced: bool,
}

impl IntegrityReport {
    /// Builds a report from aggregate debit/credit sums.
    #[must_use]
    pub fn new(total_debits: Decimal, total_credits: Decimal) -> Self {
        let difference = total_debits - total_credits;
        Self {
            total_debits,
            total_credits,
            difference,
            is_balanced: difference.is_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_flips_to_credit() {
        assert_eq!(EntryDirection::Debit.flipped(), EntryDirection::Credit);
        assert_eq!(EntryDirection::Credit.flipped(), EntryDirection::Debit);
    }

    #[test]
    fn asset_and_expense_are_debit_normal() {
        assert!(AccountCategory::Asset.is_debit_normal());
        assert!(AccountCategory::Expense.is_debit_normal());
        assert!(!AccountCategory::Liability.is_debit_normal());
        assert!(!AccountCategory::Equity.is_debit_normal());
        assert!(!AccountCategory::Revenue.is_debit_normal());
    }

    #[test]
    fn integrity_report_balanced() {
        let report = IntegrityReport::new(Decimal::new(100_00, 2), Decimal::new(100_00, 2));
        assert!(report.is_balanced);
        assert_eq!(report.difference, Decimal::ZERO);
    }

    #[test]
    fn integrity_report_unbalanced() {
        let report = IntegrityReport::new(Decimal::new(150_00, 2), Decimal::new(100_00, 2));
        assert!(!report.is_balanced);
        assert_eq!(report.difference, Decimal::new(50_00, 2));
    }

    #[test]
    fn signed_amount_matches_direction() {
        let entry = LedgerEntry {
            id: LedgerEntryId::new(1),
            transaction_id: LedgerTxnId::new(),
            account_id: LedgerAccountId::new(1),
            direction: EntryDirection::Credit,
            amount: Decimal::new(500, 2),
            currency: CurrencyCode::USD,
            description: "test".into(),
            created_at: Utc::now(),
        };
        assert_eq!(entry.signed_amount(), Decimal::new(-500, 2));
    }
}
