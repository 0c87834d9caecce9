//! Reversal entry construction: mirrors a completed transaction's ledger
//! entries with debit and credit swapped, so the net effect cancels out.

use ledgerbank_shared::types::LedgerAccountId;
use rust_decimal::Decimal;

use crate::ledger::types::{EntryDirection, LedgerEntry, PostEntryInput};

/// Builds the entries for reversing a transaction, mirroring each original
/// entry with its direction flipped and its description prefixed.
#[must_use]
pub fn build_reversal_entries(original_entries: &[LedgerEntry]) -> Vec<PostEntryInput> {
    original_entries
        .iter()
        .map(|entry| PostEntryInput {
            account_id: entry.account_id,
            direction: entry.direction.flipped(),
            amount: entry.amount,
            description: format!("Reversal: {}", entry.description),
        })
        .collect()
}

/// Sums signed amounts across a set of entries, used to confirm a
/// transaction's original postings were balanced before reversing them.
#[must_use]
pub fn net_signed_amount(entries: &[LedgerEntry]) -> Decimal {
    entries.iter().map(LedgerEntry::signed_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ledgerbank_shared::types::{CurrencyCode, LedgerEntryId, LedgerTxnId};
    use rust_decimal_macros::dec;

    fn entry(account: i64, direction: EntryDirection, amount: Decimal) -> LedgerEntry {
        LedgerEntry {
            id: LedgerEntryId::new(1),
            transaction_id: LedgerTxnId::new(),
            account_id: LedgerAccountId::new(account),
            direction,
            amount,
            currency: CurrencyCode::USD,
            description: "deposit".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reversal_flips_direction_and_prefixes_description() {
        let originals = vec![
            entry(1, EntryDirection::Debit, dec!(100)),
            entry(2, EntryDirection::Credit, dec!(100)),
        ];
        let reversed = build_reversal_entries(&originals);
        assert_eq!(reversed[0].direction, EntryDirection::Credit);
        assert_eq!(reversed[1].direction, EntryDirection::Debit);
        assert_eq!(reversed[0].description, "Reversal: deposit");
        assert_eq!(reversed[0].amount, dec!(100));
        assert_eq!(reversed[0].account_id, LedgerAccountId::new(1));
    }

    #[test]
    fn net_signed_amount_of_balanced_entries_is_zero() {
        let originals = vec![
            entry(1, EntryDirection::Debit, dec!(100)),
            entry(2, EntryDirection::Credit, dec!(100)),
        ];
        assert_eq!(net_signed_amount(&originals), Decimal::ZERO);
    }
}
