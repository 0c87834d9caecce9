//! Double-entry bookkeeping logic: the chart of accounts and the
//! append-only entry log.
//!
//! This module implements pure validation and arithmetic only — posting,
//! balance aggregation, and idempotency all require a database round-trip
//! and live in `ledgerbank_db::repositories::ledger`.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use types::{
    AccountCategory, EntryDirection, IntegrityReport, LedgerAccountInfo, LedgerEntry,
    PostEntriesInput, PostEntryInput,
};
