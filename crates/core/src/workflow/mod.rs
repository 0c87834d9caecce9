//! Transaction orchestrator: deposit, withdrawal, transfer, and reversal,
//! each composed from one or two ledger postings.
//!
//! As with `ledger` and `account`, this module is pure. Idempotency,
//! account and transaction lookup, and the commit all live in
//! `ledgerbank_db::repositories::transaction`.

pub mod error;
pub mod reversal;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::TransactionError;
pub use reversal::{build_reversal_entries, net_signed_amount};
pub use types::{
    DepositInput, ReversalInput, TransactionStatus, TransactionType, TransferInput, WithdrawalInput,
};
