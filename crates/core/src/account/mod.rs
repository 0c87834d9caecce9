//! Account manager: customer-facing account lifecycle and the state
//! machine that governs it.
//!
//! As with `ledger`, this module is pure — customer/account lookups and
//! persistence live in `ledgerbank_db::repositories::account`.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod types_props;

pub use error::AccountError;
pub use types::{AccountStatus, KycStatus, ProductType};
