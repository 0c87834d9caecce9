//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! `ledger` and `audit` additionally expose `*_impl` free functions so
//! `account` and `transaction` can compose their writes into one database
//! transaction.

pub mod account;
pub mod audit;
pub mod conv;
pub mod ledger;
pub mod transaction;

pub use account::AccountRepository;
pub use audit::AuditRepository;
pub use ledger::LedgerRepository;
pub use transaction::TransactionRepository;
