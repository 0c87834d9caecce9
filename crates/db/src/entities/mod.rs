//! `SeaORM` entity definitions, one module per table.

pub mod accounts;
pub mod audit_log;
pub mod customers;
pub mod ledger_accounts;
pub mod ledger_entries;
pub mod sea_orm_active_enums;
pub mod transactions;
