//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod customers;
pub mod health;
pub mod ledger;
pub mod transactions;

/// Creates the API router with all route groups merged.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(customers::routes())
        .merge(accounts::routes())
        .merge(transactions::routes())
        .merge(ledger::routes())
}
