//! HTTP API layer with Axum routes: a thin adapter over the repository
//! layer, per the four-route-group surface (customers, accounts,
//! transactions, ledger) plus health.

pub mod error;
pub mod routes;

use axum::Router;
use ledgerbank_db::{AccountRepository, LedgerRepository, TransactionRepository};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers: one cheaply-cloneable
/// repository per subsystem, plus the bare connection for the health probe.
#[derive(Clone)]
pub struct AppState {
    /// Raw connection, used only for the liveness probe.
    pub db: DatabaseConnection,
    /// Customer and customer-facing account operations.
    pub accounts: AccountRepository,
    /// Chart of accounts and the entry log.
    pub ledger: LedgerRepository,
    /// Deposit, withdrawal, transfer, and reversal orchestration.
    pub transactions: TransactionRepository,
}

impl AppState {
    /// Builds application state from a single database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            accounts: AccountRepository::new(db.clone()),
            ledger: LedgerRepository::new(db.clone()),
            transactions: TransactionRepository::new(db.clone()),
            db,
        }
    }
}

/// Creates the main application router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
