//! Audit log repository: the append-only operational record of significant
//! writes (status changes, postings), written alongside the primary write
//! in the same unit of work.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, Set};
use serde_json::Value;

use crate::entities::audit_log;

/// Appends one audit-log row using the caller's connection, so it commits
/// (or rolls back) together with whatever else that connection is doing.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub async fn record_impl<C: ConnectionTrait>(
    conn: &C,
    entity_type: &str,
    entity_id: &str,
    action: &str,
    detail: Value,
) -> Result<(), DbErr> {
    let active = audit_log::ActiveModel {
        entity_type: Set(entity_type.to_string()),
        entity_id: Set(entity_id.to_string()),
        action: Set(action.to_string()),
        detail: Set(detail),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    active.insert(conn).await?;
    Ok(())
}

/// Repository facade over the audit log, for callers not already inside a
/// shared database transaction.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    db: DatabaseConnection,
}

impl AuditRepository {
    /// Creates a new audit repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// See [`record_impl`].
    ///
    /// # Errors
    ///
    /// See [`record_impl`].
    pub async fn record(
        &self,
        entity_type: &str,
        entity_id: &str,
        action: &str,
        detail: Value,
    ) -> Result<(), DbErr> {
        record_impl(&self.db, entity_type, entity_id, action, detail).await
    }
}
