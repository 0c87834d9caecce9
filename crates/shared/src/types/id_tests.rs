use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_internal_id_roundtrip() {
    let id = TransactionId::new(42);
    assert_eq!(id.into_inner(), 42);
    assert_eq!(format!("{id}"), "42");
}

#[test]
fn test_internal_id_from_i64() {
    let id: CustomerId = 7.into();
    assert_eq!(id.into_inner(), 7);
}

#[test]
fn test_external_id_creation() {
    let id = TransactionExternalId::new();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_external_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let id = AccountExternalId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_external_id_default() {
    let id = CustomerExternalId::default();
    assert!(!id.to_string().is_empty());
}

#[test]
fn test_external_id_display() {
    let uuid = Uuid::new_v4();
    let id = LedgerTxnId::from_uuid(uuid);
    assert_eq!(format!("{id}"), uuid.to_string());
}

#[test]
fn test_external_id_from_str() {
    let uuid = Uuid::new_v4();
    let id = TransactionExternalId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
}

#[test]
fn test_external_id_from_str_error() {
    assert!(TransactionExternalId::from_str("invalid").is_err());
}
