use super::*;
use crate::types::money::CurrencyCode;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_money_creation() {
    let money = Money::new(Decimal::new(100, 2), CurrencyCode::USD);
    assert_eq!(money.amount, Decimal::new(100, 2));
    assert_eq!(money.currency, CurrencyCode::USD);
}

#[test]
fn test_money_zero() {
    let money = Money::zero(CurrencyCode::USD);
    assert_eq!(money.amount, Decimal::ZERO);
    assert!(money.is_zero());
}

#[test]
fn test_money_negative() {
    let money = Money::new(Decimal::new(-100, 2), CurrencyCode::USD);
    assert!(money.is_negative());
}

#[test]
fn test_currency_display() {
    assert_eq!(format!("{}", CurrencyCode::parse("usd").unwrap()), "USD");
    assert_eq!(format!("{}", CurrencyCode::parse("EUR").unwrap()), "EUR");
}

#[test]
fn test_currency_from_str() {
    assert_eq!(CurrencyCode::from_str("USD").unwrap(), CurrencyCode::USD);
    assert_eq!(CurrencyCode::from_str("usd").unwrap(), CurrencyCode::USD);
    assert!(CurrencyCode::from_str("INVALID").is_err());
    assert!(CurrencyCode::from_str("U5D").is_err());
}

#[test]
fn test_currency_equality_case_insensitive_input() {
    assert_eq!(
        CurrencyCode::parse("eur").unwrap(),
        CurrencyCode::parse("EUR").unwrap()
    );
}

#[test]
fn test_currency_default_is_usd() {
    assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
}
