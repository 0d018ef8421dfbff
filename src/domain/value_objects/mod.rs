//! Value Objects for the order flow

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Three-letter currency code, used for display only
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(value: impl Into<String>) -> Result<Self, CurrencyError> {
        let value = value.into().trim().to_uppercase();
        if value.is_empty() { return Err(CurrencyError::Empty); }
        if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::Malformed(value));
        }
        Ok(Self(value))
    }
    pub fn usd() -> Self { Self("USD".to_string()) }
    pub fn as_str(&self) -> &str { &self.0 }

    fn symbol(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "UAH" => Some("₴"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

impl Default for CurrencyCode { fn default() -> Self { Self::usd() } }

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum CurrencyError { Empty, Malformed(String) }
impl std::error::Error for CurrencyError {}
impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Currency code empty"),
            Self::Malformed(code) => write!(f, "Currency code must be three letters, got {code:?}"),
        }
    }
}

/// Money value object.
///
/// Only formats amounts; no arithmetic across currencies is offered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Money { amount: Decimal, currency: CurrencyCode }

impl Money {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self { Self { amount, currency } }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() { "-" } else { "" };
        let abs = self.amount.abs().round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{sign}{symbol}{abs:.2}"),
            None => write!(f, "{sign}{abs:.2} {}", self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_currency_code() {
        assert_eq!(CurrencyCode::new(" eur ").unwrap().as_str(), "EUR");
        assert_eq!(CurrencyCode::new(""), Err(CurrencyError::Empty));
        assert!(matches!(CurrencyCode::new("DOLLARS"), Err(CurrencyError::Malformed(_))));
        assert!(matches!(CurrencyCode::new("U5D"), Err(CurrencyError::Malformed(_))));
    }
    #[test]
    fn test_money_display() {
        let usd = |amount| Money::new(amount, CurrencyCode::usd()).to_string();
        assert_eq!(usd(Decimal::new(103597, 2)), "$1035.97");
        assert_eq!(usd(Decimal::new(20, 0)), "$20.00");
        assert_eq!(usd(Decimal::ZERO), "$0.00");
        assert_eq!(usd(Decimal::new(-5, 0)), "-$5.00");
        let chf = Money::new(Decimal::new(1999, 2), CurrencyCode::new("CHF").unwrap());
        assert_eq!(chf.to_string(), "19.99 CHF");
    }
    #[test]
    fn test_money_rounds_midpoint_away_from_zero() {
        let usd = |amount| Money::new(amount, CurrencyCode::usd()).to_string();
        assert_eq!(usd(Decimal::new(1005, 3)), "$1.01");
        assert_eq!(usd(Decimal::new(125, 3)), "$0.13");
        assert_eq!(usd(Decimal::new(-125, 3)), "-$0.13");
        assert_eq!(usd(Decimal::new(1004, 3)), "$1.00");
    }
}
