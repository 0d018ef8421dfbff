//! Runtime configuration read from the environment (and `.env`, if present).

use thiserror::Error;
use crate::domain::value_objects::{CurrencyCode, CurrencyError};

pub const CURRENCY_VAR: &str = "ORDER_FLOW_CURRENCY";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Currency used when printing totals. Display only.
    pub currency: CurrencyCode,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid ORDER_FLOW_CURRENCY: {0}")]
    Currency(#[from] CurrencyError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let currency = match lookup(CURRENCY_VAR) {
            Some(raw) => CurrencyCode::new(raw)?,
            None => CurrencyCode::default(),
        };
        Ok(Self { currency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency.as_str(), "USD");
    }

    #[test]
    fn test_currency_override() {
        let config = Config::from_lookup(|key| (key == CURRENCY_VAR).then(|| "uah".to_string())).unwrap();
        assert_eq!(config.currency.as_str(), "UAH");
    }

    #[test]
    fn test_invalid_currency() {
        let err = Config::from_lookup(|_| Some("hryvnia".into())).unwrap_err();
        assert!(err.to_string().starts_with("invalid ORDER_FLOW_CURRENCY"));
    }
}
