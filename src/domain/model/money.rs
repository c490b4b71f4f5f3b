// src/domain/model/money.rs
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ConfigError;

/// Minor units per major unit of currency (cents per rand).
const MINOR_UNITS_DENOMINATION: u32 = 2;

/// A recognized currency for monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Zar,
}

impl Currency {
    /// ISO 4217 code of the currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Zar => "ZAR",
        }
    }
}

impl FromStr for Currency {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ZAR" => Ok(Currency::Zar),
            other => Err(ConfigError::UnsupportedCurrency(other.to_string())),
        }
    }
}

/// A monetary value in a specific currency.
///
/// The amount is held in the lowest denomination of the currency. Upstream
/// integer amounts are taken as already being minor units and are stored
/// without scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    currency: Currency,
    amount: i64,
}

impl Money {
    pub fn new(currency: Currency, amount: i64) -> Self {
        Self { currency, amount }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Amount in major units, rounded half-to-even to whole units.
    pub fn amount_in_major_units(&self) -> Decimal {
        Decimal::new(self.amount, MINOR_UNITS_DENOMINATION)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    }

    /// Renders the amount as a display string, e.g. `ZAR 138`.
    pub fn formatted(&self) -> String {
        format!("{} {}", self.currency.code(), self.amount_in_major_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amount_is_stored_as_minor_units() {
        let money = Money::new(Currency::Zar, 13_758);
        assert_eq!(money.amount(), 13_758);
        assert_eq!(money.amount_in_major_units(), dec!(138));
    }

    #[test]
    fn formatting_rounds_half_to_even() {
        // 1.50 rounds up to 2, 2.50 rounds down to 2
        assert_eq!(Money::new(Currency::Zar, 150).formatted(), "ZAR 2");
        assert_eq!(Money::new(Currency::Zar, 250).formatted(), "ZAR 2");
    }

    #[test]
    fn formatting_keeps_sign_of_negative_amounts() {
        assert_eq!(Money::new(Currency::Zar, -2_000).formatted(), "ZAR -20");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Money::new(Currency::Zar, 100),
            Money::new(Currency::Zar, 100)
        );
        assert_ne!(
            Money::new(Currency::Zar, 100),
            Money::new(Currency::Zar, 101)
        );
    }

    #[test]
    fn currency_parses_supported_code_only() {
        assert_eq!("ZAR".parse::<Currency>().unwrap(), Currency::Zar);
        assert!(matches!(
            "GBP".parse::<Currency>(),
            Err(ConfigError::UnsupportedCurrency(code)) if code == "GBP"
        ));
    }
}
