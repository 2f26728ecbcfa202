//! Currency metadata for fiat currencies and crypto assets.

use ck_core::utilities::data_formatters::format_grouped;
use ck_core::Real;
use ck_math::round_closest;

/// Data describing a single currency or crypto asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "Pakistani Rupee").
    pub name: &'static str,
    /// Upper-case code (ISO 4217 for fiat, ticker for crypto).
    pub code: &'static str,
    /// ISO 4217 numeric code, 0 for crypto assets.
    pub numeric_code: u16,
    /// Symbol used in financial notation (e.g. "₨").
    pub symbol: &'static str,
    /// Decimal places used when displaying amounts.
    pub rounding: u8,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A monetary amount with an associated currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    /// Numeric value.
    pub value: Real,
    /// The currency.
    pub currency: &'static Currency,
}

impl Money {
    /// Create a new monetary amount.
    pub fn new(value: Real, currency: &'static Currency) -> Self {
        Self { value, currency }
    }

    /// The value rounded to the currency's display precision.
    pub fn rounded(&self) -> Real {
        round_closest(self.value, self.currency.rounding)
    }

    /// The value with the currency's decimals and thousands separators,
    /// without the code (e.g. `"27,850.00"`).
    pub fn formatted_value(&self) -> String {
        format_grouped(self.rounded(), usize::from(self.currency.rounding))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formatted_value(), self.currency.code)
    }
}
