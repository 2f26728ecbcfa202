//! Static rate tables.
//!
//! A [`RateTable`] stores one rate per currency, relative to the U.S.
//! dollar. Fiat tables quote "1 USD = N units"; crypto tables quote
//! "1 unit = N USD". Both defaults are compiled in and can be adjusted at
//! startup through [`RateTable::with_overrides`]. Rates are never fetched.

use std::collections::BTreeMap;

use ck_core::{ensure, Error, Rate, Real, Result};
use tracing::debug;

use crate::currencies::{self, USD};
use crate::currency::{Currency, Money};
use crate::exchange_rate::{CurrencyConversion, ExchangeRate};

/// How the rates of a table relate to the reference currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateConvention {
    /// `rate` units of the currency buy one reference unit (fiat).
    UnitsPerReference,
    /// One unit of the asset is worth `rate` reference units (crypto).
    ReferencePerUnit,
}

/// One row of a [`RateTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    /// Currency metadata.
    pub currency: &'static Currency,
    /// Rate relative to USD, in the table's convention.
    pub rate: Rate,
}

/// An immutable code → rate mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    convention: RateConvention,
    entries: Vec<RateEntry>,
}

const DEFAULT_FIAT: [(&str, Rate); 11] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("PKR", 278.50),
    ("INR", 83.50),
    ("AED", 3.67),
    ("SAR", 3.75),
    ("JPY", 151.40),
    ("CAD", 1.36),
    ("AUD", 1.52),
    ("CNY", 7.24),
];

const DEFAULT_CRYPTO: [(&str, Rate); 10] = [
    ("USD", 1.0),
    ("BTC", 65_000.0),
    ("ETH", 3_500.0),
    ("USDT", 1.0),
    ("BNB", 580.0),
    ("SOL", 150.0),
    ("XRP", 0.52),
    ("ADA", 0.45),
    ("DOGE", 0.15),
    ("LTC", 80.0),
];

impl RateTable {
    /// Build a table, checking that every rate is finite and positive,
    /// that no code appears twice and that USD is quoted at exactly 1.
    pub fn new(convention: RateConvention, entries: Vec<RateEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            ensure!(
                entry.rate.is_finite() && entry.rate > 0.0,
                "rate for {} must be positive, got {}",
                entry.currency.code,
                entry.rate
            );
            ensure!(
                !entries[..i].iter().any(|e| e.currency == entry.currency),
                "duplicate rate for {}",
                entry.currency.code
            );
        }
        ensure!(
            entries.iter().any(|e| e.currency == &USD && e.rate == 1.0),
            "rate table must quote USD at 1"
        );
        Ok(Self {
            convention,
            entries,
        })
    }

    /// The built-in fiat table ("1 USD = N units").
    pub fn fiat() -> Self {
        Self::from_defaults(RateConvention::UnitsPerReference, &DEFAULT_FIAT)
    }

    /// The built-in crypto table ("1 unit = N USD").
    pub fn crypto() -> Self {
        Self::from_defaults(RateConvention::ReferencePerUnit, &DEFAULT_CRYPTO)
    }

    fn from_defaults(convention: RateConvention, rows: &[(&str, Rate)]) -> Self {
        let find: fn(&str) -> Option<&'static Currency> = match convention {
            RateConvention::UnitsPerReference => currencies::find_fiat,
            RateConvention::ReferencePerUnit => currencies::find_crypto,
        };
        let entries = rows
            .iter()
            .filter_map(|&(code, rate)| find(code).map(|currency| RateEntry { currency, rate }))
            .collect();
        Self {
            convention,
            entries,
        }
    }

    /// Return a copy of this table with some rates replaced.
    ///
    /// Override codes are matched case-insensitively and must name a
    /// currency this table's kind knows about.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, Real>) -> Result<Self> {
        let mut entries = self.entries.clone();
        for (code, &rate) in overrides {
            let currency = self.metadata(code)?;
            match entries.iter_mut().find(|e| e.currency == currency) {
                Some(entry) => entry.rate = rate,
                None => entries.push(RateEntry { currency, rate }),
            }
        }
        Self::new(self.convention, entries)
    }

    /// The table's convention.
    pub fn convention(&self) -> RateConvention {
        self.convention
    }

    /// Rows in catalogue order.
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Codes in catalogue order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.currency.code)
    }

    /// Find the row for `code` (case-insensitive).
    pub fn entry(&self, code: &str) -> Result<&RateEntry> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|e| e.currency.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| self.unsupported(code))
    }

    /// The rate quoted for `code`.
    pub fn rate(&self, code: &str) -> Result<Rate> {
        self.entry(code).map(|e| e.rate)
    }

    /// Whether `code` has a rate in this table.
    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_ok()
    }

    /// The effective rate: how many `to` one `from` buys.
    pub fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate> {
        let source = self.entry(from)?;
        let target = self.entry(to)?;
        let rate = if source.currency == target.currency {
            1.0
        } else {
            match self.convention {
                RateConvention::UnitsPerReference => target.rate / source.rate,
                RateConvention::ReferencePerUnit => source.rate / target.rate,
            }
        };
        Ok(ExchangeRate::new(source.currency, target.currency, rate))
    }

    /// Convert `amount` of `from` into `to`.
    ///
    /// The amount goes through USD. When both codes name the same currency
    /// the amount is returned unchanged.
    pub fn convert(&self, amount: Real, from: &str, to: &str) -> Result<CurrencyConversion> {
        ensure!(amount.is_finite(), "Enter a valid amount");
        ensure!(amount >= 0.0, "Amount cannot be negative");
        let source = self.entry(from)?;
        let target = self.entry(to)?;
        let rate = self.exchange_rate(from, to)?;
        let value = if source.currency == target.currency {
            amount
        } else {
            match self.convention {
                RateConvention::UnitsPerReference => amount / source.rate * target.rate,
                RateConvention::ReferencePerUnit => amount * source.rate / target.rate,
            }
        };
        debug!(
            amount,
            from = source.currency.code,
            to = target.currency.code,
            result = value,
            "currency conversion"
        );
        Ok(CurrencyConversion {
            amount: Money::new(amount, source.currency),
            result: Money::new(value, target.currency),
            rate,
            convention: self.convention,
        })
    }

    fn metadata(&self, code: &str) -> Result<&'static Currency> {
        let found = match self.convention {
            RateConvention::UnitsPerReference => currencies::find_fiat(code),
            RateConvention::ReferencePerUnit => currencies::find_crypto(code),
        };
        found.ok_or_else(|| self.unsupported(code.trim()))
    }

    fn unsupported(&self, code: &str) -> Error {
        let code = code.to_uppercase();
        match self.convention {
            RateConvention::UnitsPerReference => Error::UnsupportedCurrency(code),
            RateConvention::ReferencePerUnit => Error::UnsupportedAsset(code),
        }
    }
}
