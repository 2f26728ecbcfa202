//! # ck-currencies
//!
//! Currency metadata, the static fiat and crypto rate tables and the
//! currency/crypto converter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency data and the `Money` amount type.
pub mod currency;

/// Exchange rates and conversion records.
pub mod exchange_rate;

/// Pre-defined fiat currencies and crypto assets.
pub mod currencies;

/// Static rate tables relative to the U.S. dollar.
pub mod rate_table;

pub use currency::{Currency, Money};
pub use exchange_rate::{CurrencyConversion, ExchangeRate};
pub use rate_table::{RateConvention, RateEntry, RateTable};
