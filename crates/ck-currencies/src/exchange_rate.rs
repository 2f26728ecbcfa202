//! Exchange rates and the record of a completed conversion.

use ck_core::utilities::data_formatters::{format_grouped, format_grouped_trimmed};
use ck_core::Rate;

use crate::currency::{Currency, Money};
use crate::rate_table::RateConvention;

/// Most decimals shown for an amount or a rate.
const MAX_DECIMALS: usize = 12;

/// An exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    /// The source currency.
    pub source: &'static Currency,
    /// The target currency.
    pub target: &'static Currency,
    /// Rate: how many units of `target` one unit of `source` buys.
    pub rate: Rate,
}

impl ExchangeRate {
    /// Create a new exchange rate.
    pub fn new(source: &'static Currency, target: &'static Currency, rate: Rate) -> Self {
        Self {
            source,
            target,
            rate,
        }
    }

    /// Render the rate with exactly `decimals` places.
    pub fn display_rate(&self, decimals: u8) -> String {
        format_grouped(self.rate, usize::from(decimals))
    }

    /// Render the rate with at least `min_decimals` places. Rates below one
    /// get enough extra places to show four significant digits.
    pub fn display_rate_significant(&self, min_decimals: u8) -> String {
        format_grouped(self.rate, rate_decimals(self.rate, min_decimals))
    }
}

fn rate_decimals(rate: Rate, min_decimals: u8) -> usize {
    let min = usize::from(min_decimals);
    if !(rate > 0.0 && rate < 1.0) {
        return min;
    }
    let leading_zeros = (-rate.log10()).floor() as usize;
    min.max(leading_zeros + 4).min(MAX_DECIMALS)
}

/// The outcome of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConversion {
    /// The amount supplied.
    pub amount: Money,
    /// The converted amount.
    pub result: Money,
    /// The effective rate applied.
    pub rate: ExchangeRate,
    /// Quoting convention of the table the rate came from.
    pub convention: RateConvention,
}

impl CurrencyConversion {
    /// `"{amount} {FROM} ="`.
    pub fn title(&self) -> String {
        format!(
            "{} {} =",
            format_grouped_trimmed(self.amount.value, MAX_DECIMALS),
            self.amount.currency.code
        )
    }

    /// `"{result} {TO}"`, fixed to the target's display rounding.
    pub fn main_value(&self) -> String {
        self.result.to_string()
    }

    /// `"Rate: 1 {FROM} = {rate} {TO}"`.
    ///
    /// Fiat rates use `rate_decimals` places. Crypto rates below one widen
    /// to four significant digits.
    pub fn sub_value(&self, rate_decimals: u8) -> String {
        let rate = match self.convention {
            RateConvention::UnitsPerReference => self.rate.display_rate(rate_decimals),
            RateConvention::ReferencePerUnit => self.rate.display_rate_significant(rate_decimals),
        };
        format!(
            "Rate: 1 {} = {} {}",
            self.rate.source.code, rate, self.rate.target.code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{BTC, EUR, PKR, USD};

    #[test]
    fn small_rates_keep_significant_digits() {
        let usd_eur = ExchangeRate::new(&USD, &EUR, 0.92);
        assert_eq!(usd_eur.display_rate_significant(4), "0.9200");
        assert_eq!(
            ExchangeRate::new(&USD, &BTC, 1.0 / 65_000.0).display_rate_significant(4),
            "0.00001538"
        );
        assert_eq!(
            ExchangeRate::new(&BTC, &USD, 65_000.0).display_rate_significant(4),
            "65,000.0000"
        );
    }

    #[test]
    fn fiat_rates_use_fixed_decimals() {
        let conversion = CurrencyConversion {
            amount: Money::new(1.0, &PKR),
            result: Money::new(1.0 / 278.5, &USD),
            rate: ExchangeRate::new(&PKR, &USD, 1.0 / 278.5),
            convention: RateConvention::UnitsPerReference,
        };
        assert_eq!(conversion.sub_value(4), "Rate: 1 PKR = 0.0036 USD");
        assert_eq!(
            CurrencyConversion {
                convention: RateConvention::ReferencePerUnit,
                ..conversion
            }
            .sub_value(4),
            "Rate: 1 PKR = 0.003591 USD"
        );
    }
}
