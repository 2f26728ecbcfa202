//! Integration tests for the currency and crypto converters.

use approx::assert_abs_diff_eq;
use ck_core::Error;
use ck_currencies::currencies::{BTC, PKR};
use ck_currencies::{RateConvention, RateTable};
use proptest::prelude::*;

// ─── Fiat ────────────────────────────────────────────────────────────────────

#[test]
fn usd_to_pkr() {
    let conv = RateTable::fiat().convert(100.0, "USD", "PKR").unwrap();
    assert_abs_diff_eq!(conv.result.value, 27_850.0, epsilon = 1e-2);
    assert_eq!(conv.result.currency, &PKR);
    assert_eq!(conv.title(), "100 USD =");
    assert_eq!(conv.main_value(), "27,850.00 PKR");
    assert_eq!(conv.sub_value(4), "Rate: 1 USD = 278.5000 PKR");
}

#[test]
fn gbp_to_pkr_goes_through_usd() {
    let conv = RateTable::fiat().convert(1.0, "gbp", "pkr").unwrap();
    assert_abs_diff_eq!(conv.result.value, 278.50 / 0.79, epsilon = 1e-9);
    assert_eq!(conv.title(), "1 GBP =");
    assert_eq!(conv.main_value(), "352.53 PKR");
}

#[test]
fn same_currency_is_identity() {
    let conv = RateTable::fiat().convert(12.34, "EUR", "eur").unwrap();
    assert_eq!(conv.result.value, 12.34);
    assert_eq!(conv.rate.rate, 1.0);
}

#[test]
fn fiat_rejects_bad_amounts_and_codes() {
    let table = RateTable::fiat();
    assert!(matches!(
        table.convert(f64::NAN, "USD", "PKR"),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        table.convert(-5.0, "USD", "PKR"),
        Err(Error::InvalidInput(_))
    ));
    assert_eq!(
        table.convert(1.0, "USD", "XYZ").unwrap_err(),
        Error::UnsupportedCurrency("XYZ".into())
    );
}

// ─── Crypto ──────────────────────────────────────────────────────────────────

#[test]
fn btc_to_usd() {
    let table = RateTable::crypto();
    assert_eq!(table.convention(), RateConvention::ReferencePerUnit);
    let conv = table.convert(0.5, "BTC", "USD").unwrap();
    assert_abs_diff_eq!(conv.result.value, 32_500.0, epsilon = 1e-9);
    assert_eq!(conv.title(), "0.5 BTC =");
    assert_eq!(conv.main_value(), "32,500.00 USD");
    assert_eq!(conv.sub_value(4), "Rate: 1 BTC = 65,000.0000 USD");
}

#[test]
fn usd_to_btc_keeps_asset_precision() {
    let conv = RateTable::crypto().convert(1_000.0, "USD", "BTC").unwrap();
    assert_eq!(conv.result.currency, &BTC);
    assert_eq!(conv.main_value(), "0.01538462 BTC");
    assert_eq!(conv.sub_value(4), "Rate: 1 USD = 0.00001538 BTC");
}

#[test]
fn crypto_rejects_unknown_asset() {
    assert_eq!(
        RateTable::crypto().convert(1.0, "XYZ", "USD").unwrap_err(),
        Error::UnsupportedAsset("XYZ".into())
    );
    // Fiat codes other than the reference are not crypto assets.
    assert!(RateTable::crypto().convert(1.0, "PKR", "USD").is_err());
}

#[test]
fn fiat_rate_below_one_keeps_four_decimals() {
    let conv = RateTable::fiat().convert(1_000.0, "PKR", "USD").unwrap();
    assert_eq!(conv.main_value(), "3.59 USD");
    assert_eq!(conv.sub_value(4), "Rate: 1 PKR = 0.0036 USD");
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn conversion_is_deterministic(amount in 0.0f64..1e9, i in 0usize..11, j in 0usize..11) {
        let table = RateTable::fiat();
        let codes: Vec<_> = table.codes().collect();
        let a = table.convert(amount, codes[i], codes[j]).unwrap();
        let b = table.convert(amount, codes[i], codes[j]).unwrap();
        prop_assert_eq!(a.main_value(), b.main_value());
        prop_assert!((a.result.value - b.result.value).abs() <= 1e-2);
    }

    #[test]
    fn fiat_round_trip(amount in 0.01f64..1e9, i in 0usize..11, j in 0usize..11) {
        let table = RateTable::fiat();
        let codes: Vec<_> = table.codes().collect();
        let there = table.convert(amount, codes[i], codes[j]).unwrap();
        let back = table.convert(there.result.value, codes[j], codes[i]).unwrap();
        prop_assert!(((back.result.value - amount) / amount).abs() < 1e-9);
    }
}
