//! Pre-defined currencies: fiat money and crypto assets.

pub mod crypto;
pub mod fiat;

// Re-export all currencies at the `currencies` module level for convenience.
pub use crypto::*;
pub use fiat::*;

use crate::currency::Currency;

/// Find fiat metadata by code (case-insensitive).
pub fn find_fiat(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    FIAT.iter()
        .copied()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Find crypto metadata by code (case-insensitive). USD is included as the
/// reference unit.
pub fn find_crypto(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CRYPTO
        .iter()
        .copied()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_properties() {
        assert_eq!(USD.code, "USD");
        assert_eq!(USD.numeric_code, 840);
        assert_eq!(USD.rounding, 2);
    }

    #[test]
    fn pkr_display() {
        assert_eq!(format!("{}", &PKR), "PKR");
    }

    #[test]
    fn jpy_no_fractions() {
        assert_eq!(JPY.rounding, 0);
    }

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(find_fiat("gbp"), Some(&GBP));
        assert_eq!(find_crypto(" btc "), Some(&BTC));
        assert_eq!(find_crypto("usd"), Some(&USD));
        assert_eq!(find_fiat("BTC"), None);
    }
}
