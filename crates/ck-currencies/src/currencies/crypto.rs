//! Crypto asset definitions.

use super::fiat::USD;
use crate::currency::Currency;

/// Bitcoin.
pub static BTC: Currency = Currency {
    name: "Bitcoin",
    code: "BTC",
    numeric_code: 0,
    symbol: "₿",
    rounding: 8,
};

/// Ethereum.
pub static ETH: Currency = Currency {
    name: "Ethereum",
    code: "ETH",
    numeric_code: 0,
    symbol: "Ξ",
    rounding: 8,
};

/// Tether.
pub static USDT: Currency = Currency {
    name: "Tether",
    code: "USDT",
    numeric_code: 0,
    symbol: "₮",
    rounding: 6,
};

/// BNB.
pub static BNB: Currency = Currency {
    name: "BNB",
    code: "BNB",
    numeric_code: 0,
    symbol: "BNB",
    rounding: 8,
};

/// Solana.
pub static SOL: Currency = Currency {
    name: "Solana",
    code: "SOL",
    numeric_code: 0,
    symbol: "◎",
    rounding: 8,
};

/// XRP.
pub static XRP: Currency = Currency {
    name: "XRP",
    code: "XRP",
    numeric_code: 0,
    symbol: "XRP",
    rounding: 6,
};

/// Cardano.
pub static ADA: Currency = Currency {
    name: "Cardano",
    code: "ADA",
    numeric_code: 0,
    symbol: "₳",
    rounding: 6,
};

/// Dogecoin.
pub static DOGE: Currency = Currency {
    name: "Dogecoin",
    code: "DOGE",
    numeric_code: 0,
    symbol: "Ð",
    rounding: 8,
};

/// Litecoin.
pub static LTC: Currency = Currency {
    name: "Litecoin",
    code: "LTC",
    numeric_code: 0,
    symbol: "Ł",
    rounding: 8,
};

/// Every asset of the crypto table, in catalogue order. USD is the
/// reference unit and can be converted to and from.
pub static CRYPTO: [&Currency; 10] = [&USD, &BTC, &ETH, &USDT, &BNB, &SOL, &XRP, &ADA, &DOGE, &LTC];
