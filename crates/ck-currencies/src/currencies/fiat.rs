//! Fiat currency definitions.

use crate::currency::Currency;

/// US Dollar, the reference currency of both rate tables.
pub static USD: Currency = Currency {
    name: "U.S. Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    rounding: 2,
};

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "€",
    rounding: 2,
};

/// British pound sterling.
pub static GBP: Currency = Currency {
    name: "British Pound",
    code: "GBP",
    numeric_code: 826,
    symbol: "£",
    rounding: 2,
};

/// Pakistani Rupee.
pub static PKR: Currency = Currency {
    name: "Pakistani Rupee",
    code: "PKR",
    numeric_code: 586,
    symbol: "₨",
    rounding: 2,
};

/// Indian Rupee.
pub static INR: Currency = Currency {
    name: "Indian Rupee",
    code: "INR",
    numeric_code: 356,
    symbol: "₹",
    rounding: 2,
};

/// UAE Dirham.
pub static AED: Currency = Currency {
    name: "UAE Dirham",
    code: "AED",
    numeric_code: 784,
    symbol: "د.إ",
    rounding: 2,
};

/// Saudi Riyal.
pub static SAR: Currency = Currency {
    name: "Saudi Riyal",
    code: "SAR",
    numeric_code: 682,
    symbol: "﷼",
    rounding: 2,
};

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "¥",
    rounding: 0,
};

/// Canadian Dollar.
pub static CAD: Currency = Currency {
    name: "Canadian Dollar",
    code: "CAD",
    numeric_code: 124,
    symbol: "C$",
    rounding: 2,
};

/// Australian Dollar.
pub static AUD: Currency = Currency {
    name: "Australian Dollar",
    code: "AUD",
    numeric_code: 36,
    symbol: "A$",
    rounding: 2,
};

/// Chinese Yuan Renminbi.
pub static CNY: Currency = Currency {
    name: "Chinese Yuan",
    code: "CNY",
    numeric_code: 156,
    symbol: "¥",
    rounding: 2,
};

/// Every fiat currency, in catalogue order.
pub static FIAT: [&Currency; 11] = [&USD, &EUR, &GBP, &PKR, &INR, &AED, &SAR, &JPY, &CAD, &AUD, &CNY];
