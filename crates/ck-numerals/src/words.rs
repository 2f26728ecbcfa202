//! English number names.
//!
//! `12345` → `"twelve thousand three hundred forty-five"`. Magnitudes up to
//! (but excluding) one quintillion are supported.

use ck_core::{ensure, Error, Real, Result};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 5] = [
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Exclusive upper bound on the magnitude accepted by [`to_words`].
pub const WORDS_LIMIT: i64 = 1_000_000_000_000_000_000;

/// Name a number below one thousand. `n` must be non-zero.
fn below_thousand(n: u64, out: &mut Vec<String>) {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        out.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest >= 20 {
        let tens = TENS[(rest / 10) as usize];
        match rest % 10 {
            0 => out.push(tens.to_string()),
            ones => out.push(format!("{tens}-{}", ONES[ones as usize])),
        }
    } else if rest > 0 {
        out.push(ONES[rest as usize].to_string());
    }
}

/// Spell out an integer in English words.
///
/// Negative numbers are prefixed with `minus`.
pub fn to_words(n: i64) -> Result<String> {
    ensure!(
        n > -WORDS_LIMIT && n < WORDS_LIMIT,
        "Numbers up to 999,999,999,999,999,999 are supported"
    );
    if n == 0 {
        return Ok(ONES[0].to_string());
    }
    let mut parts = Vec::new();
    if n < 0 {
        parts.push("minus".to_string());
    }
    let mut rest = n.unsigned_abs();
    for &(scale, name) in &SCALES {
        let count = rest / scale;
        if count > 0 {
            below_thousand(count, &mut parts);
            parts.push(name.to_string());
            rest %= scale;
        }
    }
    if rest > 0 {
        below_thousand(rest, &mut parts);
    }
    Ok(parts.join(" "))
}

/// Parse a whole number from form text.
///
/// Accepts plain integers and integral decimals such as `"42.0"`.
pub fn parse_whole_number(field: &str, text: &str) -> Result<i64> {
    let s = text.trim();
    ensure!(!s.is_empty(), "Enter a value for {field}");
    if let Ok(n) = s.parse::<i64>() {
        return Ok(n);
    }
    let value: Real = s
        .parse()
        .map_err(|_| Error::invalid_input(format!("{field} must be a number, got '{s}'")))?;
    ensure!(value.is_finite(), "{field} must be a finite number, got '{s}'");
    ensure!(value.fract() == 0.0, "{field} must be a whole number, got '{s}'");
    ensure!(
        value.abs() < WORDS_LIMIT as Real,
        "Numbers up to 999,999,999,999,999,999 are supported"
    );
    // Integral and within range, checked above.
    Ok(value as i64)
}
