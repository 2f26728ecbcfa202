//! Number formatting helpers used to render converter output.
//!
//! All functions are pure and deterministic: the same input always renders
//! to the same bytes.

use crate::Real;

/// Format `value` with exactly `decimals` decimal places.
///
/// Negative zero is rendered without its sign (`-0.0001` at 2 decimals is
/// `"0.00"`, not `"-0.00"`).
pub fn format_fixed(value: Real, decimals: usize) -> String {
    let s = format!("{:.prec$}", value, prec = decimals);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Strip trailing fractional zeros (and a dangling decimal point).
pub fn trim_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Format to `decimals` places, then trim trailing zeros
/// (e.g. `3.280839895` at 6 decimals → `"3.28084"`).
pub fn format_trimmed(value: Real, decimals: usize) -> String {
    trim_trailing_zeros(&format_fixed(value, decimals)).to_string()
}

/// Insert `,` thousands separators into the integer part of a rendered
/// number (`"-1234567.891"` → `"-1,234,567.891"`).
pub fn group_thousands(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac_part}")
}

/// Fixed decimals with thousands separators (`27850.0` at 2 → `"27,850.00"`).
pub fn format_grouped(value: Real, decimals: usize) -> String {
    group_thousands(&format_fixed(value, decimals))
}

/// Trimmed decimals with thousands separators (`1080.5` at 6 → `"1,080.5"`).
pub fn format_grouped_trimmed(value: Real, decimals: usize) -> String {
    group_thousands(&format_trimmed(value, decimals))
}

/// Format a ratio already expressed in percent (`12.5` → `"12.50%"`).
pub fn format_percent(percent: Real, decimals: usize) -> String {
    format!("{}%", format_fixed(percent, decimals))
}
