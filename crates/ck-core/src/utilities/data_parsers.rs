//! Parsing helpers for raw form fields.
//!
//! The presentation layer hands every field over as text; these helpers turn
//! it into typed values and report failures as [`Error::InvalidInput`].

use crate::errors::{Error, Result};
use crate::Real;

/// Parse a finite real number.
///
/// Surrounding whitespace is ignored. Empty text, non-numeric text and the
/// literals `NaN` / `inf` are rejected.
pub fn parse_real(field: &str, text: &str) -> Result<Real> {
    let s = text.trim();
    crate::ensure!(!s.is_empty(), "Enter a value for {field}");
    let value: Real = s
        .parse()
        .map_err(|_| Error::invalid_input(format!("{field} must be a number, got '{s}'")))?;
    crate::ensure!(value.is_finite(), "{field} must be a finite number, got '{s}'");
    Ok(value)
}

/// Parse a comma-separated list of finite real numbers (`"3.5, 4, 2.7"`).
pub fn parse_real_list(field: &str, text: &str) -> Result<Vec<Real>> {
    crate::ensure!(!text.trim().is_empty(), "Enter a value for {field}");
    text.split(',').map(|part| parse_real(field, part)).collect()
}

/// Parse a boolean flag. Accepts `true/false`, `yes/no`, `on/off`, `1/0`.
pub fn parse_flag(field: &str, text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(Error::invalid_input(format!(
            "{field} must be true or false, got '{other}'"
        ))),
    }
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Calendar validity (e.g. 31 April)
/// is left to the caller.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real("value", " 12.5 "), Ok(12.5));
        assert_eq!(parse_real("value", "-3"), Ok(-3.0));
        assert!(parse_real("value", "").is_err());
        assert!(parse_real("value", "abc").is_err());
        assert!(parse_real("value", "NaN").is_err());
        assert!(parse_real("value", "inf").is_err());
    }

    #[test]
    fn test_parse_real_list() {
        assert_eq!(parse_real_list("grades", "3.5, 4,2"), Ok(vec![3.5, 4.0, 2.0]));
        assert!(parse_real_list("grades", "3.5,,4").is_err());
        assert!(parse_real_list("grades", " ").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("symbols", "TRUE"), Ok(true));
        assert_eq!(parse_flag("symbols", "0"), Ok(false));
        assert!(parse_flag("symbols", "maybe").is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("15-06-2023"), None);
        assert_eq!(parse_iso_date("bad"), None);
    }
}
