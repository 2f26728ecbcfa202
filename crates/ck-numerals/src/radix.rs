//! Number Base Converter.
//!
//! Converts non-negative integers between bases 2, 8, 10 and 16. Values are
//! held in a `u128`; negative and fractional input is rejected.

use std::fmt;

use ck_core::{ensure, fail, Error, Result};
use tracing::debug;

/// A supported radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 10.
    Decimal,
    /// Base 16, rendered with upper-case digits.
    Hexadecimal,
}

impl Radix {
    /// Every supported radix.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// Numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = Error;

    fn try_from(base: u32) -> Result<Self> {
        match base {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(Error::invalid_input(format!(
                "Base {other} is not supported; use 2, 8, 10 or 16"
            ))),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {}", self.base())
    }
}

/// Parse `text` as a non-negative integer in `radix`.
pub fn parse_in_base(text: &str, radix: Radix) -> Result<u128> {
    let s = text.trim();
    ensure!(!s.is_empty(), "Enter a number to convert");
    ensure!(!s.starts_with('-'), "Negative numbers are not supported");
    ensure!(!s.contains('.'), "Fractional values are not supported");
    if let Some(bad) = s.chars().find(|c| !c.is_digit(radix.base())) {
        fail!("Invalid digit '{bad}' for {radix}");
    }
    u128::from_str_radix(s, radix.base())
        .map_err(|_| Error::invalid_input(format!("{s} is too large to convert")))
}

/// Render `value` in `radix`. Hexadecimal digits are upper-case.
pub fn render_in_base(value: u128, radix: Radix) -> String {
    match radix {
        Radix::Binary => format!("{value:b}"),
        Radix::Octal => format!("{value:o}"),
        Radix::Decimal => value.to_string(),
        Radix::Hexadecimal => format!("{value:X}"),
    }
}

/// Convert the integer string `value` from base `from` to base `to`.
pub fn convert_base(value: &str, from: u32, to: u32) -> Result<String> {
    let from = Radix::try_from(from)?;
    let to = Radix::try_from(to)?;
    let n = parse_in_base(value, from)?;
    let rendered = render_in_base(n, to);
    debug!(input = value.trim(), %from, %to, output = %rendered, "base conversion");
    Ok(rendered)
}
