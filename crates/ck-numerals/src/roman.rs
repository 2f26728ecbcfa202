//! Roman Numeral Converter.

use ck_core::{ensure, fail, Error, Result};

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render `n` as a canonical Roman numeral. Only 1..=3999 can be written.
pub fn to_roman(n: i64) -> Result<String> {
    ensure!(
        (1..4000).contains(&n),
        "Enter a number between 1 and 3999"
    );
    // Range checked above.
    let mut rest = n as u32;
    let mut out = String::new();
    for &(value, symbol) in &NUMERALS {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    Ok(out)
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Read a Roman numeral.
///
/// Case-insensitive. Each symbol is subtracted when a larger one follows
/// and added otherwise, so non-canonical forms such as `IIII` are accepted.
pub fn to_number(s: &str) -> Result<u32> {
    let upper = s.trim().to_uppercase();
    ensure!(!upper.is_empty(), "Enter a Roman numeral");
    let mut values = Vec::with_capacity(upper.len());
    for c in upper.chars() {
        match symbol_value(c) {
            Some(v) => values.push(v),
            None => fail!("Invalid Roman numeral character '{c}'"),
        }
    }
    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if v < next => total -= i64::from(v),
            _ => total += i64::from(v),
        }
    }
    u32::try_from(total)
        .map_err(|_| Error::invalid_input(format!("'{}' is not a valid Roman numeral", s.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
        assert_eq!(to_number("MCMXCIV").unwrap(), 1994);
        assert_eq!(to_number("iv").unwrap(), 4);
        assert_eq!(to_number("IX").unwrap(), 9);
        assert_eq!(to_number("XL").unwrap(), 40);
        assert_eq!(to_number("XC").unwrap(), 90);
        assert_eq!(to_number("CM").unwrap(), 900);
    }

    #[test]
    fn leading_subtractive_pairs() {
        for n in [4, 9, 14, 40, 44, 49, 90, 99, 400, 444, 900, 949, 3999] {
            let roman = to_roman(n).unwrap();
            assert_eq!(i64::from(to_number(&roman).unwrap()), n, "{roman}");
        }
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(to_roman(0), Err(Error::InvalidInput(_))));
        assert!(to_roman(-3).is_err());
        assert!(to_roman(4000).is_err());
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(to_number("IIII").unwrap(), 4);
        assert!(matches!(to_number("XYZ"), Err(Error::InvalidInput(_))));
        assert!(to_number("  ").is_err());
    }
}
