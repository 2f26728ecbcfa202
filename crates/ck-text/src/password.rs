//! Random password generation.
//!
//! Lower-case letters are always used; upper-case letters, digits and
//! symbols are optional. Every selected class appears at least once. The
//! random source is a parameter so callers can seed it.

use ck_core::{ensure, PasswordConfig, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Lower-case letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Upper-case letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits.
pub const DIGITS: &[u8] = b"0123456789";
/// Punctuation symbols.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// What the generated password may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Number of characters.
    pub length: usize,
    /// Include upper-case letters.
    pub uppercase: bool,
    /// Include digits.
    pub numbers: bool,
    /// Include symbols.
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn classes(&self) -> Vec<&'static [u8]> {
        let mut classes = vec![LOWERCASE];
        if self.uppercase {
            classes.push(UPPERCASE);
        }
        if self.numbers {
            classes.push(DIGITS);
        }
        if self.symbols {
            classes.push(SYMBOLS);
        }
        classes
    }
}

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}

/// Generate a password within `bounds`.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    bounds: &PasswordConfig,
    rng: &mut R,
) -> Result<String> {
    ensure!(
        (bounds.min_length..=bounds.max_length).contains(&options.length),
        "Password length must be between {} and {}",
        bounds.min_length,
        bounds.max_length
    );
    let classes = options.classes();
    ensure!(
        options.length >= classes.len(),
        "Password length must be at least {} to include every selected character type",
        classes.len()
    );

    let pool: Vec<u8> = classes.concat();
    let mut chars: Vec<u8> = classes.iter().map(|class| pick(class, rng)).collect();
    while chars.len() < options.length {
        chars.push(pick(&pool, rng));
    }
    chars.shuffle(rng);
    Ok(chars.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_password_has_every_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let pw = generate_password(&PasswordOptions::default(), &PasswordConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(pw.len(), 12);
        assert!(pw.bytes().any(|b| LOWERCASE.contains(&b)));
        assert!(pw.bytes().any(|b| UPPERCASE.contains(&b)));
        assert!(pw.bytes().any(|b| DIGITS.contains(&b)));
        assert!(pw.bytes().any(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn lowercase_only() {
        let options = PasswordOptions {
            length: 20,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let pw = generate_password(&options, &PasswordConfig::default(), &mut rng).unwrap();
        assert!(pw.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn same_seed_same_password() {
        let options = PasswordOptions::default();
        let bounds = PasswordConfig::default();
        let a = generate_password(&options, &bounds, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_password(&options, &bounds, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn length_bounds() {
        let bounds = PasswordConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        for length in [0, 3, 129] {
            let options = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            assert!(generate_password(&options, &bounds, &mut rng).is_err());
        }
        let options = PasswordOptions {
            length: 128,
            ..PasswordOptions::default()
        };
        assert_eq!(
            generate_password(&options, &bounds, &mut rng).unwrap().len(),
            128
        );
    }
}
