//! Engine configuration.
//!
//! [`EngineConfig`] carries every tunable of the conversion engine: display
//! precisions, reading speed, password bounds and optional rate-table
//! overrides. It is plain data, deserialisable from JSON, and injected into
//! the engine at startup.
//!
//! [`Settings`] publishes one process-wide configuration through a
//! `std::sync::OnceLock`. It is written at most once and read-only after
//! that, so it can be shared across threads without locking.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Number of decimal places used when displaying each kind of result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrecisionConfig {
    /// Length conversions.
    pub length: u8,
    /// Weight conversions.
    pub weight: u8,
    /// Area conversions.
    pub area: u8,
    /// Volume conversions.
    pub volume: u8,
    /// Speed conversions.
    pub speed: u8,
    /// Time conversions.
    pub time: u8,
    /// Temperature conversions.
    pub temperature: u8,
    /// Effective exchange rate shown under a currency conversion.
    pub exchange_rate: u8,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            length: 6,
            weight: 6,
            area: 6,
            volume: 6,
            speed: 4,
            time: 6,
            temperature: 2,
            exchange_rate: 4,
        }
    }
}

/// Bounds and defaults for the password generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordConfig {
    /// Length used when the caller does not supply one.
    pub default_length: usize,
    /// Shortest accepted length.
    pub min_length: usize,
    /// Longest accepted length.
    pub max_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            default_length: 12,
            min_length: 4,
            max_length: 128,
        }
    }
}

/// Complete configuration of the conversion engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Display precisions.
    pub precision: PrecisionConfig,
    /// Reading speed used by the word counter.
    pub words_per_minute: u32,
    /// Password generator bounds.
    pub password: PasswordConfig,
    /// Fiat rates ("1 USD = N units") replacing built-in rates.
    pub fiat_rates: BTreeMap<String, f64>,
    /// Crypto rates ("1 unit = N USD") replacing built-in rates.
    pub crypto_rates: BTreeMap<String, f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: PrecisionConfig::default(),
            words_per_minute: 200,
            password: PasswordConfig::default(),
            fiat_rates: BTreeMap::new(),
            crypto_rates: BTreeMap::new(),
        }
    }
}

/// Largest display precision accepted by [`EngineConfig::validate`].
pub const MAX_PRECISION: u8 = 12;

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("invalid engine configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration's invariants.
    pub fn validate(&self) -> Result<()> {
        let p = &self.precision;
        for (name, value) in [
            ("length", p.length),
            ("weight", p.weight),
            ("area", p.area),
            ("volume", p.volume),
            ("speed", p.speed),
            ("time", p.time),
            ("temperature", p.temperature),
            ("exchangeRate", p.exchange_rate),
        ] {
            crate::ensure!(
                value <= MAX_PRECISION,
                "precision.{name} must be at most {MAX_PRECISION}, got {value}"
            );
        }
        crate::ensure!(self.words_per_minute > 0, "wordsPerMinute must be positive");
        let pw = &self.password;
        crate::ensure!(
            pw.min_length >= 1 && pw.min_length <= pw.max_length,
            "password bounds are inconsistent: {}..={}",
            pw.min_length,
            pw.max_length
        );
        crate::ensure!(
            (pw.min_length..=pw.max_length).contains(&pw.default_length),
            "password.defaultLength {} is outside {}..={}",
            pw.default_length,
            pw.min_length,
            pw.max_length
        );
        for (code, rate) in self.fiat_rates.iter().chain(self.crypto_rates.iter()) {
            crate::ensure!(
                rate.is_finite() && *rate > 0.0,
                "rate for {code} must be positive, got {rate}"
            );
        }
        Ok(())
    }
}

/// Process-wide, immutable engine settings.
#[derive(Debug)]
pub struct Settings {
    config: EngineConfig,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return the published settings, publishing the defaults if nothing
    /// was installed yet.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            config: EngineConfig::default(),
        })
    }

    /// Publish `config` as the process-wide configuration.
    ///
    /// Fails if the configuration is invalid or if settings were already
    /// published (explicitly or by a prior call to [`Settings::instance`]).
    pub fn install(config: EngineConfig) -> Result<&'static Settings> {
        config.validate()?;
        let mut installed = false;
        let settings = INSTANCE.get_or_init(|| {
            installed = true;
            Settings { config }
        });
        crate::ensure!(installed, "engine settings were already published");
        Ok(settings)
    }

    /// The published configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_quantity_precisions() {
        let config = EngineConfig::default();
        assert_eq!(config.precision.length, 6);
        assert_eq!(config.precision.speed, 4);
        assert_eq!(config.precision.temperature, 2);
        assert_eq!(config.words_per_minute, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json(r#"{ "precision": { "speed": 2 }, "fiatRates": { "PKR": 280.0 } }"#)
                .unwrap();
        assert_eq!(config.precision.speed, 2);
        assert_eq!(config.precision.length, 6);
        assert_eq!(config.fiat_rates.get("PKR"), Some(&280.0));
    }

    #[test]
    fn rejects_non_positive_rates() {
        let err = EngineConfig::from_json(r#"{ "cryptoRates": { "BTC": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(EngineConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn rejects_inconsistent_password_bounds() {
        let mut config = EngineConfig::default();
        config.password.min_length = 20;
        config.password.max_length = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn instance_is_stable() {
        let a = Settings::instance() as *const Settings;
        let b = Settings::instance() as *const Settings;
        assert_eq!(a, b);
        assert!(Settings::install(EngineConfig::default()).is_err());
    }
}
