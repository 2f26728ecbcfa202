//! Temperature Converter.
//!
//! Temperature scales are affine rather than proportional, so they are not
//! kept in a unit table. Every conversion goes through Celsius.

use std::fmt;
use std::str::FromStr;

use ck_core::utilities::data_formatters::format_fixed;
use ck_core::{ensure, Error, Real, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO_C: Real = -273.15;

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureScale {
    /// Every scale.
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Express `value` on this scale in degrees Celsius.
    pub fn to_celsius(self, value: Real) -> Real {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
        }
    }

    /// Express `celsius` on this scale.
    pub fn from_celsius(self, celsius: Real) -> Real {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" | "centigrade" => Ok(TemperatureScale::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureScale::Kelvin),
            _ => Err(Error::unknown_unit("temperature", s.trim())),
        }
    }
}

/// Convert `value` from one scale to another.
///
/// Fails with `InvalidInput` for non-finite values or temperatures below
/// absolute zero, and with `UnknownUnit` for unrecognised scales.
pub fn convert_temperature(value: Real, from: &str, to: &str) -> Result<Real> {
    let from: TemperatureScale = from.parse()?;
    let to: TemperatureScale = to.parse()?;
    convert_between(value, from, to)
}

/// Convert between parsed scales.
pub fn convert_between(value: Real, from: TemperatureScale, to: TemperatureScale) -> Result<Real> {
    ensure!(value.is_finite(), "Enter a valid temperature");
    let celsius = from.to_celsius(value);
    // Tolerate rounding noise right at the boundary (e.g. -459.67 °F).
    ensure!(
        celsius >= ABSOLUTE_ZERO_C - 1e-9,
        "{value} {} is below absolute zero",
        from.symbol()
    );
    if from == to {
        return Ok(value);
    }
    let result = to.from_celsius(celsius);
    debug!(value, from = %from, to = %to, result, "temperature conversion");
    Ok(result)
}

/// Render a temperature with `decimals` places and the scale's symbol.
pub fn display_temperature(value: Real, scale: TemperatureScale, decimals: u8) -> String {
    format!("{} {}", format_fixed(value, usize::from(decimals)), scale.symbol())
}

/// `°C → °F`.
pub fn celsius_to_fahrenheit(c: Real) -> Real {
    TemperatureScale::Fahrenheit.from_celsius(c)
}

/// `°C → K`.
pub fn celsius_to_kelvin(c: Real) -> Real {
    TemperatureScale::Kelvin.from_celsius(c)
}

/// `°F → °C`.
pub fn fahrenheit_to_celsius(f: Real) -> Real {
    TemperatureScale::Fahrenheit.to_celsius(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(convert_temperature(-40.0, "celsius", "fahrenheit"), Ok(-40.0));
    }

    #[test]
    fn kelvin_to_fahrenheit() {
        let f = convert_temperature(300.0, "kelvin", "fahrenheit").unwrap();
        assert_abs_diff_eq!(f, 80.33, epsilon = 1e-9);
        assert_eq!(display_temperature(f, TemperatureScale::Fahrenheit, 2), "80.33 °F");
    }

    #[test]
    fn aliases() {
        assert_eq!("°C".parse::<TemperatureScale>(), Ok(TemperatureScale::Celsius));
        assert_eq!("F".parse::<TemperatureScale>(), Ok(TemperatureScale::Fahrenheit));
        assert_eq!(" k ".parse::<TemperatureScale>(), Ok(TemperatureScale::Kelvin));
    }

    #[test]
    fn rejects_unknown_scale() {
        let err = convert_temperature(1.0, "rankine", "celsius").unwrap_err();
        assert_eq!(err, Error::unknown_unit("temperature", "rankine"));
    }

    #[test]
    fn rejects_non_finite_and_below_absolute_zero() {
        assert!(matches!(
            convert_temperature(f64::NAN, "celsius", "kelvin"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            convert_temperature(-1.0, "kelvin", "celsius"),
            Err(Error::InvalidInput(_))
        ));
        assert!(convert_temperature(-459.67, "fahrenheit", "kelvin").is_ok());
    }
}
