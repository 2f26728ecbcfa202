//! Linear Converter.
//!
//! Converts between two units of the same ratio-scale quantity through the
//! table's base unit: `base = value * factor(from)`,
//! `result = base / factor(to)`.

use ck_core::utilities::data_formatters::format_trimmed;
use ck_core::{ensure, Real, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::{UnitRegistry, UnitTable};
use crate::tables::UnitDefinition;
use crate::quantity::QuantityKind;

/// A single conversion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Amount expressed in `from_unit`.
    pub value: Real,
    /// Source unit (name, symbol or alias).
    pub from_unit: String,
    /// Target unit (name, symbol or alias).
    pub to_unit: String,
}

impl ConversionRequest {
    /// Create a request.
    pub fn new(value: Real, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// A completed linear conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Quantity that was converted.
    pub kind: QuantityKind,
    /// Input amount.
    pub value: Real,
    /// Resolved source unit.
    pub from: UnitDefinition,
    /// Resolved target unit.
    pub to: UnitDefinition,
    /// Converted amount, unrounded.
    pub result: Real,
}

impl Conversion {
    /// The result rendered with `decimals` places and trailing zeros trimmed.
    pub fn display_result(&self, decimals: u8) -> String {
        format_trimmed(self.result, usize::from(decimals))
    }

    /// The input rendered the same way as the result.
    pub fn display_value(&self, decimals: u8) -> String {
        format_trimmed(self.value, usize::from(decimals))
    }
}

fn validate_value(kind: QuantityKind, value: Real) -> Result<()> {
    ensure!(value.is_finite(), "Enter a valid number");
    ensure!(
        value >= 0.0,
        "{} cannot be negative. Please provide a positive value.",
        capitalized(kind.name())
    );
    Ok(())
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `value` between two units of `table`.
///
/// When both names resolve to the same unit the input is returned untouched,
/// so `convert(v, X, X) == v` holds exactly.
pub fn convert_in_table(table: &UnitTable, value: Real, from: &str, to: &str) -> Result<Conversion> {
    let kind = table.kind();
    validate_value(kind, value)?;
    let from_def = table.unit(from)?;
    let to_def = table.unit(to)?;

    let result = if from_def.name == to_def.name {
        value
    } else {
        let base = value * from_def.factor;
        base / to_def.factor
    };

    debug!(
        quantity = %kind,
        value,
        from = from_def.name,
        to = to_def.name,
        result,
        "linear conversion"
    );

    Ok(Conversion {
        kind,
        value,
        from: *from_def,
        to: *to_def,
        result,
    })
}

/// Converts values using a [`UnitRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct LinearConverter<'a> {
    registry: &'a UnitRegistry,
}

impl Default for LinearConverter<'static> {
    fn default() -> Self {
        Self::new(UnitRegistry::standard())
    }
}

impl<'a> LinearConverter<'a> {
    /// Create a converter over `registry`.
    pub fn new(registry: &'a UnitRegistry) -> Self {
        Self { registry }
    }

    /// Convert a request within the `kind` table.
    pub fn convert(&self, kind: QuantityKind, request: &ConversionRequest) -> Result<Conversion> {
        let table = self.registry.table(kind)?;
        convert_in_table(table, request.value, &request.from_unit, &request.to_unit)
    }

    /// Convert a bare value, returning only the numeric result.
    pub fn convert_value(&self, kind: QuantityKind, value: Real, from: &str, to: &str) -> Result<Real> {
        let table = self.registry.table(kind)?;
        convert_in_table(table, value, from, to).map(|c| c.result)
    }
}

/// Convert with the standard registry.
pub fn convert(kind: QuantityKind, value: Real, from: &str, to: &str) -> Result<Real> {
    LinearConverter::default().convert_value(kind, value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ck_core::Error;

    #[test]
    fn meter_to_feet() {
        let c = LinearConverter::default()
            .convert(QuantityKind::Length, &ConversionRequest::new(1.0, "meter", "feet"))
            .unwrap();
        assert_relative_eq!(c.result, 3.280_839_895, max_relative = 1e-9);
        assert_eq!(c.display_result(6), "3.28084");
    }

    #[test]
    fn same_unit_is_exact() {
        let v = 0.1 + 0.2;
        assert_eq!(convert(QuantityKind::Volume, v, "cup", "cups"), Ok(v));
        assert_eq!(convert(QuantityKind::Length, v, "feet", "ft"), Ok(v));
    }

    #[test]
    fn speed_display_uses_four_decimals() {
        let c = LinearConverter::default()
            .convert(QuantityKind::Speed, &ConversionRequest::new(100.0, "kph", "mph"))
            .unwrap();
        assert_eq!(c.display_result(4), "62.1371");
    }

    #[test]
    fn time_and_area() {
        assert_eq!(convert(QuantityKind::Time, 2.0, "hour", "minute"), Ok(120.0));
        assert_relative_eq!(
            convert(QuantityKind::Area, 1.0, "hectare", "acre").unwrap(),
            2.471_053_814_671_653,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(QuantityKind::Length, v, "meter", "feet").unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn rejects_negative_magnitudes() {
        let err = convert(QuantityKind::Length, -1.0, "meter", "feet").unwrap_err();
        assert_eq!(
            err,
            Error::invalid_input("Length cannot be negative. Please provide a positive value.")
        );
    }

    #[test]
    fn rejects_unknown_units() {
        let err = convert(QuantityKind::Length, 1.0, "parsec", "meter").unwrap_err();
        assert!(matches!(err, Error::UnknownUnit { .. }));
        let err = convert(QuantityKind::Length, 1.0, "meter", "parsec").unwrap_err();
        assert!(matches!(err, Error::UnknownUnit { .. }));
    }

    #[test]
    fn zero_converts_to_zero() {
        assert_eq!(convert(QuantityKind::Weight, 0.0, "pound", "gram"), Ok(0.0));
    }
}
