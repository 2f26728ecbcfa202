//! Converter bindings: what a tool id runs and which fields it reads.

use ck_core::ResultShape;
use ck_units::QuantityKind;
use serde::Serialize;

use crate::fields::FieldSpec;

/// The converter behind a tool. Converters know nothing about tool ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Converter {
    /// Ratio-scale units of one quantity.
    Linear(QuantityKind),
    /// Celsius / Fahrenheit / Kelvin.
    Temperature,
    /// Fiat currencies.
    Fiat,
    /// Crypto assets against USD.
    Crypto,
    /// Integer between radices.
    Radix,
    /// Roman numerals in either direction.
    Roman,
    /// English number names.
    Words,
    /// Text to 8-bit groups.
    TextToBinary,
    /// 8-bit groups to text.
    BinaryToText,
    /// Word counter.
    WordStats,
    /// Random password.
    Password,
    /// Base64 encode.
    Base64Encode,
    /// Base64 decode.
    Base64Decode,
    /// Hex digest.
    Hash,
    /// Body-mass index.
    Bmi,
    /// Weighted grade average.
    Gpa,
    /// Percentage of a total.
    Percentage,
    /// Age from a birth date.
    Age,
    /// Due date from the last period.
    Pregnancy,
}

/// A tool id bound to its converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterBinding {
    /// Stable tool identifier (e.g. `"currency-converter"`).
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// What runs.
    pub converter: Converter,
    /// Fields read, with their defaults.
    pub fields: Vec<FieldSpec>,
    /// Shape of the formatted result.
    pub shape: ResultShape,
}

impl ConverterBinding {
    /// Create a binding.
    pub fn new(
        id: &'static str,
        title: &'static str,
        converter: Converter,
        shape: ResultShape,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            id,
            title,
            converter,
            fields,
            shape,
        }
    }

    /// The spec of field `name`, if the binding reads it.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
