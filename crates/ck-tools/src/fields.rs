//! Raw form fields and their typed extraction.
//!
//! The presentation layer sends every tool invocation as a flat map of
//! field names to strings, numbers or booleans. A binding declares the
//! fields it reads as [`FieldSpec`]s; [`Fields`] looks them up, applies the
//! declared defaults and converts them to the types the converters take.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ck_calculators::parse_date;
use ck_core::utilities::data_parsers::{parse_flag, parse_real, parse_real_list};
use ck_core::{fail, Error, Real, Result};
use serde::{Deserialize, Serialize};

/// One raw field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A checkbox or toggle.
    Bool(bool),
    /// A numeric input.
    Number(Real),
    /// Any text input, including numbers typed as text.
    Text(String),
}

impl FieldValue {
    /// The value as text, the way a form would submit it.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Real> for FieldValue {
    fn from(n: Real) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Field name → raw value, as received from the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(BTreeMap<String, FieldValue>);

impl RawFields {
    /// An empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of field values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("invalid tool fields: {e}")))
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What a field holds, for rendering the right input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// A number.
    Number,
    /// Free text.
    Text,
    /// A unit, currency or mode picked from a list.
    Choice,
    /// A boolean toggle.
    Flag,
    /// A `YYYY-MM-DD` date.
    Date,
    /// A comma-separated list of numbers.
    NumberList,
}

/// A field a binding reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field name in [`RawFields`].
    pub name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Value used when the field is absent or blank.
    pub default: Option<&'static str>,
    /// Whether the field may be left out with no default.
    pub optional: bool,
}

impl FieldSpec {
    /// A required field without a default.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            optional: false,
        }
    }

    /// A field with a default value.
    pub const fn with_default(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
            optional: false,
        }
    }

    /// A field that may be absent.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            optional: true,
        }
    }
}

/// Typed access to raw fields through a binding's field specs.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    raw: &'a RawFields,
    specs: &'a [FieldSpec],
}

impl<'a> Fields<'a> {
    /// View `raw` through `specs`.
    pub fn new(raw: &'a RawFields, specs: &'a [FieldSpec]) -> Self {
        Self { raw, specs }
    }

    fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// The raw value, falling back to the declared default.
    fn value(&self, name: &str) -> Option<FieldValue> {
        match self.raw.get(name) {
            Some(v) if !v.is_blank() => Some(v.clone()),
            _ => self
                .spec(name)
                .and_then(|s| s.default)
                .map(FieldValue::from),
        }
    }

    /// Required text.
    pub fn text(&self, name: &str) -> Result<String> {
        match self.value(name) {
            Some(v) => Ok(v.to_text()),
            None => fail!("Enter a value for {name}"),
        }
    }

    /// Text that may be absent.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.value(name).map(|v| v.to_text())
    }

    /// Required finite number.
    pub fn real(&self, name: &str) -> Result<Real> {
        match self.value(name) {
            Some(FieldValue::Number(n)) => {
                if n.is_finite() {
                    Ok(n)
                } else {
                    fail!("{name} must be a finite number")
                }
            }
            Some(other) => parse_real(name, &other.to_text()),
            None => fail!("Enter a value for {name}"),
        }
    }

    /// Required non-negative whole number.
    pub fn count(&self, name: &str) -> Result<usize> {
        let n = self.real(name)?;
        if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as Real {
            fail!("{name} must be a whole number");
        }
        // Integral and bounded, checked above.
        Ok(n as usize)
    }

    /// Required base (radix) value.
    pub fn base(&self, name: &str) -> Result<u32> {
        let n = self.real(name)?;
        if n.fract() != 0.0 || !(0.0..=36.0).contains(&n) {
            fail!("Base {n} is not supported; use 2, 8, 10 or 16");
        }
        // Integral and bounded, checked above.
        Ok(n as u32)
    }

    /// Boolean flag; absent flags are `false`.
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.value(name) {
            Some(FieldValue::Bool(b)) => Ok(b),
            Some(other) => parse_flag(name, &other.to_text()),
            None => Ok(false),
        }
    }

    /// Comma-separated list of numbers.
    pub fn real_list(&self, name: &str) -> Result<Vec<Real>> {
        parse_real_list(name, &self.text(name)?)
    }

    /// Required `YYYY-MM-DD` date.
    pub fn date(&self, name: &str) -> Result<NaiveDate> {
        parse_date(name, &self.text(name)?)
    }

    /// Optional `YYYY-MM-DD` date.
    pub fn optional_date(&self, name: &str) -> Result<Option<NaiveDate>> {
        self.optional_text(name)
            .map(|text| parse_date(name, &text))
            .transpose()
    }
}
