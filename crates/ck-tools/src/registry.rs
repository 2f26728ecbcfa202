//! Dispatch Table.
//!
//! Maps every stable tool id to its [`ConverterBinding`]. The catalogue is
//! built once and never mutated.

use std::collections::HashMap;

use ck_core::{ensure, Error, ResultShape, Result};
use ck_units::QuantityKind;
use tracing::warn;

use crate::binding::{Converter, ConverterBinding};
use crate::fields::{FieldKind, FieldSpec};

/// Tool registry: lookup by id plus the catalogue in display order.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    bindings: Vec<ConverterBinding>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry from bindings. Tool ids must be unique.
    pub fn from_bindings(bindings: Vec<ConverterBinding>) -> Result<Self> {
        let mut index = HashMap::with_capacity(bindings.len());
        for (i, binding) in bindings.iter().enumerate() {
            ensure!(
                index.insert(binding.id, i).is_none(),
                "duplicate tool id: {}",
                binding.id
            );
        }
        Ok(Self { bindings, index })
    }

    /// The built-in catalogue.
    pub fn standard() -> Self {
        let bindings = standard_bindings();
        let index = bindings
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id, i))
            .collect();
        Self { bindings, index }
    }

    /// Find the binding for `tool_id`.
    ///
    /// Unknown ids are logged and reported as [`Error::UnknownTool`].
    pub fn resolve(&self, tool_id: &str) -> Result<&ConverterBinding> {
        match self.index.get(tool_id) {
            Some(&i) => Ok(&self.bindings[i]),
            None => {
                warn!(tool_id, "unknown tool requested");
                Err(Error::UnknownTool(tool_id.to_string()))
            }
        }
    }

    /// Whether `tool_id` is bound.
    pub fn contains(&self, tool_id: &str) -> bool {
        self.index.contains_key(tool_id)
    }

    /// Every binding, in catalogue order.
    pub fn tools(&self) -> &[ConverterBinding] {
        &self.bindings
    }

    /// Every tool id, in catalogue order.
    pub fn tool_ids(&self) -> Vec<&'static str> {
        self.bindings.iter().map(|b| b.id).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Catalogue
// ============================================================================

fn linear(
    id: &'static str,
    title: &'static str,
    kind: QuantityKind,
    from: &'static str,
    to: &'static str,
) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        Converter::Linear(kind),
        ResultShape::Triple,
        vec![
            FieldSpec::required("value", FieldKind::Number),
            FieldSpec::with_default("from", FieldKind::Choice, from),
            FieldSpec::with_default("to", FieldKind::Choice, to),
        ],
    )
}

fn exchange(
    id: &'static str,
    title: &'static str,
    converter: Converter,
    from: &'static str,
    to: &'static str,
) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        converter,
        ResultShape::Triple,
        vec![
            FieldSpec::with_default("amount", FieldKind::Number, "1"),
            FieldSpec::with_default("from", FieldKind::Choice, from),
            FieldSpec::with_default("to", FieldKind::Choice, to),
        ],
    )
}

fn radix(id: &'static str, title: &'static str, from: &'static str, to: &'static str) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        Converter::Radix,
        ResultShape::PlainText,
        vec![
            FieldSpec::required("value", FieldKind::Text),
            FieldSpec::with_default("fromBase", FieldKind::Choice, from),
            FieldSpec::with_default("toBase", FieldKind::Choice, to),
        ],
    )
}

fn text_tool(
    id: &'static str,
    title: &'static str,
    converter: Converter,
    shape: ResultShape,
) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        converter,
        shape,
        vec![FieldSpec::required("text", FieldKind::Text)],
    )
}

fn gpa(id: &'static str, title: &'static str) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        Converter::Gpa,
        ResultShape::Triple,
        vec![
            FieldSpec::required("grades", FieldKind::NumberList),
            FieldSpec::required("credits", FieldKind::NumberList),
        ],
    )
}

fn dated(id: &'static str, title: &'static str, converter: Converter, shape: ResultShape) -> ConverterBinding {
    ConverterBinding::new(
        id,
        title,
        converter,
        shape,
        vec![
            FieldSpec::required("date", FieldKind::Date),
            FieldSpec::optional("asOf", FieldKind::Date),
        ],
    )
}

fn standard_bindings() -> Vec<ConverterBinding> {
    use Converter as C;
    use ResultShape as S;

    vec![
        // ── Units ───────────────────────────────────────────────────────────
        linear("length-converter", "Length Converter", QuantityKind::Length, "meter", "feet"),
        linear("weight-converter", "Weight Converter", QuantityKind::Weight, "kilogram", "pound"),
        linear("area-converter", "Area Converter", QuantityKind::Area, "square_meter", "square_foot"),
        linear("volume-converter", "Volume Converter", QuantityKind::Volume, "liter", "gallon"),
        linear(
            "speed-converter",
            "Speed Converter",
            QuantityKind::Speed,
            "kilometer_per_hour",
            "mile_per_hour",
        ),
        linear("time-converter", "Time Converter", QuantityKind::Time, "hour", "minute"),
        ConverterBinding::new(
            "temperature-converter",
            "Temperature Converter",
            C::Temperature,
            S::Triple,
            vec![
                FieldSpec::required("value", FieldKind::Number),
                FieldSpec::with_default("from", FieldKind::Choice, "celsius"),
                FieldSpec::with_default("to", FieldKind::Choice, "fahrenheit"),
            ],
        ),
        // ── Money ───────────────────────────────────────────────────────────
        exchange("currency-converter", "Currency Converter", C::Fiat, "USD", "PKR"),
        exchange("pound-to-pkr", "Pound to PKR", C::Fiat, "GBP", "PKR"),
        exchange("crypto-converter", "Crypto Converter", C::Crypto, "BTC", "USD"),
        // ── Numbers ─────────────────────────────────────────────────────────
        radix("number-base-converter", "Number Base Converter", "10", "2"),
        radix("hex-bin-converter", "Hex to Binary", "16", "2"),
        ConverterBinding::new(
            "roman-numerals",
            "Roman Numerals",
            C::Roman,
            S::PlainText,
            vec![
                FieldSpec::required("value", FieldKind::Text),
                FieldSpec::with_default("mode", FieldKind::Choice, "toRoman"),
            ],
        ),
        ConverterBinding::new(
            "number-to-words",
            "Number to Words",
            C::Words,
            S::PlainText,
            vec![FieldSpec::required("value", FieldKind::Text)],
        ),
        // ── Text ────────────────────────────────────────────────────────────
        text_tool("text-to-binary", "Text to Binary", C::TextToBinary, S::PlainText),
        text_tool("binary-to-text", "Binary to Text", C::BinaryToText, S::PlainText),
        text_tool("word-counter", "Word Counter", C::WordStats, S::Stats),
        text_tool("base64-encode", "Base64 Encode", C::Base64Encode, S::PlainText),
        text_tool("base64-decode", "Base64 Decode", C::Base64Decode, S::PlainText),
        ConverterBinding::new(
            "hash-generator",
            "Hash Generator",
            C::Hash,
            S::PlainText,
            vec![
                FieldSpec::required("text", FieldKind::Text),
                FieldSpec::with_default("algorithm", FieldKind::Choice, "sha256"),
            ],
        ),
        // ── Security ────────────────────────────────────────────────────────
        ConverterBinding::new(
            "password-generator",
            "Password Generator",
            C::Password,
            S::PlainText,
            vec![
                FieldSpec::with_default("length", FieldKind::Number, "12"),
                FieldSpec::with_default("uppercase", FieldKind::Flag, "true"),
                FieldSpec::with_default("numbers", FieldKind::Flag, "true"),
                FieldSpec::with_default("symbols", FieldKind::Flag, "true"),
            ],
        ),
        // ── Calculators ─────────────────────────────────────────────────────
        ConverterBinding::new(
            "bmi-calculator",
            "BMI Calculator",
            C::Bmi,
            S::Stats,
            vec![
                FieldSpec::required("weight", FieldKind::Number),
                FieldSpec::required("height", FieldKind::Number),
            ],
        ),
        gpa("gpa-calculator", "GPA Calculator"),
        gpa("cgpa-calculator", "CGPA Calculator"),
        ConverterBinding::new(
            "percentage-calculator",
            "Percentage Calculator",
            C::Percentage,
            S::Triple,
            vec![
                FieldSpec::required("value", FieldKind::Number),
                FieldSpec::required("total", FieldKind::Number),
            ],
        ),
        dated("age-calculator", "Age Calculator", C::Age, S::Stats),
        dated("pregnancy-calculator", "Pregnancy Calculator", C::Pregnancy, S::Triple),
    ]
}
