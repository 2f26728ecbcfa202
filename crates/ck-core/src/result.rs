//! The result contract shared by every tool.
//!
//! A tool produces exactly one [`ConversionResult`]; the presentation layer
//! matches on the variant to decide how to render it.

use serde::{Deserialize, Serialize};

/// The shape a tool declares for its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultShape {
    /// A single piece of text (digest, password, converted number).
    PlainText,
    /// A title / main value / sub value summary.
    Triple,
    /// A list of labelled statistics.
    Stats,
    /// A downloadable file produced by the document collaborator.
    FileArtifact,
}

/// One labelled value in a [`ConversionResult::Stats`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatField {
    /// Display label.
    pub label: String,
    /// Rendered value.
    pub value: String,
}

impl StatField {
    /// Create a labelled value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The output of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConversionResult {
    /// Plain text output.
    PlainText {
        /// The text.
        text: String,
    },
    /// Titled summary, e.g. `"12 USD ="`, `"3,342.00 PKR"`, rate annotation.
    Triple {
        /// Leading title.
        title: String,
        /// Emphasised value.
        main_value: String,
        /// Secondary annotation.
        sub_value: String,
    },
    /// Ordered statistics record.
    Stats {
        /// Fields in display order.
        fields: Vec<StatField>,
    },
    /// A file returned by the document collaborator.
    FileArtifact {
        /// File contents.
        bytes: Vec<u8>,
        /// Name offered to the user when saving.
        suggested_filename: String,
        /// MIME type of `bytes`.
        mime_type: String,
    },
}

impl ConversionResult {
    /// Build a plain-text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Build a titled summary.
    pub fn triple(
        title: impl Into<String>,
        main_value: impl Into<String>,
        sub_value: impl Into<String>,
    ) -> Self {
        Self::Triple {
            title: title.into(),
            main_value: main_value.into(),
            sub_value: sub_value.into(),
        }
    }

    /// The shape of this result.
    pub fn shape(&self) -> ResultShape {
        match self {
            Self::PlainText { .. } => ResultShape::PlainText,
            Self::Triple { .. } => ResultShape::Triple,
            Self::Stats { .. } => ResultShape::Stats,
            Self::FileArtifact { .. } => ResultShape::FileArtifact,
        }
    }

    /// Look up a statistic by label. Returns `None` for non-stats results.
    pub fn stat(&self, label: &str) -> Option<&str> {
        match self {
            Self::Stats { fields } => fields
                .iter()
                .find(|f| f.label == label)
                .map(|f| f.value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_follows_variant() {
        assert_eq!(ConversionResult::text("x").shape(), ResultShape::PlainText);
        assert_eq!(
            ConversionResult::triple("a", "b", "c").shape(),
            ResultShape::Triple
        );
    }

    #[test]
    fn serialises_with_type_tag() {
        let json = serde_json::to_value(ConversionResult::triple("1 USD =", "278.50 PKR", ""))
            .unwrap();
        assert_eq!(json["type"], "triple");
        assert_eq!(json["mainValue"], "278.50 PKR");
        assert_eq!(json["subValue"], "");
    }

    #[test]
    fn stat_lookup() {
        let stats = ConversionResult::Stats {
            fields: vec![StatField::new("Words", "3"), StatField::new("Characters", "11")],
        };
        assert_eq!(stats.stat("Characters"), Some("11"));
        assert_eq!(stats.stat("Lines"), None);
        assert_eq!(ConversionResult::text("x").stat("Words"), None);
    }
}
