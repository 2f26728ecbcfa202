//! Result Formatter.
//!
//! Converters hand back a [`RawOutput`]; [`format`] wraps it into the
//! [`ConversionResult`] shape the tool declares. The function is total: an
//! output that does not match the declared shape is rendered into it.

use ck_core::{ConversionResult, ResultShape, StatField};

/// What a converter produced, before shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOutput {
    /// A single string.
    Text(String),
    /// A title / main value / sub value summary.
    Titled {
        /// Leading title.
        title: String,
        /// Emphasised value.
        main: String,
        /// Secondary annotation, may be empty.
        sub: String,
    },
    /// Ordered labelled values.
    Stats(Vec<StatField>),
    /// A file.
    File {
        /// Contents.
        bytes: Vec<u8>,
        /// Suggested name.
        filename: String,
        /// MIME type.
        mime_type: String,
    },
}

impl RawOutput {
    /// Build a titled summary.
    pub fn titled(title: impl Into<String>, main: impl Into<String>, sub: impl Into<String>) -> Self {
        RawOutput::Titled {
            title: title.into(),
            main: main.into(),
            sub: sub.into(),
        }
    }

    /// Render as one block of text.
    fn render_text(&self) -> String {
        match self {
            RawOutput::Text(text) => text.clone(),
            RawOutput::Titled { title, main, sub } => [title, main, sub]
                .into_iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join("\n"),
            RawOutput::Stats(fields) => fields
                .iter()
                .map(|f| format!("{}: {}", f.label, f.value))
                .collect::<Vec<_>>()
                .join("\n"),
            RawOutput::File {
                bytes, filename, ..
            } => format!("{filename} ({} bytes)", bytes.len()),
        }
    }
}

impl From<ConversionResult> for RawOutput {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::PlainText { text } => RawOutput::Text(text),
            ConversionResult::Triple {
                title,
                main_value,
                sub_value,
            } => RawOutput::titled(title, main_value, sub_value),
            ConversionResult::Stats { fields } => RawOutput::Stats(fields),
            ConversionResult::FileArtifact {
                bytes,
                suggested_filename,
                mime_type,
            } => RawOutput::File {
                bytes,
                filename: suggested_filename,
                mime_type,
            },
        }
    }
}

/// Shape `raw` as `shape`. Never fails and has no side effects.
pub fn format(shape: ResultShape, raw: RawOutput) -> ConversionResult {
    match (shape, raw) {
        (ResultShape::PlainText, RawOutput::Text(text)) => ConversionResult::PlainText { text },
        (ResultShape::PlainText, other) => ConversionResult::PlainText {
            text: other.render_text(),
        },

        (ResultShape::Triple, RawOutput::Titled { title, main, sub }) => {
            ConversionResult::triple(title, main, sub)
        }
        (ResultShape::Triple, RawOutput::Stats(fields)) => {
            let mut iter = fields.into_iter();
            match iter.next() {
                Some(first) => {
                    let rest: Vec<String> =
                        iter.map(|f| format!("{}: {}", f.label, f.value)).collect();
                    ConversionResult::triple(first.label, first.value, rest.join(", "))
                }
                None => ConversionResult::triple("", "", ""),
            }
        }
        (ResultShape::Triple, other) => ConversionResult::triple("", other.render_text(), ""),

        (ResultShape::Stats, RawOutput::Stats(fields)) => ConversionResult::Stats { fields },
        (ResultShape::Stats, RawOutput::Titled { title, main, sub }) => {
            let label = if title.is_empty() { "Result".to_string() } else { title };
            let mut fields = vec![StatField::new(label, main)];
            if !sub.is_empty() {
                fields.push(StatField::new("Note", sub));
            }
            ConversionResult::Stats { fields }
        }
        (ResultShape::Stats, other) => ConversionResult::Stats {
            fields: vec![StatField::new("Result", other.render_text())],
        },

        (
            ResultShape::FileArtifact,
            RawOutput::File {
                bytes,
                filename,
                mime_type,
            },
        ) => ConversionResult::FileArtifact {
            bytes,
            suggested_filename: filename,
            mime_type,
        },
        (ResultShape::FileArtifact, other) => ConversionResult::FileArtifact {
            bytes: other.render_text().into_bytes(),
            suggested_filename: "result.txt".to_string(),
            mime_type: "text/plain".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_shapes_are_wrapped() {
        let result = format(
            ResultShape::Triple,
            RawOutput::titled("1 USD =", "278.50 PKR", "Rate: 1 USD = 278.5000 PKR"),
        );
        assert_eq!(
            result,
            ConversionResult::triple("1 USD =", "278.50 PKR", "Rate: 1 USD = 278.5000 PKR")
        );
        assert_eq!(
            format(ResultShape::PlainText, RawOutput::Text("1010".into())),
            ConversionResult::text("1010")
        );
    }

    #[test]
    fn titled_summary_rendered_as_text() {
        let result = format(ResultShape::PlainText, RawOutput::titled("Your GPA", "3.49", ""));
        assert_eq!(result, ConversionResult::text("Your GPA\n3.49"));
    }

    #[test]
    fn stats_rendered_into_other_shapes() {
        let stats = RawOutput::Stats(vec![
            StatField::new("BMI", "22.9"),
            StatField::new("Category", "Normal weight"),
        ]);
        assert_eq!(
            format(ResultShape::Triple, stats.clone()),
            ConversionResult::triple("BMI", "22.9", "Category: Normal weight")
        );
        assert_eq!(
            format(ResultShape::PlainText, stats),
            ConversionResult::text("BMI: 22.9\nCategory: Normal weight")
        );
    }

    #[test]
    fn text_as_file() {
        let result = format(ResultShape::FileArtifact, RawOutput::Text("hi".into()));
        assert_eq!(
            result,
            ConversionResult::FileArtifact {
                bytes: b"hi".to_vec(),
                suggested_filename: "result.txt".into(),
                mime_type: "text/plain".into(),
            }
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let outputs = [
            RawOutput::Text("abc".into()),
            RawOutput::titled("t", "m", "s"),
            RawOutput::Stats(vec![StatField::new("Words", "2")]),
            RawOutput::File {
                bytes: vec![1, 2],
                filename: "a.pdf".into(),
                mime_type: "application/pdf".into(),
            },
        ];
        let shapes = [
            ResultShape::PlainText,
            ResultShape::Triple,
            ResultShape::Stats,
            ResultShape::FileArtifact,
        ];
        for raw in &outputs {
            for shape in shapes {
                let once = format(shape, raw.clone());
                let twice = format(shape, RawOutput::from(once.clone()));
                assert_eq!(once, twice, "{shape:?} {raw:?}");
            }
        }
    }
}
