//! # ck-numerals
//!
//! Converters between textual representations of numbers: positional
//! radices, Roman numerals, English words and the binary rendering of text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────────

/// Text ↔ 8-bit binary groups.
pub mod binary_text;

/// Number Base Converter.
pub mod radix;

/// Roman Numeral Converter.
pub mod roman;

/// English number names.
pub mod words;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use binary_text::{binary_to_text, text_to_binary};
pub use radix::{convert_base, parse_in_base, render_in_base, Radix};
pub use roman::{to_number, to_roman};
pub use words::{parse_whole_number, to_words};
