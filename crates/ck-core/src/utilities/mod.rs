//! Miscellaneous utilities.

/// Number formatting (fixed precision, trimming, thousands separators).
pub mod data_formatters;

/// Parsing of raw form fields.
pub mod data_parsers;
