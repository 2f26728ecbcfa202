//! # ck-tools
//!
//! The tool layer of convkit: the catalogue mapping stable tool ids to
//! converters, typed extraction of raw form fields, the result formatter,
//! the [`ConversionEngine`] front door and the boundary with the external
//! document processor.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────────

/// Converter bindings.
pub mod binding;

/// Document tools and the `DocumentService` boundary.
pub mod document;

/// The conversion engine.
pub mod engine;

/// Raw form fields.
pub mod fields;

/// Result Formatter.
pub mod formatter;

/// Dispatch Table.
pub mod registry;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use binding::{Converter, ConverterBinding};
pub use document::{
    DocumentError, DocumentOptions, DocumentRequest, DocumentService, DocumentTool, FileArtifact,
    InputFile, PageSelection,
};
pub use engine::ConversionEngine;
pub use fields::{FieldKind, FieldSpec, FieldValue, Fields, RawFields};
pub use formatter::{format, RawOutput};
pub use registry::ToolRegistry;
