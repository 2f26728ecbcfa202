//! # ck-core
//!
//! Core types, error taxonomy, configuration and result contract for
//! convkit.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error hierarchy, the
//! engine configuration, the [`ConversionResult`] contract and the
//! formatting/parsing helpers every converter uses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// The result contract shared by every tool.
pub mod result;

/// Engine configuration and the process-wide settings.
pub mod settings;

/// Formatting and parsing utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A scale factor relative to a table's base unit.
pub type Factor = Real;

/// An exchange rate relative to the reference currency.
pub type Rate = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, ErrorKind, Result};
pub use result::{ConversionResult, ResultShape, StatField};
pub use settings::{EngineConfig, PasswordConfig, PrecisionConfig, Settings};
