//! # convkit
//!
//! The conversion engine behind a utility-tool website: units, currencies,
//! number systems, text utilities and everyday calculators, all reachable
//! through one [`ConversionEngine`] keyed by stable tool ids.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ck-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! convkit = "0.1"
//! ```
//!
//! ```rust
//! use convkit::core::{ConversionResult, EngineConfig};
//! use convkit::{ConversionEngine, RawFields};
//!
//! let engine = ConversionEngine::new(EngineConfig::default()).unwrap();
//! let fields = RawFields::new().with("amount", 100.0);
//! let result = engine.run("currency-converter", &fields).unwrap();
//! assert_eq!(
//!     result,
//!     ConversionResult::triple("100 USD =", "27,850.00 PKR", "Rate: 1 USD = 278.5000 PKR")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, configuration, and error definitions.
pub use ck_core as core;

/// Rounding and floating-point comparison.
pub use ck_math as math;

/// Unit tables and the linear and temperature converters.
pub use ck_units as units;

/// Currency definitions, rate tables and exchange.
pub use ck_currencies as currencies;

/// Number bases, Roman numerals, number words and binary text.
pub use ck_numerals as numerals;

/// Word statistics, Base64, digests and passwords.
pub use ck_text as text;

/// BMI, GPA, percentage, age and pregnancy calculators.
pub use ck_calculators as calculators;

/// Tool catalogue, field model, formatter and engine.
pub use ck_tools as tools;

/// Subscriber setup for the `tracing` events emitted by the engine.
pub mod logging;

pub use ck_tools::{ConversionEngine, RawFields, ToolRegistry};
