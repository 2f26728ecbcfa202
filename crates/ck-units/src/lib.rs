//! # ck-units
//!
//! Unit tables and conversion for ratio-scale quantities (length, weight,
//! area, volume, speed, time) plus the affine temperature scales.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Generic linear conversion through a table's base unit.
pub mod linear;

/// Quantity kinds.
pub mod quantity;

/// Unit Table Registry.
pub mod registry;

/// Built-in unit definitions.
pub mod tables;

/// Celsius / Fahrenheit / Kelvin conversion.
pub mod temperature;

pub use linear::{convert, Conversion, ConversionRequest, LinearConverter};
pub use quantity::QuantityKind;
pub use registry::{UnitRegistry, UnitTable};
pub use tables::UnitDefinition;
pub use temperature::{convert_temperature, TemperatureScale};
