//! # ck-math
//!
//! Numeric helpers shared by the converters: display rounding and
//! tolerant floating-point comparison.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison.
pub mod comparison;

/// Rounding.
pub mod rounding;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::close_relative;
pub use rounding::round_closest;
