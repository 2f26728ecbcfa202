//! # ck-calculators
//!
//! Everyday calculators: body-mass index, grade point average, percentage,
//! age and pregnancy due date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────────

/// Body-mass index.
pub mod bmi;

/// Age and pregnancy calculators.
pub mod dates;

/// Weighted grade point average.
pub mod gpa;

/// Percentage of a total.
pub mod percentage;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use bmi::{body_mass_index, Bmi, BmiCategory};
pub use dates::{age, parse_date, pregnancy, Age, Pregnancy};
pub use gpa::{grade_point_average, Gpa};
pub use percentage::percentage;
