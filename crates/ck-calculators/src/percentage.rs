//! Percentage of a total.

use ck_core::{ensure, Real, Result};

/// `value / total × 100`.
pub fn percentage(value: Real, total: Real) -> Result<Real> {
    ensure!(
        value.is_finite() && total.is_finite(),
        "Enter valid numbers"
    );
    ensure!(total != 0.0, "Total cannot be zero");
    Ok(value / total * 100.0)
}
