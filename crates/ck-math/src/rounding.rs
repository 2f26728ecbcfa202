//! Rounding applied to computed values before display.

use ck_core::Real;

/// Round `value` to `precision` decimal places, ties away from zero.
///
/// Non-finite values are returned unchanged.
pub fn round_closest(value: Real, precision: u8) -> Real {
    if !value.is_finite() {
        return value;
    }
    let mult = 10_f64.powi(i32::from(precision));
    (value * mult).round() / mult
}
