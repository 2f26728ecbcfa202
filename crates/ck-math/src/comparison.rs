//! Floating-point comparison.

use ck_core::Real;

/// Magnitude below which two values both count as zero.
pub const EPSILON: Real = 1e-10;

/// Relative tolerance used for conversion round trips.
pub const ROUND_TRIP_TOLERANCE: Real = 1e-6;

/// Return `true` if `a` and `b` agree within `tolerance` relative to the
/// larger magnitude. Values that are both (near) zero compare equal.
#[inline]
pub fn close_relative(a: Real, b: Real, tolerance: Real) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    if scale < EPSILON {
        return true;
    }
    (a - b).abs() / scale <= tolerance
}
