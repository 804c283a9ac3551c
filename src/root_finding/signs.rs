//! Sign tests on the IEEE product of two function values.
//! - `opposite_sign`         : `x * y < 0`
//! - `same_sign`             : `x * y > 0`
//! - `sign_change_ruled_out` : `x * y >= 0`
//!
//! Two tiny values whose product underflows to ±0 are neither opposite
//! nor same sign. A NaN operand fails every test.

/// Returns `true` if `x * y < 0`.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}


/// Returns `true` if `x * y > 0`.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x * y > 0.0
}


/// Returns `true` if `x * y >= 0`. Not the negation of [`opposite_sign`]:
/// a NaN product rules nothing out.
#[inline]
pub(crate) fn sign_change_ruled_out(x: f64, y: f64) -> bool {
    x * y >= 0.0
}
