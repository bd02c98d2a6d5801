#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use error_chain::bail;

use crate::error::*;

use super::U256;

/// Shift amounts at or above this value are rejected by [`shift_left`].
///
/// One below the bit width of `U256`, so shifting `1` by 255 is refused
/// even though the result would fit.
pub const SHIFT_LIMIT: u32 = 255;

/// Adds two values, failing instead of wrapping past `U256::MAX`.
pub fn add(a: U256, b: U256) -> Result<U256, MathError> {
    match a.checked_add(b) {
        Some(ret) => Ok(ret),
        None => Err(MathErrorKind::Overflow.into()),
    }
}

/// Subtracts `b` from `a`, failing when `b > a`.
pub fn subtract(a: U256, b: U256) -> Result<U256, MathError> {
    if b > a {
        bail!(MathErrorKind::Underflow);
    }
    Ok(a - b)
}

/// Multiplies two values, failing when the true product does not fit.
pub fn multiply(a: U256, b: U256) -> Result<U256, MathError> {
    if a.is_zero() {
        return Ok(U256::zero());
    }
    match a.checked_mul(b) {
        Some(ret) => Ok(ret),
        None => Err(MathErrorKind::Overflow.into()),
    }
}

/// Floor division, failing when `b` is zero.
pub fn divide(a: U256, b: U256) -> Result<U256, MathError> {
    match a.checked_div(b) {
        Some(ret) => Ok(ret),
        None => Err(MathErrorKind::DivisionByZero.into()),
    }
}

/// Shifts `a` left by `n` bits, discarding the bits that fall off the top.
/// Fails for any `n` at or above [`SHIFT_LIMIT`].
pub fn shift_left(a: U256, n: U256) -> Result<U256, MathError> {
    if n >= U256::from(SHIFT_LIMIT) {
        bail!(MathErrorKind::InvalidShift(n));
    }
    Ok(a << n.as_usize())
}
