// src/math/extensions.rs

use crate::types::PowError;

/// Exact integer exponentiation.
///
/// Computed by square-and-multiply over `i64`, never through a float.
///
/// Negative exponents only succeed when the exact result is an integer:
/// `1^n == 1` and `(-1)^n == ±1`. Zero to a negative power reports
/// [`PowError::DivisionByZero`], any other base reports
/// [`PowError::NegativeExponent`].
///
/// # Errors
///
/// [`PowError::Overflow`] when the result does not fit in `i64`, plus the
/// negative-exponent cases above.
#[inline]
pub fn checked_ipow(base: i64, exp: i64) -> Result<i64, PowError> {
  if exp < 0 {
    let err = match base {
      1 => return Ok(1),
      -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
      0 => PowError::DivisionByZero,
      _ => PowError::NegativeExponent,
    };
    log::trace!("checked_ipow({base}, {exp}) failed: {err}");
    return Err(err);
  }

  _ipow_by_squaring(base, exp).ok_or_else(|| {
    log::trace!("checked_ipow({base}, {exp}) overflowed");
    PowError::Overflow
  })
}

/// Integer exponentiation that never fails.
///
/// Overflow wraps around the `i64` boundary. Negative exponents truncate
/// the fractional result toward zero, so `2^-1 == 0` and `0^-1 == 0`.
#[inline]
#[must_use]
pub fn wrapping_ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    return match base {
      1 => 1,
      -1 if exp % 2 == 0 => 1,
      -1 => -1,
      _ => 0,
    };
  }

  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}

/// Square-and-multiply for `exp >= 0`, `None` on overflow.
///
/// The base is only squared while a higher exponent bit remains, so an
/// overflowing square implies an overflowing result.
#[inline]
fn _ipow_by_squaring(mut base: i64, mut exp: i64) -> Option<i64> {
  debug_assert!(exp >= 0);
  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.checked_mul(base)?;
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.checked_mul(base)?;
  }
  Some(result)
}
