//! The `pow` entry point, one implementation per numeric kind.

use crate::math::extensions::checked_ipow;
use crate::math::float::powf;
use crate::types::PowError;

/// Numeric kinds that can be raised to a power of their own kind.
pub trait Pow: Sized {
  /// `Self` for floats, a `Result` for integers.
  type Output;

  /// Raises `self` to the power `exponent`.
  fn pow(self, exponent: Self) -> Self::Output;
}

impl Pow for f64 {
  type Output = f64;

  #[inline]
  fn pow(self, exponent: f64) -> f64 {
    powf(self, exponent)
  }
}

impl Pow for i64 {
  type Output = Result<i64, PowError>;

  #[inline]
  fn pow(self, exponent: i64) -> Result<i64, PowError> {
    checked_ipow(self, exponent)
  }
}

/// Computes `base` raised to the power `exponent`.
///
/// ```
/// use pow_shims::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(2_i64, 10), Ok(1024));
/// ```
#[inline]
pub fn pow<T: Pow>(base: T, exponent: T) -> T::Output {
  Pow::pow(base, exponent)
}
