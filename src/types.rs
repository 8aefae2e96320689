//! Status codes shared by the Rust and C surfaces.

use core::fmt;
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Represents a `pow-shims` error code.
///
/// The discriminants are stable: the C ABI reports them through its
/// `out_status` pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum PowError {
  /// Success (no error).
  Success = 0,
  /// Exponent was negative and the exact result is not an integer.
  NegativeExponent = 1,
  /// Zero was raised to a negative power.
  DivisionByZero = 2,
  /// The exact result does not fit the integer width.
  Overflow = 3,
}

impl PowError {
  /// Numeric code of this status, as written across the C ABI.
  #[inline]
  pub const fn code(self) -> u32 {
    self as u32
  }
}

impl TryFrom<u32> for PowError {
  type Error = u32;

  fn try_from(value: u32) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(PowError::Success),
      1 => Ok(PowError::NegativeExponent),
      2 => Ok(PowError::DivisionByZero),
      3 => Ok(PowError::Overflow),
      other => Err(other),
    }
  }
}

impl fmt::Display for PowError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      PowError::Success => "success",
      PowError::NegativeExponent => "negative exponent yields a non-integer result",
      PowError::DivisionByZero => "zero raised to a negative power",
      PowError::Overflow => "integer overflow in exponentiation",
    };
    f.write_str(msg)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PowError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codes_are_stable() {
    assert_eq!(PowError::Success.code(), 0);
    assert_eq!(PowError::NegativeExponent.code(), 1);
    assert_eq!(PowError::DivisionByZero.code(), 2);
    assert_eq!(PowError::Overflow.code(), 3);
  }

  #[test]
  fn test_try_from_u32() {
    for err in [
      PowError::Success,
      PowError::NegativeExponent,
      PowError::DivisionByZero,
      PowError::Overflow,
    ] {
      assert_eq!(PowError::try_from(err.code()), Ok(err));
    }
    assert_eq!(PowError::try_from(4), Err(4));
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_display() {
    assert_eq!(PowError::Overflow.to_string(), "integer overflow in exponentiation");
    assert_eq!(PowError::DivisionByZero.to_string(), "zero raised to a negative power");
  }
}
