// src/math/float.rs

/// Raises `base` to the power `exponent` with C `pow` semantics.
///
/// With `std` this is `f64::powf`, which lowers to the compiler's `pow`
/// intrinsic. Without it the pure-Rust `libm` port is used.
///
/// There is no error channel besides the IEEE-754 special values: a negative
/// base with a non-integer exponent gives NaN, zero to a negative power gives
/// infinity, and `x^0 == 1` for every `x` including NaN.
#[inline]
#[must_use]
pub fn powf(base: f64, exponent: f64) -> f64 {
  #[cfg(feature = "std")]
  {
    base.powf(exponent)
  }
  #[cfg(not(feature = "std"))]
  {
    libm::pow(base, exponent)
  }
}
