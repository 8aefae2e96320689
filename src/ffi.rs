//! C ABI exports.
//!
//! Symbols carry a `pow_shims_` prefix so they never shadow the platform's
//! own `pow`.

use libc::{c_double, c_long};

use crate::math::extensions::checked_ipow;
use crate::math::float::powf;
use crate::types::PowError;

/// Writes `status` through `out_status` unless it is null.
///
/// # Safety
///
/// A non-null `out_status` must be valid for a `u32` write.
unsafe fn write_status(out_status: *mut u32, status: PowError) {
  if out_status.is_null() {
    return;
  }
  unsafe { out_status.write(status.code()) };
}

/// Computes `base` raised to `exponent` as doubles.
///
/// Exceptional results are reported as NaN or infinity, exactly as C `pow`.
#[no_mangle]
pub extern "C" fn pow_shims_pow_double(base: c_double, exponent: c_double) -> c_double {
  powf(base, exponent)
}

/// Computes `base` raised to `exponent` as `long` integers.
///
/// # Arguments
///
/// * `base` - The base.
/// * `exponent` - The exponent.
/// * `out_status` - Receives the `PowError` code, 0 on success. May be null.
///
/// # Returns
///
/// The exact power, or 0 if the status is non-zero. On platforms where `long`
/// is 32 bits, results outside its range report `Overflow`.
///
/// # Safety
///
/// The caller must ensure that `out_status` is either null or valid for a
/// 4-byte write.
#[no_mangle]
#[allow(clippy::useless_conversion, clippy::unnecessary_fallible_conversions)] // c_long is i64 on LP64 targets
pub unsafe extern "C" fn pow_shims_pow_long(base: c_long, exponent: c_long, out_status: *mut u32) -> c_long {
  let result =
    checked_ipow(i64::from(base), i64::from(exponent)).and_then(|v| c_long::try_from(v).map_err(|_| PowError::Overflow));

  match result {
    Ok(value) => {
      unsafe { write_status(out_status, PowError::Success) };
      value
    }
    Err(err) => {
      log::debug!("pow_shims_pow_long({base}, {exponent}) reported status {}: {err}", err.code());
      unsafe { write_status(out_status, err) };
      0
    }
  }
}
