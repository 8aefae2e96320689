// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use pow_shims::PowError;

#[test]
fn test_pow_error_serde() {
  let err = PowError::Overflow; // repr(u32) value 3
  let serialized = serde_json::to_string(&err).unwrap();
  assert_eq!(serialized, "3"); // serde_repr serializes to the number
  let deserialized: PowError = serde_json::from_str(&serialized).unwrap();
  assert_eq!(err, deserialized);

  let ok = serde_json::to_string(&PowError::Success).unwrap();
  assert_eq!(ok, "0");
}

#[test]
fn test_pow_error_serde_rejects_unknown_code() {
  let result: Result<PowError, _> = serde_json::from_str("42");
  assert!(result.is_err(), "42 is not a PowError code");
}

#[test]
fn test_result_serde() {
  let result: Result<i64, PowError> = pow_shims::checked_ipow(0, -1);
  let serialized = serde_json::to_string(&result).unwrap();
  assert_eq!(serialized, r#"{"Err":2}"#);
  let deserialized: Result<i64, PowError> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(deserialized, result);
}
