#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]

//! `pow-shims` provides `pow` for `f64` and for native-width signed integers
//! without depending on a platform math runtime.
//!
//! The float path forwards to the compiler intrinsic behind `f64::powf`, or to
//! the pure-Rust `libm` port on `no_std` targets. The integer path is exact and
//! reports negative exponents and overflow through [`PowError`].

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pow-shims needs a float backend: enable the `std` or `libm` feature");

// Declare modules
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod math;
pub mod pow;
pub mod types;

// Re-export key public types and functions for easier use
pub use math::extensions::{checked_ipow, wrapping_ipow};
pub use math::float::powf;
pub use pow::{pow, Pow};
pub use types::PowError;
