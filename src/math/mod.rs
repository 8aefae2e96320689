// src/math/mod.rs

pub mod extensions;
pub mod float;
