// src/integer_math/mod.rs

pub mod digits;
pub mod factorial;
pub mod gcd;
