// src/matrix/mod.rs

pub mod magic_square;
