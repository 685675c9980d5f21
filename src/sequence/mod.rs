// src/sequence/mod.rs

pub mod fibonacci;
pub mod pascal;
