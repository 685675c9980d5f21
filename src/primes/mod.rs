// src/primes/mod.rs

pub mod perfect;
pub mod primality;
pub mod sieve;
