// src/lib.rs

pub mod error;
pub mod sequence;
pub mod primes;
pub mod integer_math;
pub mod matrix;

// Re-export the canonical operations for convenience
pub use error::MathError;
pub use sequence::fibonacci::{fibonacci_sequence, fibonacci_value};
pub use sequence::pascal::{binomial_coefficient, pascals_triangle};
pub use primes::primality::{is_prime, is_probable_prime, next_prime};
pub use primes::sieve::primes_up_to;
pub use primes::perfect::{aliquot_sum, is_perfect_number};
pub use integer_math::gcd::{are_coprime, gcd, gcd_all, lcm, lcm_all};
pub use integer_math::factorial::factorial;
pub use integer_math::digits::{digit_count, digit_sum, is_armstrong_number};
pub use matrix::magic_square::is_magic_square;
