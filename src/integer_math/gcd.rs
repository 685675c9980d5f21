// src/integer_math/gcd.rs

use num::{BigInt, One, Signed, Zero};

/// Computes the greatest common divisor of two integers.
///
/// Euclidean algorithm by repeated remainder on the magnitudes; the result
/// is always non-negative and gcd(0, 0) = 0. This is the single canonical
/// GCD routine; [`lcm`] and the slice variants all route through it.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::integer_math::gcd::gcd;
///
/// assert_eq!(gcd(&BigInt::from(48), &BigInt::from(18)), BigInt::from(6));
/// assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::from(0));
/// ```
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }

    a
}

/// Computes the least common multiple of two integers as |a·b| / gcd(a, b).
///
/// Returns 0 when either input is 0, so the division is never by zero.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::integer_math::gcd::lcm;
///
/// assert_eq!(lcm(&BigInt::from(4), &BigInt::from(6)), BigInt::from(12));
/// assert_eq!(lcm(&BigInt::from(0), &BigInt::from(5)), BigInt::from(0));
/// ```
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    (a * b).abs() / gcd(a, b)
}

/// GCD of every number in the slice; 0 for an empty slice.
pub fn gcd_all(numbers: &[BigInt]) -> BigInt {
    numbers.iter().fold(BigInt::zero(), |acc, x| gcd(&acc, x))
}

/// LCM of every number in the slice; 1 for an empty slice.
pub fn lcm_all(numbers: &[BigInt]) -> BigInt {
    numbers.iter().fold(BigInt::one(), |acc, x| lcm(&acc, x))
}

/// True when the numbers share no common factor above 1.
pub fn are_coprime(numbers: &[BigInt]) -> bool {
    gcd_all(numbers) == BigInt::one()
}
