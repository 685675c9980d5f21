// src/primes/primality.rs
//
// Primality tests: deterministic trial division for 64-bit inputs and a
// Miller-Rabin probable-prime test for arbitrary-precision candidates.
// Trial division complexity: O(sqrt(n))

use log::debug;
use num::{BigInt, Integer, One, ToPrimitive, Zero};

/// Witnesses for the Miller-Rabin rounds. Testing against this fixed set is
/// deterministic for every candidate below 3.3 * 10^24.
const MILLER_RABIN_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Decides whether `n` is prime by trial division.
///
/// Returns false for anything below 2. Multiples of 2 and 3 are eliminated
/// directly; the remaining candidates are the 6k±1 values (5, 7, 11, 13, ...),
/// checked up to sqrt(n). The bound uses `candidate <= n / candidate` so the
/// candidate square can never overflow.
///
/// # Arguments
/// * `n` - The number to test
///
/// # Examples
/// ```
/// use numkit::primes::primality::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let n = n as u64;
    let mut candidate = 5u64;

    while candidate <= n / candidate {
        if n % candidate == 0 || n % (candidate + 2) == 0 {
            return false;
        }
        candidate += 6;
    }

    true
}

/// Miller-Rabin probable-prime test over the fixed witness set.
///
/// Deterministic for candidates below 3.3 * 10^24; beyond that no
/// pseudoprime for these 15 witnesses is known. Use this instead of
/// [`is_prime`] when the candidate does not fit in 64 bits.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::primes::primality::is_probable_prime;
///
/// let mersenne = BigInt::from(2147483647u64); // 2^31 - 1
/// assert!(is_probable_prime(&mersenne));
/// assert!(!is_probable_prime(&BigInt::from(561))); // Carmichael number
/// ```
pub fn is_probable_prime(input: &BigInt) -> bool {
    if input == &BigInt::from(2) || input == &BigInt::from(3) {
        return true;
    }
    if input < &BigInt::from(2) || input % 2 == BigInt::zero() {
        return false;
    }

    // Witnesses not below the candidate prove nothing; candidates that small
    // are prime exactly when they appear in the witness set itself.
    if let Some(small) = input.to_i64() {
        if small <= 47 {
            return MILLER_RABIN_BASES.contains(&small);
        }
    }

    // Write input - 1 as d * 2^s with d odd
    let mut d = input - 1;
    let mut s = 0;
    while &d % 2 == BigInt::zero() {
        d /= 2;
        s += 1;
    }

    for &base in &MILLER_RABIN_BASES {
        let mut x = BigInt::from(base).modpow(&d, input);
        if x == BigInt::one() || x == input - 1 {
            continue;
        }

        let mut round = 1;
        while round < s {
            x = x.modpow(&BigInt::from(2), input);
            if x == BigInt::one() {
                return false;
            }
            if x == input - 1 {
                break;
            }
            round += 1;
        }

        if x != input - 1 {
            debug!("Miller-Rabin: witness {} proves {} composite", base, input);
            return false;
        }
    }

    true
}

/// Returns the smallest prime strictly greater than `from`.
///
/// Steps over even candidates and tests each odd one with
/// [`is_probable_prime`].
pub fn next_prime(from: &BigInt) -> BigInt {
    let mut candidate: BigInt = from + 1;

    if candidate <= BigInt::from(2) {
        return BigInt::from(2);
    }
    if candidate.is_even() {
        candidate += 1;
    }

    while !is_probable_prime(&candidate) {
        candidate += 2;
    }

    debug!("next_prime: {} -> {}", from, candidate);
    candidate
}
