// src/primes/sieve.rs
//
// Sieve of Eratosthenes: all primes up to a bound.
// Complexity: O(n log log n) time, O(n) bits of space
// The marker array must fit in memory, so the bound is a machine integer by
// construction; arbitrary-precision candidates belong to the Miller-Rabin
// test instead.

use bitvec::prelude::*;
use log::debug;

/// Produces every prime less than or equal to `n`, in ascending order.
///
/// Allocates one marker bit per candidate, culls multiples of each surviving
/// prime starting at its square, and collects the unmarked indices. For
/// `n < 2` the result is empty.
///
/// # Arguments
/// * `n` - The inclusive upper bound
///
/// # Examples
/// ```
/// use numkit::primes::sieve::primes_up_to;
///
/// assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
/// assert!(primes_up_to(1).is_empty());
/// ```
pub fn primes_up_to(n: i64) -> Vec<i64> {
    if n < 2 {
        return Vec::new();
    }

    let limit = n as usize;
    debug!("sieving up to {} ({} marker bits)", limit, limit + 1);

    let mut is_composite = bitvec![0; limit + 1];
    is_composite.set(0, true);
    is_composite.set(1, true);

    let mut base = 2usize;
    while base * base <= limit {
        if !is_composite[base] {
            // Smaller multiples were already culled by smaller primes
            let mut multiple = base * base;
            while multiple <= limit {
                is_composite.set(multiple, true);
                multiple += base;
            }
        }
        base += 1;
    }

    let primes: Vec<i64> = (2..=limit)
        .filter(|&value| !is_composite[value])
        .map(|value| value as i64)
        .collect();

    debug!("sieve found {} primes <= {}", primes.len(), limit);
    primes
}
