// src/sequence/fibonacci.rs
//
// Fibonacci numbers: F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2)
// Complexity: O(n) BigInt additions per call
// Values grow without bound (F(n) has ~0.209*n decimal digits), so results
// are BigInt and no upper limit is placed on the index.

use num::{BigInt, One, Zero};

use crate::error::MathError;

/// Computes the value at position `n` of the Fibonacci sequence (0-indexed).
///
/// Uses an iterative two-accumulator loop rather than naive recursion, so the
/// cost stays linear in `n` and no call stack is consumed.
///
/// # Arguments
/// * `n` - The position in the sequence, starting from 0
///
/// # Returns
/// * `Ok(value)` - The n-th Fibonacci number
/// * `Err(MathError::InvalidArgument)` - If `n` is negative
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::sequence::fibonacci::fibonacci_value;
///
/// assert_eq!(fibonacci_value(0).unwrap(), BigInt::from(0));
/// assert_eq!(fibonacci_value(10).unwrap(), BigInt::from(55));
/// assert!(fibonacci_value(-1).is_err());
/// ```
pub fn fibonacci_value(n: i64) -> Result<BigInt, MathError> {
    if n < 0 {
        return Err(MathError::InvalidArgument(format!(
            "Fibonacci index must be non-negative, got {}",
            n
        )));
    }

    let mut previous = BigInt::zero();
    let mut current = BigInt::one();

    for _ in 0..n {
        let next = &previous + &current;
        previous = current;
        current = next;
    }

    Ok(previous)
}

/// Produces the first `n` values of the Fibonacci sequence.
///
/// For `n <= 0` the result is empty. This is deliberately looser than
/// [`fibonacci_value`], which rejects a negative index: a count degrades to
/// "nothing to produce" while an index below zero names a position that does
/// not exist.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::sequence::fibonacci::fibonacci_sequence;
///
/// let values = fibonacci_sequence(5);
/// let expected: Vec<BigInt> = vec![0, 1, 1, 2, 3].into_iter().map(BigInt::from).collect();
/// assert_eq!(values, expected);
/// assert!(fibonacci_sequence(-1).is_empty());
/// ```
pub fn fibonacci_sequence(n: i64) -> Vec<BigInt> {
    if n <= 0 {
        return Vec::new();
    }

    let count = n as usize;
    let mut values = Vec::with_capacity(count);
    values.push(BigInt::zero());

    if count == 1 {
        return values;
    }

    values.push(BigInt::one());

    while values.len() < count {
        let next = &values[values.len() - 1] + &values[values.len() - 2];
        values.push(next);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_value_base_cases() {
        assert_eq!(fibonacci_value(0).unwrap(), BigInt::from(0));
        assert_eq!(fibonacci_value(1).unwrap(), BigInt::from(1));
        assert_eq!(fibonacci_value(2).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_fibonacci_value_known_values() {
        assert_eq!(fibonacci_value(10).unwrap(), BigInt::from(55));
        assert_eq!(fibonacci_value(20).unwrap(), BigInt::from(6765));
        assert_eq!(fibonacci_value(50).unwrap(), BigInt::from(12586269025u64));
    }

    #[test]
    fn test_fibonacci_value_negative_index_rejected() {
        let result = fibonacci_value(-1);
        assert!(matches!(result, Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_fibonacci_value_large_index() {
        // F(100) = 354224848179261915075, well past u64
        let expected = BigInt::parse_bytes(b"354224848179261915075", 10).unwrap();
        assert_eq!(fibonacci_value(100).unwrap(), expected);
    }

    #[test]
    fn test_fibonacci_sequence_boundaries() {
        assert!(fibonacci_sequence(-5).is_empty());
        assert!(fibonacci_sequence(0).is_empty());
        assert_eq!(fibonacci_sequence(1), vec![BigInt::from(0)]);
        assert_eq!(fibonacci_sequence(2), vec![BigInt::from(0), BigInt::from(1)]);
    }

    #[test]
    fn test_fibonacci_sequence_first_ten() {
        let expected: Vec<BigInt> = vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
            .into_iter()
            .map(BigInt::from)
            .collect();
        assert_eq!(fibonacci_sequence(10), expected);
    }

    #[test]
    fn test_fibonacci_sequence_agrees_with_value() {
        let values = fibonacci_sequence(30);
        for (index, value) in values.iter().enumerate() {
            assert_eq!(
                value,
                &fibonacci_value(index as i64).unwrap(),
                "sequence and value disagree at index {}",
                index
            );
        }
    }
}
