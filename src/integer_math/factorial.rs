// src/integer_math/factorial.rs

use num::{BigInt, One};

use crate::error::MathError;

/// Computes n! for non-negative n.
///
/// Iterative product accumulation, so the cost is n multiplications and no
/// call stack depth depends on the input. 0! and 1! are both 1.
///
/// # Arguments
/// * `n` - The number whose factorial to compute
///
/// # Returns
/// * `Ok(value)` - n! as a BigInt
/// * `Err(MathError::InvalidArgument)` - If `n` is negative
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::integer_math::factorial::factorial;
///
/// assert_eq!(factorial(5).unwrap(), BigInt::from(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigInt, MathError> {
    if n < 0 {
        return Err(MathError::InvalidArgument(format!(
            "factorial is undefined for negative input, got {}",
            n
        )));
    }

    let mut product = BigInt::one();
    for factor in 2..=n {
        product *= factor;
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0).unwrap(), BigInt::from(1));
        assert_eq!(factorial(1).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(2).unwrap(), BigInt::from(2));
        assert_eq!(factorial(5).unwrap(), BigInt::from(120));
        assert_eq!(factorial(10).unwrap(), BigInt::from(3628800));
    }

    #[test]
    fn test_factorial_negative_rejected() {
        assert!(matches!(factorial(-1), Err(MathError::InvalidArgument(_))));
        assert!(matches!(factorial(-100), Err(MathError::InvalidArgument(_))));
    }

    #[test]
    fn test_factorial_exceeds_machine_width() {
        // 25! = 15511210043330985984000000, past u64
        let expected = BigInt::parse_bytes(b"15511210043330985984000000", 10).unwrap();
        assert_eq!(factorial(25).unwrap(), expected);
    }

    #[test]
    fn test_factorial_recurrence() {
        for n in 1..=20i64 {
            assert_eq!(
                factorial(n).unwrap(),
                factorial(n - 1).unwrap() * n,
                "n! != n * (n-1)! at n = {}",
                n
            );
        }
    }
}
