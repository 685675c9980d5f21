// src/integer_math/digits.rs
//
// Decimal-digit operations. Numbers are sized by their decimal representation
// (the string of digits of |n|), which also drives the Armstrong test.

use num::{BigInt, Signed};

/// Sums the decimal digits of |n|.
///
/// Defined for any integer; the sign is stripped first, so
/// `digit_sum(-123) == 6`, and `digit_sum(0) == 0`.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::integer_math::digits::digit_sum;
///
/// assert_eq!(digit_sum(&BigInt::from(1234)), 10);
/// assert_eq!(digit_sum(&BigInt::from(-123)), 6);
/// ```
pub fn digit_sum(n: &BigInt) -> u64 {
    n.abs()
        .to_string()
        .bytes()
        .map(|digit| u64::from(digit - b'0'))
        .sum()
}

/// Number of decimal digits of |n|; 0 has one digit.
pub fn digit_count(n: &BigInt) -> u32 {
    n.abs().to_string().len() as u32
}

/// Decides whether `n` is an Armstrong (narcissistic) number: equal to the
/// sum of its decimal digits each raised to the digit count.
///
/// The canonical definition covers non-negative integers only; a negative
/// input returns false rather than erroring, since a sum of non-negative
/// digit powers can never equal a negative value.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::integer_math::digits::is_armstrong_number;
///
/// assert!(is_armstrong_number(&BigInt::from(153)));
/// assert!(!is_armstrong_number(&BigInt::from(154)));
/// ```
pub fn is_armstrong_number(n: &BigInt) -> bool {
    if n.is_negative() {
        return false;
    }

    let digits = n.to_string();
    let exponent = digits.len() as u32;
    let sum: BigInt = digits
        .bytes()
        .map(|digit| BigInt::from(digit - b'0').pow(exponent))
        .sum();

    sum == *n
}
