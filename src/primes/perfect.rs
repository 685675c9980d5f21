// src/primes/perfect.rs
//
// Perfect numbers: n equals the sum of its proper divisors.
// Divisors are collected in pairs (i, n/i) by trial division up to sqrt(n),
// so the scan is O(sqrt(n)).

/// Sums the proper divisors of `n` (every divisor strictly below `n`).
///
/// Starts from the implicit divisor 1, then walks i in 2..=sqrt(n) adding
/// both i and n/i, counting the square root only once. Returns 0 for n < 2:
/// 1 has no proper divisors and the sum is not defined below that.
///
/// The sum is returned as i128 because divisor sums of large 64-bit inputs
/// can exceed 64 bits.
pub fn aliquot_sum(n: i64) -> i128 {
    if n < 2 {
        return 0;
    }

    let mut sum: i128 = 1;
    let mut divisor = 2i64;

    while divisor <= n / divisor {
        if n % divisor == 0 {
            sum += i128::from(divisor);
            let paired = n / divisor;
            if paired != divisor {
                sum += i128::from(paired);
            }
        }
        divisor += 1;
    }

    sum
}

/// Decides whether `n` is a perfect number.
///
/// True iff `n >= 2` and the sum of its proper divisors equals `n`.
///
/// # Examples
/// ```
/// use numkit::primes::perfect::is_perfect_number;
///
/// assert!(is_perfect_number(6));
/// assert!(is_perfect_number(28));
/// assert!(!is_perfect_number(12));
/// ```
pub fn is_perfect_number(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    aliquot_sum(n) == i128::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliquot_sum_small_values() {
        assert_eq!(aliquot_sum(-6), 0);
        assert_eq!(aliquot_sum(0), 0);
        assert_eq!(aliquot_sum(1), 0);
        assert_eq!(aliquot_sum(2), 1); // 1
        assert_eq!(aliquot_sum(12), 16); // 1 + 2 + 3 + 4 + 6
        assert_eq!(aliquot_sum(16), 15); // 1 + 2 + 4 + 8
    }

    #[test]
    fn test_aliquot_sum_of_prime_is_one() {
        for p in [2, 3, 5, 7, 97, 7919] {
            assert_eq!(aliquot_sum(p), 1, "prime {} has only the divisor 1", p);
        }
    }

    #[test]
    fn test_aliquot_sum_perfect_square() {
        // 36 = 1 + 2 + 3 + 4 + 6 + 9 + 12 + 18; the root 6 counts once
        assert_eq!(aliquot_sum(36), 55);
    }

    #[test]
    fn test_is_perfect_number_known_values() {
        assert!(is_perfect_number(6));
        assert!(is_perfect_number(28));
        assert!(is_perfect_number(496));
        assert!(is_perfect_number(8128));
    }

    #[test]
    fn test_is_perfect_number_rejects_others() {
        assert!(!is_perfect_number(12));
        assert!(!is_perfect_number(27));
        assert!(!is_perfect_number(100));
        assert!(!is_perfect_number(8127));
        assert!(!is_perfect_number(8129));
    }

    #[test]
    fn test_is_perfect_number_below_two() {
        assert!(!is_perfect_number(-28));
        assert!(!is_perfect_number(0));
        assert!(!is_perfect_number(1));
    }

    #[test]
    fn test_is_perfect_number_fifth_perfect() {
        // 2^12 * (2^13 - 1)
        assert!(is_perfect_number(33_550_336));
    }
}
