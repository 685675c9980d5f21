// src/sequence/pascal.rs
//
// Pascal's triangle: row i holds the binomial coefficients C(i, 0)..C(i, i).
// Each row is built in full from the already-finalized previous row before it
// is appended; rows are never mutated once pushed.

use num::{BigInt, One, Zero};

/// Produces the first `rows` rows of Pascal's triangle.
///
/// Row 0 is `[1]`; row i has i+1 entries whose interior values are the sum of
/// the two entries above. For `rows <= 0` the result is empty.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::sequence::pascal::pascals_triangle;
///
/// let triangle = pascals_triangle(3);
/// assert_eq!(triangle.len(), 3);
/// assert_eq!(triangle[2], vec![BigInt::from(1), BigInt::from(2), BigInt::from(1)]);
/// ```
pub fn pascals_triangle(rows: i64) -> Vec<Vec<BigInt>> {
    if rows <= 0 {
        return Vec::new();
    }

    let row_count = rows as usize;
    let mut triangle: Vec<Vec<BigInt>> = Vec::with_capacity(row_count);
    triangle.push(vec![BigInt::one()]);

    for i in 1..row_count {
        let previous_row = &triangle[i - 1];
        let mut row = Vec::with_capacity(i + 1);

        row.push(BigInt::one());
        for j in 1..previous_row.len() {
            row.push(&previous_row[j - 1] + &previous_row[j]);
        }
        row.push(BigInt::one());

        triangle.push(row);
    }

    triangle
}

/// Computes the binomial coefficient C(n, k) directly.
///
/// Uses the multiplicative method: the running product after step i equals
/// C(n - k + i, i), so every intermediate division is exact. Returns 0 when
/// `k > n`, matching the empty-selection convention.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use numkit::sequence::pascal::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5, 2), BigInt::from(10));
/// assert_eq!(binomial_coefficient(3, 7), BigInt::from(0));
/// ```
pub fn binomial_coefficient(n: u32, k: u32) -> BigInt {
    if k > n {
        return BigInt::zero();
    }

    // C(n, k) == C(n, n - k); iterate the smaller side
    let k = k.min(n - k);
    let mut result = BigInt::one();

    for i in 1..=k {
        result = result * (n - k + i) / i;
    }

    result
}
