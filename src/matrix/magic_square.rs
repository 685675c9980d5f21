// src/matrix/magic_square.rs
//
// Magic square validation: every row, every column, and both main diagonals
// of a square grid must share one sum. Sums accumulate in i128 so no i64
// grid can overflow the check.

use log::debug;

/// Decides whether `matrix` is a magic square.
///
/// The target sum is taken from the first row; every remaining row, every
/// column, the main diagonal, and the anti-diagonal are verified against it.
/// Empty and non-square grids are not magic squares and return false rather
/// than erroring.
///
/// # Examples
/// ```
/// use numkit::matrix::magic_square::is_magic_square;
///
/// let lo_shu = vec![
///     vec![2, 7, 6],
///     vec![9, 5, 1],
///     vec![4, 3, 8],
/// ];
/// assert!(is_magic_square(&lo_shu));
/// assert!(!is_magic_square(&[vec![1, 2], vec![3, 4]]));
/// ```
pub fn is_magic_square(matrix: &[Vec<i64>]) -> bool {
    let size = matrix.len();

    if size == 0 {
        debug!("magic square check: empty grid");
        return false;
    }
    if matrix.iter().any(|row| row.len() != size) {
        debug!("magic square check: grid is not square");
        return false;
    }

    let target = line_sum(&matrix[0]);

    for (index, row) in matrix.iter().enumerate().skip(1) {
        if line_sum(row) != target {
            debug!("magic square check: row {} breaks the target sum {}", index, target);
            return false;
        }
    }

    for column in 0..size {
        let sum: i128 = matrix.iter().map(|row| i128::from(row[column])).sum();
        if sum != target {
            debug!("magic square check: column {} breaks the target sum {}", column, target);
            return false;
        }
    }

    let main_diagonal: i128 = (0..size).map(|i| i128::from(matrix[i][i])).sum();
    if main_diagonal != target {
        debug!("magic square check: main diagonal breaks the target sum {}", target);
        return false;
    }

    let anti_diagonal: i128 = (0..size).map(|i| i128::from(matrix[i][size - 1 - i])).sum();
    if anti_diagonal != target {
        debug!("magic square check: anti-diagonal breaks the target sum {}", target);
        return false;
    }

    true
}

fn line_sum(row: &[i64]) -> i128 {
    row.iter().map(|&value| i128::from(value)).sum()
}
