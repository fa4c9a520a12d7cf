//! In-place renormalization of near-stochastic transition matrices.

use ndarray::Array2;

use crate::sort::mixed_sort;
use crate::sum::kahan_sum;

/// Rescale an n×n nonnegative matrix in place so every row sums to 1.0.
///
/// Iterative estimators produce transition matrices whose rows drift away
/// from exact row-stochasticity by accumulated rounding. This kernel repairs
/// the drift while preserving the off-diagonal proportions, with the
/// diagonal acting as the designated sink for numerical slack:
///
/// 1. Each row is copied into `scratch`, sorted ascending, and
///    Kahan-summed; the maximum row sum over all rows becomes the single
///    global divisor. Sorting before summation minimizes cancellation
///    across widely varying magnitudes.
/// 2. Every entry is divided by that maximum. A global divisor, rather than
///    per-row, preserves the relative mass between rows — only the worst
///    row is pinned to exactly 1, the others land slightly under.
/// 3. Each diagonal entry is recomputed as 1.0 minus the sorted,
///    Kahan-compensated sum of its row's off-diagonal entries, so every row
///    sums to exactly 1.0 by construction.
///
/// If no row sums to a positive value the matrix is degenerate and is left
/// untouched — a documented no-op, not an error.
///
/// `scratch` is a caller-provided buffer of length n, reused for every row;
/// the kernel itself never allocates. Its contents are meaningless after
/// the call. The matrix must be square and `scratch` must match its
/// dimension; both are debug-asserted.
pub fn renormalize_transition_matrix(p: &mut Array2<f64>, scratch: &mut [f64]) {
    let n = p.nrows();
    debug_assert!(n > 0, "matrix dimension must be positive");
    debug_assert_eq!(n, p.ncols(), "transition matrix must be square");
    debug_assert_eq!(n, scratch.len(), "scratch buffer must match matrix dimension");

    let mut max_sum = 0.0;
    for row in p.rows() {
        for (slot, &value) in scratch.iter_mut().zip(row) {
            *slot = value;
        }
        mixed_sort(scratch);
        let sum = kahan_sum(scratch);
        if sum > max_sum {
            max_sum = sum;
        }
    }
    if max_sum <= 0.0 {
        return;
    }

    for (i, mut row) in p.rows_mut().into_iter().enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value /= max_sum;
            scratch[j] = if i == j { 0.0 } else { *value };
        }
        mixed_sort(scratch);
        row[i] = 1.0 - kahan_sum(scratch);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use rand::Rng;

    use super::*;

    fn row_sums(p: &Array2<f64>) -> Vec<f64> {
        p.rows().into_iter().map(|r| r.sum()).collect()
    }

    #[test]
    fn rows_sum_to_one_after_one_call() {
        let mut p = array![[0.5, 0.5], [0.3, 0.3]];
        let mut scratch = [0.0; 2];

        renormalize_transition_matrix(&mut p, &mut scratch);

        for sum in row_sums(&p) {
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn off_diagonal_proportions_preserved() {
        let mut p = array![[0.2, 0.4, 0.4], [0.1, 0.7, 0.2], [0.3, 0.3, 0.4]];
        let mut scratch = [0.0; 3];

        renormalize_transition_matrix(&mut p, &mut scratch);

        // All rows already summed to 1, so the global divisor is 1 and the
        // off-diagonals come through unchanged.
        assert_relative_eq!(p[[0, 1]] / p[[0, 2]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(p[[1, 0]] / p[[1, 2]], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn underweight_rows_gain_diagonal_mass() {
        // Row 1 sums to 0.6 against a global max of 1.0; after rescaling,
        // its diagonal absorbs the missing 0.4.
        let mut p = array![[0.5, 0.5], [0.3, 0.3]];
        let mut scratch = [0.0; 2];

        renormalize_transition_matrix(&mut p, &mut scratch);

        assert_relative_eq!(p[[1, 0]], 0.3, epsilon = 1e-12);
        assert_relative_eq!(p[[1, 1]], 0.7, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_matrix_is_untouched() {
        let mut p = Array2::zeros((3, 3));
        let mut scratch = [0.0; 3];

        renormalize_transition_matrix(&mut p, &mut scratch);

        assert_eq!(p, Array2::zeros((3, 3)));
    }

    #[test]
    fn idempotent_up_to_float_noise() {
        let mut rng = rand::thread_rng();
        let n = 8;
        let mut p = Array2::from_shape_fn((n, n), |_| rng.r#gen::<f64>());
        let mut scratch = vec![0.0; n];

        renormalize_transition_matrix(&mut p, &mut scratch);
        let first = p.clone();
        renormalize_transition_matrix(&mut p, &mut scratch);

        for (a, b) in first.iter().zip(p.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn large_matrix_rows_sum_to_one() {
        let mut rng = rand::thread_rng();
        let n = 60; // wide enough to push the row sort into the quicksort path
        let mut p = Array2::from_shape_fn((n, n), |_| rng.r#gen::<f64>() * 0.02);
        let mut scratch = vec![0.0; n];

        renormalize_transition_matrix(&mut p, &mut scratch);

        for sum in row_sums(&p) {
            assert_relative_eq!(sum, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn single_state_matrix_pins_to_one() {
        let mut p = array![[0.25]];
        let mut scratch = [0.0];

        renormalize_transition_matrix(&mut p, &mut scratch);

        assert_relative_eq!(p[[0, 0]], 1.0, epsilon = 1e-15);
    }
}
